use crate::cli::parser::{Commands, MenuAction};
use crate::config::Config;
use crate::core::menu::{MenuLogic, MenuUpdate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREY, colorize};
use crate::utils::formatting::format_price;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Menu { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        match action {
            MenuAction::Add {
                name,
                full,
                half,
                category,
            } => {
                let item =
                    MenuLogic::add(&mut pool, name, category.as_deref(), full, half.as_deref())?;
                success(format!("Menu item #{} {} added.", item.id, item.name));
            }
            MenuAction::List { all } => {
                let items = MenuLogic::list(&mut pool, *all)?;
                if items.is_empty() {
                    info("The menu is empty.");
                    return Ok(());
                }

                let mut table = Table::new(
                    &["ID", "NAME", "CATEGORY", "FULL", "HALF", "AVAILABLE"],
                    &cfg.separator_char,
                );
                for i in items {
                    let half = i
                        .half_price
                        .map(format_price)
                        .unwrap_or_else(|| colorize("-", GREY));
                    let available = if i.available {
                        "yes".to_string()
                    } else {
                        colorize("no", GREY)
                    };
                    table.add_row(vec![
                        i.id.to_string(),
                        i.name,
                        i.category,
                        format_price(i.full_price),
                        half,
                        available,
                    ]);
                }
                print!("{}", table.render());
            }
            MenuAction::Update {
                id,
                name,
                category,
                full,
                half,
                no_half,
                hide,
                show,
            } => {
                let available = match (*hide, *show) {
                    (true, _) => Some(false),
                    (_, true) => Some(true),
                    _ => None,
                };
                let changes = MenuUpdate {
                    name: name.as_deref(),
                    category: category.as_deref(),
                    full_price: full.as_deref(),
                    half_price: half.as_deref(),
                    clear_half: *no_half,
                    available,
                };
                let item = MenuLogic::update(&mut pool, *id, &changes)?;
                success(format!("Menu item #{} {} updated.", item.id, item.name));
            }
            MenuAction::Del { id } => {
                MenuLogic::remove(&mut pool, *id)?;
                success(format!("Menu item #{} deleted.", id));
            }
            MenuAction::Import { file } => {
                let report = MenuLogic::import(&mut pool, &expand_tilde(file))?;
                success(format!("Imported {} menu item(s).", report.added.len()));
                if !report.skipped.is_empty() {
                    warning(format!(
                        "Skipped {} existing item(s): {}",
                        report.skipped.len(),
                        report.skipped.join(", ")
                    ));
                }
            }
        }
    }

    Ok(())
}
