use crate::cli::parser::{Commands, TableAction};
use crate::config::Config;
use crate::core::tables::TableLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tables { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        match action {
            TableAction::Generate {
                range,
                prefix,
                seats,
            } => {
                let prefix = prefix.as_deref().unwrap_or(&cfg.default_table_prefix);
                let seats = seats.unwrap_or(cfg.default_table_seats);
                let created = TableLogic::generate(&mut pool, prefix, range, seats)?;

                if created.is_empty() {
                    info("All requested tables already exist.");
                } else {
                    success(format!(
                        "Created {} table(s): {}",
                        created.len(),
                        created.join(", ")
                    ));
                }
            }
            TableAction::List => {
                let tables = TableLogic::list(&mut pool)?;
                if tables.is_empty() {
                    info("No tables defined.");
                    return Ok(());
                }

                let mut table = Table::new(&["NAME", "SEATS"], &cfg.separator_char);
                for t in tables {
                    table.add_row(vec![t.name, t.seats.to_string()]);
                }
                print!("{}", table.render());
            }
            TableAction::Del { name } => {
                TableLogic::remove(&mut pool, name)?;
                success(format!("Table {} deleted.", name));
            }
        }
    }

    Ok(())
}
