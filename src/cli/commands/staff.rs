use crate::cli::parser::{Commands, StaffAction};
use crate::config::Config;
use crate::core::staff::StaffLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, colorize};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Staff { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        match action {
            StaffAction::Add { id, name, role } => {
                let staff = StaffLogic::add(&mut pool, id, name, role.as_deref())?;
                success(format!("Staff member {} ({}) added.", staff.name, staff.id));
            }
            StaffAction::List { all } => {
                let staff = StaffLogic::list(&mut pool, *all)?;
                if staff.is_empty() {
                    info("No staff members registered.");
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "NAME", "ROLE", "ACTIVE"], &cfg.separator_char);
                for s in staff {
                    let active = if s.active {
                        "yes".to_string()
                    } else {
                        colorize("no", GREY)
                    };
                    table.add_row(vec![s.id, s.name, s.role, active]);
                }
                print!("{}", table.render());
            }
            StaffAction::Del { id } => {
                StaffLogic::deactivate(&mut pool, id)?;
                success(format!("Staff member {} deactivated.", id));
            }
        }
    }

    Ok(())
}
