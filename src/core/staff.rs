use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_staff, insert_staff, load_staff, set_staff_active};
use crate::errors::{AppError, AppResult};
use crate::models::staff::Staff;
use chrono::Local;

pub struct StaffLogic;

impl StaffLogic {
    pub fn add(pool: &mut DbPool, id: &str, name: &str, role: Option<&str>) -> AppResult<Staff> {
        let id = id.trim();
        let name = name.trim();

        if id.is_empty() {
            return Err(AppError::InvalidField {
                field: "staff id",
                value: id.to_string(),
            });
        }
        if name.is_empty() {
            return Err(AppError::InvalidField {
                field: "staff name",
                value: name.to_string(),
            });
        }
        if find_staff(&pool.conn, id)?.is_some() {
            return Err(AppError::DuplicateStaff(id.to_string()));
        }

        let staff = Staff {
            id: id.to_string(),
            name: name.to_string(),
            role: role.map(str::trim).unwrap_or_default().to_string(),
            active: true,
            created_at: Local::now().to_rfc3339(),
        };

        insert_staff(&pool.conn, &staff)?;
        ttlog(&pool.conn, "staff_add", &staff.id, &format!("Added {}", staff.name))?;

        Ok(staff)
    }

    pub fn list(pool: &mut DbPool, include_inactive: bool) -> AppResult<Vec<Staff>> {
        load_staff(pool, include_inactive)
    }

    /// Deactivate a staff member. Their punches stay untouched.
    pub fn deactivate(pool: &mut DbPool, id: &str) -> AppResult<()> {
        if set_staff_active(&pool.conn, id, false)? == 0 {
            return Err(AppError::StaffNotFound(id.to_string()));
        }
        ttlog(&pool.conn, "staff_del", id, &format!("Deactivated {}", id))?;
        Ok(())
    }
}
