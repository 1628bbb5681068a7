use serde::Serialize;

/// A dining table on the floor plan.
#[derive(Debug, Clone, Serialize)]
pub struct FloorTable {
    pub id: i64,
    pub name: String,
    pub seats: u32,
    pub created_at: String,
}
