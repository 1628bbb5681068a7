use super::menu_item::Portion;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Closed,
}

impl OrderStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Closed => "closed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "open" => Some(OrderStatus::Open),
            "closed" => Some(OrderStatus::Closed),
            _ => None,
        }
    }
}

/// One dish on an order. Name and unit price are snapshots taken when the
/// line was added, so later menu edits do not change past orders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub portion: Portion,
    pub unit_price: i64,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: i64,
    pub table_name: String,
    pub staff_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: String,
    pub closed_at: Option<String>,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Sum of all line totals, in cents.
    pub fn total(&self) -> i64 {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }
}
