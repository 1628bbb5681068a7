use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Portion a dish can be ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Portion {
    Half,
    Full,
}

impl Portion {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Portion::Half => "half",
            Portion::Full => "full",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "half" => Some(Portion::Half),
            "full" => Some(Portion::Full),
            _ => None,
        }
    }
}

/// A dish on the menu. Prices are in cents.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,                     // ⇔ menu_items.id
    pub name: String,                // ⇔ menu_items.name (unique, case-insensitive)
    pub category: String,            // ⇔ menu_items.category
    pub full_price: i64,             // ⇔ menu_items.full_price
    pub half_price: Option<i64>,     // ⇔ menu_items.half_price (NULL = no half portion)
    pub available: bool,             // ⇔ menu_items.available
    pub external_id: Option<String>, // ⇔ menu_items.external_id (id from an imported file)
    pub created_at: String,
}

impl MenuItem {
    /// Unit price of `portion`, if the dish is offered in it.
    pub fn price_for(&self, portion: Portion) -> Option<i64> {
        match portion {
            Portion::Full => Some(self.full_price),
            Portion::Half => self.half_price,
        }
    }
}

/// Canonical shape of a menu item that is not stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub category: String,
    pub full_price: i64,
    pub half_price: Option<i64>,
    pub available: bool,
    pub external_id: Option<String>,
}

/// Identifier as found in imported files: text or number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// A menu record as it appears in an import file.
///
/// Older records carry `_id` and a single `price`; newer ones `id`,
/// `fullPrice` and optionally `halfPrice`. Both are accepted here and
/// folded into [`NewMenuItem`] by `core::menu::normalize_raw`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenuItem {
    #[serde(alias = "_id")]
    pub id: Option<RawId>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub full_price: Option<f64>,
    pub half_price: Option<f64>,
    pub available: Option<bool>,
}
