use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PunchType {
    In,
    Out,
}

impl PunchType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchType::In => "in",
            PunchType::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(PunchType::In),
            "out" => Some(PunchType::Out),
            _ => None,
        }
    }

    /// Button caption shown for a punch of this type.
    pub fn label(&self) -> &'static str {
        match self {
            PunchType::In => "Punch In",
            PunchType::Out => "Punch Out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchType::In)
    }
}
