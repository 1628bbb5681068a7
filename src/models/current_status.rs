use super::punch_event::PunchEvent;
use super::punch_type::PunchType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    None,
    In,
    Out,
}

impl StatusState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusState::None => "none",
            StatusState::In => "in",
            StatusState::Out => "out",
        }
    }
}

impl From<PunchType> for StatusState {
    fn from(kind: PunchType) -> Self {
        match kind {
            PunchType::In => StatusState::In,
            PunchType::Out => StatusState::Out,
        }
    }
}

/// Latest punch state of a staff member for a day.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrentStatus {
    pub state: StatusState,
    pub last_event: Option<PunchEvent>,
}

impl CurrentStatus {
    pub fn none() -> Self {
        Self {
            state: StatusState::None,
            last_event: None,
        }
    }

    pub fn from_event(ev: &PunchEvent) -> Self {
        Self {
            state: ev.kind.into(),
            last_event: Some(ev.clone()),
        }
    }

    /// The punch a button press would record next.
    pub fn next_punch(&self) -> PunchType {
        match self.state {
            StatusState::In => PunchType::Out,
            StatusState::None | StatusState::Out => PunchType::In,
        }
    }
}
