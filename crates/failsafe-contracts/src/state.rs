//! Fleet-wide safety posture.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{FailsafeError, FailsafeResult};

/// The global state of the fleet. Exactly one value holds at any time.
///
/// Only the move into `EmergencyMode` carries side effects (the cascade);
/// `PartialStop` is a marker for partial-fleet interventions and has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalState {
    #[default]
    Normal,
    PartialStop,
    EmergencyMode,
}

impl GlobalState {
    pub const ALL: [GlobalState; 3] =
        [GlobalState::Normal, GlobalState::PartialStop, GlobalState::EmergencyMode];

    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalState::Normal => "NORMAL",
            GlobalState::PartialStop => "PARTIAL_STOP",
            GlobalState::EmergencyMode => "EMERGENCY_MODE",
        }
    }
}

impl fmt::Display for GlobalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlobalState {
    type Err = FailsafeError;

    fn from_str(s: &str) -> FailsafeResult<Self> {
        GlobalState::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| FailsafeError::validation(format!("unknown global state '{}'", s)))
    }
}
