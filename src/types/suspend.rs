//! Suspend flag for profiles.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Whether a profile should be suspended.
///
/// Artemis expects the `suspend` field as the text `"true"` or `"false"`
/// rather than a JSON boolean, so this serializes to those two strings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuspendState {
    /// Suspend the profile
    True,
    /// Resume the profile
    False,
}

impl SuspendState {
    pub fn is_suspended(&self) -> bool {
        matches!(self, SuspendState::True)
    }
}

impl From<bool> for SuspendState {
    fn from(suspend: bool) -> Self {
        if suspend {
            SuspendState::True
        } else {
            SuspendState::False
        }
    }
}

impl From<SuspendState> for bool {
    fn from(state: SuspendState) -> Self {
        state.is_suspended()
    }
}
