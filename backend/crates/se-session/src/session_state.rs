use std::fmt;

use serde::Serialize;

/// Lifecycle of the embedded view slot.
///
/// `Idle -> Loading -> Mounted`, `Loading -> Error`, `Loading -> Idle` on a
/// credential failure, and `Mounted -> Unmounting -> Loading` on a switch.
/// Teardown returns any state to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Loading,
    Mounted,
    Unmounting,
    Error,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Mounted => "mounted",
            Self::Unmounting => "unmounting",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
