use crate::SessionError;

/// Result of one `switch_scope` call. Errors never escape as `Err`.
#[derive(Debug)]
pub enum SwitchOutcome {
    /// The requested view is mounted and owns the target
    Mounted,
    /// A later switch or a teardown took over before this one finished
    Superseded,
    /// This switch was current and failed; an inline error is shown
    Failed(SessionError),
}

impl SwitchOutcome {
    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted)
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }

    pub fn error(&self) -> Option<&SessionError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Superseded => "superseded",
            Self::Failed(_) => "failed",
        }
    }
}
