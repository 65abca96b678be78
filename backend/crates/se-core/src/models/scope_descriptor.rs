use crate::ScopeId;

use serde::{Deserialize, Serialize};

/// A tenant the client can switch the embedded view to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeDescriptor {
    pub id: ScopeId,
    pub display_name: String,
}

impl ScopeDescriptor {
    pub fn new(id: ScopeId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}
