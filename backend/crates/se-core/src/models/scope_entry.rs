use crate::{ScopeDescriptor, ScopeId};

use serde::{Deserialize, Serialize};

/// Directory listing item for `GET /scopes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeEntry {
    pub id: ScopeId,
    pub display_name: String,
    /// Informational only, shown next to the embedded view
    pub expected_aggregate: String,
}

impl ScopeEntry {
    pub fn descriptor(&self) -> ScopeDescriptor {
        ScopeDescriptor::new(self.id, self.display_name.clone())
    }
}
