use se_core::ScopeId;

/// Column the rendering engine filters tenant rows on
const SCOPE_COLUMN: &str = "scope_id";

/// Row-level predicate restricting the engine to a single tenant.
///
/// Built only from a validated [`ScopeId`]; free-form identifiers cannot be
/// interpolated into the clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFilter {
    scope_id: ScopeId,
}

impl RowFilter {
    pub fn for_scope(scope_id: ScopeId) -> Self {
        Self { scope_id }
    }

    pub fn scope_id(&self) -> ScopeId {
        self.scope_id
    }

    pub fn clause(&self) -> String {
        format!("{} = {}", SCOPE_COLUMN, self.scope_id.get())
    }
}
