use crate::{CoreError, ErrorLocation, Result as CoreResult, ScopeDescriptor, ScopeEntry, ScopeId};

use std::collections::HashSet;
use std::panic::Location;

/// Ordered, duplicate-free set of known scopes
#[derive(Debug, Clone, Default)]
pub struct ScopeCatalog {
    entries: Vec<ScopeEntry>,
}

impl ScopeCatalog {
    #[track_caller]
    pub fn new(entries: Vec<ScopeEntry>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CoreError::DuplicateScope {
                    id: entry.id.get(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Entries in configuration order
    pub fn entries(&self) -> &[ScopeEntry] {
        &self.entries
    }

    pub fn find(&self, id: ScopeId) -> Option<&ScopeEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn descriptors(&self) -> Vec<ScopeDescriptor> {
        self.entries.iter().map(ScopeEntry::descriptor).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
