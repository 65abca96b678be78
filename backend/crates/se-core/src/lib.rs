pub mod error;
pub mod models;
pub mod scope_catalog;

pub use error::{CoreError, Result};
pub use models::guest_token_grant::GuestTokenGrant;
pub use models::scope_descriptor::ScopeDescriptor;
pub use models::scope_entry::ScopeEntry;
pub use models::scope_id::ScopeId;
pub use scope_catalog::ScopeCatalog;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
