pub mod error;
pub mod guest_token;
pub mod guest_token_query;
pub mod scopes;
