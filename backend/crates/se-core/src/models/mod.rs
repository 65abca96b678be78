pub mod guest_token_grant;
pub mod scope_descriptor;
pub mod scope_entry;
pub mod scope_id;
