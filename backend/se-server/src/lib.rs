pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    guest_token::issue_guest_token,
    guest_token_query::GuestTokenQuery,
    scopes::list_scopes,
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
