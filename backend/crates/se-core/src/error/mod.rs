use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid scope '{value}': {message} {location}")]
    InvalidScope {
        value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Duplicate scope id {id} in catalog {location}")]
    DuplicateScope { id: i64, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
