//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::FetchError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("fetching children of '{name}' failed")]
    Fetch {
        name: String,
        #[source]
        source: FetchError,
    },

    #[error("fetching children of '{name}' timed out after {ms} ms")]
    Timeout { name: String, ms: u128 },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
