// errors.rs
use astra::Response;
use thiserror::Error;

use crate::domain::ValidationError;
use crate::service::ServiceError;

/// Errors as the HTTP layer sees them. Each variant maps to one status code.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<ValidationError> for ServerError {
    fn from(err: ValidationError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

impl From<ServiceError> for ServerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ServerError::NotFound,
            ServiceError::Storage(e) => ServerError::DbError(e.to_string()),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}
