use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::models::{ErrorResponse, ValidationError};
use crate::services::StoreError;

/// Errors a handler can answer with
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error")]
    Storage(#[from] StoreError),

    #[error("invalid_json")]
    InvalidJson(String),

    #[error("invalid_query")]
    InvalidQuery(String),
}

impl ApiError {
    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Validation(e) => ErrorResponse::new(e.to_string()),
            ApiError::Storage(e) => ErrorResponse::with_details(self.to_string(), e.to_string()),
            ApiError::InvalidJson(details) | ApiError::InvalidQuery(details) => {
                ErrorResponse::with_details(self.to_string(), details.clone())
            }
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::InvalidQuery(format!("Invalid query: {}", err)).into()
}
