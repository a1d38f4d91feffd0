use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ApiResponse;

/// Message returned to the client whenever the store refuses an operation.
pub const STORE_FAILURE_MSG: &str = "Server Overloaded";

#[derive(Debug)]
pub enum AppError {
    /// Missing required input (body or id)
    InvalidRequest(String),
    /// Duplicate email on creation
    Conflict(String),
    /// Id does not resolve to a record
    NotFound(String),
    /// Underlying store failure; the detail is logged, never sent to the client
    DatabaseError(String),
}

impl AppError {
    /// Text placed in the `msg` field of the failure response
    pub fn client_message(&self) -> &str {
        match self {
            AppError::InvalidRequest(msg) | AppError::Conflict(msg) | AppError::NotFound(msg) => msg,
            AppError::DatabaseError(_) => STORE_FAILURE_MSG,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

// Every failure is answered with 400 and logged exactly once, here.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("⚠️  {}", self);
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.client_message()))
    }
}
