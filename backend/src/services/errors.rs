//! HTTP mapping for every failure a handler can report.
//!
//! Client mistakes come back with the reason; store faults are logged in full
//! and reported as a generic `500`.

use crate::store::StoreError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorBody;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required path parameter was blank. Answered in plain text.
    #[error("{0}")]
    MissingParam(String),
    /// The body (or the merged record) failed validation.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthenticated(String),
    /// Carries the entity label, e.g. `Payrow position`.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("Server error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(v) => ApiError::Validation(v.to_string()),
            StoreError::Conflict(message) => ApiError::Conflict(message),
            other => ApiError::Store(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParam(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::MissingParam(message) => HttpResponse::build(self.status_code())
                .content_type(ContentType::plaintext())
                .body(message.clone()),
            ApiError::Store(source) => {
                error!("store failure: {source}");
                HttpResponse::build(self.status_code()).json(ErrorBody {
                    success: false,
                    error: self.to_string(),
                })
            }
            _ => HttpResponse::build(self.status_code()).json(ErrorBody {
                success: false,
                error: self.to_string(),
            }),
        }
    }
}
