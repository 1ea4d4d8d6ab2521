//! HTTP services, one sub-module per resource family.
//!
//! - `deductions`, `payrow`, `scholarships`: campus-owned collections served
//!   through the shared `crud` controller.
//! - `campuses`: the campus directory used to name campuses in list results.
//! - `errors`, `responses`: error mapping and response envelopes.

pub mod campuses;
pub mod crud;
pub mod deductions;
pub mod errors;
pub mod payrow;
pub mod responses;
pub mod scholarships;

use crate::services::crud::configure_routes;
use crate::services::deductions::Deductions;
use crate::services::errors::ApiError;
use crate::services::payrow::Payrow;
use crate::services::scholarships::Scholarships;
use actix_web::error::JsonPayloadError;
use actix_web::web;

/// Registers every resource scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(configure_routes::<Deductions>())
        .service(configure_routes::<Payrow>())
        .service(configure_routes::<Scholarships>())
        .service(campuses::configure_routes());
}

/// JSON extractor settings: bodies above `limit` bytes keep actix's
/// `413 Payload Too Large`; malformed bodies are reported as validation
/// failures.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                err.into()
            }
            other => ApiError::Validation(other.to_string()).into(),
        })
}
