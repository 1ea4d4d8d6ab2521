//! Response construction for the resource handlers.
//!
//! Lists go out as bare arrays while single-record writes are wrapped in
//! `{success, doc}`. Existing clients depend on both shapes.

use actix_web::HttpResponse;
use common::responses::{DeleteEnvelope, DocEnvelope};
use serde::Serialize;

/// `200` with the records as a bare JSON array.
pub fn list<T: Serialize>(records: &[T]) -> HttpResponse {
    HttpResponse::Ok().json(records)
}

/// `200` with the bare record.
pub fn record<T: Serialize>(doc: &T) -> HttpResponse {
    HttpResponse::Ok().json(doc)
}

/// `201` with `{success: true, doc}`.
pub fn created<T: Serialize>(doc: T) -> HttpResponse {
    HttpResponse::Created().json(DocEnvelope { success: true, doc })
}

/// `200` with `{success: true, doc}`.
pub fn updated<T: Serialize>(doc: T) -> HttpResponse {
    HttpResponse::Ok().json(DocEnvelope { success: true, doc })
}

/// `200` with `{success: true, message: "<Label> deleted successfully", doc}`.
pub fn deleted<T: Serialize>(label: &str, doc: T) -> HttpResponse {
    HttpResponse::Ok().json(DeleteEnvelope {
        success: true,
        message: format!("{label} deleted successfully"),
        doc,
    })
}
