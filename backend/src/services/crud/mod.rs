//! # Campus-owned resource controller
//!
//! Deductions, payrow positions and scholarships expose the same five
//! operations and differ only in their table, key column and validation
//! details. Each one implements [`Resource`]; this module turns any
//! `Resource` into an Actix scope.
//!
//! ## Routes registered by [`configure_routes`]
//!
//! * **`GET /`** (`list::process`): records visible to the requester, narrowed by
//!   `?campusID=`, newest first, each with its `campusName`. Bare array.
//! * **`GET /{key}`** (`get::process`): the single record, `404` if absent.
//! * **`POST /`** (`create::process`): validates and inserts; `201` with
//!   `{success, doc}`.
//! * **`PUT /{key}`** (`update::process`): merges the partial body, validates
//!   the result, writes; `200` with `{success, doc}`.
//! * **`DELETE /{key}`** (`delete::process`): removes; `200` with
//!   `{success, message, doc}`.
//!
//! A blank `{key}` is rejected with a plain-text `400` before the store is
//! touched.

mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::access::campus_filter::CampusFilter;
use crate::services::errors::ApiError;
use crate::store::StoreError;
use actix_web::web::{self, delete, get, post, put, scope};
use actix_web::Scope;
use common::model::populated::Populated;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A campus-owned collection served through the shared controller.
///
/// The store functions run on the blocking pool with exclusive access to the
/// connection, so a read followed by a write inside one call is atomic.
pub trait Resource: 'static {
    type Record: Serialize + Send + 'static;
    /// Body accepted by both create and update.
    type Input: DeserializeOwned + Send + 'static;

    /// Mount point, e.g. `/api/deductions`.
    const API_PATH: &'static str;
    /// Human label used in messages, e.g. `Payrow position`.
    const LABEL: &'static str;
    /// Name of the path key, e.g. `code`.
    const KEY: &'static str;

    fn list(
        conn: &Connection,
        filter: &CampusFilter,
    ) -> Result<Vec<Populated<Self::Record>>, StoreError>;

    fn find(conn: &Connection, key: &str) -> Result<Option<Self::Record>, StoreError>;

    fn create(conn: &Connection, input: Self::Input) -> Result<Self::Record, StoreError>;

    /// Returns `Ok(None)` when no record matches `key`.
    fn update(
        conn: &Connection,
        key: &str,
        input: Self::Input,
    ) -> Result<Option<Self::Record>, StoreError>;

    /// Returns the removed record, or `Ok(None)` when no record matches `key`.
    fn delete(conn: &Connection, key: &str) -> Result<Option<Self::Record>, StoreError>;
}

/// Builds the Actix scope serving `R`.
pub fn configure_routes<R: Resource>() -> Scope {
    scope(R::API_PATH)
        .route("", get().to(list::process::<R>))
        .route("", post().to(create::process::<R>))
        .route("/{key}", get().to(get::process::<R>))
        .route("/{key}", put().to(update::process::<R>))
        .route("/{key}", delete().to(delete::process::<R>))
}

/// Trims the path key, rejecting blank ones.
fn required_key<R: Resource>(key: web::Path<String>) -> Result<String, ApiError> {
    let key = key.into_inner();
    let key = key.trim();
    if key.is_empty() {
        return Err(ApiError::MissingParam(format!(
            "{} {} is required",
            R::LABEL,
            R::KEY
        )));
    }
    Ok(key.to_string())
}
