//! # Campus Directory
//!
//! The campuses records point at. List responses of the other services use
//! this table to show `campusName`; campus references are not enforced, so
//! records may name campuses that are missing here.
//!
//! ## Routes
//!
//! * **`GET /api/campuses`**: every campus, ordered by name.
//! * **`POST /api/campuses`**: registers a campus. `id` is optional and
//!   generated when omitted; reusing an existing `id` is a `409`.

use crate::services::errors::ApiError;
use crate::services::responses;
use crate::store::{self, Database, StoreError};
use actix_web::web::{get, post, scope};
use actix_web::{web, HttpResponse, Scope};
use common::model::campus::Campus;
use common::requests::CampusInput;
use log::info;
use rusqlite::{params, Connection};
use uuid::Uuid;

const API_PATH: &str = "/api/campuses";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list))
        .route("", post().to(create))
}

async fn list(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let campuses = db.run(list_campuses).await?;
    Ok(responses::list(&campuses))
}

async fn create(
    payload: web::Json<CampusInput>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let input = payload.into_inner();
    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::Validation(
            "Campus validation failed: name: is required".into(),
        ));
    }
    let name = name.to_string();
    let id = input
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);

    let campus = db.run(move |conn| insert_campus(conn, id, name)).await?;
    info!("campus '{}' registered", campus.id);
    Ok(responses::created(campus))
}

fn list_campuses(conn: &Connection) -> Result<Vec<Campus>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name, created_at FROM campuses ORDER BY name, id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Campus {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: store::timestamp_from_micros(2, row.get(2)?)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn insert_campus(conn: &Connection, id: String, name: String) -> Result<Campus, StoreError> {
    let (created_at, micros) = store::now_micros();
    conn.execute(
        "INSERT INTO campuses (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![id, name, micros],
    )
    .map_err(|e| store::conflict_on_unique(e, || format!("Campus '{id}' already exists")))?;

    Ok(Campus {
        id,
        name,
        created_at,
    })
}
