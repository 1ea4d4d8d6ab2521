use crate::services::crud::{required_key, Resource};
use crate::services::errors::ApiError;
use crate::services::responses;
use crate::store::Database;
use actix_web::{web, HttpResponse};

/// `PUT /{key}`: merges the partial body into the stored record and writes it
/// back once the merged record validates. Nothing is written on failure.
pub async fn process<R: Resource>(
    key: web::Path<String>,
    payload: web::Json<R::Input>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let key = required_key::<R>(key)?;
    let input = payload.into_inner();
    match db.run(move |conn| R::update(conn, &key, input)).await? {
        Some(doc) => Ok(responses::updated(doc)),
        None => Err(ApiError::NotFound(R::LABEL)),
    }
}
