use crate::services::crud::{required_key, Resource};
use crate::services::errors::ApiError;
use crate::services::responses;
use crate::store::Database;
use actix_web::{web, HttpResponse};

/// `GET /{key}`: the matching record, or `404`.
pub async fn process<R: Resource>(
    key: web::Path<String>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let key = required_key::<R>(key)?;
    match db.run(move |conn| R::find(conn, &key)).await? {
        Some(doc) => Ok(responses::record(&doc)),
        None => Err(ApiError::NotFound(R::LABEL)),
    }
}
