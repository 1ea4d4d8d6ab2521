use crate::services::crud::{required_key, Resource};
use crate::services::errors::ApiError;
use crate::services::responses;
use crate::store::Database;
use actix_web::{web, HttpResponse};
use log::info;

/// `DELETE /{key}`: removes the matching record and echoes it back.
pub async fn process<R: Resource>(
    key: web::Path<String>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let key = required_key::<R>(key)?;
    let lookup = key.clone();
    match db.run(move |conn| R::delete(conn, &lookup)).await? {
        Some(doc) => {
            info!("{} '{}' deleted", R::LABEL, key);
            Ok(responses::deleted(R::LABEL, doc))
        }
        None => Err(ApiError::NotFound(R::LABEL)),
    }
}
