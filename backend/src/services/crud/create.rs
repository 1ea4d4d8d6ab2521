use crate::services::crud::Resource;
use crate::services::errors::ApiError;
use crate::services::responses;
use crate::store::Database;
use actix_web::{web, HttpResponse};
use log::info;

/// `POST /`: validates the body and inserts it as a new record.
pub async fn process<R: Resource>(
    payload: web::Json<R::Input>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let input = payload.into_inner();
    let doc = db.run(move |conn| R::create(conn, input)).await?;
    info!("{} created", R::LABEL);
    Ok(responses::created(doc))
}
