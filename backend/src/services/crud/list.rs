use crate::access::campus_filter;
use crate::access::requester::Requester;
use crate::services::crud::Resource;
use crate::services::errors::ApiError;
use crate::services::responses;
use crate::store::Database;
use actix_web::{web, HttpResponse};
use common::requests::ListQuery;

/// `GET /`: lists the records the requester may see, newest first.
pub async fn process<R: Resource>(
    requester: Requester,
    query: web::Query<ListQuery>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let filter = campus_filter::build(&requester, query.campus_id.as_deref());
    let records = db.run(move |conn| R::list(conn, &filter)).await?;
    Ok(responses::list(&records))
}
