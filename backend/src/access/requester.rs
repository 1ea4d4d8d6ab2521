use crate::services::errors::ApiError;
use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

/// Header carrying the requester role, set by the auth layer.
pub const ROLE_HEADER: &str = "x-user-role";
/// Header carrying the campus a campus admin is bound to.
pub const CAMPUS_HEADER: &str = "x-user-campus";

/// Who is asking. Only campus admins carry a campus binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requester {
    /// Scoped to one campus. The binding may be missing on misconfigured
    /// accounts; see [`campus_filter::build`](super::campus_filter::build).
    CampusAdmin { campus: Option<String> },
    GlobalAdmin,
}

impl Requester {
    /// Reads the requester from the `x-user-role` / `x-user-campus` headers.
    ///
    /// Role values are `campus-admin` and `global-admin`, case-insensitive.
    /// The campus header is ignored for global admins.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let role = header(ROLE_HEADER)
            .ok_or_else(|| ApiError::Unauthenticated("Requester role is missing".into()))?;

        match role.to_ascii_lowercase().as_str() {
            "campus-admin" => Ok(Requester::CampusAdmin {
                campus: header(CAMPUS_HEADER).map(str::to_string),
            }),
            "global-admin" => Ok(Requester::GlobalAdmin),
            other => Err(ApiError::Unauthenticated(format!(
                "Unknown requester role '{other}'"
            ))),
        }
    }
}

/// Prefers a `Requester` placed in the request extensions by an auth
/// middleware and falls back to the identity headers.
impl FromRequest for Requester {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(requester) = req.extensions().get::<Requester>() {
            return ready(Ok(requester.clone()));
        }
        ready(Requester::from_headers(req.headers()))
    }
}
