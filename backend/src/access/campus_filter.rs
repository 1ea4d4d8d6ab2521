//! Campus scoping policy for list queries.
//!
//! | Requester | `?campusID=` | Filter |
//! |---|---|---|
//! | campus admin | given | requested campus |
//! | campus admin | absent | bound campus |
//! | campus admin without binding | absent | none |
//! | global admin | given | requested campus |
//! | global admin | absent | none |
//!
//! An unbound campus admin without a requested campus sees every campus.
//! That is a known scoping gap, kept for compatibility and logged when hit.

use crate::access::requester::Requester;
use log::{debug, warn};
use serde::Serialize;

/// Restriction applied to a list query: either nothing or one campus.
///
/// Serialises as `{}` or `{"campusID": "<id>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampusFilter {
    #[serde(rename = "campusID", skip_serializing_if = "Option::is_none")]
    campus_id: Option<String>,
}

impl CampusFilter {
    /// Matches every campus.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn campus(id: impl Into<String>) -> Self {
        Self {
            campus_id: Some(id.into()),
        }
    }

    pub fn campus_id(&self) -> Option<&str> {
        self.campus_id.as_deref()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.campus_id.is_none()
    }
}

/// Derives the list filter for `requester`. `requested` is the raw
/// `campusID` query value; blank values count as absent.
pub fn build(requester: &Requester, requested: Option<&str>) -> CampusFilter {
    let requested = requested.map(str::trim).filter(|c| !c.is_empty());

    let filter = match requester {
        Requester::CampusAdmin { campus } => match requested.or(campus.as_deref()) {
            Some(id) => CampusFilter::campus(id),
            None => {
                warn!("campus admin without a bound campus is listing every campus");
                CampusFilter::all()
            }
        },
        Requester::GlobalAdmin => requested.map_or_else(CampusFilter::all, CampusFilter::campus),
    };

    debug!("campus filter for {:?}: {:?}", requester, filter);
    filter
}
