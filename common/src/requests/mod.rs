use serde::{Deserialize, Serialize};

/// Query string accepted by every list endpoint.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ListQuery {
    /// Campus requested by the caller. An empty value counts as absent.
    #[serde(rename = "campusID")]
    pub campus_id: Option<String>,
}

/// Body of `POST` and `PUT` requests for deductions.
///
/// Every field is optional on the wire: on create the missing ones are
/// reported by validation, on update they keep their stored value.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct DeductionInput {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "campusID")]
    pub campus_id: Option<String>,
}

/// Body of `POST` and `PUT` requests for payrow positions. The `code` is
/// derived from `name` and cannot be supplied.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct PayrowInput {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "campusID")]
    pub campus_id: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ScholarshipInput {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "campusID")]
    pub campus_id: Option<String>,
}

/// Body of `POST /api/campuses`. When `id` is omitted one is generated.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CampusInput {
    pub id: Option<String>,
    pub name: Option<String>,
}
