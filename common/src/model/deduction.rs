use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A salary deduction (library fine, uniform fee, ...) owned by one campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deduction {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub description: Option<String>,
    #[serde(rename = "campusID")]
    pub campus_id: String,
    pub created_at: DateTime<Utc>,
}
