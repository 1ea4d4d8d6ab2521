use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub description: Option<String>,
    #[serde(rename = "campusID")]
    pub campus_id: String,
    pub created_at: DateTime<Utc>,
}
