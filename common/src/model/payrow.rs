use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named pay grade. Looked up by `code`, which is derived from the
/// lowercased name when the position is created and never changes after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrowPosition {
    pub id: String,
    pub name: String,
    pub code: String,
    pub amount: f64,
    pub description: Option<String>,
    #[serde(rename = "campusID")]
    pub campus_id: String,
    pub created_at: DateTime<Utc>,
}
