use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An organisational unit owning a subset of the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
