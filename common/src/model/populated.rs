use serde::{Deserialize, Serialize};

/// A record as returned by list endpoints: the stored fields plus the
/// display name of the owning campus.
///
/// `campus_name` is `None` when the referenced campus is not in the
/// campus directory; campus references are not enforced by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Populated<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(rename = "campusName")]
    pub campus_name: Option<String>,
}
