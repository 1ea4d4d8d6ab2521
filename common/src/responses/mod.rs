use serde::{Deserialize, Serialize};

/// `{success, doc}` wrapper returned by create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocEnvelope<T> {
    pub success: bool,
    pub doc: T,
}

/// `{success, message, doc}` wrapper returned by delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEnvelope<T> {
    pub success: bool,
    pub message: String,
    pub doc: T,
}

/// `{success: false, error}` body of JSON error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}
