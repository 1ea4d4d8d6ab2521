//! Wire types shared by the school administration backend and its clients.
//!
//! - `model`: the persisted records as they appear on the wire.
//! - `requests`: request bodies and query strings accepted by the API.
//! - `responses`: the JSON envelopes wrapped around single-record results.

pub mod model;
pub mod requests;
pub mod responses;
