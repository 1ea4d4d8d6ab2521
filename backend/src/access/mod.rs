//! # Requester identity and campus scoping
//!
//! Authentication happens upstream. By the time a request reaches a list
//! handler the caller is known to be either a campus admin (optionally bound
//! to one campus) or a global admin. This module turns that identity into
//! the campus filter applied to list queries.
//!
//! - `requester`: the [`Requester`](requester::Requester) variant and its
//!   request extractor.
//! - `campus_filter`: the scoping policy.

pub mod campus_filter;
pub mod requester;
