//! Shared helpers for the backend's integration tests: one-time log
//! initialization, response-envelope assertions and unique fixture data.

pub mod envelope;
pub mod logging;
pub mod unique_helpers;
