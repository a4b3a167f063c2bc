//! Shared helpers for deck service tests: one-time logging setup and
//! problem-details assertions usable from unit and integration tests.

pub mod logging;
pub mod problem_details;
