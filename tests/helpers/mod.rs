//! Shared helpers for the integration tests.

pub mod check_helpers;
pub mod source_fixtures;
