//! Test utilities for Gavel services.
//!
//! Provides `MockSession` and response helpers.
//! Import in `#[cfg(test)]` blocks and `tests/` only, never in production code.

pub mod auth;
pub mod response;
