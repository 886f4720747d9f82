//! Session types shared across Gavel crates.
//!
//! Provides JWT issue/validation, the session cookie builders, and the
//! `SessionUser` extractor.

pub mod cookie;
pub mod session;
pub mod token;
