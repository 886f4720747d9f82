//! Cross-cutting pieces shared by Gavel services: errors, health probes,
//! request-id middleware, tracing and env config.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
