//! Domain types shared across Gavel crates. No framework dependencies.

pub mod user;
