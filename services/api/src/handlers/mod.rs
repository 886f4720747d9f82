pub mod auth;
pub mod health;
pub mod payment;
pub mod user;
