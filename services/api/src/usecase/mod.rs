pub mod login;
pub mod otp;
pub mod payment;
pub mod user;
