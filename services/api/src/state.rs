use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use gavel_auth_types::session::SessionSecret;

use crate::config::Environment;
use crate::infra::db::{DbAuctionRepository, DbUserRepository};
use crate::infra::notifier::OtpDispatcher;
use crate::infra::razorpay::RazorpayGateway;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub cookie_domain: Option<String>,
    pub environment: Environment,
    pub notifier: OtpDispatcher,
    pub razorpay: RazorpayGateway,
    pub razorpay_key_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn auction_repo(&self) -> DbAuctionRepository {
        DbAuctionRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for SessionSecret {
    fn from_ref(state: &AppState) -> Self {
        SessionSecret::new(state.jwt_secret.as_str())
    }
}
