#![allow(async_fn_in_trait)]

use std::future::Future;

use uuid::Uuid;

use gavel_domain::user::UserRole;

use crate::domain::types::{NewPaymentOrder, Otp, PaymentOrder, User};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;

    async fn create(&self, user: &User) -> Result<(), ApiError>;

    /// Overwrite (or clear, with `None`) the user's OTP in a single update keyed by id.
    /// Code and expiry are written together.
    async fn set_otp(&self, user_id: Uuid, otp: Option<&Otp>) -> Result<(), ApiError>;

    /// Clear the OTP only while it still holds `code`.
    /// Returns `true` if this call cleared it, `false` if it was already gone or replaced.
    async fn consume_otp(&self, user_id: Uuid, code: &str) -> Result<bool, ApiError>;

    /// Returns the updated user, or `None` if `id` is unknown.
    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<Option<User>, ApiError>;

    /// Users with `money_spent > 0`, highest spender first.
    async fn leaderboard(&self) -> Result<Vec<User>, ApiError>;
}

/// Repository for auctions (payment status only).
pub trait AuctionRepository: Send + Sync {
    /// Set `is_paid`. Returns `false` if the auction does not exist.
    async fn mark_paid(&self, auction_id: Uuid) -> Result<bool, ApiError>;
}

/// Port for the third-party payment gateway.
pub trait PaymentGateway: Send + Sync {
    async fn create_order(&self, order: &NewPaymentOrder) -> Result<PaymentOrder, ApiError>;
}

/// Best-effort delivery of login codes.
///
/// Called from a detached task, so the returned future must be `Send` and the
/// notifier cheap to clone.
pub trait OtpNotifier: Clone + Send + Sync + 'static {
    fn notify(&self, email: &str, code: &str)
    -> impl Future<Output = Result<(), ApiError>> + Send;
}
