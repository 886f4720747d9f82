use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gavel_domain::user::UserRole;

/// Account record as seen by the API service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub address: String,
    pub role: UserRole,
    pub profile_image_url: Option<String>,
    pub payment_methods: PaymentMethods,
    pub money_spent: i64,
    pub auctions_won: i32,
    pub otp: Option<Otp>,
    pub created_at: DateTime<Utc>,
}

/// Payout details an auctioneer registers with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethods {
    pub bank_transfer: Option<BankTransfer>,
    pub razorpay_account_id: Option<String>,
    pub paypal_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransfer {
    pub bank_account_number: String,
    pub bank_account_name: String,
    pub bank_name: String,
}

/// Pending login code. Code and expiry only ever exist together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Otp {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl Otp {
    /// Fresh code valid for [`OTP_TTL_SECS`] from `now`.
    pub fn issue(now: DateTime<Utc>) -> Self {
        Self {
            code: generate_otp_code(),
            expires_at: now + Duration::seconds(OTP_TTL_SECS),
        }
    }

    /// Expired strictly after `expires_at`; the boundary instant is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Six decimal digits, uniform over [`OTP_MIN`, `OTP_MAX`].
pub fn generate_otp_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(OTP_MIN..=OTP_MAX).to_string()
}

/// Order request sent to the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPaymentOrder {
    /// Amount in the currency's smallest unit (paise for INR).
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
}

/// Order as returned by the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    pub status: String,
}

/// OTP lifetime in seconds (10 minutes).
pub const OTP_TTL_SECS: i64 = 600;

pub const OTP_MIN: u32 = 100_000;

pub const OTP_MAX: u32 = 999_999;

pub const PAYMENT_CURRENCY: &str = "INR";

/// Gateway amounts are in paise.
pub const PAISE_PER_RUPEE: u64 = 100;
