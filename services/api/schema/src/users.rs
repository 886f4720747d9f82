use sea_orm::entity::prelude::*;

/// Account record: profile, payment details, credentials and the pending login OTP.
///
/// `otp_code` and `otp_expires_at` are either both set or both NULL (table CHECK).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// argon2 PHC string.
    pub password_hash: String,
    pub phone: String,
    pub address: String,
    pub role: i16,
    pub profile_image_url: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_account_name: Option<String>,
    pub bank_name: Option<String>,
    pub razorpay_account_id: Option<String>,
    pub paypal_email: Option<String>,
    pub money_spent: i64,
    pub auctions_won: i32,
    pub otp_code: Option<String>,
    pub otp_expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
