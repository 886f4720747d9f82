use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, SqlErr, sea_query::Expr,
};
use uuid::Uuid;

use gavel_api_schema::{auctions, users};
use gavel_domain::user::UserRole;

use crate::domain::repository::{AuctionRepository, UserRepository};
use crate::domain::types::{BankTransfer, Otp, PaymentMethods, User};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        let bank = user.payment_methods.bank_transfer.as_ref();
        let result = users::ActiveModel {
            id: Set(user.id),
            user_name: Set(user.user_name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            phone: Set(user.phone.clone()),
            address: Set(user.address.clone()),
            role: Set(i16::from(user.role.as_u8())),
            profile_image_url: Set(user.profile_image_url.clone()),
            bank_account_number: Set(bank.map(|b| b.bank_account_number.clone())),
            bank_account_name: Set(bank.map(|b| b.bank_account_name.clone())),
            bank_name: Set(bank.map(|b| b.bank_name.clone())),
            razorpay_account_id: Set(user.payment_methods.razorpay_account_id.clone()),
            paypal_email: Set(user.payment_methods.paypal_email.clone()),
            money_spent: Set(user.money_spent),
            auctions_won: Set(user.auctions_won),
            otp_code: Set(None),
            otp_expires_at: Set(None),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            // Lost a race with a concurrent registration of the same email.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ApiError::UserAlreadyRegistered)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn set_otp(&self, user_id: Uuid, otp: Option<&Otp>) -> Result<(), ApiError> {
        users::Entity::update_many()
            .col_expr(users::Column::OtpCode, Expr::value(otp.map(|o| o.code.clone())))
            .col_expr(users::Column::OtpExpiresAt, Expr::value(otp.map(|o| o.expires_at)))
            .filter(users::Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .context("set user otp")?;
        Ok(())
    }

    async fn consume_otp(&self, user_id: Uuid, code: &str) -> Result<bool, ApiError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::OtpCode, Expr::value(Option::<String>::None))
            .col_expr(
                users::Column::OtpExpiresAt,
                Expr::value(Option::<chrono::DateTime<chrono::Utc>>::None),
            )
            .filter(users::Column::Id.eq(user_id))
            .filter(users::Column::OtpCode.eq(code))
            .exec(&self.db)
            .await
            .context("consume user otp")?;
        Ok(result.rows_affected > 0)
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<Option<User>, ApiError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::Role, Expr::value(i16::from(role.as_u8())))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update user role")?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn leaderboard(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .filter(users::Column::MoneySpent.gt(0))
            .order_by_desc(users::Column::MoneySpent)
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list leaderboard")?;
        models.into_iter().map(user_from_model).collect()
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiError> {
    let role = u8::try_from(model.role)
        .ok()
        .and_then(UserRole::from_u8)
        .with_context(|| format!("unknown role {} for user {}", model.role, model.id))?;

    let bank_transfer = match (
        model.bank_account_number,
        model.bank_account_name,
        model.bank_name,
    ) {
        (Some(bank_account_number), Some(bank_account_name), Some(bank_name)) => {
            Some(BankTransfer {
                bank_account_number,
                bank_account_name,
                bank_name,
            })
        }
        _ => None,
    };

    let otp = match (model.otp_code, model.otp_expires_at) {
        (Some(code), Some(expires_at)) => Some(Otp { code, expires_at }),
        _ => None,
    };

    Ok(User {
        id: model.id,
        user_name: model.user_name,
        email: model.email,
        password_hash: model.password_hash,
        phone: model.phone,
        address: model.address,
        role,
        profile_image_url: model.profile_image_url,
        payment_methods: PaymentMethods {
            bank_transfer,
            razorpay_account_id: model.razorpay_account_id,
            paypal_email: model.paypal_email,
        },
        money_spent: model.money_spent,
        auctions_won: model.auctions_won,
        otp,
        created_at: model.created_at,
    })
}

// ── Auction repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuctionRepository {
    pub db: DatabaseConnection,
}

impl AuctionRepository for DbAuctionRepository {
    async fn mark_paid(&self, auction_id: Uuid) -> Result<bool, ApiError> {
        let result = auctions::Entity::update_many()
            .col_expr(auctions::Column::IsPaid, Expr::value(true))
            .filter(auctions::Column::Id.eq(auction_id))
            .exec(&self.db)
            .await
            .context("mark auction paid")?;
        Ok(result.rows_affected > 0)
    }
}
