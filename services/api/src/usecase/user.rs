use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use gavel_domain::user::UserRole;

use crate::domain::password::hash_password_blocking;
use crate::domain::repository::UserRepository;
use crate::domain::types::{BankTransfer, PaymentMethods, User};
use crate::error::ApiError;
use crate::usecase::login::{SessionOutput, issue_token};

// ── Register ─────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub role: String,
    pub profile_image_url: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_account_name: Option<String>,
    pub bank_name: Option<String>,
    pub razorpay_account_id: Option<String>,
    pub paypal_email: Option<String>,
}

pub struct RegisterUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> RegisterUseCase<U> {
    pub async fn execute(&self, input: RegisterInput) -> Result<SessionOutput, ApiError> {
        let required = [
            &input.user_name,
            &input.email,
            &input.password,
            &input.phone,
            &input.address,
            &input.role,
        ];
        if required.iter().any(|v| v.is_empty()) {
            return Err(ApiError::Validation("Please fill full form."));
        }

        let role: UserRole = input.role.parse().map_err(|_| ApiError::InvalidRole)?;
        if role == UserRole::Admin {
            return Err(ApiError::InvalidRole);
        }

        let bank_transfer = match (
            non_empty(input.bank_account_number),
            non_empty(input.bank_account_name),
            non_empty(input.bank_name),
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
        let payment_methods = PaymentMethods {
            bank_transfer,
            razorpay_account_id: non_empty(input.razorpay_account_id),
            paypal_email: non_empty(input.paypal_email),
        };

        if role == UserRole::Auctioneer {
            if payment_methods.bank_transfer.is_none() {
                return Err(ApiError::Validation("Please provide your full bank details."));
            }
            if payment_methods.razorpay_account_id.is_none() {
                return Err(ApiError::Validation(
                    "Please provide your razorpay account ID.",
                ));
            }
            if payment_methods.paypal_email.is_none() {
                return Err(ApiError::Validation("Please provide your paypal email."));
            }
        }

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::UserAlreadyRegistered);
        }

        let password_hash = hash_password_blocking(input.password).await?;
        let user = User {
            id: Uuid::now_v7(),
            user_name: input.user_name,
            email: input.email,
            password_hash,
            phone: input.phone,
            address: input.address,
            role,
            profile_image_url: non_empty(input.profile_image_url),
            payment_methods,
            money_spent: 0,
            auctions_won: 0,
            otp: None,
            created_at: Utc::now(),
        };
        self.users.create(&user).await?;

        let token = issue_token(&user, &self.jwt_secret)?;
        info!(user_id = %user.id, role = %user.role, "user registered");
        Ok(SessionOutput { user, token })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetProfileUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── UpdateUserRole ───────────────────────────────────────────────────────────

pub struct UpdateRoleInput {
    pub user_id: Uuid,
    pub role: String,
}

pub struct UpdateRoleUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdateRoleUseCase<U> {
    pub async fn execute(&self, input: UpdateRoleInput) -> Result<User, ApiError> {
        if input.role.is_empty() {
            return Err(ApiError::Validation("Role is required."));
        }
        let role: UserRole = input.role.parse().map_err(|_| ApiError::InvalidRole)?;

        let user = self
            .users
            .update_role(input.user_id, role)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        info!(user_id = %user.id, role = %role, "user role updated");
        Ok(user)
    }
}

// ── Leaderboard ──────────────────────────────────────────────────────────────

pub struct LeaderboardUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> LeaderboardUseCase<U> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.users.leaderboard().await
    }
}
