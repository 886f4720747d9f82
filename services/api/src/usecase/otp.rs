use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Environment;
use crate::domain::password::check_password_blocking;
use crate::domain::repository::{OtpNotifier, UserRepository};
use crate::domain::types::Otp;
use crate::error::ApiError;
use crate::usecase::login::{SessionOutput, issue_token};

// ── RequestOtp ───────────────────────────────────────────────────────────────

pub struct RequestOtpInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct RequestOtpOutput {
    pub user_id: Uuid,
    /// Present outside production only.
    pub otp: Option<String>,
}

pub struct RequestOtpUseCase<U, N>
where
    U: UserRepository,
    N: OtpNotifier,
{
    pub users: U,
    pub notifier: N,
    pub environment: Environment,
}

impl<U, N> RequestOtpUseCase<U, N>
where
    U: UserRepository,
    N: OtpNotifier,
{
    pub async fn execute(&self, input: RequestOtpInput) -> Result<RequestOtpOutput, ApiError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(ApiError::Validation("Email and password are required."));
        }

        // Unknown email and wrong password must be indistinguishable.
        let user = self.users.find_by_email(&input.email).await?;
        let hash = user.as_ref().map(|u| u.password_hash.clone());
        if !check_password_blocking(input.password, hash).await? {
            return Err(ApiError::InvalidCredentials);
        }
        let user = user.ok_or(ApiError::InvalidCredentials)?;

        let otp = Otp::issue(Utc::now());
        self.users.set_otp(user.id, Some(&otp)).await?;

        if self.environment.is_production() {
            self.dispatch(input.email, otp.code);
            return Ok(RequestOtpOutput {
                user_id: user.id,
                otp: None,
            });
        }

        info!(user_id = %user.id, email = %input.email, otp = %otp.code, "login otp issued");
        Ok(RequestOtpOutput {
            user_id: user.id,
            otp: Some(otp.code),
        })
    }

    /// Fire-and-forget: the caller's response never waits on delivery.
    fn dispatch(&self, email: String, code: String) {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&email, &code).await {
                warn!(error = ?e, email = %email, "failed to deliver login otp");
            }
        });
    }
}

// ── VerifyLoginOtp ───────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
}

pub struct VerifyOtpUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> VerifyOtpUseCase<U> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<SessionOutput, ApiError> {
        if input.email.is_empty() || input.otp.is_empty() {
            return Err(ApiError::Validation("Email and OTP are required."));
        }

        let mut user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let otp = user.otp.take().ok_or(ApiError::NoOtpIssued)?;

        if otp.is_expired_at(Utc::now()) {
            // Cleared even though the request fails. Only this code: a fresh one may have landed.
            self.users.consume_otp(user.id, &otp.code).await?;
            return Err(ApiError::OtpExpired);
        }

        if otp.code != input.otp {
            return Err(ApiError::OtpMismatch);
        }

        // A concurrent verification may have consumed it between read and clear.
        if !self.users.consume_otp(user.id, &otp.code).await? {
            return Err(ApiError::NoOtpIssued);
        }

        let token = issue_token(&user, &self.jwt_secret)?;

        info!(user_id = %user.id, "otp login succeeded");
        Ok(SessionOutput { user, token })
    }
}
