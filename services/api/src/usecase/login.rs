use tracing::info;

use gavel_auth_types::token::issue_session_token;

use crate::domain::password::check_password_blocking;
use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiError;

// ── PasswordLogin ────────────────────────────────────────────────────────────

pub struct PasswordLoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SessionOutput {
    pub user: User,
    pub token: String,
}

/// Single-step login kept for clients that predate the OTP flow.
pub struct PasswordLoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> PasswordLoginUseCase<U> {
    pub async fn execute(&self, input: PasswordLoginInput) -> Result<SessionOutput, ApiError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(ApiError::Validation("Please fill full form."));
        }

        let user = self.users.find_by_email(&input.email).await?;
        let hash = user.as_ref().map(|u| u.password_hash.clone());
        if !check_password_blocking(input.password, hash).await? {
            return Err(ApiError::InvalidCredentials);
        }
        let user = user.ok_or(ApiError::InvalidCredentials)?;

        let token = issue_token(&user, &self.jwt_secret)?;
        info!(user_id = %user.id, "password login succeeded");
        Ok(SessionOutput { user, token })
    }
}

pub(crate) fn issue_token(user: &User, secret: &str) -> Result<String, ApiError> {
    let (token, _) = issue_session_token(user.id, user.role, secret)
        .map_err(|e| ApiError::Internal(e.into()))?;
    Ok(token)
}
