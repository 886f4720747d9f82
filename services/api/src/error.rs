use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gavel_core::error::{AppError, error_body};

/// API service domain error variants.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password so
/// callers cannot probe which accounts exist.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("User not found.")]
    UserNotFound,
    #[error("No OTP found. Please request a new one.")]
    NoOtpIssued,
    #[error("OTP has expired. Please request a new one.")]
    OtpExpired,
    #[error("Invalid OTP. Please try again.")]
    OtpMismatch,
    #[error("User already registered.")]
    UserAlreadyRegistered,
    #[error("Invalid role specified.")]
    InvalidRole,
    #[error("Payment verification failed")]
    PaymentVerificationFailed,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("payment gateway error")]
    PaymentGateway(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NoOtpIssued => "NO_OTP_ISSUED",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::OtpMismatch => "OTP_MISMATCH",
            Self::UserAlreadyRegistered => "USER_ALREADY_REGISTERED",
            Self::InvalidRole => "INVALID_ROLE",
            Self::PaymentVerificationFailed => "PAYMENT_VERIFICATION_FAILED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::PaymentGateway(_) => "PAYMENT_GATEWAY",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidCredentials
            | Self::NoOtpIssued
            | Self::OtpExpired
            | Self::OtpMismatch
            | Self::UserAlreadyRegistered
            | Self::InvalidRole
            | Self::PaymentVerificationFailed => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::PaymentGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Unauthorized => Self::Unauthorized,
            AppError::Forbidden => Self::Forbidden,
            AppError::Internal(e) => Self::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are expected client errors; only server-side failures carry a cause worth logging.
        match &self {
            Self::Internal(e) => tracing::error!(error = ?e, kind = "INTERNAL", "internal error"),
            Self::PaymentGateway(e) => {
                tracing::error!(error = ?e, kind = "PAYMENT_GATEWAY", "payment gateway error")
            }
            _ => {}
        }
        (status, error_body(self.kind(), &self.to_string())).into_response()
    }
}
