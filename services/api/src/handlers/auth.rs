use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use gavel_auth_types::cookie::{clear_session_cookie, set_session_cookie};
use gavel_auth_types::session::SessionUser;

use crate::error::ApiError;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::login::{PasswordLoginInput, PasswordLoginUseCase, SessionOutput};
use crate::usecase::otp::{RequestOtpInput, RequestOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};
use crate::usecase::user::{RegisterInput, RegisterUseCase};

#[derive(Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: UserResponse,
    pub token: String,
}

/// Attach the session cookie and echo the token in the body.
fn session_response(
    cookie_domain: Option<String>,
    jar: CookieJar,
    status: StatusCode,
    message: &'static str,
    out: SessionOutput,
) -> (StatusCode, CookieJar, Json<SessionResponse>) {
    let jar = set_session_cookie(jar, out.token.clone(), cookie_domain);
    let body = SessionResponse {
        success: true,
        message,
        user: out.user.into(),
        token: out.token,
    };
    (status, jar, Json(body))
}

// ── POST /user/register ──────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
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

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(RegisterInput {
            user_name: body.user_name,
            email: body.email,
            password: body.password,
            phone: body.phone,
            address: body.address,
            role: body.role,
            profile_image_url: body.profile_image_url,
            bank_account_number: body.bank_account_number,
            bank_account_name: body.bank_account_name,
            bank_name: body.bank_name,
            razorpay_account_id: body.razorpay_account_id,
            paypal_email: body.paypal_email,
        })
        .await?;
    Ok(session_response(
        state.cookie_domain.clone(),
        jar,
        StatusCode::CREATED,
        "User Registered.",
        out,
    ))
}

// ── POST /user/login ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = PasswordLoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(PasswordLoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(session_response(
        state.cookie_domain.clone(),
        jar,
        StatusCode::OK,
        "Login successfully.",
        out,
    ))
}

// ── POST /user/login/request-otp ─────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOtpResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

pub async fn request_otp(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<RequestOtpResponse>, ApiError> {
    let usecase = RequestOtpUseCase {
        users: state.user_repo(),
        notifier: state.notifier.clone(),
        environment: state.environment,
    };
    let out = usecase
        .execute(RequestOtpInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(RequestOtpResponse {
        success: true,
        message: "OTP generated successfully.",
        user_id: out.user_id.to_string(),
        otp: out.otp,
    }))
}

// ── POST /user/login/verify-otp ──────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = VerifyOtpUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(VerifyOtpInput {
            email: body.email,
            otp: body.otp,
        })
        .await?;
    Ok(session_response(
        state.cookie_domain.clone(),
        jar,
        StatusCode::OK,
        "Login successful!",
        out,
    ))
}

// ── GET /user/logout ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

pub async fn logout(
    _session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    (
        jar,
        Json(MessageResponse {
            success: true,
            message: "Logout Successfully.",
        }),
    )
}
