use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gavel_auth_types::session::SessionUser;
use gavel_domain::user::UserRole;

use crate::domain::types::{PaymentMethods, User};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::user::{
    GetProfileUseCase, LeaderboardUseCase, UpdateRoleInput, UpdateRoleUseCase,
};

/// Public view of a user. Never carries the password hash or a pending OTP.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: UserRole,
    pub profile_image_url: Option<String>,
    pub payment_methods: PaymentMethods,
    pub money_spent: i64,
    pub auctions_won: i32,
    #[serde(serialize_with = "gavel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            user_name: user.user_name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            role: user.role,
            profile_image_url: user.profile_image_url,
            payment_methods: user.payment_methods,
            money_spent: user.money_spent,
            auctions_won: user.auctions_won,
            created_at: user.created_at,
        }
    }
}

// ── GET /user/me ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserResponse,
}

pub async fn get_profile(
    session: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(session.user_id).await?;
    Ok(Json(ProfileResponse {
        success: true,
        user: user.into(),
    }))
}

// ── GET /user/leaderboard ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub leaderboard: Vec<UserResponse>,
}

pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let usecase = LeaderboardUseCase {
        users: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(LeaderboardResponse {
        success: true,
        leaderboard: users.into_iter().map(UserResponse::from).collect(),
    }))
}

// ── PUT /user/admin/user/{id} ────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateRoleRequest {
    pub role: String,
}

#[derive(Serialize)]
pub struct UpdateRoleResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

pub async fn update_user_role(
    session: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<Json<UpdateRoleResponse>, ApiError> {
    session.require(UserRole::Admin)?;

    let usecase = UpdateRoleUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(UpdateRoleInput {
            user_id: id,
            role: body.role.clone(),
        })
        .await?;
    Ok(Json(UpdateRoleResponse {
        success: true,
        message: format!("User role updated to {} successfully.", body.role),
        user: user.into(),
    }))
}
