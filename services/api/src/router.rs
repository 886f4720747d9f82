use axum::{
    Router,
    routing::{get, post, put},
};

use gavel_core::health::healthz;
use gavel_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    auth::{login, logout, register, request_otp, verify_otp},
    health::readyz,
    payment::{create_order, verify_payment},
    user::{get_profile, leaderboard, update_user_role},
};
use crate::state::AppState;

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        // Legacy single-step login
        .route("/login", post(login))
        .route("/login/request-otp", post(request_otp))
        .route("/login/verify-otp", post(verify_otp))
        .route("/me", get(get_profile))
        .route("/logout", get(logout))
        .route("/leaderboard", get(leaderboard))
        // Admin
        .route("/admin/user/{id}", put(update_user_role))
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/verify-payment", post(verify_payment))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/api/v1/user", user_routes())
        .nest("/api/v1/payment", payment_routes())
        .with_state(state)
        // Last layer runs first: the id is assigned before the trace span opens.
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
