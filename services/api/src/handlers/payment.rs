use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use gavel_auth_types::session::SessionUser;

use crate::domain::types::PaymentOrder;
use crate::error::ApiError;
use crate::handlers::auth::MessageResponse;
use crate::state::AppState;
use crate::usecase::payment::{
    CreateOrderInput, CreateOrderUseCase, VerifyPaymentInput, VerifyPaymentUseCase,
};

// ── POST /payment/create-order ───────────────────────────────────────────────

/// `amount` arrives as a JSON number or a numeric string.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateOrderRequest {
    pub amount: Option<Value>,
}

fn amount_text(amount: Value) -> String {
    match amount {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[derive(Serialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: PaymentOrder,
}

pub async fn create_order(
    _session: SessionUser,
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    let usecase = CreateOrderUseCase {
        gateway: state.razorpay.clone(),
    };
    let order = usecase
        .execute(CreateOrderInput {
            amount: body.amount.map(amount_text),
        })
        .await?;
    Ok(Json(CreateOrderResponse {
        success: true,
        order,
    }))
}

// ── POST /payment/verify-payment ─────────────────────────────────────────────

/// Field names follow the checkout widget's callback payload.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "auctionId")]
    pub auction_id: Option<String>,
}

pub async fn verify_payment(
    _session: SessionUser,
    State(state): State<AppState>,
    Json(body): Json<VerifyPaymentRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = VerifyPaymentUseCase {
        auctions: state.auction_repo(),
        key_secret: state.razorpay_key_secret.clone(),
    };
    usecase
        .execute(VerifyPaymentInput {
            order_id: body.razorpay_order_id,
            payment_id: body.razorpay_payment_id,
            signature: body.razorpay_signature,
            // An unparsable id cannot name an auction.
            auction_id: body.auction_id.and_then(|id| id.parse().ok()),
        })
        .await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Payment verified successfully",
    }))
}
