use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::repository::{AuctionRepository, PaymentGateway};
use crate::domain::types::{NewPaymentOrder, PAISE_PER_RUPEE, PAYMENT_CURRENCY, PaymentOrder};
use crate::error::ApiError;

type HmacSha256 = Hmac<Sha256>;

// ── CreatePaymentOrder ───────────────────────────────────────────────────────

pub struct CreateOrderInput {
    /// Rupees as sent by the client, e.g. `"500"` or `"99.5"`.
    pub amount: Option<String>,
}

pub struct CreateOrderUseCase<G: PaymentGateway> {
    pub gateway: G,
}

impl<G: PaymentGateway> CreateOrderUseCase<G> {
    pub async fn execute(&self, input: CreateOrderInput) -> Result<PaymentOrder, ApiError> {
        let amount = parse_paise(input.amount.as_deref().unwrap_or_default())?;

        let order = NewPaymentOrder {
            amount,
            currency: PAYMENT_CURRENCY.to_owned(),
            receipt: format!("receipt_{}", Utc::now().timestamp_millis()),
        };
        let created = self.gateway.create_order(&order).await?;
        info!(order_id = %created.id, amount = created.amount, "payment order created");
        Ok(created)
    }
}

// ── VerifyPayment ────────────────────────────────────────────────────────────

pub struct VerifyPaymentInput {
    pub order_id: String,
    pub payment_id: String,
    /// Lowercase hex HMAC-SHA256, as sent by the checkout widget.
    pub signature: String,
    pub auction_id: Option<Uuid>,
}

pub struct VerifyPaymentUseCase<A: AuctionRepository> {
    pub auctions: A,
    pub key_secret: String,
}

impl<A: AuctionRepository> VerifyPaymentUseCase<A> {
    pub async fn execute(&self, input: VerifyPaymentInput) -> Result<(), ApiError> {
        let signature =
            hex::decode(&input.signature).map_err(|_| ApiError::PaymentVerificationFailed)?;

        signature_mac(&self.key_secret, &input.order_id, &input.payment_id)?
            .verify_slice(&signature)
            .map_err(|_| ApiError::PaymentVerificationFailed)?;

        match input.auction_id {
            Some(auction_id) => {
                if self.auctions.mark_paid(auction_id).await? {
                    info!(auction_id = %auction_id, order_id = %input.order_id, "auction marked paid");
                } else {
                    warn!(auction_id = %auction_id, "verified payment for unknown auction");
                }
            }
            None => info!(order_id = %input.order_id, "payment verified without auction"),
        }
        Ok(())
    }
}

/// Rupee text to paise. At most two decimals; zero counts as missing.
fn parse_paise(rupees: &str) -> Result<u64, ApiError> {
    let invalid = || ApiError::Validation("Amount must be a valid number of rupees");
    let too_large = || ApiError::Validation("Amount is too large");

    let rupees = rupees.trim();
    if rupees.is_empty() {
        return Err(ApiError::Validation("Amount is required"));
    }
    let (whole, fraction) = rupees.split_once('.').unwrap_or((rupees, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || fraction.len() > 2 || !all_digits(fraction) {
        return Err(invalid());
    }

    let whole: u64 = whole.parse().map_err(|_| too_large())?;
    let fraction: u64 = format!("{fraction:0<2}").parse().map_err(|_| invalid())?;
    let paise = whole
        .checked_mul(PAISE_PER_RUPEE)
        .and_then(|p| p.checked_add(fraction))
        .ok_or_else(too_large)?;
    if paise == 0 {
        return Err(ApiError::Validation("Amount is required"));
    }
    Ok(paise)
}

fn signature_mac(
    key_secret: &str,
    order_id: &str,
    payment_id: &str,
) -> Result<HmacSha256, ApiError> {
    let mut mac = HmacSha256::new_from_slice(key_secret.as_bytes())
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("hmac key: {e}")))?;
    mac.update(format!("{order_id}|{payment_id}").as_bytes());
    Ok(mac)
}

/// Hex signature the gateway attaches to a successful checkout.
pub fn payment_signature(
    key_secret: &str,
    order_id: &str,
    payment_id: &str,
) -> Result<String, ApiError> {
    let mac = signature_mac(key_secret, order_id, payment_id)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}
