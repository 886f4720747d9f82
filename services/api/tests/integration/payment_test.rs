use uuid::Uuid;

use gavel_api::error::ApiError;
use gavel_api::usecase::payment::{
    CreateOrderInput, CreateOrderUseCase, VerifyPaymentInput, VerifyPaymentUseCase,
    payment_signature,
};

use crate::helpers::{MockAuctionRepo, MockGateway};

const KEY_SECRET: &str = "rzp_test_secret";

// ── CreateOrderUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_order_in_paise() {
    let gateway = MockGateway::new();
    let orders = gateway.orders_handle();
    let usecase = CreateOrderUseCase { gateway };

    let order = usecase
        .execute(CreateOrderInput {
            amount: Some("500".to_owned()),
        })
        .await
        .unwrap();
    assert_eq!(order.amount, 50_000);
    assert_eq!(order.currency, "INR");

    let sent = orders.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].amount, 50_000);
    assert!(sent[0].receipt.starts_with("receipt_"));
}

#[tokio::test]
async fn should_require_positive_amount() {
    let usecase = CreateOrderUseCase {
        gateway: MockGateway::new(),
    };
    for amount in [None, Some("0".to_owned())] {
        let result = usecase.execute(CreateOrderInput { amount }).await;
        assert!(
            matches!(result, Err(ApiError::Validation("Amount is required"))),
            "expected Validation, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_reject_amount_that_overflows_paise() {
    let usecase = CreateOrderUseCase {
        gateway: MockGateway::new(),
    };
    let result = usecase
        .execute(CreateOrderInput {
            amount: Some(u64::MAX.to_string()),
        })
        .await;
    assert!(matches!(result, Err(ApiError::Validation(_))), "got {result:?}");
}

#[tokio::test]
async fn should_create_order_for_fractional_rupees() {
    let gateway = MockGateway::new();
    let orders = gateway.orders_handle();
    let usecase = CreateOrderUseCase { gateway };

    let order = usecase
        .execute(CreateOrderInput {
            amount: Some("99.5".to_owned()),
        })
        .await
        .unwrap();
    assert_eq!(order.amount, 9_950);
    assert_eq!(orders.lock().unwrap()[0].amount, 9_950);
}

#[tokio::test]
async fn should_reject_non_numeric_amount_before_calling_gateway() {
    let gateway = MockGateway::new();
    let orders = gateway.orders_handle();
    let usecase = CreateOrderUseCase { gateway };

    let result = usecase
        .execute(CreateOrderInput {
            amount: Some("five hundred".to_owned()),
        })
        .await;
    assert!(matches!(result, Err(ApiError::Validation(_))), "got {result:?}");
    assert!(orders.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_surface_gateway_failure() {
    let usecase = CreateOrderUseCase {
        gateway: MockGateway::failing(),
    };
    let result = usecase.execute(CreateOrderInput {
            amount: Some("10".to_owned()),
        }).await;
    assert!(
        matches!(result, Err(ApiError::PaymentGateway(_))),
        "expected PaymentGateway, got {result:?}"
    );
}

// ── VerifyPaymentUseCase ─────────────────────────────────────────────────────

fn verify(auctions: MockAuctionRepo) -> VerifyPaymentUseCase<MockAuctionRepo> {
    VerifyPaymentUseCase {
        auctions,
        key_secret: KEY_SECRET.to_owned(),
    }
}

fn signed(auction_id: Option<Uuid>) -> VerifyPaymentInput {
    VerifyPaymentInput {
        order_id: "order_1".to_owned(),
        payment_id: "pay_1".to_owned(),
        signature: payment_signature(KEY_SECRET, "order_1", "pay_1").unwrap(),
        auction_id,
    }
}

#[tokio::test]
async fn should_mark_auction_paid_for_valid_signature() {
    let auction_id = Uuid::now_v7();
    let auctions = MockAuctionRepo::new(vec![auction_id]);
    let paid = auctions.paid_handle();

    verify(auctions).execute(signed(Some(auction_id))).await.unwrap();
    assert_eq!(*paid.lock().unwrap(), vec![auction_id]);
}

#[tokio::test]
async fn should_accept_valid_signature_for_unknown_auction() {
    let auctions = MockAuctionRepo::new(vec![]);
    let paid = auctions.paid_handle();

    let result = verify(auctions).execute(signed(Some(Uuid::now_v7()))).await;
    assert!(result.is_ok(), "expected Ok, got {result:?}");
    assert!(paid.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_tampered_signature() {
    let auction_id = Uuid::now_v7();
    let auctions = MockAuctionRepo::new(vec![auction_id]);
    let paid = auctions.paid_handle();

    let input = VerifyPaymentInput {
        payment_id: "pay_2".to_owned(),
        ..signed(Some(auction_id))
    };
    let result = verify(auctions).execute(input).await;
    assert!(
        matches!(result, Err(ApiError::PaymentVerificationFailed)),
        "expected PaymentVerificationFailed, got {result:?}"
    );
    assert!(paid.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_non_hex_signature() {
    let input = VerifyPaymentInput {
        signature: "not-hex".to_owned(),
        ..signed(None)
    };
    let result = verify(MockAuctionRepo::new(vec![])).execute(input).await;
    assert!(
        matches!(result, Err(ApiError::PaymentVerificationFailed)),
        "expected PaymentVerificationFailed, got {result:?}"
    );
}
