//! Routing, session gating and request validation through the full router.
//!
//! The database is left disconnected, so every request here must be settled
//! before a repository is touched.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use gavel_api::config::Environment;
use gavel_api::infra::notifier::{LogOtpNotifier, OtpDispatcher};
use gavel_api::infra::razorpay::RazorpayGateway;
use gavel_api::router::build_router;
use gavel_api::state::AppState;
use gavel_core::middleware::X_REQUEST_ID;
use gavel_domain::user::UserRole;
use gavel_testing::auth::MockSession;
use gavel_testing::response::json_body;

use crate::helpers::TEST_JWT_SECRET;

fn app() -> Router {
    let state = AppState {
        db: DatabaseConnection::default(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        cookie_domain: None,
        environment: Environment::Development,
        notifier: OtpDispatcher::Log(LogOtpNotifier),
        razorpay: RazorpayGateway::new("http://127.0.0.1:9", "k".to_owned(), "s".to_owned())
            .unwrap(),
        razorpay_key_secret: "s".to_owned(),
    };
    build_router(state)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn with_session(mut req: Request<Body>, role: UserRole) -> Request<Body> {
    let cookie = MockSession::new(Uuid::now_v7(), role).cookie(TEST_JWT_SECRET);
    req.headers_mut().insert(header::COOKIE, cookie);
    req
}

#[tokio::test]
async fn should_answer_liveness_with_request_id() {
    let resp = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let id = resp.headers().get(X_REQUEST_ID).expect("missing request id");
    assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let resp = app()
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_profile_without_session() {
    let resp = app()
        .oneshot(Request::get("/api/v1/user/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_reject_session_signed_with_other_secret() {
    let cookie = MockSession::new(Uuid::now_v7(), UserRole::Admin).cookie("other-secret");
    let req = Request::get("/api/v1/user/me")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_forbid_role_update_for_non_admin() {
    let uri = format!("/api/v1/user/admin/user/{}", Uuid::now_v7());
    let req = json_request(Method::PUT, &uri, json!({ "role": "admin" }));
    let resp = app()
        .oneshot(with_session(req, UserRole::Auctioneer))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(resp).await["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_validate_role_update_for_admin() {
    let uri = format!("/api/v1/user/admin/user/{}", Uuid::now_v7());
    let req = json_request(Method::PUT, &uri, json!({}));
    let resp = app().oneshot(with_session(req, UserRole::Admin)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["kind"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Role is required.");
}

#[tokio::test]
async fn should_reject_otp_request_with_missing_fields() {
    let req = json_request(
        Method::POST,
        "/api/v1/user/login/request-otp",
        json!({ "email": "a@x.com" }),
    );
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Email and password are required.");
}

#[tokio::test]
async fn should_reject_otp_verification_with_missing_fields() {
    let req = json_request(
        Method::POST,
        "/api/v1/user/login/verify-otp",
        json!({ "otp": "123456" }),
    );
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["message"], "Email and OTP are required.");
}

#[tokio::test]
async fn should_reject_registration_with_unknown_role() {
    let req = json_request(
        Method::POST,
        "/api/v1/user/register",
        json!({
            "userName": "bob",
            "email": "bob@x.com",
            "password": "pw",
            "phone": "1",
            "address": "here",
            "role": "Bidder",
        }),
    );
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["kind"], "INVALID_ROLE");
}

#[tokio::test]
async fn should_clear_cookie_on_logout() {
    let req = Request::get("/api/v1/user/logout").body(Body::empty()).unwrap();
    let resp = app().oneshot(with_session(req, UserRole::User)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("missing set-cookie")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(set_cookie.starts_with("token=;"), "got {set_cookie}");
    assert!(set_cookie.contains("Max-Age=0"), "got {set_cookie}");

    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logout Successfully.");
}

#[tokio::test]
async fn should_require_session_for_logout() {
    let resp = app()
        .oneshot(Request::get("/api/v1/user/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_require_session_for_payments() {
    let req = json_request(
        Method::POST,
        "/api/v1/payment/create-order",
        json!({ "amount": 100 }),
    );
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_order_without_amount() {
    let req = json_request(Method::POST, "/api/v1/payment/create-order", json!({}));
    let resp = app().oneshot(with_session(req, UserRole::User)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["message"], "Amount is required");
}

#[tokio::test]
async fn should_reject_malformed_amount_with_error_envelope() {
    for amount in [json!("abc"), json!(-5), json!(true)] {
        let req = json_request(
            Method::POST,
            "/api/v1/payment/create-order",
            json!({ "amount": amount }),
        );
        let resp = app().oneshot(with_session(req, UserRole::User)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "amount {amount}");
        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["kind"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn should_reject_forged_payment_signature() {
    let req = json_request(
        Method::POST,
        "/api/v1/payment/verify-payment",
        json!({
            "razorpay_order_id": "order_1",
            "razorpay_payment_id": "pay_1",
            "razorpay_signature": "00".repeat(32),
            "auctionId": Uuid::now_v7().to_string(),
        }),
    );
    let resp = app().oneshot(with_session(req, UserRole::User)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["kind"], "PAYMENT_VERIFICATION_FAILED");
    assert_eq!(body["message"], "Payment verification failed");
}
