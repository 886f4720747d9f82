use uuid::Uuid;

use gavel_api::domain::password::verify_password;
use gavel_api::error::ApiError;
use gavel_api::usecase::user::{
    GetProfileUseCase, LeaderboardUseCase, RegisterInput, RegisterUseCase, UpdateRoleInput,
    UpdateRoleUseCase,
};
use gavel_auth_types::token::validate_session_token;
use gavel_domain::user::UserRole;

use crate::helpers::{MockUserRepo, TEST_EMAIL, TEST_JWT_SECRET, test_user, test_user_spending};

fn register(repo: MockUserRepo) -> RegisterUseCase<MockUserRepo> {
    RegisterUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

fn plain_user(email: &str) -> RegisterInput {
    RegisterInput {
        user_name: "bob".to_owned(),
        email: email.to_owned(),
        password: "s3cret-pw".to_owned(),
        phone: "8888888888".to_owned(),
        address: "4 Harbour Lane".to_owned(),
        role: "user".to_owned(),
        ..Default::default()
    }
}

fn auctioneer(email: &str) -> RegisterInput {
    RegisterInput {
        role: "Auctioneer".to_owned(),
        bank_account_number: Some("0012345678".to_owned()),
        bank_account_name: Some("Bob".to_owned()),
        bank_name: Some("State Bank".to_owned()),
        razorpay_account_id: Some("acc_123".to_owned()),
        paypal_email: Some("bob@paypal.test".to_owned()),
        ..plain_user(email)
    }
}

// ── RegisterUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_auctioneer_with_hashed_password() {
    let repo = MockUserRepo::empty();
    let out = register(repo.clone())
        .execute(auctioneer("bob@x.com"))
        .await
        .unwrap();

    assert_eq!(out.user.role, UserRole::Auctioneer);
    let info = validate_session_token(&out.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, out.user.id);
    assert_eq!(info.user_role, 1);

    let users = repo.users_handle();
    let users = users.lock().unwrap();
    assert_eq!(users.len(), 1);
    let stored = &users[0];
    assert_ne!(stored.password_hash, "s3cret-pw");
    assert!(verify_password("s3cret-pw", &stored.password_hash));
    let bank = stored.payment_methods.bank_transfer.as_ref().unwrap();
    assert_eq!(bank.bank_name, "State Bank");
    assert!(stored.otp.is_none());
}

#[tokio::test]
async fn should_reject_unknown_role() {
    let input = RegisterInput {
        role: "Bidder".to_owned(),
        ..plain_user("bob@x.com")
    };
    let result = register(MockUserRepo::empty()).execute(input).await;
    assert!(
        matches!(result, Err(ApiError::InvalidRole)),
        "expected InvalidRole, got {result:?}"
    );
}

#[tokio::test]
async fn should_parse_role_case_insensitively() {
    let input = RegisterInput {
        role: "USER".to_owned(),
        ..plain_user("bob@x.com")
    };
    let out = register(MockUserRepo::empty()).execute(input).await.unwrap();
    assert_eq!(out.user.role, UserRole::User);
}

#[tokio::test]
async fn should_refuse_admin_self_registration() {
    let input = RegisterInput {
        role: "admin".to_owned(),
        ..plain_user("bob@x.com")
    };
    let result = register(MockUserRepo::empty()).execute(input).await;
    assert!(
        matches!(result, Err(ApiError::InvalidRole)),
        "expected InvalidRole, got {result:?}"
    );
}

#[tokio::test]
async fn should_require_all_profile_fields() {
    let input = RegisterInput {
        phone: String::new(),
        ..auctioneer("bob@x.com")
    };
    let result = register(MockUserRepo::empty()).execute(input).await;
    assert!(
        matches!(result, Err(ApiError::Validation("Please fill full form."))),
        "expected Validation, got {result:?}"
    );
}

#[tokio::test]
async fn should_require_auctioneer_payout_details_in_order() {
    let usecase = register(MockUserRepo::empty());

    let no_bank = RegisterInput {
        bank_name: Some(String::new()),
        ..auctioneer("bob@x.com")
    };
    let result = usecase.execute(no_bank).await;
    assert!(
        matches!(result, Err(ApiError::Validation("Please provide your full bank details."))),
        "got {result:?}"
    );

    let no_razorpay = RegisterInput {
        razorpay_account_id: None,
        ..auctioneer("bob@x.com")
    };
    let result = usecase.execute(no_razorpay).await;
    assert!(
        matches!(result, Err(ApiError::Validation("Please provide your razorpay account ID."))),
        "got {result:?}"
    );

    let no_paypal = RegisterInput {
        paypal_email: None,
        ..auctioneer("bob@x.com")
    };
    let result = usecase.execute(no_paypal).await;
    assert!(
        matches!(result, Err(ApiError::Validation("Please provide your paypal email."))),
        "got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let result = register(MockUserRepo::new(vec![test_user()]))
        .execute(auctioneer(TEST_EMAIL))
        .await;
    assert!(
        matches!(result, Err(ApiError::UserAlreadyRegistered)),
        "expected UserAlreadyRegistered, got {result:?}"
    );
}

// ── GetProfileUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_profile_for_existing_user() {
    let usecase = GetProfileUseCase {
        users: MockUserRepo::new(vec![test_user()]),
    };
    let user = usecase.execute(test_user().id).await.unwrap();
    assert_eq!(user.email, TEST_EMAIL);
}

#[tokio::test]
async fn should_report_vanished_account_as_not_found() {
    let usecase = GetProfileUseCase {
        users: MockUserRepo::empty(),
    };
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

// ── UpdateRoleUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_role() {
    let repo = MockUserRepo::new(vec![test_user()]);
    let usecase = UpdateRoleUseCase { users: repo.clone() };

    let user = usecase
        .execute(UpdateRoleInput {
            user_id: test_user().id,
            role: "Auctioneer".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(user.role, UserRole::Auctioneer);
    assert_eq!(repo.users_handle().lock().unwrap()[0].role, UserRole::Auctioneer);
}

#[tokio::test]
async fn should_validate_role_before_lookup() {
    let usecase = UpdateRoleUseCase {
        users: MockUserRepo::empty(),
    };

    let missing = usecase
        .execute(UpdateRoleInput {
            user_id: Uuid::now_v7(),
            role: String::new(),
        })
        .await;
    assert!(
        matches!(missing, Err(ApiError::Validation("Role is required."))),
        "got {missing:?}"
    );

    let invalid = usecase
        .execute(UpdateRoleInput {
            user_id: Uuid::now_v7(),
            role: "superuser".to_owned(),
        })
        .await;
    assert!(matches!(invalid, Err(ApiError::InvalidRole)), "got {invalid:?}");

    let unknown = usecase
        .execute(UpdateRoleInput {
            user_id: Uuid::now_v7(),
            role: "admin".to_owned(),
        })
        .await;
    assert!(matches!(unknown, Err(ApiError::UserNotFound)), "got {unknown:?}");
}

// ── LeaderboardUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_rank_spenders_and_skip_non_spenders() {
    let usecase = LeaderboardUseCase {
        users: MockUserRepo::new(vec![
            test_user_spending("low@x.com", 100),
            test_user_spending("none@x.com", 0),
            test_user_spending("high@x.com", 5_000),
        ]),
    };

    let board = usecase.execute().await.unwrap();
    let emails: Vec<&str> = board.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, ["high@x.com", "low@x.com"]);
}
