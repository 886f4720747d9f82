use sea_orm::Database;
use tracing::info;

use gavel_api::config::ApiConfig;
use gavel_api::infra::notifier::OtpDispatcher;
use gavel_api::infra::razorpay::RazorpayGateway;
use gavel_api::router::build_router;
use gavel_api::state::AppState;
use gavel_core::config::Config;
use gavel_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env();
    let environment = config.environment();

    let db = Database::connect(&config.database_url).await?;

    let notifier = OtpDispatcher::from_webhook_url(config.otp_webhook_url)?;
    let razorpay = RazorpayGateway::new(
        &config.razorpay_api_url,
        config.razorpay_key_id,
        config.razorpay_key_secret.clone(),
    )?;

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        cookie_domain: config.cookie_domain,
        environment,
        notifier,
        razorpay,
        razorpay_key_secret: config.razorpay_key_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(addr = %addr, environment = ?environment, "api service listening");
    axum::serve(listener, router).await?;
    Ok(())
}
