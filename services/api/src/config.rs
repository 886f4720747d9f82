use serde::Deserialize;

use gavel_core::config::Config;

/// Deployment environment. Outside production the login OTP is echoed in the
/// response instead of being sent through the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Anything other than `production` (any case) is development.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing session tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// Cookie domain attribute; host-only cookie when unset. Env var: `COOKIE_DOMAIN`.
    #[serde(default)]
    pub cookie_domain: Option<String>,
    /// TCP port to listen on (default 4000). Env var: `API_PORT`.
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// `development` (default) or `production`. Env var: `APP_ENV`.
    #[serde(default = "default_app_env")]
    pub app_env: String,
    /// Webhook that receives `{email, otp}` in production. Codes are only logged when unset.
    #[serde(default)]
    pub otp_webhook_url: Option<String>,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    /// Razorpay REST base URL. Env var: `RAZORPAY_API_URL`.
    #[serde(default = "default_razorpay_api_url")]
    pub razorpay_api_url: String,
}

impl Config for ApiConfig {}

impl ApiConfig {
    pub fn environment(&self) -> Environment {
        Environment::parse(&self.app_env)
    }
}

fn default_api_port() -> u16 {
    4000
}

fn default_app_env() -> String {
    "development".to_owned()
}

fn default_razorpay_api_url() -> String {
    "https://api.razorpay.com/v1".to_owned()
}
