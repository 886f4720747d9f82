use std::time::Duration;

use anyhow::Context as _;

use crate::domain::repository::PaymentGateway;
use crate::domain::types::{NewPaymentOrder, PaymentOrder};
use crate::error::ApiError;

/// Razorpay Orders API client.
#[derive(Clone)]
pub struct RazorpayGateway {
    client: reqwest::Client,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl RazorpayGateway {
    pub fn new(base_url: &str, key_id: String, key_secret: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("build razorpay client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            key_id,
            key_secret,
        })
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }
}

impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, order: &NewPaymentOrder) -> Result<PaymentOrder, ApiError> {
        let created = async {
            self.client
                .post(self.orders_url())
                .basic_auth(&self.key_id, Some(&self.key_secret))
                .json(order)
                .send()
                .await
                .context("send create order request")?
                .error_for_status()
                .context("razorpay rejected order")?
                .json::<PaymentOrder>()
                .await
                .context("decode razorpay order")
        }
        .await;
        created.map_err(ApiError::PaymentGateway)
    }
}
