use {
    crate::domain::{
        error::CheckoutError,
        intent::PurchaseIntent,
        order::{CreateOrderResponse, Order},
        ports::OrderClient,
    },
    std::{future::Future, pin::Pin},
};

/// `POST /create_order` against the merchant backend. One attempt per call.
pub struct HttpOrderClient {
    http: reqwest::Client,
    url: String,
}

impl HttpOrderClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    async fn create_order_inner(&self, intent: &PurchaseIntent) -> Result<Order, CheckoutError> {
        let resp = self
            .http
            .post(&self.url)
            .json(&intent.order_request())
            .send()
            .await
            .map_err(|e| CheckoutError::Order(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(receipt = %intent.receipt(), %status, "order creation rejected");
            return Err(CheckoutError::Order(format!(
                "order endpoint returned {status}"
            )));
        }

        let body: CreateOrderResponse = resp
            .json()
            .await
            .map_err(|e| CheckoutError::Order(format!("malformed response: {e}")))?;
        let order = Order::try_from(body)?;

        tracing::info!(
            receipt = %intent.receipt(),
            order_id = %order.order_id,
            has_key = order.public_key.is_some(),
            "order created"
        );
        Ok(order)
    }
}

impl OrderClient for HttpOrderClient {
    fn create_order<'a>(
        &'a self,
        intent: &'a PurchaseIntent,
    ) -> Pin<Box<dyn Future<Output = Result<Order, CheckoutError>> + Send + 'a>> {
        Box::pin(self.create_order_inner(intent))
    }
}
