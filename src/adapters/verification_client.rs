use {
    crate::domain::{
        error::CheckoutError,
        ports::VerificationClient,
        verification::{PaymentCallbackPayload, VerificationResult},
    },
    std::{future::Future, pin::Pin},
};

/// `POST /verify_payment` with the widget payload as the body.
pub struct HttpVerificationClient {
    http: reqwest::Client,
    url: String,
}

impl HttpVerificationClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    async fn verify_inner(
        &self,
        payload: &PaymentCallbackPayload,
    ) -> Result<VerificationResult, CheckoutError> {
        let resp = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| CheckoutError::Verification(format!("request failed: {e}")))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CheckoutError::Verification(format!("read body: {e}")))?;
        let body = serde_json::from_slice::<serde_json::Value>(&bytes);

        if !status.is_success() {
            // A rejected verification, not a transport failure: the body is
            // only mined for a message.
            let message = body
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
                .unwrap_or_else(|| format!("verification endpoint returned {status}"));
            tracing::warn!(%status, %message, "payment verification rejected");
            return Ok(VerificationResult::rejected(message));
        }

        let body = body
            .map_err(|e| CheckoutError::Verification(format!("malformed response: {e}")))?;
        VerificationResult::from_body(&body)
    }
}

impl VerificationClient for HttpVerificationClient {
    fn verify<'a>(
        &'a self,
        payload: &'a PaymentCallbackPayload,
    ) -> Pin<Box<dyn Future<Output = Result<VerificationResult, CheckoutError>> + Send + 'a>> {
        Box::pin(self.verify_inner(payload))
    }
}
