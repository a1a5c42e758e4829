use {
    super::error::CheckoutError,
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// Fields the checkout widget hands to its completion callback
/// (`razorpay_payment_id`, `razorpay_order_id`, `razorpay_signature`, ...).
/// Untrusted: forwarded verbatim, never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentCallbackPayload(Map<String, Value>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub success: bool,
    pub message: Option<String>,
}

impl VerificationResult {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Interpret a verification response body. The backend is loose about the
    /// type of `success`, so booleans, `"true"`/`"false"` and numbers are all
    /// accepted; anything else is malformed.
    pub fn from_body(body: &Value) -> Result<Self, CheckoutError> {
        let obj = body
            .as_object()
            .ok_or_else(|| CheckoutError::Verification("response is not a JSON object".into()))?;

        let success = match obj.get("success") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => true,
            Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => false,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(other) => {
                return Err(CheckoutError::Verification(format!(
                    "unexpected success value: {other}"
                )));
            }
            None => {
                return Err(CheckoutError::Verification(
                    "response missing success".into(),
                ));
            }
        };

        let message = obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self { success, message })
    }
}
