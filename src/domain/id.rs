use {
    super::error::CheckoutError,
    derive_more::Display,
    serde::{Deserialize, Serialize},
    std::sync::atomic::{AtomicI64, Ordering},
};

/// Backend-issued order identifier (`order_xxx`). Opaque, only checked for emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self, CheckoutError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CheckoutError::Order("orderId must not be empty".into()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Merchant public key handed to the checkout widget (`rzp_test_xxx`).
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantKey(String);

impl MerchantKey {
    /// Returns `None` for an empty key so callers fall back to the configured one.
    pub fn parse(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Placeholder test-mode key; deployments override it.
impl Default for MerchantKey {
    fn default() -> Self {
        Self("rzp_test_YOUR_KEY".to_string())
    }
}

/// Per-attempt receipt (`AIWB_<unix millis>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hands out receipts whose millisecond component strictly increases, so two
/// attempts inside the same millisecond still get distinct receipts.
#[derive(Debug)]
pub struct ReceiptGenerator {
    tag: &'static str,
    last_millis: AtomicI64,
}

impl ReceiptGenerator {
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            last_millis: AtomicI64::new(0),
        }
    }

    pub fn next_receipt(&self) -> ReceiptId {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    pub(crate) fn next_at(&self, now_millis: i64) -> ReceiptId {
        let mut prev = self.last_millis.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(prev + 1);
            match self.last_millis.compare_exchange_weak(
                prev,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return ReceiptId(format!("{}_{candidate}", self.tag)),
                Err(actual) => prev = actual,
            }
        }
    }
}
