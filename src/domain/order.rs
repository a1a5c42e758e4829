use {
    super::{
        error::CheckoutError,
        id::{MerchantKey, OrderId},
    },
    serde::Deserialize,
};

/// Server-issued order for one Purchase Intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: OrderId,
    /// `None` when the backend did not send a key; the configured fallback applies.
    pub public_key: Option<MerchantKey>,
}

/// Wire shape of a successful order creation response. Fields are optional so
/// that a missing `orderId` surfaces as an order error instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
    pub key: Option<String>,
}

impl TryFrom<CreateOrderResponse> for Order {
    type Error = CheckoutError;

    fn try_from(resp: CreateOrderResponse) -> Result<Self, Self::Error> {
        let order_id = resp
            .order_id
            .ok_or_else(|| CheckoutError::Order("response missing orderId".into()))
            .and_then(OrderId::new)?;
        Ok(Self {
            order_id,
            public_key: resp.key.and_then(MerchantKey::parse),
        })
    }
}
