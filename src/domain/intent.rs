use {
    super::{id::ReceiptId, money::Money},
    serde::Serialize,
};

/// One user-initiated attempt to buy the product. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseIntent {
    money: Money,
    receipt: ReceiptId,
    product_label: String,
}

impl PurchaseIntent {
    pub fn new(money: Money, receipt: ReceiptId, product_label: impl Into<String>) -> Self {
        Self {
            money,
            receipt,
            product_label: product_label.into(),
        }
    }

    pub fn money(&self) -> &Money {
        &self.money
    }

    pub fn receipt(&self) -> &ReceiptId {
        &self.receipt
    }

    pub fn product_label(&self) -> &str {
        &self.product_label
    }

    /// Body for the order creation endpoint.
    pub fn order_request(&self) -> CreateOrderRequest<'_> {
        CreateOrderRequest {
            amount: self.money.amount().minor_units(),
            currency: self.money.currency().as_str(),
            receipt: self.receipt.as_str(),
            product: &self.product_label,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateOrderRequest<'a> {
    pub amount: i64,
    pub currency: &'a str,
    pub receipt: &'a str,
    pub product: &'a str,
}
