use {
    super::{
        checkout::{CheckoutOptions, Notice},
        error::CheckoutError,
        intent::PurchaseIntent,
        order::Order,
        verification::{PaymentCallbackPayload, VerificationResult},
    },
    std::{future::Future, pin::Pin},
    tokio::sync::oneshot,
};

/// Makes the hosted checkout SDK available on the page.
pub trait SdkLoader: Send + Sync {
    fn ensure_loaded(&self) -> Pin<Box<dyn Future<Output = Result<(), CheckoutError>> + Send + '_>>;
}

/// Asks the merchant backend to create an order for an intent.
pub trait OrderClient: Send + Sync {
    fn create_order<'a>(
        &'a self,
        intent: &'a PurchaseIntent,
    ) -> Pin<Box<dyn Future<Output = Result<Order, CheckoutError>> + Send + 'a>>;
}

/// Asks the merchant backend whether a widget callback payload is authentic.
pub trait VerificationClient: Send + Sync {
    fn verify<'a>(
        &'a self,
        payload: &'a PaymentCallbackPayload,
    ) -> Pin<Box<dyn Future<Output = Result<VerificationResult, CheckoutError>> + Send + 'a>>;
}

/// The third-party checkout modal. `open` returns immediately; the widget calls
/// the handler once the user completes payment, or drops it when dismissed.
pub trait CheckoutWidget: Send + Sync {
    fn open(&self, options: CheckoutOptions, handler: PaymentHandler);
}

/// Where user-visible outcomes go: notices and page navigation.
pub trait Presenter: Send + Sync {
    fn notify(&self, notice: Notice);
    fn navigate(&self, destination: &str);
}

/// Single-use completion callback handed to the widget.
#[derive(Debug)]
pub struct PaymentHandler(oneshot::Sender<PaymentCallbackPayload>);

impl PaymentHandler {
    pub fn channel() -> (Self, oneshot::Receiver<PaymentCallbackPayload>) {
        let (tx, rx) = oneshot::channel();
        (Self(tx), rx)
    }

    pub fn complete(self, payload: PaymentCallbackPayload) {
        if self.0.send(payload).is_err() {
            tracing::warn!("payment callback fired after the checkout attempt ended");
        }
    }
}
