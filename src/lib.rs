pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;
pub mod ui;

use {
    adapters::{
        order_client::HttpOrderClient, sdk_loader::PageState, sdk_loader::ScriptLoader,
        verification_client::HttpVerificationClient,
    },
    config::StorefrontConfig,
    domain::ports::{CheckoutWidget, Presenter},
    services::checkout::{CheckoutOrchestrator, CheckoutParts},
    std::sync::Arc,
};

/// Wires the HTTP-backed loader and clients for one page.
pub fn http_checkout(
    config: StorefrontConfig,
    page: Arc<PageState>,
    widget: Arc<dyn CheckoutWidget>,
    presenter: Arc<dyn Presenter>,
) -> CheckoutOrchestrator {
    let http = reqwest::Client::new();
    let parts = CheckoutParts {
        loader: Arc::new(ScriptLoader::new(http.clone(), config.sdk_url.clone(), page)),
        orders: Arc::new(HttpOrderClient::new(
            http.clone(),
            config.endpoint("/create_order"),
        )),
        widget,
        verifier: Arc::new(HttpVerificationClient::new(
            http,
            config.endpoint("/verify_payment"),
        )),
        presenter,
    };
    CheckoutOrchestrator::new(parts, config)
}
