use {
    std::{process::ExitCode, sync::Arc},
    storefront::{
        adapters::{
            console::{ConsolePresenter, ConsoleWidget},
            sdk_loader::PageState,
        },
        config::StorefrontConfig,
        domain::checkout::{CheckoutOutcome, TriggerOutcome},
    },
    tokio::signal,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = StorefrontConfig::from_env().expect("invalid storefront config");
    tracing::info!(api_base = %config.api_base, "starting checkout");

    let checkout = storefront::http_checkout(
        config,
        Arc::new(PageState::new()),
        Arc::new(ConsoleWidget),
        Arc::new(ConsolePresenter),
    );

    // Closing the terminal is the only way to abandon a suspended attempt.
    let outcome = tokio::select! {
        outcome = checkout.trigger() => outcome,
        _ = signal::ctrl_c() => {
            tracing::info!(state = %checkout.state(), "received ctrl+c, abandoning checkout");
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        TriggerOutcome::Finished(CheckoutOutcome::Succeeded { order_id }) => {
            tracing::info!(%order_id, "checkout complete");
            ExitCode::SUCCESS
        }
        TriggerOutcome::Finished(CheckoutOutcome::Dismissed) => ExitCode::SUCCESS,
        other => {
            tracing::warn!(?other, "checkout did not succeed");
            ExitCode::FAILURE
        }
    }
}
