use {
    crate::domain::{
        checkout::{CheckoutOptions, Notice},
        ports::{CheckoutWidget, PaymentHandler, Presenter},
        verification::PaymentCallbackPayload,
    },
    tokio::io::{AsyncBufReadExt, BufReader},
};

/// Headless stand-in for the hosted modal: prints the widget options as JSON
/// on stdout and takes the callback payload as one JSON object line on stdin.
/// EOF or a blank line counts as the user closing the modal.
#[derive(Debug, Default)]
pub struct ConsoleWidget;

impl CheckoutWidget for ConsoleWidget {
    fn open(&self, options: CheckoutOptions, handler: PaymentHandler) {
        match serde_json::to_string_pretty(&options) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "could not render checkout options");
                return;
            }
        }
        println!("paste the payment callback payload (JSON object), or an empty line to close:");

        tokio::spawn(async move {
            let mut line = String::new();
            let mut stdin = BufReader::new(tokio::io::stdin());
            match stdin.read_line(&mut line).await {
                Ok(0) => tracing::info!("stdin closed, dismissing checkout"),
                Ok(_) if line.trim().is_empty() => tracing::info!("checkout closed by user"),
                Ok(_) => match serde_json::from_str::<PaymentCallbackPayload>(line.trim()) {
                    Ok(payload) => handler.complete(payload),
                    Err(e) => tracing::warn!(error = %e, "payload is not a JSON object, dismissing"),
                },
                Err(e) => tracing::error!(error = %e, "failed to read stdin"),
            }
        });
    }
}

#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn notify(&self, notice: Notice) {
        println!("{}", notice.message());
    }

    fn navigate(&self, destination: &str) {
        tracing::info!(%destination, "navigating");
        println!("-> {destination}");
    }
}
