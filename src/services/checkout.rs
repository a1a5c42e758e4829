use {
    crate::{
        config::StorefrontConfig,
        domain::{
            checkout::{CheckoutOptions, CheckoutOutcome, CheckoutState, Notice, TriggerOutcome},
            error::CheckoutError,
            id::ReceiptGenerator,
            intent::PurchaseIntent,
            money::Money,
            order::Order,
            ports::{
                CheckoutWidget, OrderClient, PaymentHandler, Presenter, SdkLoader,
                VerificationClient,
            },
        },
    },
    std::sync::Arc,
    tokio::sync::watch,
    tracing::Instrument,
    uuid::Uuid,
};

/// Collaborators the orchestrator drives.
pub struct CheckoutParts {
    pub loader: Arc<dyn SdkLoader>,
    pub orders: Arc<dyn OrderClient>,
    pub widget: Arc<dyn CheckoutWidget>,
    pub verifier: Arc<dyn VerificationClient>,
    pub presenter: Arc<dyn Presenter>,
}

/// Purchase flow state machine:
/// `Idle → LoadingSdk → CreatingOrder → AwaitingWidget → Verifying → Succeeded | Failed`.
///
/// One orchestrator backs every buy button on the page, so the re-entrancy
/// guard covers all of them.
pub struct CheckoutOrchestrator {
    parts: CheckoutParts,
    config: StorefrontConfig,
    receipts: ReceiptGenerator,
    state: watch::Sender<CheckoutState>,
}

impl CheckoutOrchestrator {
    pub fn new(parts: CheckoutParts, config: StorefrontConfig) -> Self {
        let (state, _) = watch::channel(CheckoutState::Idle);
        Self {
            receipts: ReceiptGenerator::new(config.receipt_tag),
            parts,
            config,
            state,
        }
    }

    pub fn state(&self) -> CheckoutState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CheckoutState> {
        self.state.subscribe()
    }

    /// User pressed "buy". Ignored while another attempt is in flight;
    /// otherwise runs a fresh attempt to its end.
    pub async fn trigger(&self) -> TriggerOutcome {
        let accepted = self.state.send_if_modified(|state| {
            if state.is_busy() {
                return false;
            }
            *state = CheckoutState::LoadingSdk;
            true
        });

        if !accepted {
            tracing::info!(state = %self.state(), "checkout already in progress, trigger ignored");
            return TriggerOutcome::Ignored;
        }

        let _guard = AttemptGuard(&self.state);
        let attempt_id = Uuid::now_v7();
        let outcome = self
            .run_attempt()
            .instrument(tracing::info_span!("checkout", %attempt_id))
            .await;
        TriggerOutcome::Finished(outcome)
    }

    async fn run_attempt(&self) -> CheckoutOutcome {
        let intent = PurchaseIntent::new(
            Money::product_price(),
            self.receipts.next_receipt(),
            self.config.product_label.as_str(),
        );
        tracing::info!(
            receipt = %intent.receipt(),
            product = intent.product_label(),
            "checkout started"
        );

        if let Err(e) = self.parts.loader.ensure_loaded().await {
            return self.fail(e);
        }

        self.advance(CheckoutState::CreatingOrder);
        let order = match self.parts.orders.create_order(&intent).await {
            Ok(order) => order,
            Err(e) => return self.fail(e),
        };

        self.advance(CheckoutState::AwaitingWidget);
        let options = self.widget_options(&intent, &order);
        let (handler, callback) = PaymentHandler::channel();
        self.parts.widget.open(options, handler);

        // No timeout: the widget owns this wait.
        let Ok(payload) = callback.await else {
            tracing::info!(order_id = %order.order_id, "checkout widget dismissed");
            self.advance(CheckoutState::Idle);
            return CheckoutOutcome::Dismissed;
        };

        self.advance(CheckoutState::Verifying);
        match self.parts.verifier.verify(&payload).await {
            Ok(result) if result.success => {
                self.advance(CheckoutState::Succeeded);
                tracing::info!(order_id = %order.order_id, "payment verified");
                self.parts.presenter.notify(Notice::PaymentSucceeded);
                self.parts
                    .presenter
                    .navigate(&self.config.confirmation_path);
                CheckoutOutcome::Succeeded {
                    order_id: order.order_id,
                }
            }
            Ok(result) => self.fail(CheckoutError::Verification(
                result
                    .message
                    .unwrap_or_else(|| "payment not verified".to_string()),
            )),
            Err(e) => self.fail(e),
        }
    }

    fn widget_options(&self, intent: &PurchaseIntent, order: &Order) -> CheckoutOptions {
        let key = order
            .public_key
            .clone()
            .unwrap_or_else(|| self.config.fallback_key.clone());
        CheckoutOptions::for_order(
            intent.money(),
            order.order_id.clone(),
            key,
            &self.config.display_name,
            &self.config.description,
            &self.config.theme_color,
        )
    }

    fn fail(&self, err: CheckoutError) -> CheckoutOutcome {
        let reason = err.reason();
        tracing::error!(%reason, error = %err, "checkout failed");
        self.advance(CheckoutState::Failed(reason));
        self.parts.presenter.notify(Notice::from(reason));
        CheckoutOutcome::Failed(reason)
    }

    fn advance(&self, next: CheckoutState) {
        self.state.send_modify(|state| {
            debug_assert!(
                state.can_transition_to(&next),
                "invalid checkout transition: {state} → {next}"
            );
            tracing::debug!(from = %state, to = %next, "checkout transition");
            *state = next;
        });
    }
}

/// Held for the life of an accepted attempt. If the attempt's future is
/// dropped mid-flight the machine goes back to `Idle`, so the next click is
/// not ignored forever.
struct AttemptGuard<'a>(&'a watch::Sender<CheckoutState>);

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        self.0.send_if_modified(|state| {
            if !state.is_busy() {
                return false;
            }
            tracing::warn!(%state, "checkout attempt abandoned");
            *state = CheckoutState::Idle;
            true
        });
    }
}
