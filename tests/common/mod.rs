#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storefront::adapters::sdk_loader::PageState;
use storefront::config::StorefrontConfig;
use storefront::domain::checkout::{CheckoutOptions, Notice};
use storefront::domain::ports::{CheckoutWidget, PaymentHandler, Presenter};
use storefront::domain::verification::PaymentCallbackPayload;
use storefront::services::checkout::CheckoutOrchestrator;

/// Shared, ordered record of everything that crossed a boundary.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, event: &str) -> usize {
        self.events().iter().filter(|e| *e == event).count()
    }
}

// ── Mock merchant backend ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct Behaviour {
    pub sdk_status: StatusCode,
    pub sdk_delay: Duration,
    pub order_status: StatusCode,
    pub order_body: String,
    pub order_delay: Duration,
    pub verify_status: StatusCode,
    pub verify_body: String,
    pub verify_delay: Duration,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            sdk_status: StatusCode::OK,
            sdk_delay: Duration::ZERO,
            order_status: StatusCode::OK,
            order_body: r#"{"orderId":"order_test_1","key":"rzp_test_backend"}"#.into(),
            order_delay: Duration::ZERO,
            verify_status: StatusCode::OK,
            verify_body: r#"{"success":true}"#.into(),
            verify_delay: Duration::ZERO,
        }
    }
}

struct BackendState {
    behaviour: Behaviour,
    log: EventLog,
    order_bodies: Mutex<Vec<serde_json::Value>>,
    verify_bodies: Mutex<Vec<serde_json::Value>>,
}

pub struct MockBackend {
    pub base: String,
    pub log: EventLog,
    state: Arc<BackendState>,
}

impl MockBackend {
    pub async fn start(behaviour: Behaviour, log: EventLog) -> Self {
        let state = Arc::new(BackendState {
            behaviour,
            log: log.clone(),
            order_bodies: Mutex::default(),
            verify_bodies: Mutex::default(),
        });

        let app = Router::new()
            .route("/checkout.js", get(sdk))
            .route("/create_order", post(create_order))
            .route("/verify_payment", post(verify_payment))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock backend");
        let addr = listener.local_addr().expect("no local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend crashed");
        });

        Self {
            base: format!("http://{addr}"),
            log,
            state,
        }
    }

    pub fn config(&self) -> StorefrontConfig {
        let mut config = StorefrontConfig::new(self.base.clone());
        config.sdk_url = format!("{}/checkout.js", self.base);
        config
    }

    pub fn order_bodies(&self) -> Vec<serde_json::Value> {
        self.state.order_bodies.lock().unwrap().clone()
    }

    pub fn verify_bodies(&self) -> Vec<serde_json::Value> {
        self.state.verify_bodies.lock().unwrap().clone()
    }
}

async fn sdk(State(state): State<Arc<BackendState>>) -> (StatusCode, &'static str) {
    state.log.push("sdk");
    tokio::time::sleep(state.behaviour.sdk_delay).await;
    (state.behaviour.sdk_status, "window.Razorpay = function () {};")
}

async fn create_order(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, String) {
    state.log.push("create_order");
    state.order_bodies.lock().unwrap().push(body);
    tokio::time::sleep(state.behaviour.order_delay).await;
    (state.behaviour.order_status, state.behaviour.order_body.clone())
}

async fn verify_payment(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, String) {
    state.log.push("verify_payment");
    state.verify_bodies.lock().unwrap().push(body);
    tokio::time::sleep(state.behaviour.verify_delay).await;
    (state.behaviour.verify_status, state.behaviour.verify_body.clone())
}

// ── Widget and presenter fakes ─────────────────────────────────────────────

pub enum WidgetScript {
    Complete(PaymentCallbackPayload),
    Dismiss,
    /// Keep the handler until the test completes it.
    Hold,
}

pub struct ScriptedWidget {
    script: Mutex<WidgetScript>,
    log: EventLog,
    pub opened: Mutex<Vec<CheckoutOptions>>,
    held: Mutex<Option<PaymentHandler>>,
}

impl ScriptedWidget {
    pub fn new(script: WidgetScript, log: EventLog) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script),
            log,
            opened: Mutex::default(),
            held: Mutex::default(),
        })
    }

    pub fn set_script(&self, script: WidgetScript) {
        *self.script.lock().unwrap() = script;
    }

    pub fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }

    pub fn last_options(&self) -> CheckoutOptions {
        self.opened.lock().unwrap().last().cloned().expect("widget never opened")
    }

    /// Fire the held callback, as the user finishing payment would.
    pub fn complete_held(&self, payload: PaymentCallbackPayload) {
        let handler = self.held.lock().unwrap().take().expect("no held handler");
        handler.complete(payload);
    }
}

impl CheckoutWidget for ScriptedWidget {
    fn open(&self, options: CheckoutOptions, handler: PaymentHandler) {
        self.log.push("widget_open");
        // Park the handler before the open becomes visible to the test.
        let handler = match &*self.script.lock().unwrap() {
            WidgetScript::Hold => {
                *self.held.lock().unwrap() = Some(handler);
                None
            }
            _ => Some(handler),
        };
        self.opened.lock().unwrap().push(options);
        if let Some(handler) = handler {
            match &*self.script.lock().unwrap() {
                WidgetScript::Complete(payload) => handler.complete(payload.clone()),
                _ => drop(handler),
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub notices: Mutex<Vec<Notice>>,
    pub navigations: Mutex<Vec<String>>,
}

impl RecordingPresenter {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn navigate(&self, destination: &str) {
        self.navigations.lock().unwrap().push(destination.to_string());
    }
}

// ── Builders ───────────────────────────────────────────────────────────────

pub fn razorpay_payload() -> PaymentCallbackPayload {
    serde_json::from_value(serde_json::json!({
        "razorpay_payment_id": "p1",
        "razorpay_order_id": "o1",
        "razorpay_signature": "s1",
    }))
    .unwrap()
}

pub struct Harness {
    pub backend: MockBackend,
    pub log: EventLog,
    pub page: Arc<PageState>,
    pub widget: Arc<ScriptedWidget>,
    pub presenter: Arc<RecordingPresenter>,
    pub checkout: Arc<CheckoutOrchestrator>,
}

pub async fn harness(behaviour: Behaviour, script: WidgetScript) -> Harness {
    harness_with_page(behaviour, script, PageState::new()).await
}

pub async fn harness_with_page(
    behaviour: Behaviour,
    script: WidgetScript,
    page: PageState,
) -> Harness {
    let log = EventLog::default();
    let backend = MockBackend::start(behaviour, log.clone()).await;
    let page = Arc::new(page);
    let widget = ScriptedWidget::new(script, log.clone());
    let presenter = Arc::new(RecordingPresenter::default());
    let checkout = Arc::new(storefront::http_checkout(
        backend.config(),
        page.clone(),
        widget.clone(),
        presenter.clone(),
    ));
    Harness {
        backend,
        log,
        page,
        widget,
        presenter,
        checkout,
    }
}
