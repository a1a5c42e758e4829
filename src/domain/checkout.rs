use {
    super::{
        id::{MerchantKey, OrderId},
        money::Money,
    },
    serde::Serialize,
    std::fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    LoadError,
    OrderError,
    VerificationError,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoadError => "load_error",
            Self::OrderError => "order_error",
            Self::VerificationError => "verification_error",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    Idle,
    LoadingSdk,
    CreatingOrder,
    AwaitingWidget,
    Verifying,
    Succeeded,
    Failed(FailureReason),
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::LoadingSdk => "loading_sdk",
            Self::CreatingOrder => "creating_order",
            Self::AwaitingWidget => "awaiting_widget",
            Self::Verifying => "verifying",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }

    /// An attempt is in flight; new triggers must be ignored.
    pub fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle) && !self.is_terminal()
    }

    pub fn can_transition_to(&self, next: &CheckoutState) -> bool {
        use CheckoutState::*;
        matches!(
            (self, next),
            (Idle | Succeeded | Failed(_), LoadingSdk)
                | (LoadingSdk, CreatingOrder)
                | (LoadingSdk, Failed(FailureReason::LoadError))
                | (CreatingOrder, AwaitingWidget)
                | (CreatingOrder, Failed(FailureReason::OrderError))
                | (AwaitingWidget, Verifying)
                | (AwaitingWidget, Idle)
                | (Verifying, Succeeded)
                | (Verifying, Failed(FailureReason::VerificationError))
        )
    }
}

impl fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "failed({reason})"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// How a finished attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Succeeded { order_id: OrderId },
    Failed(FailureReason),
    /// The widget was closed without invoking its callback.
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Another attempt was already in flight.
    Ignored,
    Finished(CheckoutOutcome),
}

/// User-visible notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PaymentSucceeded,
    GatewayUnavailable,
    VerificationFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::PaymentSucceeded => "Payment successful! Check your email for download link.",
            Self::GatewayUnavailable => "Could not open payment gateway. Please try again later.",
            Self::VerificationFailed => "Payment verification failed. Contact support.",
        }
    }
}

impl From<FailureReason> for Notice {
    fn from(reason: FailureReason) -> Self {
        match reason {
            FailureReason::LoadError | FailureReason::OrderError => Self::GatewayUnavailable,
            FailureReason::VerificationError => Self::VerificationFailed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub color: String,
}

/// Configuration passed to the widget's `open`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOptions {
    pub key: MerchantKey,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: OrderId,
    pub prefill: Prefill,
    pub theme: Theme,
}

impl CheckoutOptions {
    pub fn for_order(
        price: &Money,
        order_id: OrderId,
        key: MerchantKey,
        name: &str,
        description: &str,
        theme_color: &str,
    ) -> Self {
        Self {
            key,
            amount: price.amount().minor_units(),
            currency: price.currency().as_str().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            order_id,
            prefill: Prefill {
                name: String::new(),
                email: String::new(),
            },
            theme: Theme {
                color: theme_color.to_string(),
            },
        }
    }
}
