use {super::checkout::FailureReason, thiserror::Error};

/// Stage failures of a checkout attempt. Each one is terminal for the attempt.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("sdk load: {0}")]
    Load(String),

    #[error("order: {0}")]
    Order(String),

    #[error("verification: {0}")]
    Verification(String),
}

impl CheckoutError {
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Load(_) => FailureReason::LoadError,
            Self::Order(_) => FailureReason::OrderError,
            Self::Verification(_) => FailureReason::VerificationError,
        }
    }
}

/// Startup problems; never reach the state machine.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}
