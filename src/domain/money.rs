use std::fmt;

/// Amount in minor currency units (paise for INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyAmount(i64);

impl MoneyAmount {
    pub fn minor_units(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Inr,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    amount: MoneyAmount,
    currency: Currency,
}

impl Money {
    /// The single price the storefront sells at: 39 INR.
    pub fn product_price() -> Self {
        Self {
            amount: MoneyAmount(3900),
            currency: Currency::Inr,
        }
    }

    pub fn amount(&self) -> MoneyAmount {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}
