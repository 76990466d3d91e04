use crate::error::DispatchError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The payment channel a request is routed through.
///
/// Closed enumeration: every variant has exactly one registered gateway
/// factory at startup.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Bank,
    Stripe,
    Paypal,
    Crypto,
}

impl PaymentMethod {
    pub const ALL: [Self; 4] = [Self::Bank, Self::Stripe, Self::Paypal, Self::Crypto];
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bank => "bank",
            Self::Stripe => "stripe",
            Self::Paypal => "paypal",
            Self::Crypto => "crypto",
        };
        f.write_str(label)
    }
}

/// Represents a non-negative monetary amount for payments.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce the amount
/// precondition before any gateway effect runs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, DispatchError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(DispatchError::ValidationError(
                "Amount must be non-negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DispatchError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Confirmation returned by a gateway after a payment was accepted.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: Decimal,
}

impl PaymentReceipt {
    pub fn new(method: PaymentMethod, amount: Amount) -> Self {
        Self {
            method,
            amount: amount.value(),
        }
    }
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "payment of {} accepted via {}",
            self.amount, self.method
        )
    }
}
