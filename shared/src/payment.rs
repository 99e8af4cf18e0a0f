//! Payment types

use crate::error::DiningError;
use crate::order::money::format_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accepted payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Cash, Self::Card, Self::Upi];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Upi => "UPI",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DiningError;

    /// Exact, case-insensitive match on `cash`, `card` or `upi`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DiningError::InvalidPaymentMethod {
                method: s.to_string(),
            })
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ephemeral record of a settled payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    /// Method as the customer entered it
    pub method: String,
    pub kind: PaymentMethod,
    pub amount: Decimal,
}

impl fmt::Display for PaymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment of {} successful via {}",
            format_money(self.amount),
            self.method
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_methods_in_any_case() {
        for input in ["cash", "CASH", "Cash", "card", "Card", "upi", "UPI", "uPi"] {
            assert!(input.parse::<PaymentMethod>().is_ok(), "{input}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for input in ["", "cheque", "credit card", " cash", "cash ", "upi1", "bitcoin"] {
            assert_eq!(
                input.parse::<PaymentMethod>(),
                Err(DiningError::InvalidPaymentMethod {
                    method: input.to_string()
                })
            );
        }
    }

    #[test]
    fn record_display_echoes_entered_method() {
        let record = PaymentRecord {
            method: "card".into(),
            kind: PaymentMethod::Card,
            amount: Decimal::new(285075, 4),
        };
        assert_eq!(record.to_string(), "Payment of $28.51 successful via card");
    }
}
