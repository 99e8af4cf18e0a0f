//! Payment processor
//!
//! Validates the method and reports success. No retry, no partial payment,
//! nothing is persisted.

use crate::audit_log;
use rust_decimal::Decimal;
use shared::error::DiningResult;
use shared::order::format_money;
use shared::payment::{PaymentMethod, PaymentRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Settle `amount` with `method` (cash, card or upi, any case)
    pub fn process_payment(&self, method: &str, amount: Decimal) -> DiningResult<PaymentRecord> {
        let kind = method.parse::<PaymentMethod>().inspect_err(|e| {
            tracing::warn!(method, code = %e.code(), "Payment rejected");
        })?;

        let record = PaymentRecord {
            method: method.to_string(),
            kind,
            amount,
        };
        audit_log!("customer", "pay", kind, format_money(amount));
        Ok(record)
    }
}
