//! Order ledger
//!
//! Collects the session's accepted order lines. The ledger itself is
//! unbounded; the session loop enforces the configured line cap.

use rust_decimal::Decimal;
use shared::error::DiningResult;
use shared::models::MenuItem;
use shared::order::{Bill, OrderLine};

#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    lines: Vec<OrderLine>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `quantity` units of `item`
    ///
    /// Fails with `InvalidQuantity` if `quantity <= 0`; the ledger is left
    /// unchanged in that case.
    pub fn add_order(&mut self, item: &MenuItem, quantity: i64) -> DiningResult<&OrderLine> {
        let line = OrderLine::new(item.clone(), quantity)?;
        tracing::debug!(item = item.name(), quantity, "Order line accepted");
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    pub fn total(&self, line: &OrderLine) -> Decimal {
        line.total()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn generate_bill(&self) -> Bill {
        Bill::from_lines(&self.lines)
    }
}
