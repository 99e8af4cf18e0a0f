//! Kitchen handler
//!
//! Synchronous notification only: an order is reported as being cooked
//! the moment it is handed over. Nothing is queued.

use shared::order::OrderLine;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct KitchenHandler;

impl KitchenHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn display_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Kitchen is ready to process orders...")
    }

    /// Report that the line's units are being prepared
    pub fn cook_order<W: Write>(&self, order: &OrderLine, out: &mut W) -> io::Result<()> {
        tracing::info!(
            item = order.item().name(),
            quantity = order.quantity(),
            "Cooking order"
        );
        writeln!(
            out,
            "Kitchen is cooking {} x {}",
            order.quantity(),
            order.item().name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::MenuItem;

    #[test]
    fn cook_order_reports_quantity_and_item() {
        let pasta = MenuItem::food("Pasta", Decimal::new(10, 0)).unwrap();
        let line = OrderLine::new(pasta, 3).unwrap();
        let mut out = Vec::new();

        KitchenHandler::new().cook_order(&line, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Kitchen is cooking 3 x Pasta\n");
    }
}
