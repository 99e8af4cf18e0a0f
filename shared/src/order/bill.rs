//! Bill snapshot
//!
//! Derived aggregate over a set of order lines. Never stored; recomputed
//! from the lines whenever it is needed.

use super::money::{format_money, tax_on};
use super::types::OrderLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priced bill line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillLine {
    pub name: String,
    pub quantity: i32,
    pub amount: Decimal,
}

impl fmt::Display for BillLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item: {}, Quantity: {}, Price: {}",
            self.name,
            self.quantity,
            format_money(self.amount)
        )
    }
}

/// Bill summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Bill {
    /// Price every line and aggregate: tax is 5% of the subtotal
    pub fn from_lines(lines: &[OrderLine]) -> Self {
        let lines: Vec<BillLine> = lines
            .iter()
            .map(|line| BillLine {
                name: line.item().name().to_string(),
                quantity: line.quantity(),
                amount: line.total(),
            })
            .collect();

        let subtotal: Decimal = lines.iter().map(|l| l.amount).sum();
        let tax = tax_on(subtotal);

        Self {
            lines,
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "Subtotal: {}", format_money(self.subtotal))?;
        writeln!(f, "Tax: {}", format_money(self.tax))?;
        write!(f, "Total: {}", format_money(self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn pizza_and_coke_scenario() {
        let pizza = MenuItem::food("Pizza", dec("12")).unwrap();
        let coke = MenuItem::beverage("Coke", dec("3")).unwrap();
        let lines = vec![
            OrderLine::new(pizza, 2).unwrap(),
            OrderLine::new(coke, 1).unwrap(),
        ];

        let bill = Bill::from_lines(&lines);

        assert_eq!(bill.lines.len(), 2);
        assert_eq!(bill.lines[0].amount, dec("24"));
        assert_eq!(bill.lines[1].amount, dec("3.15"));
        assert_eq!(bill.subtotal, dec("27.15"));
        assert_eq!(bill.tax, dec("1.3575"));
        assert_eq!(bill.total, dec("28.5075"));
    }

    #[test]
    fn empty_bill_is_zero() {
        let bill = Bill::from_lines(&[]);
        assert!(bill.is_empty());
        assert_eq!(bill.subtotal, Decimal::ZERO);
        assert_eq!(bill.total, Decimal::ZERO);
    }

    #[test]
    fn display_renders_breakdown() {
        let pizza = MenuItem::food("Pizza", dec("12")).unwrap();
        let bill = Bill::from_lines(&[OrderLine::new(pizza, 2).unwrap()]);
        assert_eq!(
            bill.to_string(),
            "Item: Pizza, Quantity: 2, Price: $24.00\n\
             Subtotal: $24.00\n\
             Tax: $1.20\n\
             Total: $25.20"
        );
    }
}
