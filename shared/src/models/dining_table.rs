//! Dining Table Model

use crate::error::{DiningError, DiningResult};
use crate::order::money::format_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiningTable {
    pub number: i64,
    pub capacity: i32,
    pub cost_per_meal: Decimal,
    /// One-way: once booked a table stays booked for the session
    #[serde(default)]
    booked: bool,
}

impl DiningTable {
    pub fn new(number: i64, capacity: i32, cost_per_meal: Decimal) -> Self {
        Self {
            number,
            capacity,
            cost_per_meal,
            booked: false,
        }
    }

    pub fn is_booked(&self) -> bool {
        self.booked
    }

    /// Mark the table booked
    ///
    /// Fails with [`DiningError::AlreadyBooked`] if it already is.
    pub fn book(&mut self) -> DiningResult<()> {
        if self.booked {
            return Err(DiningError::AlreadyBooked {
                number: self.number,
            });
        }
        self.booked = true;
        Ok(())
    }

    pub fn status_label(&self) -> &'static str {
        if self.booked { "Booked" } else { "Available" }
    }
}

impl fmt::Display for DiningTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table {} | Capacity: {} | Cost per meal: {} | {}",
            self.number,
            self.capacity,
            format_money(self.cost_per_meal),
            self.status_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_is_one_way() {
        let mut table = DiningTable::new(1, 4, Decimal::new(50, 0));
        assert!(!table.is_booked());
        table.book().unwrap();
        assert!(table.is_booked());
        assert_eq!(table.book(), Err(DiningError::AlreadyBooked { number: 1 }));
        assert!(table.is_booked());
    }

    #[test]
    fn display_reflects_status() {
        let mut table = DiningTable::new(3, 2, Decimal::new(30, 0));
        assert_eq!(
            table.to_string(),
            "Table 3 | Capacity: 2 | Cost per meal: $30.00 | Available"
        );
        table.book().unwrap();
        assert!(table.to_string().ends_with("| Booked"));
    }
}
