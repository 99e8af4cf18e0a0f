//! Table registry
//!
//! Owns the session's dining tables. Booking is one-way: a booked table
//! stays booked until the process exits.

use shared::error::{DiningError, DiningResult};
use shared::models::DiningTable;
use std::collections::HashSet;
use std::io::{self, Write};

#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: Vec<DiningTable>,
}

impl TableRegistry {
    /// Table numbers must be unique
    pub fn new(tables: Vec<DiningTable>) -> DiningResult<Self> {
        let mut seen = HashSet::new();
        for table in &tables {
            if !seen.insert(table.number) {
                return Err(DiningError::selection(format!(
                    "Duplicate table number {}",
                    table.number
                )));
            }
        }
        Ok(Self { tables })
    }

    /// Tables in registration order with current status
    pub fn list(&self) -> &[DiningTable] {
        &self.tables
    }

    pub fn find_by_number(&self, number: i64) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.number == number)
    }

    pub fn is_booked(&self, number: i64) -> DiningResult<bool> {
        self.find_by_number(number)
            .map(DiningTable::is_booked)
            .ok_or(DiningError::TableNotFound { number })
    }

    /// Book a table by number
    ///
    /// Fails with [`DiningError::TableNotFound`] for unknown numbers and
    /// [`DiningError::AlreadyBooked`] for tables already taken.
    pub fn book(&mut self, number: i64) -> DiningResult<&DiningTable> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.number == number)
            .ok_or(DiningError::TableNotFound { number })?;

        table.book()?;
        tracing::info!(table = number, capacity = table.capacity, "Table booked");
        Ok(&*table)
    }

    /// Write one line per table
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for table in &self.tables {
            writeln!(out, "{}", table)?;
        }
        Ok(())
    }
}
