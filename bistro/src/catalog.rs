//! Menu catalog
//!
//! Fixed, ordered list of menu items addressed by 1-based position.

use rust_decimal::Decimal;
use shared::error::{DiningError, DiningResult};
use shared::models::MenuItem;
use std::io::{self, Write};

#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its 1-based menu position
    pub fn get(&self, position: i64) -> DiningResult<&MenuItem> {
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|idx| self.items.get(idx))
            .ok_or(DiningError::MenuItemNotFound {
                index: position,
                available: self.items.len(),
            })
    }

    /// Apply the item's category pricing rule
    pub fn price_for(&self, item: &MenuItem, quantity: i32) -> Decimal {
        item.price_for(quantity)
    }

    /// Write the numbered menu
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (idx, item) in self.items.iter().enumerate() {
            writeln!(out, "{}. {}", idx + 1, item)?;
        }
        Ok(())
    }
}
