//! Order line types

use crate::error::{DiningError, DiningResult};
use crate::models::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One (item, quantity) selection
///
/// Holds a snapshot of the menu item; the total is derived on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    item: MenuItem,
    quantity: i32,
}

impl OrderLine {
    /// Fails with [`DiningError::InvalidQuantity`] if `quantity <= 0`
    pub fn new(item: MenuItem, quantity: i64) -> DiningResult<Self> {
        if quantity <= 0 {
            return Err(DiningError::InvalidQuantity { quantity });
        }
        let quantity =
            i32::try_from(quantity).map_err(|_| DiningError::selection("Quantity is too large"))?;
        Ok(Self { item, quantity })
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Line total under the item's pricing rule
    pub fn total(&self) -> Decimal {
        self.item.price_for(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> MenuItem {
        MenuItem::food("Pizza", Decimal::new(12, 0)).unwrap()
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        for q in [0, -1, -100] {
            assert_eq!(
                OrderLine::new(pizza(), q),
                Err(DiningError::InvalidQuantity { quantity: q })
            );
        }
    }

    #[test]
    fn positive_quantity_is_accepted() {
        for q in [1, 2, 50] {
            let line = OrderLine::new(pizza(), q).unwrap();
            assert_eq!(i64::from(line.quantity()), q);
        }
    }

    #[test]
    fn total_uses_item_rule() {
        let coke = MenuItem::beverage("Coke", Decimal::new(3, 0)).unwrap();
        let line = OrderLine::new(coke, 2).unwrap();
        assert_eq!(line.total(), Decimal::new(630, 2));
    }

    #[test]
    fn huge_quantity_is_rejected() {
        let err = OrderLine::new(pizza(), i64::from(i32::MAX) + 1).unwrap_err();
        assert!(matches!(err, DiningError::InvalidSelection(_)));
    }
}
