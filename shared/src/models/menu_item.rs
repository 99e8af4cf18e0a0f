//! Menu Item Model

use crate::error::{DiningError, DiningResult};
use crate::order::money::{format_money, price_for};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing category of a menu item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    /// Charged at list price
    Food,
    /// Charged at list price plus 5%
    Beverage,
}

/// Purchasable catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    name: String,
    price: Decimal,
    category: ItemCategory,
}

impl MenuItem {
    /// Fails with [`DiningError::InvalidPrice`] when `price` is negative
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        category: ItemCategory,
    ) -> DiningResult<Self> {
        let name = name.into();
        if price.is_sign_negative() && !price.is_zero() {
            return Err(DiningError::InvalidPrice { name });
        }
        Ok(Self {
            name,
            price,
            category,
        })
    }

    pub fn food(name: impl Into<String>, price: Decimal) -> DiningResult<Self> {
        Self::new(name, price, ItemCategory::Food)
    }

    pub fn beverage(name: impl Into<String>, price: Decimal) -> DiningResult<Self> {
        Self::new(name, price, ItemCategory::Beverage)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Price of `quantity` units under this item's category rule
    pub fn price_for(&self, quantity: i32) -> Decimal {
        price_for(self.category, self.price, quantity)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, format_money(self.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_is_rejected() {
        let err = MenuItem::food("Refund", Decimal::new(-1, 0)).unwrap_err();
        assert_eq!(err, DiningError::InvalidPrice { name: "Refund".into() });
    }

    #[test]
    fn zero_price_is_allowed() {
        let water = MenuItem::beverage("Water", Decimal::ZERO).unwrap();
        assert_eq!(water.price_for(4), Decimal::ZERO);
    }

    #[test]
    fn display_shows_name_and_price() {
        let pizza = MenuItem::food("Pizza", Decimal::new(12, 0)).unwrap();
        assert_eq!(pizza.to_string(), "Pizza - $12.00");
    }

    #[test]
    fn category_serializes_screaming_case() {
        let json = serde_json::to_string(&ItemCategory::Beverage).unwrap();
        assert_eq!(json, "\"BEVERAGE\"");
    }
}
