//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic stays exact in `Decimal`. Values are rounded only when
//! rendered for display.

use crate::models::ItemCategory;
use rust_decimal::prelude::*;

/// Rounding strategy for displayed monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Beverage pricing multiplier (5% extra)
pub const BEVERAGE_MULTIPLIER: Decimal = Decimal::from_parts(105, 0, 0, false, 2);

/// Tax rate applied to the bill subtotal (5%)
pub const TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Price of `quantity` units under the category's pricing rule
///
/// - Food: `price × quantity`
/// - Beverage: `price × quantity × 1.05`
pub fn price_for(category: ItemCategory, unit_price: Decimal, quantity: i32) -> Decimal {
    let base = unit_price * Decimal::from(quantity);
    match category {
        ItemCategory::Food => base,
        ItemCategory::Beverage => base * BEVERAGE_MULTIPLIER,
    }
}

/// Tax owed on a subtotal
#[inline]
pub fn tax_on(subtotal: Decimal) -> Decimal {
    subtotal * TAX_RATE
}

/// Round to cents for display
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Render as currency, e.g. `$28.51`
pub fn format_money(value: Decimal) -> String {
    format!("${}", round_money(value))
}
