//! Order lines, pricing and billing

pub mod bill;
pub mod money;
pub mod types;

pub use bill::{Bill, BillLine};
pub use money::{format_money, price_for, BEVERAGE_MULTIPLIER, TAX_RATE};
pub use types::OrderLine;
