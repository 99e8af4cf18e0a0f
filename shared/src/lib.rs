//! Shared types for Bistro
//!
//! Domain model used by the console application: menu items, dining
//! tables, staff, order lines, bills, payments, and the error taxonomy.

pub mod error;
pub mod models;
pub mod order;
pub mod payment;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{DiningError, DiningResult, ErrorCode};
pub use models::{DiningTable, ItemCategory, MenuItem, Staff, StaffRole};
pub use order::{Bill, BillLine, OrderLine};
pub use payment::{PaymentMethod, PaymentRecord};
