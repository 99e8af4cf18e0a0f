//! Data models
//!
//! Entities seeded at session start and mutated only through the
//! operations defined here.

pub mod dining_table;
pub mod menu_item;
pub mod staff;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use staff::*;
