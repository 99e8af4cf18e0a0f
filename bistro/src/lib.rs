//! Bistro - console restaurant ordering simulator
//!
//! # Module layout
//!
//! ```text
//! bistro/src/
//! ├── core/        # configuration, session error type
//! ├── utils/       # logging
//! ├── catalog.rs   # menu catalog
//! ├── tables.rs    # table registry
//! ├── staff.rs     # staff roster, manager console
//! ├── orders.rs    # order ledger
//! ├── kitchen.rs   # kitchen handler
//! ├── payment.rs   # payment processor
//! ├── restaurant.rs# house setup
//! └── flow/        # interactive session
//! ```
//!
//! Domain types (menu items, tables, staff, bills) live in the `shared` crate.

pub mod catalog;
pub mod core;
pub mod flow;
pub mod kitchen;
pub mod orders;
pub mod payment;
pub mod restaurant;
pub mod staff;
pub mod tables;
pub mod utils;

// Re-export commonly used items
pub use catalog::MenuCatalog;
pub use core::{Config, DEFAULT_MAX_ORDER_LINES, FlowError, FlowResult};
pub use flow::{EventKind, Role, Session, SessionOutcome};
pub use kitchen::KitchenHandler;
pub use orders::OrderLedger;
pub use payment::PaymentProcessor;
pub use restaurant::Restaurant;
pub use staff::{ManagerConsole, StaffRoster};
pub use tables::TableRegistry;

pub use utils::logger::{cleanup_old_logs, init_logger_with_file};
