//! Error system for the dining domain
//!
//! - [`ErrorCode`]: stable numeric codes grouped by domain
//! - [`DiningError`]: the error type returned by every domain operation
//!
//! # Example
//!
//! ```
//! use shared::error::{DiningError, ErrorCode};
//!
//! let err = DiningError::InvalidQuantity { quantity: 0 };
//! assert_eq!(err.code(), ErrorCode::OrderInvalidQuantity);
//! assert_eq!(err.to_string(), "Quantity must be greater than 0");
//! ```

mod codes;

pub use codes::{ErrorCode, InvalidErrorCode};

use thiserror::Error;

/// Domain error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiningError {
    /// Order line created with a non-positive quantity
    #[error("Quantity must be greater than 0")]
    InvalidQuantity { quantity: i64 },

    /// Payment method outside cash/card/upi
    #[error("Invalid payment method! Available: Cash, Card, UPI")]
    InvalidPaymentMethod { method: String },

    #[error("Table {number} is already booked")]
    AlreadyBooked { number: i64 },

    #[error("Table {number} not found")]
    TableNotFound { number: i64 },

    /// 1-based menu position outside the catalog
    #[error("Invalid item number {index}, choose between 1 and {available}")]
    MenuItemNotFound { index: i64, available: usize },

    #[error("Price of {name} must not be negative")]
    InvalidPrice { name: String },

    #[error("Staff not found!")]
    StaffNotFound,

    /// Unparseable or out-of-range console choice
    #[error("{0}")]
    InvalidSelection(String),
}

impl DiningError {
    /// Stable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidQuantity { .. } => ErrorCode::OrderInvalidQuantity,
            Self::InvalidPaymentMethod { .. } => ErrorCode::PaymentInvalidMethod,
            Self::AlreadyBooked { .. } => ErrorCode::TableAlreadyBooked,
            Self::TableNotFound { .. } => ErrorCode::TableNotFound,
            Self::MenuItemNotFound { .. } => ErrorCode::MenuItemNotFound,
            Self::InvalidPrice { .. } => ErrorCode::MenuItemInvalidPrice,
            Self::StaffNotFound => ErrorCode::StaffNotFound,
            Self::InvalidSelection(_) => ErrorCode::InvalidSelection,
        }
    }

    /// Create an invalid selection error
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }
}

/// Result type for domain operations
pub type DiningResult<T> = Result<T, DiningError>;
