//! Stable error codes for the dining domain
//!
//! Codes are grouped by domain:
//! - 0xxx: Input errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 8xxx: Staff errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Input ====================
    /// Input could not be understood
    InvalidSelection = 5,

    // ==================== 4xxx: Order ====================
    /// Quantity must be positive
    OrderInvalidQuantity = 4008,

    // ==================== 5xxx: Payment ====================
    /// Invalid payment method
    PaymentInvalidMethod = 5003,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item has a negative price
    MenuItemInvalidPrice = 6002,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is already booked
    TableAlreadyBooked = 7002,

    // ==================== 8xxx: Staff ====================
    /// Staff member not found
    StaffNotFound = 8001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human readable message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSelection => "Invalid selection",
            ErrorCode::OrderInvalidQuantity => "Quantity must be greater than 0",
            ErrorCode::PaymentInvalidMethod => "Invalid payment method",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Menu item has an invalid price",
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableAlreadyBooked => "Table is already booked",
            ErrorCode::StaffNotFound => "Staff not found",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a numeric value does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(ErrorCode::InvalidSelection),
            4008 => Ok(ErrorCode::OrderInvalidQuantity),
            5003 => Ok(ErrorCode::PaymentInvalidMethod),
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemInvalidPrice),
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableAlreadyBooked),
            8001 => Ok(ErrorCode::StaffNotFound),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::InvalidSelection.code(), 5);
        assert_eq!(ErrorCode::OrderInvalidQuantity.code(), 4008);
        assert_eq!(ErrorCode::PaymentInvalidMethod.code(), 5003);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::MenuItemInvalidPrice.code(), 6002);
        assert_eq!(ErrorCode::TableNotFound.code(), 7001);
        assert_eq!(ErrorCode::TableAlreadyBooked.code(), 7002);
        assert_eq!(ErrorCode::StaffNotFound.code(), 8001);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(7002), Ok(ErrorCode::TableAlreadyBooked));
        assert_eq!(ErrorCode::try_from(5003), Ok(ErrorCode::PaymentInvalidMethod));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
        assert_eq!(
            InvalidErrorCode(1234).to_string(),
            "invalid error code: 1234"
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::OrderInvalidQuantity).unwrap();
        assert_eq!(json, "4008");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::TableNotFound.to_string(), "7001");
    }
}
