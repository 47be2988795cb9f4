//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are plain u16 values for efficient serialization and
/// cross-language compatibility with API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order/transaction not found
    OrderNotFound = 4001,
    /// Checkout request carried no order lines
    EmptyCheckout = 4002,
    /// Cart line not found
    CartItemNotFound = 4003,

    // ==================== 5xxx: Payment ====================
    /// Gateway reported a status outside the mapped set
    PaymentStatusUnknown = 5001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Transaction rollback itself failed; persisted state uncertain
    RollbackFailed = 9003,
    /// Object storage / image service unavailable (retryable)
    ImageServiceUnavailable = 9004,
    /// Image asset not found at the storage service
    ImageNotFound = 9005,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::NotAuthenticated => "Authentication required",
            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin role required",
            Self::OrderNotFound => "Order not found",
            Self::EmptyCheckout => "Checkout requires at least one order line",
            Self::CartItemNotFound => "Cart item not found",
            Self::PaymentStatusUnknown => "Unrecognized payment gateway status",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::RollbackFailed => "Transaction rollback failed",
            Self::ImageServiceUnavailable => "Object storage service unavailable",
            Self::ImageNotFound => "Image asset not found",
        }
    }

    /// API wire representation, e.g. `E4001`
    pub fn code_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error raised when converting an unknown u16 into [`ErrorCode`]
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
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            1001 => Self::NotAuthenticated,
            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,
            4001 => Self::OrderNotFound,
            4002 => Self::EmptyCheckout,
            4003 => Self::CartItemNotFound,
            5001 => Self::PaymentStatusUnknown,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::RollbackFailed,
            9004 => Self::ImageServiceUnavailable,
            9005 => Self::ImageNotFound,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::OrderNotFound,
            ErrorCode::PaymentStatusUnknown,
            ErrorCode::ImageServiceUnavailable,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(777), Err(InvalidErrorCode(777)));
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(ErrorCode::OrderNotFound.code_str(), "E4001");
        assert_eq!(ErrorCode::Success.code_str(), "E0000");
    }
}
