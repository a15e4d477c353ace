//! Unified error codes for the pricing engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog and stock errors
//! - 7xxx: Promotion errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
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
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Order line quantity is invalid
    InvalidQuantity = 4001,

    // ==================== 6xxx: Catalog ====================
    /// Article not found
    ArticleNotFound = 6001,
    /// Ingredient referenced by a recipe not found
    IngredientNotFound = 6002,
    /// Not enough stock for the requested operation
    InsufficientStock = 6003,
    /// Stock would exceed the configured maximum
    StockLimitExceeded = 6004,
    /// Article has invalid price
    InvalidPrice = 6005,
    /// Margin multiplier is invalid
    InvalidMargin = 6006,
    /// Ingredient is not flagged for recipe use
    IngredientNotForRecipes = 6007,

    // ==================== 7xxx: Promotion ====================
    /// Promotion not found
    PromotionNotFound = 7001,
    /// Validity window is inconsistent (start after end)
    InvalidPromotionWindow = 7002,
    /// Discount value is out of range
    InvalidDiscountValue = 7003,
    /// Promotion has been deleted
    PromotionDeleted = 7004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Order
            ErrorCode::InvalidQuantity => "Order line quantity is invalid",

            // Catalog
            ErrorCode::ArticleNotFound => "Article not found",
            ErrorCode::IngredientNotFound => "Ingredient not found",
            ErrorCode::InsufficientStock => "Insufficient stock",
            ErrorCode::StockLimitExceeded => "Stock would exceed the maximum allowed",
            ErrorCode::InvalidPrice => "Article has invalid price",
            ErrorCode::InvalidMargin => "Margin multiplier must be positive",
            ErrorCode::IngredientNotForRecipes => "Ingredient cannot be used in recipes",

            // Promotion
            ErrorCode::PromotionNotFound => "Promotion not found",
            ErrorCode::InvalidPromotionWindow => "Promotion validity window is invalid",
            ErrorCode::InvalidDiscountValue => "Discount value is out of range",
            ErrorCode::PromotionDeleted => "Promotion has been deleted",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4001 => Ok(ErrorCode::InvalidQuantity),

            // Catalog
            6001 => Ok(ErrorCode::ArticleNotFound),
            6002 => Ok(ErrorCode::IngredientNotFound),
            6003 => Ok(ErrorCode::InsufficientStock),
            6004 => Ok(ErrorCode::StockLimitExceeded),
            6005 => Ok(ErrorCode::InvalidPrice),
            6006 => Ok(ErrorCode::InvalidMargin),
            6007 => Ok(ErrorCode::IngredientNotForRecipes),

            // Promotion
            7001 => Ok(ErrorCode::PromotionNotFound),
            7002 => Ok(ErrorCode::InvalidPromotionWindow),
            7003 => Ok(ErrorCode::InvalidDiscountValue),
            7004 => Ok(ErrorCode::PromotionDeleted),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
