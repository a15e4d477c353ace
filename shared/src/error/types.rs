//! Error types

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an article not found error
    pub fn article_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::ArticleNotFound, format!("Article {} not found", id))
            .with_detail("article_id", id)
    }

    /// Create an ingredient not found error
    pub fn ingredient_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::IngredientNotFound,
            format!("Ingredient {} not found", id),
        )
        .with_detail("ingredient_id", id)
    }

    /// Create an insufficient stock error
    pub fn insufficient_stock(denomination: impl Into<String>) -> Self {
        let d = denomination.into();
        Self::with_message(
            ErrorCode::InsufficientStock,
            format!("Insufficient stock for {}", d),
        )
        .with_detail("article", d)
    }

    /// Create a promotion not found error
    pub fn promotion_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::PromotionNotFound,
            format!("Promotion {} not found", id),
        )
        .with_detail("promotion_id", id)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
