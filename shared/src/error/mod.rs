//! Unified error system for the pricing engine
//!
//! This module provides the error handling used at the system boundary:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! The calculators themselves are total functions and never produce errors;
//! only catalog lookups, stock mutations and input validation do.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog and stock errors
//! - 7xxx: Promotion errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Margin must be positive");
//!
//! // Create an error with details
//! let err = AppError::insufficient_stock("Harina")
//!     .with_detail("required", 3.0)
//!     .with_detail("available", 1.5);
//! assert_eq!(err.code, ErrorCode::InsufficientStock);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
