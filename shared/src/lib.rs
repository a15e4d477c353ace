//! Shared types for the restaurant pricing engine
//!
//! Plain data carriers for catalog articles, promotions and order lines,
//! plus the unified error system used by every crate in the workspace.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
