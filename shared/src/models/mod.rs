//! Data models
//!
//! Plain data carriers shared between the pricing engine and its callers.
//! Entities hold no business logic; calculations live in `pricing-engine`.
//! All IDs are `i64`.

pub mod article;
pub mod order_line;
pub mod promotion;

// Re-exports
pub use article::*;
pub use order_line::*;
pub use promotion::*;
