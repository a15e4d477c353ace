//! Promotion Engine Module
//!
//! Validity checks, discount calculation and order line pricing for
//! promotions. Pure functions take `now` explicitly; `PromotionEvaluator`
//! supplies it from a clock.

mod calculator;
mod evaluator;
mod item_calculator;
mod lifecycle;
pub mod matcher;
mod order_calculator;

pub use calculator::*;
pub use evaluator::*;
pub use item_calculator::*;
pub use lifecycle::*;
pub use matcher::*;
pub use order_calculator::*;
