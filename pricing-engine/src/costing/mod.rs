//! Costing: recipe cost rollup and margin-based pricing
//!
//! Derived fields (`production_cost`, `sale_price`) are recomputed on
//! demand. They may go stale when ingredient prices change until the next
//! recompute.

mod margin;
mod recipe;

pub use margin::*;
pub use recipe::*;
