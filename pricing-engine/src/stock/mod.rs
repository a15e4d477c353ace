//! Stock Ledger
//!
//! Sufficiency checks over resolved recipes (`ledger`) and the stock write
//! path for purchases, consumption and production (`adjust`).

mod adjust;
mod ledger;

pub use adjust::*;
pub use ledger::*;
