//! Stock sufficiency checks
//!
//! Pure functions over resolved recipe lines.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::ResolvedRecipeLine;
use crate::money::to_decimal;

/// How many units of a manufactured item current stock can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "units", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchCapacity {
    Limited(u64),
    /// No recipe line limits production (e.g. an empty recipe)
    Unbounded,
}

impl BatchCapacity {
    /// `None` when unbounded
    pub fn limit(&self) -> Option<u64> {
        match self {
            Self::Limited(n) => Some(*n),
            Self::Unbounded => None,
        }
    }

    pub fn allows(&self, batch_size: u32) -> bool {
        match self {
            Self::Limited(n) => *n >= u64::from(batch_size),
            Self::Unbounded => true,
        }
    }
}

/// Whether every line has `current_stock >= quantity * batch_size`
///
/// Vacuously true for an empty recipe. A requirement too large to represent
/// is never satisfied.
pub fn has_sufficient_stock(lines: &[ResolvedRecipeLine], batch_size: u32) -> bool {
    let batch = Decimal::from(batch_size);
    lines.iter().all(|line| {
        to_decimal(line.quantity)
            .checked_mul(batch)
            .is_some_and(|required| to_decimal(line.current_stock) >= required)
    })
}

/// Minimum over lines of `floor(current_stock / quantity)`
///
/// Lines with a non-positive quantity never limit production. Negative
/// stock counts as zero. Per-line counts saturate at `u64::MAX`.
pub fn max_producible_batches(lines: &[ResolvedRecipeLine]) -> BatchCapacity {
    lines
        .iter()
        .filter(|line| line.quantity > 0.0)
        .map(|line| {
            let stock = to_decimal(line.current_stock).max(Decimal::ZERO);
            stock
                .checked_div(to_decimal(line.quantity))
                .and_then(|batches| batches.floor().to_u64())
                .unwrap_or(u64::MAX)
        })
        .min()
        .map_or(BatchCapacity::Unbounded, BatchCapacity::Limited)
}
