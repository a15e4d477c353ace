//! Pricing Engine
//!
//! Sale price from production cost and a margin multiplier.
//! Margin is stored as a multiplier (1.3 = 30% markup) and exposed as a
//! percentage view for editing.

use rust_decimal::prelude::*;
use shared::AppResult;
use shared::models::ManufacturedItem;

use super::recipe::refresh_cost;
use crate::catalog::CatalogLookup;
use crate::money::{to_decimal, to_f64};

/// `round(cost × margin, 2)`
pub fn price_from_cost(cost: f64, margin: f64) -> f64 {
    to_f64(to_decimal(cost).saturating_mul(to_decimal(margin)))
}

/// Recompute cost (always) and then the sale price of `item`
///
/// Both derived fields are written back to the item.
pub fn recompute_price(item: &mut ManufacturedItem, catalog: &impl CatalogLookup) -> AppResult<f64> {
    let cost = refresh_cost(item, catalog)?;
    let price = price_from_cost(cost, item.margin);
    item.base.sale_price = Some(price);

    tracing::debug!(
        article_id = item.base.id,
        cost,
        margin = item.margin,
        price,
        "Sale price recomputed"
    );
    Ok(price)
}

/// Margin multiplier as a percentage: `(multiplier − 1) × 100`
pub fn margin_percentage(multiplier: f64) -> f64 {
    to_f64(
        to_decimal(multiplier)
            .saturating_sub(Decimal::ONE)
            .saturating_mul(Decimal::ONE_HUNDRED),
    )
}

/// Margin percentage as a multiplier: `1 + percentage / 100`
///
/// A missing or negative percentage clamps to `1.0` (no markup).
pub fn multiplier_from_percentage(percentage: Option<f64>) -> f64 {
    match percentage {
        Some(p) if p >= 0.0 => Decimal::ONE
            .saturating_add(to_decimal(p) / Decimal::ONE_HUNDRED)
            .normalize()
            .to_f64()
            .unwrap_or(1.0),
        _ => 1.0,
    }
}

/// Set the item's margin from a percentage
pub fn set_margin_percentage(item: &mut ManufacturedItem, percentage: Option<f64>) {
    item.margin = multiplier_from_percentage(percentage);
}

/// `sale_price − production_cost`, 0.0 when either is unset
pub fn profit(item: &ManufacturedItem) -> f64 {
    match (item.base.sale_price, item.production_cost) {
        (Some(price), Some(cost)) => to_f64(to_decimal(price).saturating_sub(to_decimal(cost))),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::catalog::fixtures::{ingredient, manufactured};

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_ingredient(ingredient(1, 2.5, 10.0))
            .with_ingredient(ingredient(2, 1.0, 10.0))
    }

    #[test]
    fn test_recompute_price_example() {
        // cost 9.50 × 1.3 = 12.35
        let mut item = manufactured(10, 1.3, &[(1, 3.0), (2, 2.0)]);
        let price = recompute_price(&mut item, &catalog()).unwrap();

        assert_eq!(price, 12.35);
        assert_eq!(item.base.sale_price, Some(12.35));
        assert_eq!(item.production_cost, Some(9.5));
        assert_eq!(profit(&item), 2.85);
    }

    #[test]
    fn test_recompute_price_always_refreshes_cost() {
        let mut item = manufactured(10, 2.0, &[(1, 1.0)]);
        item.production_cost = Some(100.0);

        let price = recompute_price(&mut item, &catalog()).unwrap();
        assert_eq!(item.production_cost, Some(2.5));
        assert_eq!(price, 5.0);
    }

    #[test]
    fn test_price_from_cost_rounding() {
        // 3.33 × 1.15 = 3.8295 → 3.83
        assert_eq!(price_from_cost(3.33, 1.15), 3.83);
        assert_eq!(price_from_cost(0.0, 1.5), 0.0);
        // margins below 1 are allowed (sell under cost)
        assert_eq!(price_from_cost(10.0, 0.9), 9.0);
        // saturates instead of overflowing
        assert!(price_from_cost(1e28, 100.0) > 7.9e28);
    }

    #[test]
    fn test_empty_recipe_price_is_zero() {
        let mut item = manufactured(10, 1.3, &[]);
        assert_eq!(recompute_price(&mut item, &catalog()).unwrap(), 0.0);
        assert_eq!(profit(&item), 0.0);
    }

    #[test]
    fn test_margin_percentage() {
        assert_eq!(margin_percentage(1.3), 30.0);
        assert_eq!(margin_percentage(1.0), 0.0);
        assert_eq!(margin_percentage(2.25), 125.0);
    }

    #[test]
    fn test_multiplier_from_percentage_clamps() {
        assert_eq!(multiplier_from_percentage(Some(30.0)), 1.3);
        assert_eq!(multiplier_from_percentage(Some(0.0)), 1.0);
        assert_eq!(multiplier_from_percentage(Some(-5.0)), 1.0);
        assert_eq!(multiplier_from_percentage(None), 1.0);
    }

    #[test]
    fn test_margin_round_trip() {
        for pct in [0.0, 12.5, 30.0, 45.0, 100.0, 250.0] {
            let m = multiplier_from_percentage(Some(pct));
            assert_eq!(multiplier_from_percentage(Some(margin_percentage(m))), m);
            assert_eq!(margin_percentage(m), pct);
        }
    }

    #[test]
    fn test_set_margin_percentage() {
        let mut item = manufactured(10, 1.0, &[]);
        set_margin_percentage(&mut item, Some(40.0));
        assert_eq!(item.margin, 1.4);
        set_margin_percentage(&mut item, None);
        assert_eq!(item.margin, 1.0);
    }

    #[test]
    fn test_profit_unset_fields() {
        let mut item = manufactured(10, 1.3, &[]);
        assert_eq!(profit(&item), 0.0);
        item.base.sale_price = Some(10.0);
        assert_eq!(profit(&item), 0.0);
        item.production_cost = Some(7.5);
        assert_eq!(profit(&item), 2.5);
    }
}
