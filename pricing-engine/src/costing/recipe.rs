//! Recipe Cost Calculator
//!
//! Production cost of a manufactured item from its ingredients' purchase
//! prices. Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use shared::AppResult;
use shared::models::ManufacturedItem;

use crate::catalog::{CatalogLookup, ResolvedRecipeLine, resolve_recipe};
use crate::money::{to_decimal, to_f64};

/// Σ(purchase_price × quantity), rounded to 2 decimal places
///
/// An empty recipe costs 0.00.
pub fn recompute_cost(lines: &[ResolvedRecipeLine]) -> f64 {
    let total = lines
        .iter()
        .map(|line| to_decimal(line.purchase_price).saturating_mul(to_decimal(line.quantity)))
        .fold(Decimal::ZERO, Decimal::saturating_add);
    to_f64(total)
}

/// Resolve the recipe, recompute its cost and cache it on the item
pub fn refresh_cost(item: &mut ManufacturedItem, catalog: &impl CatalogLookup) -> AppResult<f64> {
    let lines = resolve_recipe(item, catalog)?;
    let cost = recompute_cost(&lines);
    if item.production_cost != Some(cost) {
        tracing::debug!(
            article_id = item.base.id,
            previous = ?item.production_cost,
            cost,
            "Production cost refreshed"
        );
    }
    item.production_cost = Some(cost);
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::catalog::fixtures::{ingredient, manufactured};
    use shared::ErrorCode;

    fn line(price: f64, quantity: f64) -> ResolvedRecipeLine {
        ResolvedRecipeLine {
            ingredient_id: 1,
            purchase_price: price,
            current_stock: 0.0,
            quantity,
        }
    }

    #[test]
    fn test_empty_recipe_costs_zero() {
        assert_eq!(recompute_cost(&[]), 0.0);
    }

    #[test]
    fn test_cost_is_sum_of_products() {
        // 2.50 * 3 + 1.00 * 2 = 9.50
        let lines = [line(2.5, 3.0), line(1.0, 2.0)];
        assert_eq!(recompute_cost(&lines), 9.5);
    }

    #[test]
    fn test_cost_saturates_instead_of_overflowing() {
        let lines = [line(1e20, 1e10), line(1e20, 1e10)];
        assert!(recompute_cost(&lines) > 7.9e28);
    }

    #[test]
    fn test_cost_rounds_half_up() {
        // 0.333 * 1.5 = 0.4995 → 0.50
        assert_eq!(recompute_cost(&[line(0.333, 1.5)]), 0.5);
        // 1.11 * 0.125 = 0.13875 → 0.14
        assert_eq!(recompute_cost(&[line(1.11, 0.125)]), 0.14);
    }

    #[test]
    fn test_cost_rounding_is_applied_to_total_only() {
        // each line is 0.004, the sum 0.012 → 0.01 (not 0.00 + 0.00 + 0.00)
        let lines = [line(0.004, 1.0), line(0.004, 1.0), line(0.004, 1.0)];
        assert_eq!(recompute_cost(&lines), 0.01);
    }

    #[test]
    fn test_refresh_cost_caches_on_item() {
        let catalog = InMemoryCatalog::new()
            .with_ingredient(ingredient(1, 2.5, 10.0))
            .with_ingredient(ingredient(2, 1.0, 10.0));
        let mut item = manufactured(10, 1.3, &[(1, 3.0), (2, 2.0)]);
        assert_eq!(item.production_cost, None);

        let cost = refresh_cost(&mut item, &catalog).unwrap();
        assert_eq!(cost, 9.5);
        assert_eq!(item.production_cost, Some(9.5));
    }

    #[test]
    fn test_refresh_cost_tracks_price_changes() {
        let mut catalog = InMemoryCatalog::new().with_ingredient(ingredient(1, 2.0, 10.0));
        let mut item = manufactured(10, 1.3, &[(1, 2.0)]);
        assert_eq!(refresh_cost(&mut item, &catalog).unwrap(), 4.0);

        // stale until recomputed
        catalog.insert_ingredient(ingredient(1, 3.0, 10.0));
        assert_eq!(item.production_cost, Some(4.0));
        assert_eq!(refresh_cost(&mut item, &catalog).unwrap(), 6.0);
    }

    #[test]
    fn test_refresh_cost_missing_ingredient_keeps_cache() {
        let catalog = InMemoryCatalog::new();
        let mut item = manufactured(10, 1.3, &[(1, 2.0)]);
        item.production_cost = Some(4.0);

        let err = refresh_cost(&mut item, &catalog).unwrap_err();
        assert_eq!(err.code, ErrorCode::IngredientNotFound);
        assert_eq!(item.production_cost, Some(4.0));
    }
}
