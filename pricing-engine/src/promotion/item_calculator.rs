//! Order line pricing
//!
//! Picks the best applicable promotion for a line and records the result
//! as a `DiscountedOrderLine`. Promotions do not stack: one line carries at
//! most one promotion.

use chrono::NaiveDateTime;
use rust_decimal::prelude::*;
use shared::AppResult;
use shared::models::{DiscountedOrderLine, Promotion};

use super::calculator::compute_discount;
use super::matcher::applies_to_item;
use crate::money::{to_decimal, to_f64};
use crate::utils::validation::validate_line_input;

/// Select the promotion granting the largest discount on this line
///
/// Ties keep the first promotion in input order. Returns `None` when no
/// promotion yields a positive discount.
fn select_best<'a>(
    article_id: i64,
    unit_price: f64,
    quantity: i32,
    promotions: &'a [Promotion],
    now: NaiveDateTime,
) -> Option<(&'a Promotion, f64)> {
    promotions
        .iter()
        .filter(|p| !p.is_deleted && applies_to_item(p, article_id))
        .map(|p| (p, compute_discount(p, unit_price, quantity, now)))
        .filter(|(_, discount)| *discount > 0.0)
        .fold(None, |best, candidate| match best {
            Some((_, best_discount)) if best_discount >= candidate.1 => best,
            _ => Some(candidate),
        })
}

/// Price one order line against a set of promotions
///
/// Validates the line inputs, then applies the single best promotion.
pub fn price_line(
    article_id: i64,
    unit_price: f64,
    quantity: i32,
    promotions: &[Promotion],
    now: NaiveDateTime,
) -> AppResult<DiscountedOrderLine> {
    validate_line_input(unit_price, quantity)?;

    let best = select_best(article_id, unit_price, quantity, promotions, now);
    if let Some((promotion, discount)) = best {
        tracing::debug!(
            article_id,
            promotion_id = promotion.id,
            quantity,
            discount,
            "Promotion applied to line"
        );
    }

    Ok(DiscountedOrderLine {
        article_id,
        quantity,
        unit_price,
        promotion_id: best.map(|(p, _)| p.id),
        discount_amount: best.map_or(0.0, |(_, d)| d),
    })
}

/// `unit_price − discount_amount / quantity`
///
/// A zero-quantity line keeps its original unit price.
pub fn final_unit_price(line: &DiscountedOrderLine) -> f64 {
    if line.quantity == 0 {
        return line.unit_price;
    }
    let per_unit = to_decimal(line.discount_amount) / Decimal::from(line.quantity);
    to_f64(to_decimal(line.unit_price).saturating_sub(per_unit))
}

/// A promotion is attached and actually reduced the line
pub fn has_promotion(line: &DiscountedOrderLine) -> bool {
    line.promotion_id.is_some() && line.discount_amount > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promotion::fixtures::{at, fixed_promotion, promotion};
    use shared::ErrorCode;

    fn lunch() -> NaiveDateTime {
        at(2026, 3, 10, 13, 0)
    }

    #[test]
    fn test_price_line_applies_promotion() {
        let promos = vec![promotion(1, 20.0)];
        let line = price_line(100, 100.0, 3, &promos, lunch()).unwrap();

        assert_eq!(line.promotion_id, Some(1));
        assert_eq!(line.discount_amount, 60.0);
        assert_eq!(final_unit_price(&line), 80.0);
        assert!(has_promotion(&line));
    }

    #[test]
    fn test_price_line_picks_largest_discount() {
        // 10% of 50 × 2 = 10, fixed 8 × 2 = 16
        let promos = vec![promotion(1, 10.0), fixed_promotion(2, 8.0)];
        let line = price_line(100, 50.0, 2, &promos, lunch()).unwrap();
        assert_eq!(line.promotion_id, Some(2));
        assert_eq!(line.discount_amount, 16.0);
    }

    #[test]
    fn test_price_line_tie_keeps_first() {
        // 20% of 50 = 10 per unit, fixed 10 per unit
        let promos = vec![fixed_promotion(7, 10.0), promotion(3, 20.0)];
        let line = price_line(100, 50.0, 1, &promos, lunch()).unwrap();
        assert_eq!(line.promotion_id, Some(7));
    }

    #[test]
    fn test_price_line_skips_ineligible() {
        let mut deleted = promotion(1, 50.0);
        deleted.is_deleted = true;
        let mut other_article = promotion(2, 50.0);
        other_article.article_ids = vec![200];
        let promos = vec![deleted, other_article];

        let line = price_line(100, 10.0, 1, &promos, lunch()).unwrap();
        assert_eq!(line.promotion_id, None);
        assert_eq!(line.discount_amount, 0.0);
        assert_eq!(final_unit_price(&line), 10.0);
        assert!(!has_promotion(&line));
    }

    #[test]
    fn test_price_line_outside_window_has_no_promotion() {
        let promos = vec![promotion(1, 20.0)];
        let line = price_line(100, 100.0, 3, &promos, at(2026, 3, 10, 20, 0)).unwrap();
        assert_eq!(line.promotion_id, None);
    }

    #[test]
    fn test_price_line_validates_input() {
        let err = price_line(100, 10.0, 0, &[], lunch()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);

        let err = price_line(100, -1.0, 1, &[], lunch()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
    }

    #[test]
    fn test_final_unit_price_rounding() {
        let line = DiscountedOrderLine {
            article_id: 1,
            quantity: 3,
            unit_price: 10.0,
            promotion_id: Some(1),
            discount_amount: 1.0,
        };
        // 10 - 1/3 = 9.6666… → 9.67
        assert_eq!(final_unit_price(&line), 9.67);
    }

    #[test]
    fn test_has_promotion_requires_positive_discount() {
        let line = DiscountedOrderLine {
            article_id: 1,
            quantity: 1,
            unit_price: 10.0,
            promotion_id: Some(1),
            discount_amount: 0.0,
        };
        assert!(!has_promotion(&line));
    }
}
