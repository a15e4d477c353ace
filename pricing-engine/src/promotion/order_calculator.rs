//! Order-level totals over priced lines

use rust_decimal::prelude::*;
use shared::models::{DiscountedOrderLine, OrderTotals};

use crate::money::{to_decimal, to_f64};

/// Sum subtotals and discounts of all lines
///
/// Accumulates in Decimal and rounds once at the end.
pub fn summarize(lines: &[DiscountedOrderLine]) -> OrderTotals {
    let (subtotal, discount) = lines.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(subtotal, discount), line| {
            (
                subtotal.saturating_add(
                    to_decimal(line.unit_price).saturating_mul(Decimal::from(line.quantity)),
                ),
                discount.saturating_add(to_decimal(line.discount_amount)),
            )
        },
    );

    OrderTotals {
        subtotal: to_f64(subtotal),
        discount_total: to_f64(discount),
        total: to_f64(subtotal.saturating_sub(discount).max(Decimal::ZERO)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(unit_price: f64, quantity: i32, discount: f64) -> DiscountedOrderLine {
        DiscountedOrderLine {
            article_id: 1,
            quantity,
            unit_price,
            promotion_id: (discount > 0.0).then_some(1),
            discount_amount: discount,
        }
    }

    #[test]
    fn test_empty_order() {
        assert_eq!(summarize(&[]), OrderTotals::default());
    }

    #[test]
    fn test_summarize() {
        let lines = [line(100.0, 3, 60.0), line(50.0, 2, 30.0), line(12.35, 1, 0.0)];
        let totals = summarize(&lines);
        assert_eq!(totals.subtotal, 412.35);
        assert_eq!(totals.discount_total, 90.0);
        assert_eq!(totals.total, 322.35);
    }

    #[test]
    fn test_summarize_saturates() {
        let lines = [line(1e20, i32::MAX, 0.0), line(1e20, i32::MAX, 0.0)];
        let totals = summarize(&lines);
        assert!(totals.subtotal > 7.9e28);
        assert_eq!(totals.discount_total, 0.0);
    }

    #[test]
    fn test_summarize_precision() {
        // 0.1 × 3 over many lines would drift in f64
        let lines: Vec<_> = (0..100).map(|_| line(0.1, 3, 0.0)).collect();
        assert_eq!(summarize(&lines).subtotal, 30.0);
    }
}
