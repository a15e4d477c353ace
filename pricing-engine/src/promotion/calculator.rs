//! Discount Calculator
//!
//! Discount amount and discounted price for one line under one promotion.
//! Uses rust_decimal for precise calculations, stores as f64.
//!
//! These are total functions: inputs are not validated here (see
//! `utils::validation::validate_line_input`) and nothing errors.

use chrono::NaiveDateTime;
use rust_decimal::prelude::*;
use shared::models::{DiscountType, Promotion};

use super::matcher::is_active;
use crate::money::{to_decimal, to_f64};

/// Discount for the whole line, never more than its subtotal
///
/// Intermediate overflow saturates: an unrepresentable discount is the
/// whole (saturated) subtotal.
fn line_discount(promotion: &Promotion, unit_price: Decimal, quantity: Decimal) -> Decimal {
    let subtotal = unit_price.saturating_mul(quantity);
    let value = to_decimal(promotion.discount_value);
    let per_unit = match promotion.discount_type {
        DiscountType::Percentage => unit_price
            .checked_mul(value)
            .map(|scaled| scaled / Decimal::ONE_HUNDRED),
        DiscountType::FixedAmount => Some(value),
    };
    per_unit
        .and_then(|per_unit| per_unit.checked_mul(quantity))
        .map_or(subtotal, |raw| raw.min(subtotal))
}

/// Total discount granted by `promotion` on a line
///
/// 0 when the promotion is not active at `now` or `quantity` is below the
/// promotion's minimum quantity.
pub fn compute_discount(
    promotion: &Promotion,
    unit_price: f64,
    quantity: i32,
    now: NaiveDateTime,
) -> f64 {
    if !is_active(promotion, now) || quantity < promotion.min_quantity {
        return 0.0;
    }
    to_f64(line_discount(
        promotion,
        to_decimal(unit_price),
        Decimal::from(quantity),
    ))
}

/// `max(0, unit_price × quantity − discount)`
pub fn compute_discounted_price(
    promotion: &Promotion,
    unit_price: f64,
    quantity: i32,
    now: NaiveDateTime,
) -> f64 {
    let subtotal = to_decimal(unit_price).saturating_mul(Decimal::from(quantity));
    let discount = to_decimal(compute_discount(promotion, unit_price, quantity, now));
    to_f64(subtotal.saturating_sub(discount).max(Decimal::ZERO))
}
