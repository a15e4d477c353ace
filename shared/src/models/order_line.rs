//! Discounted Order Line Model

use serde::{Deserialize, Serialize};

/// Priced order line with an optional applied promotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountedOrderLine {
    pub article_id: i64,
    pub quantity: i32,
    /// Original unit price before any discount
    pub unit_price: f64,
    pub promotion_id: Option<i64>,
    /// Total discount for the whole line (not per unit)
    pub discount_amount: f64,
}

/// Aggregated totals over a set of order lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Σ unit_price × quantity
    pub subtotal: f64,
    /// Σ discount_amount
    pub discount_total: f64,
    /// subtotal − discount_total
    pub total: f64,
}
