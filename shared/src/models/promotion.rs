//! Promotion Model

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// `discount_value` is a percentage of the unit price (20 = 20%)
    Percentage,
    /// `discount_value` is a fixed amount per unit
    FixedAmount,
}

/// Computed promotion status label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionStatus {
    Inactive,
    Scheduled,
    Expired,
    Active,
}

/// Promotion entity (discount campaign)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub denomination: String,
    pub description: Option<String>,
    pub valid_from: NaiveDateTime,
    pub valid_until: NaiveDateTime,
    /// Daily window start, applied every day within the date range
    pub daily_start: NaiveTime,
    /// Daily window end (inclusive, never wraps past midnight)
    pub daily_end: NaiveTime,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    /// Minimum line quantity for the discount to apply
    pub min_quantity: i32,
    /// Manual on/off switch
    pub is_active: bool,
    /// Soft-delete marker
    #[serde(default)]
    pub is_deleted: bool,
    /// Eligible catalog article IDs
    #[serde(default)]
    pub article_ids: Vec<i64>,
}

/// Create promotion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionCreate {
    pub denomination: String,
    pub description: Option<String>,
    pub valid_from: NaiveDateTime,
    pub valid_until: NaiveDateTime,
    pub daily_start: NaiveTime,
    pub daily_end: NaiveTime,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_quantity: Option<i32>,
    pub is_active: Option<bool>,
    pub article_ids: Vec<i64>,
}

/// Update promotion payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionUpdate {
    pub denomination: Option<String>,
    pub description: Option<String>,
    pub valid_from: Option<NaiveDateTime>,
    pub valid_until: Option<NaiveDateTime>,
    pub daily_start: Option<NaiveTime>,
    pub daily_end: Option<NaiveTime>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<f64>,
    pub min_quantity: Option<i32>,
    pub is_active: Option<bool>,
    pub article_ids: Option<Vec<i64>>,
}
