//! Clock-driven promotion evaluation
//!
//! Thin wrapper binding the pure matcher/calculator functions to a `Clock`.

use chrono::NaiveDateTime;
use shared::AppResult;
use shared::models::{DiscountedOrderLine, Promotion, PromotionStatus};

use super::{calculator, item_calculator, lifecycle, matcher};
use crate::core::Clock;

/// Evaluates promotions against the injected clock's current instant
#[derive(Debug, Clone)]
pub struct PromotionEvaluator<C: Clock> {
    clock: C,
}

impl<C: Clock> PromotionEvaluator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn is_active(&self, promotion: &Promotion) -> bool {
        matcher::is_active(promotion, self.now())
    }

    pub fn status(&self, promotion: &Promotion) -> PromotionStatus {
        matcher::computed_status(promotion, self.now())
    }

    pub fn discount(&self, promotion: &Promotion, unit_price: f64, quantity: i32) -> f64 {
        calculator::compute_discount(promotion, unit_price, quantity, self.now())
    }

    pub fn discounted_price(&self, promotion: &Promotion, unit_price: f64, quantity: i32) -> f64 {
        calculator::compute_discounted_price(promotion, unit_price, quantity, self.now())
    }

    pub fn applicable_to<'a>(
        &self,
        promotions: &'a [Promotion],
        article_id: i64,
    ) -> Vec<&'a Promotion> {
        lifecycle::applicable_to(promotions, article_id, self.now())
    }

    /// Price a line once, reading the clock a single time
    pub fn price_line(
        &self,
        article_id: i64,
        unit_price: f64,
        quantity: i32,
        promotions: &[Promotion],
    ) -> AppResult<DiscountedOrderLine> {
        item_calculator::price_line(article_id, unit_price, quantity, promotions, self.now())
    }
}
