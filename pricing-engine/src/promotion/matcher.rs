//! Promotion Validity Evaluator
//!
//! Logic for matching promotions to articles and checking time validity.
//! `now` is always passed in; see `PromotionEvaluator` for clock-driven use.

use chrono::NaiveDateTime;
use shared::models::{Promotion, PromotionStatus};

/// Check both the date range and the daily time window
///
/// Dates: `valid_from.date() <= now.date() <= valid_until.date()`, so the
/// whole last day counts whatever time `valid_until` carries.
/// Time of day: `daily_start <= now.time() <= daily_end`, evaluated
/// independently of the date. A window with `daily_end < daily_start` does
/// not wrap past midnight and therefore never matches.
pub fn is_in_valid_period(promotion: &Promotion, now: NaiveDateTime) -> bool {
    let today = now.date();
    let in_dates = today >= promotion.valid_from.date() && today <= promotion.valid_until.date();
    let time = now.time();
    let in_daily_window = time >= promotion.daily_start && time <= promotion.daily_end;
    in_dates && in_daily_window
}

/// Whether the promotion may reduce a line price right now
pub fn is_active(promotion: &Promotion, now: NaiveDateTime) -> bool {
    promotion.is_active && !promotion.is_deleted && is_in_valid_period(promotion, now)
}

/// Status label derived from the manual flag and the date range
///
/// The daily time window is not consulted here: a promotion can read
/// `Active` outside its daily hours while `is_active` returns false.
pub fn computed_status(promotion: &Promotion, now: NaiveDateTime) -> PromotionStatus {
    if !promotion.is_active {
        PromotionStatus::Inactive
    } else if now < promotion.valid_from {
        PromotionStatus::Scheduled
    } else if now > promotion.valid_until {
        PromotionStatus::Expired
    } else {
        PromotionStatus::Active
    }
}

/// Check if the promotion lists `article_id` among its eligible articles
pub fn applies_to_item(promotion: &Promotion, article_id: i64) -> bool {
    promotion.article_ids.contains(&article_id)
}
