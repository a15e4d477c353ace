//! Promotion lifecycle
//!
//! Create, update, toggle and soft-delete. Promotions are never removed:
//! a deleted promotion stays in the snapshot but is hidden from listings and
//! never applies.

use chrono::NaiveDateTime;
use shared::models::{Promotion, PromotionCreate, PromotionUpdate};
use shared::{AppError, AppResult, ErrorCode};

use super::matcher::{applies_to_item, is_active};
use crate::utils::validation::{validate_promotion, validate_promotion_create};

/// Sorted, de-duplicated article set
fn normalize_articles(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn ensure_not_deleted(promotion: &Promotion) -> AppResult<()> {
    if promotion.is_deleted {
        return Err(
            AppError::new(ErrorCode::PromotionDeleted).with_detail("promotion_id", promotion.id)
        );
    }
    Ok(())
}

/// Look up a promotion by id, deleted ones included
pub fn find_promotion(promotions: &[Promotion], id: i64) -> AppResult<&Promotion> {
    promotions
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::promotion_not_found(id))
}

pub fn find_promotion_mut(promotions: &mut [Promotion], id: i64) -> AppResult<&mut Promotion> {
    promotions
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::promotion_not_found(id))
}

/// Build a validated promotion from a create payload
///
/// `min_quantity` defaults to 1 and `is_active` to true.
pub fn create_promotion(id: i64, payload: PromotionCreate) -> AppResult<Promotion> {
    validate_promotion_create(&payload)?;

    let promotion = Promotion {
        id,
        denomination: payload.denomination,
        description: payload.description,
        valid_from: payload.valid_from,
        valid_until: payload.valid_until,
        daily_start: payload.daily_start,
        daily_end: payload.daily_end,
        discount_type: payload.discount_type,
        discount_value: payload.discount_value,
        min_quantity: payload.min_quantity.unwrap_or(1),
        is_active: payload.is_active.unwrap_or(true),
        is_deleted: false,
        article_ids: normalize_articles(payload.article_ids),
    };

    tracing::info!(
        promotion_id = promotion.id,
        denomination = %promotion.denomination,
        "Promotion created"
    );
    Ok(promotion)
}

/// Merge an update into `promotion`
///
/// The merged result is validated as a whole; on error the promotion is
/// left untouched. An empty `description` clears it.
pub fn apply_update(promotion: &mut Promotion, update: PromotionUpdate) -> AppResult<()> {
    ensure_not_deleted(promotion)?;

    let mut merged = promotion.clone();
    if let Some(denomination) = update.denomination {
        merged.denomination = denomination;
    }
    if let Some(description) = update.description {
        merged.description = (!description.is_empty()).then_some(description);
    }
    if let Some(valid_from) = update.valid_from {
        merged.valid_from = valid_from;
    }
    if let Some(valid_until) = update.valid_until {
        merged.valid_until = valid_until;
    }
    if let Some(daily_start) = update.daily_start {
        merged.daily_start = daily_start;
    }
    if let Some(daily_end) = update.daily_end {
        merged.daily_end = daily_end;
    }
    if let Some(discount_type) = update.discount_type {
        merged.discount_type = discount_type;
    }
    if let Some(discount_value) = update.discount_value {
        merged.discount_value = discount_value;
    }
    if let Some(min_quantity) = update.min_quantity {
        merged.min_quantity = min_quantity;
    }
    if let Some(is_active) = update.is_active {
        merged.is_active = is_active;
    }
    if let Some(article_ids) = update.article_ids {
        merged.article_ids = normalize_articles(article_ids);
    }

    validate_promotion(&merged)?;
    *promotion = merged;

    tracing::info!(promotion_id = promotion.id, "Promotion updated");
    Ok(())
}

/// Flip the manual on/off flag, dates untouched. Returns the new state.
pub fn toggle_active(promotion: &mut Promotion) -> AppResult<bool> {
    ensure_not_deleted(promotion)?;
    promotion.is_active = !promotion.is_active;
    tracing::info!(
        promotion_id = promotion.id,
        is_active = promotion.is_active,
        "Promotion toggled"
    );
    Ok(promotion.is_active)
}

/// Mark as deleted. Idempotent.
pub fn soft_delete(promotion: &mut Promotion) {
    if !promotion.is_deleted {
        promotion.is_deleted = true;
        tracing::info!(promotion_id = promotion.id, "Promotion soft-deleted");
    }
}

/// Promotions shown in "all" listings (soft-deleted excluded)
pub fn visible(promotions: &[Promotion]) -> Vec<&Promotion> {
    promotions.iter().filter(|p| !p.is_deleted).collect()
}

/// Promotions that currently apply to `article_id`
pub fn applicable_to(
    promotions: &[Promotion],
    article_id: i64,
    now: NaiveDateTime,
) -> Vec<&Promotion> {
    promotions
        .iter()
        .filter(|p| applies_to_item(p, article_id) && is_active(p, now))
        .collect()
}
