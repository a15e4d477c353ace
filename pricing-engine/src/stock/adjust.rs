//! Stock adjustments
//!
//! The write path for ingredient stock: purchases, consumption and batch
//! production. Every operation validates first and only then mutates, so a
//! refused operation leaves the snapshot untouched.

use std::collections::BTreeMap;

use rust_decimal::prelude::*;
use shared::models::{Ingredient, IngredientPurchase, ManufacturedItem};
use shared::{AppError, AppResult, ErrorCode};

use crate::catalog::{CatalogLookup, CatalogStore};
use crate::money::{to_decimal, to_f64, to_quantity};
use crate::utils::validation::{validate_price, validate_stock_quantity};

/// Register a stock purchase: add quantity, refresh the purchase price
pub fn register_purchase(
    ingredient: &mut Ingredient,
    purchase: &IngredientPurchase,
) -> AppResult<()> {
    validate_stock_quantity(purchase.quantity, "quantity")?;
    if purchase.quantity == 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "purchase quantity must be positive",
        ));
    }
    if let Some(price) = purchase.unit_price {
        validate_price(price, "unit_price")?;
    }

    let new_stock =
        to_decimal(ingredient.current_stock).saturating_add(to_decimal(purchase.quantity));
    if new_stock > to_decimal(ingredient.max_stock) {
        tracing::warn!(
            ingredient_id = ingredient.base.id,
            current_stock = ingredient.current_stock,
            quantity = purchase.quantity,
            max_stock = ingredient.max_stock,
            "Purchase refused: stock limit exceeded"
        );
        return Err(AppError::new(ErrorCode::StockLimitExceeded)
            .with_detail("ingredient_id", ingredient.base.id)
            .with_detail("max_stock", ingredient.max_stock)
            .with_detail("headroom", stock_headroom(ingredient)));
    }

    ingredient.current_stock = to_quantity(new_stock);
    if let Some(price) = purchase.unit_price {
        ingredient.purchase_price = to_f64(to_decimal(price));
    }

    tracing::info!(
        ingredient_id = ingredient.base.id,
        quantity = purchase.quantity,
        current_stock = ingredient.current_stock,
        purchase_price = ingredient.purchase_price,
        "Stock purchase registered"
    );
    Ok(())
}

/// Consume `quantity` from an ingredient's stock
pub fn consume(ingredient: &mut Ingredient, quantity: f64) -> AppResult<()> {
    validate_stock_quantity(quantity, "quantity")?;
    let available = to_decimal(ingredient.current_stock);
    let required = to_decimal(quantity);
    if available < required {
        tracing::warn!(
            ingredient_id = ingredient.base.id,
            required = quantity,
            available = ingredient.current_stock,
            "Consumption refused: insufficient stock"
        );
        return Err(AppError::insufficient_stock(&ingredient.base.denomination)
            .with_detail("ingredient_id", ingredient.base.id)
            .with_detail("required", quantity)
            .with_detail("available", ingredient.current_stock));
    }

    ingredient.current_stock = to_quantity(available - required);
    Ok(())
}

/// Produce `batch_size` units of `item`, deducting every recipe line
///
/// All-or-nothing: requirements are aggregated per ingredient and checked
/// against the store before any stock is touched.
pub fn produce_batch(
    item: &ManufacturedItem,
    batch_size: u32,
    store: &mut impl CatalogStore,
) -> AppResult<()> {
    let batch = Decimal::from(batch_size);
    let mut required: BTreeMap<i64, Decimal> = BTreeMap::new();
    for line in &item.recipe {
        let amount = required.entry(line.ingredient_id).or_default();
        *amount = amount.saturating_add(to_decimal(line.quantity).saturating_mul(batch));
    }

    for (&ingredient_id, &amount) in &required {
        let ingredient = store.require_ingredient(ingredient_id)?;
        if !ingredient.is_for_recipes {
            return Err(AppError::with_message(
                ErrorCode::IngredientNotForRecipes,
                format!(
                    "{} cannot be used in recipes",
                    ingredient.base.denomination
                ),
            )
            .with_detail("ingredient_id", ingredient_id));
        }
        if to_decimal(ingredient.current_stock) < amount {
            tracing::warn!(
                article_id = item.base.id,
                ingredient_id,
                batch_size,
                "Production refused: insufficient stock"
            );
            return Err(AppError::insufficient_stock(&ingredient.base.denomination)
                .with_detail("article_id", item.base.id)
                .with_detail("ingredient_id", ingredient_id)
                .with_detail("required", to_quantity(amount))
                .with_detail("available", ingredient.current_stock));
        }
    }

    for (ingredient_id, amount) in required {
        if let Some(ingredient) = store.ingredient_mut(ingredient_id) {
            ingredient.current_stock =
                to_quantity(to_decimal(ingredient.current_stock).saturating_sub(amount));
        }
    }

    tracing::info!(
        article_id = item.base.id,
        batch_size,
        "Production batch registered"
    );
    Ok(())
}

/// Remaining room before `max_stock` (never negative)
pub fn stock_headroom(ingredient: &Ingredient) -> f64 {
    let headroom =
        to_decimal(ingredient.max_stock).saturating_sub(to_decimal(ingredient.current_stock));
    to_quantity(headroom.max(Decimal::ZERO))
}

pub fn is_at_capacity(ingredient: &Ingredient) -> bool {
    to_decimal(ingredient.current_stock) >= to_decimal(ingredient.max_stock)
}
