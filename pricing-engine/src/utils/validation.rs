//! Input validation helpers
//!
//! Boundary checks run before entities reach the calculators. The
//! calculators themselves never validate and never fail.

use shared::models::{DiscountType, Ingredient, ManufacturedItem, Promotion, PromotionCreate};
use shared::{AppError, ErrorCode};

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names: articles, promotions
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Maximum allowed unit price (1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i32 = 9999;

// ── Text ────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        ));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Validate a monetary amount: finite, non-negative, below `MAX_PRICE`
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    require_finite(value, field)?;
    if !(0.0..=MAX_PRICE).contains(&value) {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            format!("{field} must be between 0 and {MAX_PRICE}, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a stock quantity: finite and non-negative
pub fn validate_stock_quantity(value: f64, field: &str) -> Result<(), AppError> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

// ── Catalog ─────────────────────────────────────────────────────────

/// Validate an ingredient snapshot (`current_stock <= max_stock`)
pub fn validate_ingredient(ingredient: &Ingredient) -> Result<(), AppError> {
    validate_required_text(&ingredient.base.denomination, "denomination", MAX_NAME_LEN)?;
    validate_price(ingredient.purchase_price, "purchase_price")?;
    validate_stock_quantity(ingredient.current_stock, "current_stock")?;
    validate_stock_quantity(ingredient.max_stock, "max_stock")?;
    if ingredient.current_stock > ingredient.max_stock {
        return Err(AppError::with_message(
            ErrorCode::StockLimitExceeded,
            format!(
                "current_stock ({}) exceeds max_stock ({})",
                ingredient.current_stock, ingredient.max_stock
            ),
        )
        .with_detail("ingredient_id", ingredient.base.id));
    }
    Ok(())
}

/// Validate a manufactured item: positive margin, positive recipe quantities
pub fn validate_manufactured_item(item: &ManufacturedItem) -> Result<(), AppError> {
    validate_required_text(&item.base.denomination, "denomination", MAX_NAME_LEN)?;
    validate_optional_text(&item.description, "description", MAX_NOTE_LEN)?;
    require_finite(item.margin, "margin")?;
    if item.margin <= 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidMargin,
            format!("margin must be positive, got {}", item.margin),
        ));
    }
    for line in &item.recipe {
        require_finite(line.quantity, "recipe quantity")?;
        if line.quantity <= 0.0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("recipe quantity must be positive, got {}", line.quantity),
            )
            .with_detail("ingredient_id", line.ingredient_id));
        }
    }
    Ok(())
}

// ── Promotions ──────────────────────────────────────────────────────

/// Discount values are non-negative and bounded by `MAX_PRICE` for both
/// types. Percentages above 100 are accepted; the calculator clamps the
/// discount to the line subtotal.
fn validate_discount(
    discount_type: DiscountType,
    value: f64,
    min_quantity: i32,
) -> Result<(), AppError> {
    require_finite(value, "discount_value")?;
    if !(0.0..=MAX_PRICE).contains(&value) {
        return Err(AppError::with_message(
            ErrorCode::InvalidDiscountValue,
            format!("discount_value out of range for {:?}: {}", discount_type, value),
        ));
    }
    if min_quantity < 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("min_quantity must be non-negative, got {min_quantity}"),
        ));
    }
    Ok(())
}

/// Validate a create payload
pub fn validate_promotion_create(payload: &PromotionCreate) -> Result<(), AppError> {
    validate_required_text(&payload.denomination, "denomination", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if payload.valid_from > payload.valid_until {
        return Err(AppError::new(ErrorCode::InvalidPromotionWindow)
            .with_detail("valid_from", payload.valid_from.to_string())
            .with_detail("valid_until", payload.valid_until.to_string()));
    }
    validate_discount(
        payload.discount_type,
        payload.discount_value,
        payload.min_quantity.unwrap_or(1),
    )
}

/// Validate a full promotion (e.g. after merging an update)
pub fn validate_promotion(promotion: &Promotion) -> Result<(), AppError> {
    validate_required_text(&promotion.denomination, "denomination", MAX_NAME_LEN)?;
    validate_optional_text(&promotion.description, "description", MAX_NOTE_LEN)?;
    if promotion.valid_from > promotion.valid_until {
        return Err(AppError::new(ErrorCode::InvalidPromotionWindow)
            .with_detail("promotion_id", promotion.id));
    }
    validate_discount(
        promotion.discount_type,
        promotion.discount_value,
        promotion.min_quantity,
    )
}

// ── Order lines ─────────────────────────────────────────────────────

/// Validate the inputs of an order line before pricing it
pub fn validate_line_input(unit_price: f64, quantity: i32) -> Result<(), AppError> {
    validate_price(unit_price, "unit_price")?;
    if quantity <= 0 || quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("quantity must be between 1 and {MAX_QUANTITY}, got {quantity}"),
        ));
    }
    Ok(())
}
