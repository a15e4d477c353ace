//! Catalog Article Models

use serde::{Deserialize, Serialize};

/// Fields common to every catalog article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleBase {
    pub id: i64,
    pub denomination: String,
    /// Sale price, `None` until priced
    pub sale_price: Option<f64>,
    pub category_id: Option<i64>,
    /// Unit of measure label (e.g. "kg", "unidad")
    pub unit: String,
    /// Soft-delete marker, articles are never removed
    #[serde(default)]
    pub is_deleted: bool,
}

/// Raw stock item (insumo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(flatten)]
    pub base: ArticleBase,
    /// Purchase price per unit of measure
    pub purchase_price: f64,
    pub current_stock: f64,
    pub max_stock: f64,
    /// Whether the ingredient can be consumed by recipes
    pub is_for_recipes: bool,
}

/// One line of a recipe: how much of an ingredient goes into one unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient_id: i64,
    /// Quantity per produced unit, in the ingredient's unit of measure
    pub quantity: f64,
}

/// Prepared product composed of ingredients (manufacturado)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturedItem {
    #[serde(flatten)]
    pub base: ArticleBase,
    pub description: Option<String>,
    pub preparation_minutes: Option<i32>,
    /// Cached production cost, recomputed on demand
    pub production_cost: Option<f64>,
    /// Margin multiplier (1.3 = 30% markup)
    pub margin: f64,
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
}

/// Stock purchase registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientPurchase {
    pub quantity: f64,
    /// New purchase unit price, `None` keeps the current one
    pub unit_price: Option<f64>,
}
