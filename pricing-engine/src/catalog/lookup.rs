//! Catalog lookup collaborator
//!
//! Recipes reference ingredients by ID. Callers resolve those references
//! against a consistent snapshot before invoking any calculator.

use std::collections::HashMap;

use shared::models::{Ingredient, ManufacturedItem};
use shared::{AppError, AppResult};

/// Read-only access to a catalog snapshot
pub trait CatalogLookup {
    fn ingredient(&self, id: i64) -> Option<&Ingredient>;
    fn manufactured(&self, id: i64) -> Option<&ManufacturedItem>;

    fn require_ingredient(&self, id: i64) -> AppResult<&Ingredient> {
        self.ingredient(id)
            .ok_or_else(|| AppError::ingredient_not_found(id))
    }

    fn require_manufactured(&self, id: i64) -> AppResult<&ManufacturedItem> {
        self.manufactured(id)
            .ok_or_else(|| AppError::article_not_found(id))
    }
}

/// Catalog snapshot that also allows stock mutation
pub trait CatalogStore: CatalogLookup {
    fn ingredient_mut(&mut self, id: i64) -> Option<&mut Ingredient>;
}

/// A recipe line with its ingredient resolved to current values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRecipeLine {
    pub ingredient_id: i64,
    pub purchase_price: f64,
    pub current_stock: f64,
    /// Quantity per produced unit
    pub quantity: f64,
}

/// Resolve every recipe line of `item` against `catalog`
///
/// Fails on the first ingredient that cannot be found.
pub fn resolve_recipe<C: CatalogLookup + ?Sized>(
    item: &ManufacturedItem,
    catalog: &C,
) -> AppResult<Vec<ResolvedRecipeLine>> {
    item.recipe
        .iter()
        .map(|line| -> AppResult<ResolvedRecipeLine> {
            let ingredient = catalog
                .require_ingredient(line.ingredient_id)
                .map_err(|e| e.with_detail("article_id", item.base.id))?;
            Ok(ResolvedRecipeLine {
                ingredient_id: line.ingredient_id,
                purchase_price: ingredient.purchase_price,
                current_stock: ingredient.current_stock,
                quantity: line.quantity,
            })
        })
        .collect()
}

/// In-memory catalog snapshot keyed by article ID
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    ingredients: HashMap<i64, Ingredient>,
    manufactured: HashMap<i64, ManufacturedItem>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.base.id, ingredient);
    }

    pub fn insert_manufactured(&mut self, item: ManufacturedItem) {
        self.manufactured.insert(item.base.id, item);
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.insert_ingredient(ingredient);
        self
    }

    pub fn with_manufactured(mut self, item: ManufacturedItem) -> Self {
        self.insert_manufactured(item);
        self
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn ingredient(&self, id: i64) -> Option<&Ingredient> {
        self.ingredients.get(&id)
    }

    fn manufactured(&self, id: i64) -> Option<&ManufacturedItem> {
        self.manufactured.get(&id)
    }
}

impl CatalogStore for InMemoryCatalog {
    fn ingredient_mut(&mut self, id: i64) -> Option<&mut Ingredient> {
        self.ingredients.get_mut(&id)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_resolve_recipe() {
        let catalog = InMemoryCatalog::new()
            .with_ingredient(ingredient(1, 2.5, 10.0))
            .with_ingredient(ingredient(2, 1.0, 4.0));
        let item = manufactured(10, 1.3, &[(1, 3.0), (2, 2.0)]);

        let lines = resolve_recipe(&item, &catalog).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].purchase_price, 2.5);
        assert_eq!(lines[0].quantity, 3.0);
        assert_eq!(lines[1].current_stock, 4.0);
    }

    #[test]
    fn test_resolve_missing_ingredient() {
        let catalog = InMemoryCatalog::new().with_ingredient(ingredient(1, 2.5, 10.0));
        let item = manufactured(10, 1.3, &[(1, 3.0), (99, 1.0)]);

        let err = resolve_recipe(&item, &catalog).unwrap_err();
        assert_eq!(err.code, ErrorCode::IngredientNotFound);
        let details = err.details.unwrap();
        assert_eq!(details.get("ingredient_id").unwrap(), 99);
        assert_eq!(details.get("article_id").unwrap(), 10);
    }

    #[test]
    fn test_resolve_empty_recipe() {
        let catalog = InMemoryCatalog::new();
        let item = manufactured(10, 1.3, &[]);
        assert!(resolve_recipe(&item, &catalog).unwrap().is_empty());
    }

    #[test]
    fn test_require_lookups() {
        let catalog = InMemoryCatalog::new()
            .with_ingredient(ingredient(1, 2.5, 10.0))
            .with_manufactured(manufactured(10, 1.3, &[(1, 1.0)]));

        assert_eq!(catalog.require_ingredient(1).unwrap().purchase_price, 2.5);
        assert_eq!(catalog.require_manufactured(10).unwrap().margin, 1.3);
        assert_eq!(
            catalog.require_ingredient(10).unwrap_err().code,
            ErrorCode::IngredientNotFound
        );
        assert_eq!(
            catalog.require_manufactured(1).unwrap_err().code,
            ErrorCode::ArticleNotFound
        );
    }

    #[test]
    fn test_store_mutation() {
        let mut catalog = InMemoryCatalog::new().with_ingredient(ingredient(1, 2.5, 10.0));
        catalog.ingredient_mut(1).unwrap().current_stock = 7.0;
        assert_eq!(catalog.ingredient(1).unwrap().current_stock, 7.0);
        assert!(catalog.ingredient_mut(2).is_none());
    }
}
