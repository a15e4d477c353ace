//! Catalog articles
//!
//! An article is either a raw ingredient or a manufactured item. Shared
//! fields live in `ArticleBase`; variant behavior goes through the
//! `CatalogItem` capability trait.

use enum_dispatch::enum_dispatch;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::AppResult;
use shared::models::{ArticleBase, Ingredient, ManufacturedItem};

use super::lookup::{CatalogLookup, resolve_recipe};
use crate::costing::recompute_cost;
use crate::money::to_decimal;
use crate::stock::{BatchCapacity, max_producible_batches};

/// Capabilities every catalog article exposes
#[enum_dispatch]
pub trait CatalogItem {
    fn base(&self) -> &ArticleBase;

    /// Cost of one unit: purchase price or recipe cost
    fn unit_cost(&self, catalog: &dyn CatalogLookup) -> AppResult<f64>;

    /// Units that can be sold from current stock
    fn available_units(&self, catalog: &dyn CatalogLookup) -> AppResult<BatchCapacity>;

    fn id(&self) -> i64 {
        self.base().id
    }

    fn sale_price(&self) -> Option<f64> {
        self.base().sale_price
    }

    fn is_deleted(&self) -> bool {
        self.base().is_deleted
    }
}

impl CatalogItem for Ingredient {
    fn base(&self) -> &ArticleBase {
        &self.base
    }

    fn unit_cost(&self, _catalog: &dyn CatalogLookup) -> AppResult<f64> {
        Ok(self.purchase_price)
    }

    fn available_units(&self, _catalog: &dyn CatalogLookup) -> AppResult<BatchCapacity> {
        let units = to_decimal(self.current_stock)
            .max(Decimal::ZERO)
            .floor()
            .to_u64()
            .unwrap_or(u64::MAX);
        Ok(BatchCapacity::Limited(units))
    }
}

impl CatalogItem for ManufacturedItem {
    fn base(&self) -> &ArticleBase {
        &self.base
    }

    fn unit_cost(&self, catalog: &dyn CatalogLookup) -> AppResult<f64> {
        let lines = resolve_recipe(self, catalog)?;
        Ok(recompute_cost(&lines))
    }

    fn available_units(&self, catalog: &dyn CatalogLookup) -> AppResult<BatchCapacity> {
        let lines = resolve_recipe(self, catalog)?;
        Ok(max_producible_batches(&lines))
    }
}

/// A catalog article (articulo)
#[enum_dispatch(CatalogItem)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Article {
    Ingredient(Ingredient),
    Manufactured(ManufacturedItem),
}
