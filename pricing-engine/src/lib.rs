//! Pricing Engine - restaurant catalog costing and promotion discounts
//!
//! # Overview
//!
//! - **Stock ledger** (`stock`): sufficiency checks, producible batches,
//!   purchases and production
//! - **Costing** (`costing`): recipe cost rollup and margin-based sale price
//! - **Promotions** (`promotion`): validity windows, discounts, order lines
//! - **Catalog** (`catalog`): article sum type and the lookup collaborator
//!
//! Calculators operate on a consistent in-memory snapshot and never perform
//! I/O. Persistence and locking belong to the caller.
//!
//! # Module layout
//!
//! ```text
//! pricing-engine/src/
//! ├── core/        # config, clock
//! ├── utils/       # logger, boundary validation
//! ├── catalog/     # articles, lookup collaborator
//! ├── stock/       # stock ledger
//! ├── costing/     # recipe cost, margin pricing
//! ├── promotion/   # validity, discounts, lifecycle
//! └── money.rs     # Decimal conversion helpers
//! ```

pub mod catalog;
pub mod core;
pub mod costing;
pub mod money;
pub mod promotion;
pub mod stock;
pub mod utils;

pub use catalog::{Article, CatalogItem, CatalogLookup, CatalogStore, InMemoryCatalog};
pub use crate::core::{Clock, Config, FixedClock, SystemClock};
pub use promotion::PromotionEvaluator;
pub use stock::BatchCapacity;

// Re-export unified error types from shared
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, build the configuration and initialize logging
///
/// Creates `LOG_DIR` when it is set but missing.
pub fn setup_environment() -> AppResult<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir).map_err(|e| {
            AppError::config(format!("Failed to create log directory {dir}: {e}"))
        })?;
    }

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::info!(
        timezone = %config.timezone,
        environment = %config.environment,
        "Pricing engine environment ready"
    );
    Ok(config)
}
