//! Catalog snapshot: articles and the lookup collaborator

mod article;
mod lookup;

pub use article::{Article, CatalogItem};
pub use lookup::{
    CatalogLookup, CatalogStore, InMemoryCatalog, ResolvedRecipeLine, resolve_recipe,
};

#[cfg(test)]
pub(crate) use lookup::fixtures;
