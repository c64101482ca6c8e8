use anyhow::Context;
use domain::product::{Product, ProductCatalog};
use shared::types::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a JSON array of products.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<ProductCatalog> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read product catalog at {:?}", path))?;
    let products: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid product catalog at {:?}", path))?;
    info!(count = products.len(), "catalog loaded");
    Ok(ProductCatalog::new(products))
}
