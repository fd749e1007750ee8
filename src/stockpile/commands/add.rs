use crate::error::{Result, StockError};
use crate::model::{Catalog, Product, ProductDraft, ProductId};

/// Appends a new product and returns the id it was given.
///
/// The id is one more than the largest id in the catalog, or 1 for an empty
/// catalog. The product always goes to the end of the listing, whatever its
/// id. Range checks on price and quantity belong to the caller.
///
/// Fails without touching the catalog when the largest id is `u64::MAX`.
pub fn run(catalog: &mut Catalog, draft: ProductDraft) -> Result<ProductId> {
    let max = catalog.max_id().unwrap_or(ProductId(0));
    let id = max.next().ok_or(StockError::IdsExhausted(max))?;
    catalog.products.push(Product::new(id, draft));
    Ok(id)
}
