use crate::model::{Catalog, Product, ProductId};

/// Linear scan for the product with `id`. `None` means not found.
pub fn run(catalog: &Catalog, id: ProductId) -> Option<&Product> {
    catalog.iter().find(|p| p.id == id)
}
