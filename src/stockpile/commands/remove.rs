use super::{position_of, Removed};
use crate::model::{Catalog, ProductId};

/// Deletes product `id`; everything else keeps its id and relative order.
pub fn run(catalog: &mut Catalog, id: ProductId) -> Removed {
    match position_of(catalog, id) {
        Some(pos) => Removed::Removed(catalog.products.remove(pos)),
        None => Removed::NotFound(id),
    }
}
