use super::{position_of, Edited};
use crate::model::{Catalog, ProductDraft, ProductId};

/// Overwrites name, description, price and quantity of product `id`.
pub fn run(catalog: &mut Catalog, id: ProductId, draft: ProductDraft) -> Edited {
    match position_of(catalog, id) {
        Some(pos) => {
            catalog.products[pos].apply(draft);
            Edited::Updated(id)
        }
        None => Edited::NotFound(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::find;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_all_mutable_fields() {
        let mut catalog = StoreFixture::sample().catalog();
        let outcome = run(
            &mut catalog,
            ProductId(2),
            ProductDraft::new("Keyboard", "Mechanical", 49.50, 3),
        );
        assert_eq!(outcome, Edited::Updated(ProductId(2)));

        let product = find::run(&catalog, ProductId(2)).unwrap();
        assert_eq!(product.id, ProductId(2));
        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.description, "Mechanical");
        assert_eq!(product.price, 49.5);
        assert_eq!(product.quantity, 3);
    }

    #[test]
    fn keeps_position() {
        let mut catalog = StoreFixture::sample().catalog();
        run(&mut catalog, ProductId(1), ProductDraft::new("Trackball", "", 5.0, 1));
        assert_eq!(catalog.products()[0].name, "Trackball");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn unknown_id_leaves_catalog_alone() {
        let mut catalog = StoreFixture::sample().catalog();
        let before = catalog.clone();
        let outcome = run(&mut catalog, ProductId(42), ProductDraft::new("X", "x", 1.0, 1));
        assert_eq!(outcome, Edited::NotFound(ProductId(42)));
        assert_eq!(catalog, before);
    }
}
