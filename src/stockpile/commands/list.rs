use crate::index::Rows;
use crate::model::Catalog;

/// Numbered listing of the catalog, in catalog order.
pub fn run(catalog: &Catalog) -> Rows<'_> {
    Rows::new(catalog.products())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, remove};
    use crate::index::DisplayRow;
    use crate::model::{ProductDraft, ProductId};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_catalog_lists_nothing() {
        assert_eq!(run(&Catalog::new()).count(), 0);
    }

    #[test]
    fn single_product_row() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, ProductDraft::new("Mouse", "Wireless", 19.99, 10)).unwrap();

        let rows: Vec<_> = run(&catalog).collect();
        assert_eq!(
            rows,
            vec![DisplayRow {
                position: 1,
                id: ProductId(1),
                name: "Mouse",
                description: "Wireless",
                price: 19.99,
            }]
        );
    }

    #[test]
    fn positions_are_one_based_and_independent_of_ids() {
        let catalog = StoreFixture::sample().catalog();
        let rows: Vec<_> = run(&catalog).map(|r| (r.position, r.id)).collect();
        assert_eq!(
            rows,
            vec![(1, ProductId(1)), (2, ProductId(2)), (3, ProductId(5))]
        );
    }

    #[test]
    fn positions_shift_after_removal() {
        let mut catalog = StoreFixture::sample().catalog();
        remove::run(&mut catalog, ProductId(1));
        let first = run(&catalog).next().unwrap();
        assert_eq!(first.position, 1);
        assert_eq!(first.id, ProductId(2));
    }

    #[test]
    fn listing_can_be_walked_again() {
        let catalog = StoreFixture::sample().catalog();
        let rows = run(&catalog);
        assert_eq!(rows.len(), 3);
        let again = rows.clone();
        assert_eq!(rows.count(), 3);
        assert_eq!(again.count(), 3);
        assert_eq!(run(&catalog).count(), 3);
    }
}
