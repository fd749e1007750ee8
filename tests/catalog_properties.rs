use proptest::prelude::*;
use std::collections::HashSet;
use stockpile::commands::{add, find, list, remove, Removed};
use stockpile::model::{Catalog, ProductDraft, ProductId};
use stockpile::store::fs::FileStore;
use stockpile::store::memory::InMemoryStore;
use stockpile::store::{CatalogStore, Source};
use tempfile::TempDir;

#[derive(Debug, Clone)]
enum Op {
    Add(ProductDraft),
    Remove(u64),
}

fn draft() -> impl Strategy<Value = ProductDraft> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,11}",
        "[A-Za-z0-9 .-]{0,20}",
        0.0f64..10_000.0,
        any::<u32>(),
    )
        .prop_map(|(name, desc, price, quantity)| ProductDraft::new(name, desc, price, quantity))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => draft().prop_map(Op::Add),
        1 => (1u64..12).prop_map(Op::Remove),
    ]
}

fn apply(catalog: &mut Catalog, ops: &[Op]) {
    for op in ops {
        match op {
            Op::Add(d) => {
                add::run(catalog, d.clone()).unwrap();
            }
            Op::Remove(id) => {
                remove::run(catalog, ProductId(*id));
            }
        }
    }
}

proptest! {
    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut catalog = Catalog::new();
        apply(&mut catalog, &ops);
        let ids: HashSet<_> = catalog.ids().collect();
        prop_assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn add_uses_max_plus_one(ops in prop::collection::vec(op(), 0..30), new in draft()) {
        let mut catalog = Catalog::new();
        apply(&mut catalog, &ops);
        let expected = catalog.max_id().map_or(1, |m| m.get() + 1);
        let id = add::run(&mut catalog, new).unwrap();
        prop_assert_eq!(id, ProductId(expected));
        prop_assert_eq!(catalog.products().last().map(|p| p.id), Some(id));
    }

    #[test]
    fn remove_shrinks_by_one(
        ops in prop::collection::vec(op(), 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut catalog = Catalog::new();
        apply(&mut catalog, &ops);
        prop_assume!(!catalog.is_empty());

        let before = catalog.clone();
        let target = before.products()[pick.index(before.len())].id;
        let removed = remove::run(&mut catalog, target);
        prop_assert!(matches!(removed, Removed::Removed(ref p) if p.id == target));
        prop_assert_eq!(catalog.len(), before.len() - 1);

        let rest: Vec<_> = before.iter().filter(|p| p.id != target).cloned().collect();
        prop_assert_eq!(catalog.products(), rest.as_slice());
    }

    #[test]
    fn save_then_load_is_lossless(ops in prop::collection::vec(op(), 0..30)) {
        let mut catalog = Catalog::new();
        apply(&mut catalog, &ops);

        let mut store = InMemoryStore::new();
        store.save(&catalog).unwrap();
        let loaded = store.load().unwrap();
        prop_assert_eq!(loaded.source, Source::Existing);
        prop_assert_eq!(loaded.catalog, catalog);
    }

    #[test]
    fn find_is_idempotent(ops in prop::collection::vec(op(), 0..20), id in 1u64..15) {
        let mut catalog = Catalog::new();
        apply(&mut catalog, &ops);
        let first = find::run(&catalog, ProductId(id)).cloned();
        let second = find::run(&catalog, ProductId(id)).cloned();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn mouse_scenario() {
    let mut catalog = Catalog::new();
    let id = add::run(&mut catalog, ProductDraft::new("Mouse", "Wireless", 19.99, 10)).unwrap();
    assert_eq!(id, ProductId(1));

    let rows: Vec<_> = list::run(&catalog)
        .map(|r| (r.position, r.id.get(), r.name, r.description, r.price))
        .collect();
    assert_eq!(rows, vec![(1, 1, "Mouse", "Wireless", 19.99)]);
}

#[test]
fn file_round_trip_preserves_order() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("db_products.csv"));

    let mut catalog = Catalog::new();
    for (name, price) in [("Mouse", 19.99), ("Keyboard", 49.5), ("Cable", 0.1)] {
        add::run(&mut catalog, ProductDraft::new(name, "", price, 1)).unwrap();
    }
    remove::run(&mut catalog, ProductId(1));
    add::run(&mut catalog, ProductDraft::new("Hub", "4 ports", 12.0, 3)).unwrap();

    store.save(&catalog).unwrap();
    assert_eq!(store.load().unwrap().catalog, catalog);
}

#[test]
fn loading_a_missing_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let loaded = FileStore::new(dir.path().join("missing.csv")).load().unwrap();
    assert!(loaded.catalog.is_empty());
    assert_eq!(loaded.source, Source::Missing);
}
