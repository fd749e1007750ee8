use super::{format, CatalogStore, Loaded};
use crate::error::Result;
use crate::model::Catalog;

/// In-memory storage for testing and development.
///
/// Holds the rendered file text rather than the catalog itself, so loads and
/// saves go through the same parser and renderer as [`super::fs::FileStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    text: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose persisted text is `text`, as if read from a file.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            saves: 0,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of successful saves since creation.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Loaded> {
        match &self.text {
            Some(text) => Ok(Loaded::existing(format::parse(text)?)),
            None => Ok(Loaded::missing()),
        }
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.text = Some(format::render(catalog));
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const SAMPLE: &str = "id,name,desc,price,quantity
1,Mouse,Wireless,19.99,10
2,Keyboard,Membrane,29.0,5
5,Monitor,27 inch,199.5,2
";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Three products with ids 1, 2 and 5.
        pub fn sample() -> Self {
            Self {
                store: InMemoryStore::with_text(SAMPLE),
            }
        }

        pub fn catalog(&self) -> Catalog {
            self.store.load().unwrap().catalog
        }
    }
}
