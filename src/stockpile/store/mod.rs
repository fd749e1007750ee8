//! # Storage Layer
//!
//! The [`CatalogStore`] trait is the only place the catalog crosses the
//! process boundary. Business logic in `commands/` never touches it; the API
//! facade calls [`CatalogStore::load`] once at start and
//! [`CatalogStore::save`] when asked to persist.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, one comma-separated file.
//! - [`memory::InMemoryStore`]: keeps the rendered text in memory, so tests
//!   exercise the same [`format`] code as the file store without touching
//!   the filesystem.
//!
//! ## Missing sources
//!
//! A store with nothing persisted yet is not an error: `load` returns an
//! empty catalog with [`Source::Missing`], which the caller treats as a fresh
//! install.

use crate::error::Result;
use crate::model::Catalog;

pub mod format;
pub mod fs;
pub mod memory;

/// Whether a load found persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Existing,
    Missing,
}

/// The outcome of [`CatalogStore::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub catalog: Catalog,
    pub source: Source,
}

impl Loaded {
    pub fn existing(catalog: Catalog) -> Self {
        Self {
            catalog,
            source: Source::Existing,
        }
    }

    pub fn missing() -> Self {
        Self {
            catalog: Catalog::new(),
            source: Source::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.source == Source::Missing
    }
}

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Read the whole catalog. Malformed data fails the load.
    fn load(&self) -> Result<Loaded>;

    /// Replace the persisted catalog with `catalog`.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
