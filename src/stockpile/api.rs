//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! owner of the session's [`Catalog`]. Every UI (the interactive menu, the
//! one-shot subcommands, tests) goes through it.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the catalog and the store it came from
//! - **Dispatches** to `commands::*::run`
//! - **Reports** outcomes as [`CmdResult`] messages, including not-found ids
//!
//! It does no printing and holds no business rules of its own: id
//! assignment, editing and removal all live in `commands/`.
//!
//! ## Generic Over CatalogStore
//!
//! `InventoryApi<S: CatalogStore>`:
//! - Production: `InventoryApi<FileStore>`
//! - Testing: `InventoryApi<InMemoryStore>`

use crate::commands::{self, Edited, Removed};
use crate::error::Result;
use crate::index::Rows;
use crate::model::{Catalog, ProductDraft, ProductId};
use crate::store::{CatalogStore, Source};

pub struct InventoryApi<S: CatalogStore> {
    store: S,
    catalog: Catalog,
    dirty: bool,
}

impl<S: CatalogStore> InventoryApi<S> {
    /// A facade with an empty catalog. Call [`Self::load`] to read the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog: Catalog::new(),
            dirty: false,
        }
    }

    /// Replaces the in-memory catalog with the store's contents.
    ///
    /// A missing source starts an empty catalog with a warning. Malformed
    /// data is an error and leaves the current catalog untouched.
    pub fn load(&mut self) -> Result<CmdResult> {
        let loaded = self.store.load()?;
        self.catalog = loaded.catalog;
        self.dirty = false;

        let mut result = CmdResult::default();
        match loaded.source {
            Source::Missing => result.add_message(CmdMessage::warning(format!(
                "Database {} does not exist, starting with an empty catalog",
                self.store.location()
            ))),
            Source::Existing => tracing::info!(
                products = self.catalog.len(),
                location = %self.store.location(),
                "catalog opened"
            ),
        }
        Ok(result)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True when the catalog changed since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn rows(&self) -> Rows<'_> {
        commands::list::run(&self.catalog)
    }

    pub fn view(&self, id: ProductId) -> CmdResult {
        match commands::find::run(&self.catalog, id) {
            Some(product) => CmdResult::default().with_affected_products(vec![product.clone()]),
            None => not_found(id),
        }
    }

    pub fn add(&mut self, draft: ProductDraft) -> CmdResult {
        let name = draft.name.clone();
        let id = match commands::add::run(&mut self.catalog, draft) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "product not added");
                return CmdResult::default().with_message(CmdMessage::error(e.to_string()));
            }
        };
        self.dirty = true;
        tracing::debug!(%id, "product added");

        let added = commands::find::run(&self.catalog, id).cloned();
        CmdResult::default()
            .with_affected_products(added.into_iter().collect())
            .with_message(CmdMessage::success(format!(
                "Added product {}: {}",
                id, name
            )))
    }

    pub fn edit(&mut self, id: ProductId, draft: ProductDraft) -> CmdResult {
        match commands::edit::run(&mut self.catalog, id, draft) {
            Edited::Updated(id) => {
                self.dirty = true;
                tracing::debug!(%id, "product updated");
                let updated = commands::find::run(&self.catalog, id).cloned();
                CmdResult::default()
                    .with_affected_products(updated.into_iter().collect())
                    .with_message(CmdMessage::success(format!("Updated product {}", id)))
            }
            Edited::NotFound(id) => not_found(id),
        }
    }

    pub fn remove(&mut self, id: ProductId) -> CmdResult {
        match commands::remove::run(&mut self.catalog, id) {
            Removed::Removed(product) => {
                self.dirty = true;
                tracing::debug!(%id, "product removed");
                let message =
                    CmdMessage::success(format!("Removed product {}: {}", id, product.name));
                CmdResult::default()
                    .with_affected_products(vec![product])
                    .with_message(message)
            }
            Removed::NotFound(id) => not_found(id),
        }
    }

    /// Writes the whole catalog through the store.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.store.save(&self.catalog)?;
        self.dirty = false;
        tracing::info!(
            products = self.catalog.len(),
            location = %self.store.location(),
            "catalog saved"
        );
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Saved {} products to {}",
            self.catalog.len(),
            self.store.location()
        ))))
    }
}

fn not_found(id: ProductId) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::error(format!("Product {} not found", id)))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
