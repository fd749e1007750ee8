//! # Catalog operations
//!
//! Each submodule exposes a `run` function over a borrowed [`Catalog`]. They
//! do no I/O and never fail: an id that is not in the catalog is an ordinary
//! outcome ([`None`], [`Edited::NotFound`], [`Removed::NotFound`]) that the
//! caller has to branch on.
//!
//! [`CmdResult`] and [`CmdMessage`] are the currency between the API facade
//! and a UI: they carry the products an operation touched and the messages
//! to show, without deciding how they are shown.

use crate::config::StockConfig;
use crate::model::{Catalog, Product, ProductId};

pub mod add;
pub mod config;
pub mod edit;
pub mod find;
pub mod list;
pub mod remove;

/// Outcome of [`edit::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Edited {
    Updated(ProductId),
    NotFound(ProductId),
}

/// Outcome of [`remove::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Removed {
    /// The product as it was just before removal.
    Removed(Product),
    NotFound(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub config: Option<StockConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is an error, e.g. an id that was not found.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

pub(crate) fn position_of(catalog: &Catalog, id: ProductId) -> Option<usize> {
    catalog.products.iter().position(|p| p.id == id)
}
