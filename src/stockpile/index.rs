//! # Display positions
//!
//! Listings number products `1, 2, 3, ...` in catalog order. That position is
//! only a display aid: it shifts whenever a product before it is removed.
//! Every operation that targets a product takes its [`ProductId`], which
//! never changes once assigned.

use crate::model::{Product, ProductId};
use std::iter::Enumerate;
use std::slice;

/// One line of a product listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRow<'a> {
    /// 1-based position in the listing.
    pub position: usize,
    pub id: ProductId,
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
}

impl<'a> DisplayRow<'a> {
    fn new(position: usize, product: &'a Product) -> Self {
        Self {
            position,
            id: product.id,
            name: &product.name,
            description: &product.description,
            price: product.price,
        }
    }
}

/// Lazy iterator over [`DisplayRow`]s in catalog order.
///
/// Borrowing the catalog keeps it unchanged while rows are produced. To walk
/// the listing again, clone the iterator before consuming it or ask for a
/// fresh one.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    inner: Enumerate<slice::Iter<'a, Product>>,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(products: &'a [Product]) -> Self {
        Self {
            inner: products.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = DisplayRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, p)| DisplayRow::new(i + 1, p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl std::iter::FusedIterator for Rows<'_> {}
