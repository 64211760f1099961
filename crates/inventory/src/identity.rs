//! Identity map: sku → product.

use std::sync::Arc;

use indexmap::IndexMap;

use stockindex_core::Sku;

use crate::product::Product;

/// Exact-match index from sku to product.
///
/// Backed by an `IndexMap` so iteration follows insertion order, and removal
/// keeps the remaining entries in that order.
#[derive(Debug, Default)]
pub struct IdentityMap {
    by_sku: IndexMap<Sku, Arc<Product>>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.by_sku.contains_key(sku)
    }

    pub fn get(&self, sku: &str) -> Option<&Arc<Product>> {
        self.by_sku.get(sku)
    }

    /// Inserts `product` unless its sku is taken. Returns `false` on collision,
    /// leaving the existing entry in place.
    pub fn insert(&mut self, product: Arc<Product>) -> bool {
        match self.by_sku.entry(product.sku().clone()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(product);
                true
            }
        }
    }

    // O(n): `shift_remove` preserves the order of the remaining entries.
    pub fn remove(&mut self, sku: &str) -> Option<Arc<Product>> {
        self.by_sku.shift_remove(sku)
    }

    pub fn len(&self) -> usize {
        self.by_sku.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sku.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.by_sku.values()
    }
}
