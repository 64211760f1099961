//! Price index: ordered price buckets for range scans.

use std::collections::BTreeMap;
use std::sync::Arc;

use stockindex_core::Price;

use crate::product::Product;

/// Products grouped by price, buckets kept in ascending price order.
///
/// Within a bucket products keep insertion order. Empty buckets are never
/// stored, so a range scan only walks prices that have products.
#[derive(Debug, Default)]
pub struct PriceIndex {
    buckets: BTreeMap<Price, Vec<Arc<Product>>>,
}

impl PriceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: Arc<Product>) {
        self.buckets.entry(product.price()).or_default().push(product);
    }

    /// Removes `product` by identity (same allocation), not by value.
    ///
    /// Returns `false` if it was not indexed under its price.
    pub fn remove(&mut self, product: &Arc<Product>) -> bool {
        let price = product.price();
        let Some(bucket) = self.buckets.get_mut(&price) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|p| Arc::ptr_eq(p, product)) else {
            return false;
        };

        bucket.remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&price);
        }
        true
    }

    /// Products priced within `[min, max]`, ascending by price.
    ///
    /// An inverted range yields nothing.
    pub fn range(&self, min: Price, max: Price) -> impl Iterator<Item = &Arc<Product>> {
        let buckets = (min <= max).then(|| self.buckets.range(min..=max));
        buckets
            .into_iter()
            .flatten()
            .flat_map(|(_, bucket)| bucket.iter())
    }

    pub fn contains(&self, product: &Arc<Product>) -> bool {
        self.buckets
            .get(&product.price())
            .is_some_and(|bucket| bucket.iter().any(|p| Arc::ptr_eq(p, product)))
    }

    /// Number of distinct prices.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of indexed products across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub(crate) fn buckets(&self) -> impl Iterator<Item = (&Price, &Vec<Arc<Product>>)> {
        self.buckets.iter()
    }
}
