//! Inventory façade over the four indexes.

use std::sync::Arc;

use stockindex_core::{InventoryError, InventoryResult, Price};

use crate::identity::IdentityMap;
use crate::ordering::{ByStock, StockOrdering};
use crate::price_index::PriceIndex;
use crate::priority::LowStockHeap;
use crate::product::Product;
use crate::restock::RestockQueue;

/// The inventory index.
///
/// Owns every product it has accepted and keeps them reachable through:
///
/// - the identity map and the price index, which always hold the same set of
///   products (see [`Inventory::check_invariants`]);
/// - the restock queue and the low-stock heap, which are independent
///   memberships. `remove_product` does **not** touch them, so they may still
///   yield products that are no longer in the inventory.
#[derive(Debug)]
pub struct Inventory<O: StockOrdering = ByStock> {
    products: IdentityMap,
    by_price: PriceIndex,
    restock: RestockQueue,
    low_stock: LowStockHeap<O>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: StockOrdering> Default for Inventory<O> {
    fn default() -> Self {
        Self {
            products: IdentityMap::new(),
            by_price: PriceIndex::new(),
            restock: RestockQueue::new(),
            low_stock: LowStockHeap::new(),
        }
    }
}

impl<O: StockOrdering> Inventory<O> {
    /// Inventory whose low-stock heap ranks products by `O` instead of stock.
    pub fn with_ordering() -> Self {
        Self::default()
    }

    /// Index a new product in the identity map, price index and low-stock heap.
    ///
    /// Fails with [`InventoryError::DuplicateSku`] before any index is touched,
    /// so a rejected add leaves the inventory exactly as it was. The restock
    /// queue is never affected.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<Arc<Product>> {
        if self.products.contains(product.sku().as_str()) {
            tracing::warn!(sku = %product.sku(), "rejected duplicate sku");
            return Err(InventoryError::duplicate(product.sku().clone()));
        }

        // Validated; every step below is infallible.
        let product = Arc::new(product);
        let inserted = self.products.insert(Arc::clone(&product));
        debug_assert!(inserted, "sku vanished between check and insert");
        self.by_price.insert(Arc::clone(&product));
        self.low_stock.push(Arc::clone(&product));

        tracing::debug!(
            sku = %product.sku(),
            price = %product.price(),
            stock = product.stock(),
            "product added"
        );
        debug_assert!(self.check_invariants().is_ok());
        Ok(product)
    }

    /// `None` when no product has this sku.
    pub fn get_product(&self, sku: &str) -> Option<Arc<Product>> {
        self.products.get(sku).cloned()
    }

    /// Drop a product from the identity map and price index.
    ///
    /// A missing sku is logged and otherwise ignored. The restock queue and
    /// low-stock heap keep whatever references they hold.
    pub fn remove_product(&mut self, sku: &str) -> Option<Arc<Product>> {
        let Some(product) = self.products.remove(sku) else {
            tracing::warn!(sku, "product not found");
            return None;
        };

        let unindexed = self.by_price.remove(&product);
        debug_assert!(unindexed, "product {sku} missing from price index");
        tracing::debug!(sku, price = %product.price(), "product removed");
        debug_assert!(self.check_invariants().is_ok());
        Some(product)
    }

    /// Queue a product for restocking. It need not be in the inventory.
    pub fn enqueue_restock(&mut self, product: impl Into<Arc<Product>>) {
        let product = product.into();
        tracing::debug!(sku = %product.sku(), queued = self.restock.len() + 1, "restock enqueued");
        self.restock.enqueue(product);
    }

    /// Next product to restock, oldest first. `None` when nothing is queued.
    pub fn process_restock(&mut self) -> Option<Arc<Product>> {
        let next = self.restock.dequeue();
        match &next {
            Some(p) => tracing::debug!(sku = %p.sku(), "restock processed"),
            None => tracing::debug!("no products to restock"),
        }
        next
    }

    /// Pop the product with the lowest stock. `None` when the heap is empty.
    ///
    /// The result may have been removed from the inventory since it was added.
    pub fn get_low_stock_product(&mut self) -> Option<Arc<Product>> {
        let next = self.low_stock.pop_min();
        if next.is_none() {
            tracing::debug!("no low-stock products");
        }
        next
    }

    /// Products priced within `[min_price, max_price]`, ascending by price and
    /// in insertion order within one price.
    pub fn get_products_by_price_range(&self, min_price: Price, max_price: Price) -> Vec<Arc<Product>> {
        self.by_price.range(min_price, max_price).cloned().collect()
    }

    /// All products currently in the inventory, in insertion order.
    pub fn display_inventory(&self) -> Vec<Arc<Product>> {
        self.products.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn restock_len(&self) -> usize {
        self.restock.len()
    }

    pub fn low_stock_len(&self) -> usize {
        self.low_stock.len()
    }

    /// Verify that the identity map and price index hold the same products.
    pub fn check_invariants(&self) -> InventoryResult<()> {
        for product in self.products.iter() {
            if !self.by_price.contains(product) {
                return Err(InventoryError::invariant(format!(
                    "{} is not indexed under {}",
                    product.sku(),
                    product.price()
                )));
            }
        }

        for (price, bucket) in self.by_price.buckets() {
            if bucket.is_empty() {
                return Err(InventoryError::invariant(format!("empty bucket at {price}")));
            }
            for product in bucket {
                if product.price() != *price {
                    return Err(InventoryError::invariant(format!(
                        "{} filed under {price} but priced {}",
                        product.sku(),
                        product.price()
                    )));
                }
                let known = self
                    .products
                    .get(product.sku().as_str())
                    .is_some_and(|p| Arc::ptr_eq(p, product));
                if !known {
                    return Err(InventoryError::invariant(format!(
                        "{} in price index but not in identity map",
                        product.sku()
                    )));
                }
            }
        }

        if self.by_price.len() != self.products.len() {
            return Err(InventoryError::invariant(format!(
                "identity map holds {} products, price index {}",
                self.products.len(),
                self.by_price.len()
            )));
        }

        Ok(())
    }
}
