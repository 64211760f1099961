//! Low-stock priority structure.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::ordering::{ByStock, StockOrdering};
use crate::product::Product;

/// Heap entry: the ordering key is computed once at push time.
#[derive(Debug)]
struct Ranked<K> {
    key: K,
    seq: u64,
    product: Arc<Product>,
}

impl<K: Ord> PartialEq for Ranked<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for Ranked<K> {}

impl<K: Ord> PartialOrd for Ranked<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for Ranked<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).then(self.seq.cmp(&other.seq))
    }
}

/// Binary min-heap over products, smallest key (by default: stock) first.
///
/// Products are never removed from here when they leave the identity map, so
/// a popped product may already be gone from the inventory. Callers that care
/// re-check with [`Inventory::get_product`](crate::Inventory::get_product).
#[derive(Debug)]
pub struct LowStockHeap<O: StockOrdering = ByStock> {
    heap: BinaryHeap<Reverse<Ranked<O::Key>>>,
    next_seq: u64,
    _order: PhantomData<O>,
}

impl<O: StockOrdering> Default for LowStockHeap<O> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            _order: PhantomData,
        }
    }
}

impl<O: StockOrdering> LowStockHeap<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, product: Arc<Product>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Ranked {
            key: O::key(&product),
            seq,
            product,
        }));
    }

    /// `None` means no products are queued for low-stock handling.
    pub fn pop_min(&mut self) -> Option<Arc<Product>> {
        self.heap.pop().map(|Reverse(entry)| entry.product)
    }

    pub fn peek_min(&self) -> Option<&Arc<Product>> {
        self.heap.peek().map(|Reverse(entry)| &entry.product)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
