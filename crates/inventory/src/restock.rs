//! FIFO restock queue.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::product::Product;

/// Unbounded first-in, first-out queue of products awaiting restock.
///
/// The same product may be queued any number of times.
#[derive(Debug, Default)]
pub struct RestockQueue {
    pending: VecDeque<Arc<Product>>,
}

impl RestockQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, product: Arc<Product>) {
        self.pending.push_back(product);
    }

    /// `None` means nothing is waiting; that is a normal state.
    pub fn dequeue(&mut self) -> Option<Arc<Product>> {
        self.pending.pop_front()
    }

    pub fn peek(&self) -> Option<&Arc<Product>> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockindex_core::Price;

    fn product(sku: &str) -> Arc<Product> {
        Arc::new(Product::new(sku, Price::ZERO, "Misc", 0))
    }

    #[test]
    fn empty_queue_dequeues_none() {
        let mut queue = RestockQueue::new();
        assert!(queue.dequeue().is_none());
        assert!(queue.peek().is_none());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut queue = RestockQueue::new();
        let p = product("B200");
        queue.enqueue(p.clone());
        queue.enqueue(p.clone());
        assert_eq!(queue.len(), 2);
        assert!(Arc::ptr_eq(&queue.dequeue().unwrap(), &p));
        assert!(Arc::ptr_eq(&queue.dequeue().unwrap(), &p));
        assert!(queue.is_empty());
    }

    proptest! {
        /// Dequeue order equals enqueue order, then the queue reports empty.
        #[test]
        fn dequeues_in_enqueue_order(skus in prop::collection::vec("[A-Z][0-9]{3}", 0..64)) {
            let mut queue = RestockQueue::new();
            for sku in &skus {
                queue.enqueue(product(sku));
            }

            let mut drained = Vec::new();
            while let Some(p) = queue.dequeue() {
                drained.push(p.sku().to_string());
            }

            prop_assert_eq!(drained, skus);
            prop_assert!(queue.dequeue().is_none());
        }
    }
}
