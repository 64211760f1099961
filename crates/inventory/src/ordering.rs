//! Pluggable ordering for the low-stock heap.

use crate::product::Product;

/// Ranks products for [`LowStockHeap`](crate::LowStockHeap).
///
/// The heap pops the product with the *smallest* key first. Equal keys come
/// out in push order.
pub trait StockOrdering {
    type Key: Ord + core::fmt::Debug;

    fn key(product: &Product) -> Self::Key;
}

/// Default ordering: ascending `stock`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByStock;

impl StockOrdering for ByStock {
    type Key = i64;

    fn key(product: &Product) -> Self::Key {
        product.stock()
    }
}
