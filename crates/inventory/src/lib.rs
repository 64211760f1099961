//! In-memory inventory index.
//!
//! One [`Inventory`] keeps four views over the same shared [`Product`]s:
//!
//! - an identity map (sku → product, insertion ordered),
//! - a price index (ordered by price, for range scans),
//! - a FIFO restock queue,
//! - a low-stock min-heap.
//!
//! Everything here is synchronous, deterministic domain logic (no IO). Wrap the
//! index in [`SharedInventory`] when several threads need it.

pub mod identity;
pub mod inventory;
pub mod ordering;
pub mod price_index;
pub mod priority;
pub mod product;
pub mod restock;
pub mod shared;

pub use identity::IdentityMap;
pub use inventory::Inventory;
pub use ordering::{ByStock, StockOrdering};
pub use price_index::PriceIndex;
pub use priority::LowStockHeap;
pub use product::Product;
pub use restock::RestockQueue;
pub use shared::SharedInventory;

pub use stockindex_core::{InventoryError, InventoryResult, Price, Sku};
