//! `stockindex-core` — domain primitives shared by the inventory index.
//!
//! This crate contains **pure domain** types (no logging, no locking).

pub mod error;
pub mod id;
pub mod price;

pub use error::{InventoryError, InventoryResult};
pub use id::Sku;
pub use price::Price;
