//! Domain error model.

use thiserror::Error;

use crate::id::Sku;

/// Result type used across the inventory index.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Lookups that miss and empty queues/heaps are not errors; they surface as
/// `None`. Only the failures below travel through `Result`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A product with this SKU is already indexed.
    #[error("duplicate sku: {0}")]
    DuplicateSku(Sku),

    /// The identity map and price index disagree. Always a bug.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A price string could not be parsed.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A thread panicked while holding the shared inventory lock.
    #[error("inventory lock poisoned")]
    LockPoisoned,
}

impl InventoryError {
    pub fn duplicate(sku: impl Into<Sku>) -> Self {
        Self::DuplicateSku(sku.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_sku_message_names_the_sku() {
        let err = InventoryError::duplicate("A100");
        assert_eq!(err.to_string(), "duplicate sku: A100");
    }

    #[test]
    fn invariant_message_is_prefixed() {
        let err = InventoryError::invariant("bucket missing");
        assert_eq!(err.to_string(), "invariant violated: bucket missing");
    }
}
