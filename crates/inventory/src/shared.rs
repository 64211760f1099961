//! Thread-safe handle around an [`Inventory`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockindex_core::{InventoryError, InventoryResult, Price};

use crate::inventory::Inventory;
use crate::product::Product;

/// Shared inventory behind a single lock.
///
/// All four indexes sit under one `RwLock`, so each operation is atomic with
/// respect to other threads. Cheap to clone; clones share the same inventory.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<RwLock<Inventory>>,
}

impl SharedInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_inventory(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    fn read(&self) -> InventoryResult<RwLockReadGuard<'_, Inventory>> {
        self.inner.read().map_err(|_| InventoryError::LockPoisoned)
    }

    fn write(&self) -> InventoryResult<RwLockWriteGuard<'_, Inventory>> {
        self.inner.write().map_err(|_| InventoryError::LockPoisoned)
    }

    pub fn add_product(&self, product: Product) -> InventoryResult<Arc<Product>> {
        self.write()?.add_product(product)
    }

    pub fn get_product(&self, sku: &str) -> InventoryResult<Option<Arc<Product>>> {
        Ok(self.read()?.get_product(sku))
    }

    pub fn remove_product(&self, sku: &str) -> InventoryResult<Option<Arc<Product>>> {
        Ok(self.write()?.remove_product(sku))
    }

    pub fn enqueue_restock(&self, product: impl Into<Arc<Product>>) -> InventoryResult<()> {
        self.write()?.enqueue_restock(product);
        Ok(())
    }

    pub fn process_restock(&self) -> InventoryResult<Option<Arc<Product>>> {
        Ok(self.write()?.process_restock())
    }

    pub fn get_low_stock_product(&self) -> InventoryResult<Option<Arc<Product>>> {
        Ok(self.write()?.get_low_stock_product())
    }

    pub fn get_products_by_price_range(
        &self,
        min_price: Price,
        max_price: Price,
    ) -> InventoryResult<Vec<Arc<Product>>> {
        Ok(self.read()?.get_products_by_price_range(min_price, max_price))
    }

    pub fn display_inventory(&self) -> InventoryResult<Vec<Arc<Product>>> {
        Ok(self.read()?.display_inventory())
    }

    pub fn len(&self) -> InventoryResult<usize> {
        Ok(self.read()?.len())
    }

    /// Run `f` with exclusive access, for multi-step updates that must not
    /// interleave with other threads.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Inventory) -> R) -> InventoryResult<R> {
        let mut guard = self.write()?;
        Ok(f(&mut guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_adds_of_one_sku_admit_exactly_one() {
        let shared = SharedInventory::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.add_product(Product::new("A100", Price::from_units(i).unwrap(), "Misc", i as i64))
                })
            })
            .collect();

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(outcomes
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == InventoryError::duplicate("A100")));

        assert_eq!(shared.len().unwrap(), 1);
        assert!(shared.with_mut(|inv| inv.check_invariants()).unwrap().is_ok());
    }

    #[test]
    fn wraps_a_prebuilt_inventory() {
        let mut inv = Inventory::new();
        inv.add_product(Product::new("C300", Price::from_cents(5_000), "Clothing", 2))
            .unwrap();
        inv.enqueue_restock(Product::new("X1", Price::ZERO, "Misc", 0));

        let shared = SharedInventory::from_inventory(inv);
        assert_eq!(shared.len().unwrap(), 1);
        assert_eq!(shared.process_restock().unwrap().unwrap().sku().as_str(), "X1");
        assert_eq!(
            shared.get_low_stock_product().unwrap().unwrap().sku().as_str(),
            "C300"
        );
    }

    #[test]
    fn clones_share_state() {
        let a = SharedInventory::new();
        let b = a.clone();
        a.add_product(Product::new("B200", Price::from_units(10).unwrap(), "Groceries", 5))
            .unwrap();
        assert!(b.get_product("B200").unwrap().is_some());
        assert_eq!(b.remove_product("B200").unwrap().unwrap().sku().as_str(), "B200");
        assert!(a.display_inventory().unwrap().is_empty());
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let shared = SharedInventory::new();
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(shared.len().unwrap_err(), InventoryError::LockPoisoned);
        assert_eq!(
            shared.process_restock().unwrap_err(),
            InventoryError::LockPoisoned
        );
    }
}
