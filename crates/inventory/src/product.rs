use serde::{Deserialize, Serialize};

use stockindex_core::{Price, Sku};

/// A stock-keeping unit held by the inventory.
///
/// Immutable once constructed: the indexes key on `sku`, `price` and `stock`,
/// so none of them may change while the product is indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    price: Price,
    category: String,
    stock: i64,
}

impl Product {
    pub fn new(sku: impl Into<Sku>, price: Price, category: impl Into<String>, stock: i64) -> Self {
        Self {
            sku: sku.into(),
            price,
            category: category.into(),
            stock,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product(SKU: {}, Price: {}, Category: {}, Stock: {})",
            self.sku, self.price, self.category, self.stock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_field() {
        let p = Product::new("A100", Price::from_cents(2050), "Electronics", 15);
        assert_eq!(
            p.to_string(),
            "Product(SKU: A100, Price: $20.50, Category: Electronics, Stock: 15)"
        );
    }

    #[test]
    fn serializes_price_as_cents() {
        let p = Product::new("C300", Price::from_units(50).unwrap(), "Clothing", 2);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sku": "C300",
                "price": 5000,
                "category": "Clothing",
                "stock": 2
            })
        );
    }
}
