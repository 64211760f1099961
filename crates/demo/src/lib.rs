//! Fixed demonstration sequence over the inventory index.
//!
//! Runs every inventory operation once and renders each step, either as
//! plain text or as JSON lines.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use serde_json::json;

use stockindex_inventory::{Inventory, Price, Product};

/// How each demo step is rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Text,
    Json,
}

fn catalog() -> anyhow::Result<Vec<Product>> {
    [
        ("A100", "20.5", "Electronics", 15),
        ("B200", "10.0", "Groceries", 5),
        ("C300", "50.0", "Clothing", 2),
        ("D400", "15.0", "Books", 20),
    ]
    .into_iter()
    .map(|(sku, price, category, stock)| -> anyhow::Result<Product> {
        let price: Price = price
            .parse()
            .with_context(|| format!("bad price for {sku}"))?;
        Ok(Product::new(sku, price, category, stock))
    })
    .collect()
}

struct Report<W> {
    out: W,
    format: Output,
}

impl<W: Write> Report<W> {
    fn products(&mut self, title: &str, products: &[Arc<Product>]) -> anyhow::Result<()> {
        match self.format {
            Output::Text => {
                writeln!(self.out, "{title}:")?;
                let listing: Vec<String> = products.iter().map(|p| p.to_string()).collect();
                writeln!(self.out, "[{}]", listing.join(", "))?;
                writeln!(self.out)?;
            }
            Output::Json => {
                let line = json!({ "step": title, "products": products });
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(())
    }

    fn single(&mut self, title: &str, product: Option<&Arc<Product>>, empty: &str) -> anyhow::Result<()> {
        match self.format {
            Output::Text => {
                writeln!(self.out, "{title}:")?;
                match product {
                    Some(p) => writeln!(self.out, "{p}")?,
                    None => writeln!(self.out, "{empty}")?,
                }
                writeln!(self.out)?;
            }
            Output::Json => {
                let line = json!({ "step": title, "product": product });
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Run the demonstration against a fresh inventory, writing to `out`.
pub fn run(out: impl Write, format: Output) -> anyhow::Result<Inventory> {
    let mut report = Report { out, format };
    let mut inventory = Inventory::new();

    for product in catalog()? {
        inventory
            .add_product(product)
            .context("seeding demo inventory")?;
    }
    report.products("Inventory after adding products", &inventory.display_inventory())?;

    let b200 = inventory.get_product("B200");
    report.single("Fetching product B200", b200.as_ref(), "Product not found")?;

    inventory.remove_product("A100");
    report.products("Inventory after removing product A100", &inventory.display_inventory())?;

    if let Some(b200) = b200 {
        inventory.enqueue_restock(b200);
    }
    let restocked = inventory.process_restock();
    report.single("Processing restock", restocked.as_ref(), "No products to restock.")?;

    let lowest = inventory.get_low_stock_product();
    report.single("Product with lowest stock", lowest.as_ref(), "No low-stock products.")?;

    let in_range = inventory.get_products_by_price_range(Price::from_cents(1_000), Price::from_cents(2_500));
    report.products("Products in price range $10 - $25", &in_range)?;

    tracing::info!(products = inventory.len(), "demo finished");
    Ok(inventory)
}
