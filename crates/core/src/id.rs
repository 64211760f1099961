//! Strongly-typed identifiers used across the index.

use core::borrow::Borrow;
use serde::{Deserialize, Serialize};


/// Stock-keeping unit: the unique identifier of a product.
///
/// Any string is accepted; uniqueness is enforced by the identity map, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Sku {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Lets `HashMap<Sku, _>` / `IndexMap<Sku, _>` be queried with a plain `&str`.
impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_serializes_as_plain_string() {
        let sku = Sku::from("A100");
        assert_eq!(serde_json::to_string(&sku).unwrap(), "\"A100\"");
        let back: Sku = serde_json::from_str("\"A100\"").unwrap();
        assert_eq!(back, sku);
    }

    #[test]
    fn sku_borrows_as_str() {
        let sku = Sku::new("B200");
        let s: &str = sku.borrow();
        assert_eq!(s, "B200");
        assert_eq!(sku.to_string(), "B200");
    }
}
