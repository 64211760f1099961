//! Monetary price in the smallest currency unit.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

const CENTS_PER_UNIT: u64 = 100;

/// Price in cents (e.g. `2050` is `$20.50`).
///
/// Integer cents give a total order, so prices can key an ordered map without
/// float comparison surprises. Many products may share one price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);
    pub const MAX: Price = Price(u64::MAX);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Price::from_units(10)` is `$10.00`.
    ///
    /// `None` when the amount does not fit in cents.
    pub const fn from_units(units: u64) -> Option<Self> {
        match units.checked_mul(CENTS_PER_UNIT) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / CENTS_PER_UNIT, self.0 % CENTS_PER_UNIT)
    }
}

impl From<u64> for Price {
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

/// Parses `"20.5"`, `"20.50"`, `"$15"` and the like. At most two decimals.
impl FromStr for Price {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let digits = raw.strip_prefix('$').unwrap_or(raw);
        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InventoryError::invalid_price(format!("{s:?}: expected digits")));
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InventoryError::invalid_price(format!(
                "{s:?}: at most two decimal digits"
            )));
        }

        let units: u64 = whole
            .parse()
            .map_err(|e| InventoryError::invalid_price(format!("{s:?}: {e}")))?;
        let cents = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(|| InventoryError::invalid_price(format!("{s:?}: out of range")))
    }
}
