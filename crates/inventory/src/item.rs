use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, Quality, quality};

/// A shop item tracked by the inventory.
///
/// The name is fixed at construction; rules only move `sell_in` and `quality`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(rename = "sellIn")]
    sell_in: i32,
    quality: Quality,
}

impl Item {
    /// Build an item as-is. No validation happens here; out-of-range quality
    /// is pulled back into bounds by the first update.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: Quality) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// True once the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Apply a signed quality delta, clamped into `[0, 50]`.
    pub fn adjust_quality(&mut self, delta: Quality) {
        self.quality = quality::adjust(self.quality, delta);
    }

    /// Set quality without clamping.
    pub fn set_quality(&mut self, value: Quality) {
        self.quality = value;
    }

    /// One day closer to (or further past) the sell-by date.
    pub fn decrement_sell_in(&mut self) {
        self.sell_in = self.sell_in.saturating_sub(1);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses `name,sell_in,quality`.
///
/// The name may itself contain commas (`Sulfuras, Hand of Ragnaros`), so the
/// numbers are taken from the right.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let mut fields = s.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(DomainError::invalid_item(
                s,
                "expected `name,sell_in,quality`",
            ));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_item(s, "name cannot be empty"));
        }
        let sell_in = sell_in
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_item(s, format!("sell_in: {e}")))?;
        let quality = quality
            .trim()
            .parse::<Quality>()
            .map_err(|e| DomainError::invalid_item(s, format!("quality: {e}")))?;

        Ok(Self::new(name, sell_in, quality))
    }
}
