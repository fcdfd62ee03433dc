//! Item categories and name-based classification.

use crate::rules::{
    AgedBrieRule, BackstagePassRule, ConjuredRule, LegendaryRule, NormalRule, UpdateRule,
};

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_PREFIX: &str = "Conjured";

/// Which daily update rule governs an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Normal,
    AgedBrie,
    /// Exempt from every rule; sell-in and quality are fixed for life.
    Legendary,
    BackstagePass,
    Conjured,
}

static NORMAL: NormalRule = NormalRule;
static AGED_BRIE_RULE: AgedBrieRule = AgedBrieRule;
static LEGENDARY: LegendaryRule = LegendaryRule;
static BACKSTAGE: BackstagePassRule = BackstagePassRule;
static CONJURED: ConjuredRule = ConjuredRule;

impl Category {
    /// Classify an item by its name. Total: anything unrecognised is `Normal`.
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASS => Category::BackstagePass,
            n if n.starts_with(CONJURED_PREFIX) => Category::Conjured,
            _ => Category::Normal,
        }
    }

    /// Stable identifier used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::AgedBrie => "aged_brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
        }
    }

    /// The shared, stateless rule instance for this category.
    pub fn rule(self) -> &'static dyn UpdateRule {
        match self {
            Category::Normal => &NORMAL,
            Category::AgedBrie => &AGED_BRIE_RULE,
            Category::Legendary => &LEGENDARY,
            Category::BackstagePass => &BACKSTAGE,
            Category::Conjured => &CONJURED,
        }
    }
}
