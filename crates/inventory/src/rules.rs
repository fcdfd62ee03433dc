//! Daily update rules, one per item category.
//!
//! Every rule follows the same shape: adjust quality, move the sell-by date,
//! then adjust again if the item has just expired. Quality is clamped after
//! every step, so a later step always starts from an in-range value.

use crate::category::Category;
use crate::item::Item;

/// Capability contract for advancing one item by one day.
pub trait UpdateRule: Send + Sync + core::fmt::Debug {
    /// Category label attached to log lines.
    fn category(&self) -> &'static str;

    fn update(&self, item: &mut Item);
}

/// Quality moves by `delta` per day, twice that once expired.
fn linear(item: &mut Item, delta: i32) {
    item.adjust_quality(delta);
    item.decrement_sell_in();
    if item.is_expired() {
        item.adjust_quality(delta);
    }
}

/// Ordinary goods: lose 1 per day, 2 once expired.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalRule;

impl UpdateRule for NormalRule {
    fn category(&self) -> &'static str {
        Category::Normal.name()
    }

    fn update(&self, item: &mut Item) {
        linear(item, -1);
    }
}

/// Improves with age: gains 1 per day, 2 once expired.
#[derive(Debug, Default, Clone, Copy)]
pub struct AgedBrieRule;

impl UpdateRule for AgedBrieRule {
    fn category(&self) -> &'static str {
        Category::AgedBrie.name()
    }

    fn update(&self, item: &mut Item) {
        linear(item, 1);
    }
}

/// Conjured goods degrade twice as fast as normal ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConjuredRule;

impl UpdateRule for ConjuredRule {
    fn category(&self) -> &'static str {
        Category::Conjured.name()
    }

    fn update(&self, item: &mut Item) {
        linear(item, -2);
    }
}

/// Legendary items never change.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegendaryRule;

impl UpdateRule for LegendaryRule {
    fn category(&self) -> &'static str {
        Category::Legendary.name()
    }

    fn update(&self, _item: &mut Item) {}
}

/// Concert tickets gain value as the date approaches and are worthless after it.
#[derive(Debug, Default, Clone, Copy)]
pub struct BackstagePassRule;

impl BackstagePassRule {
    /// Quality gain for a pass that still has `sell_in` days to go.
    fn appreciation(sell_in: i32) -> i32 {
        match sell_in {
            s if s > 10 => 1,
            6..=10 => 2,
            _ => 3,
        }
    }
}

impl UpdateRule for BackstagePassRule {
    fn category(&self) -> &'static str {
        Category::BackstagePass.name()
    }

    fn update(&self, item: &mut Item) {
        item.adjust_quality(Self::appreciation(item.sell_in()));
        item.decrement_sell_in();
        // Forced, not decremented: the concert is over.
        if item.is_expired() {
            item.set_quality(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &dyn UpdateRule, sell_in: i32, quality: i32) -> (i32, i32) {
        let mut item = Item::new("test item", sell_in, quality);
        rule.update(&mut item);
        (item.sell_in(), item.quality())
    }

    #[test]
    fn normal_degrades_by_one_then_two_after_expiry() {
        assert_eq!(run(&NormalRule, 10, 20), (9, 19));
        assert_eq!(run(&NormalRule, 0, 10), (-1, 8));
        assert_eq!(run(&NormalRule, 0, 1), (-1, 0));
    }

    #[test]
    fn aged_brie_gains_and_caps_at_fifty() {
        assert_eq!(run(&AgedBrieRule, 10, 48), (9, 49));
        assert_eq!(run(&AgedBrieRule, 0, 10), (-1, 12));
        assert_eq!(run(&AgedBrieRule, -1, 49), (-2, 50));
    }

    #[test]
    fn conjured_degrades_twice_as_fast() {
        assert_eq!(run(&ConjuredRule, 10, 20), (9, 18));
        assert_eq!(run(&ConjuredRule, 0, 20), (-1, 16));
        assert_eq!(run(&ConjuredRule, 0, 3), (-1, 0));
        assert_eq!(run(&ConjuredRule, 5, 1), (4, 0));
    }

    #[test]
    fn legendary_is_untouched_even_out_of_range() {
        assert_eq!(run(&LegendaryRule, 10, 80), (10, 80));
        assert_eq!(run(&LegendaryRule, -1, 80), (-1, 80));
    }

    #[test]
    fn backstage_pass_steps_up_as_concert_nears() {
        assert_eq!(run(&BackstagePassRule, 15, 20), (14, 21));
        assert_eq!(run(&BackstagePassRule, 11, 20), (10, 21));
        assert_eq!(run(&BackstagePassRule, 10, 20), (9, 22));
        assert_eq!(run(&BackstagePassRule, 6, 20), (5, 22));
        assert_eq!(run(&BackstagePassRule, 5, 20), (4, 23));
        assert_eq!(run(&BackstagePassRule, 1, 20), (0, 23));
    }

    #[test]
    fn backstage_pass_is_forced_to_zero_after_concert() {
        assert_eq!(run(&BackstagePassRule, 0, 20), (-1, 0));
        assert_eq!(run(&BackstagePassRule, 0, 50), (-1, 0));
        assert_eq!(run(&BackstagePassRule, -5, 3), (-6, 0));
    }

    #[test]
    fn backstage_pass_caps_at_fifty() {
        assert_eq!(run(&BackstagePassRule, 5, 49), (4, 50));
        assert_eq!(run(&BackstagePassRule, 10, 49), (9, 50));
    }

    #[test]
    fn out_of_range_quality_is_pulled_back_on_first_update() {
        assert_eq!(run(&NormalRule, 5, 80), (4, 50));
        assert_eq!(run(&AgedBrieRule, 5, -3), (4, 0));
    }
}
