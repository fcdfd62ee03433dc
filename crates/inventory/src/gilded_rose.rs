//! The daily updater.

use tracing::{debug_span, trace};

use crate::classifier::{Classifier, StandardClassifier};
use crate::item::Item;
use crate::rules::UpdateRule;

/// Advance every item by one day, in order, using `classifier` to pick each
/// item's rule. Items are independent; order only matters for tracing output.
pub fn advance_day<C>(items: &mut [Item], classifier: &C)
where
    C: Classifier + ?Sized,
{
    for item in items.iter_mut() {
        let rule = classifier.rule_for(item.name());
        let (sell_in_before, quality_before) = (item.sell_in(), item.quality());
        rule.update(item);
        trace!(
            name = item.name(),
            category = rule.category(),
            sell_in_before,
            quality_before,
            sell_in = item.sell_in(),
            quality = item.quality(),
            "item updated"
        );
    }
}

/// The shop's inventory plus the classifier used to advance it.
#[derive(Debug, Clone)]
pub struct GildedRose<C = StandardClassifier> {
    items: Vec<Item>,
    classifier: C,
    day: u64,
}

impl GildedRose<StandardClassifier> {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_classifier(items, StandardClassifier)
    }
}

impl<C: Classifier> GildedRose<C> {
    pub fn with_classifier(items: Vec<Item>, classifier: C) -> Self {
        Self {
            items,
            classifier,
            day: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of days simulated so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Simulate one day for the whole inventory.
    pub fn advance_day(&mut self) {
        self.day += 1;
        let span = debug_span!("advance_day", day = self.day, items = self.items.len());
        let _entered = span.enter();
        advance_day(&mut self.items, &self.classifier);
    }

    pub fn advance_days(&mut self, days: u64) {
        for _ in 0..days {
            self.advance_day();
        }
    }
}
