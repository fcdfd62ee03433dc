//! The seam between item names and update rules.

use crate::category::Category;
use crate::rules::UpdateRule;

/// Maps an item name to the rule that advances it.
///
/// Implement this to route new kinds of goods to new rules; delegate to
/// [`StandardClassifier`] for everything else.
pub trait Classifier {
    fn rule_for(&self, name: &str) -> &dyn UpdateRule;
}

/// The shop's built-in taxonomy (see [`Category::classify`]).
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardClassifier;

impl Classifier for StandardClassifier {
    fn rule_for(&self, name: &str) -> &dyn UpdateRule {
        Category::classify(name).rule()
    }
}

impl<F> Classifier for F
where
    F: Fn(&str) -> &'static dyn UpdateRule,
{
    fn rule_for(&self, name: &str) -> &dyn UpdateRule {
        self(name)
    }
}
