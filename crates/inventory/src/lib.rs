//! Inventory domain module.
//!
//! This crate contains the shop's daily update rules, implemented purely as
//! deterministic domain logic (no IO, no presentation, no storage).

pub mod category;
pub mod classifier;
pub mod gilded_rose;
pub mod item;
pub mod rules;
pub mod stock;

pub use category::Category;
pub use classifier::{Classifier, StandardClassifier};
pub use gilded_rose::{GildedRose, advance_day};
pub use item::Item;
pub use rules::{
    AgedBrieRule, BackstagePassRule, ConjuredRule, LegendaryRule, NormalRule, UpdateRule,
};
pub use stock::standard_stock;
