//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation).

pub mod error;
pub mod quality;

pub use error::{DomainError, DomainResult};
pub use quality::{Quality, MAX_QUALITY, MIN_QUALITY};
