//! Sift IR - identifiers shared across the sift crates.
//!
//! Capture names, attribute names and type tags are all interned once and
//! compared as 32-bit [`Name`]s afterwards. Patterns, values and the type
//! registry only ever carry `Name`s; turning one back into text goes through
//! a [`StringLookup`] implementor.

mod interner;
mod name;

pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
