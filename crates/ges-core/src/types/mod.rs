//! Shared data types: collection aliases and the search phase enum.

pub mod collections;
pub mod phase;

pub use collections::{FxHashMap, FxHashSet, NodeSet};
pub use phase::Phase;
