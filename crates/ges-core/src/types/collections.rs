//! Re-exports of performance-oriented collection types.

use std::collections::BTreeSet;

pub use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// Ordered node set. Parent sets, T/H operator sets and neighborhoods all use it,
/// so set algebra and cache keys are deterministic.
pub type NodeSet = BTreeSet<usize>;

/// SmallVec optimized for parent lists (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
