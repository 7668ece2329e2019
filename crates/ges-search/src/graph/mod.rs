//! Partially directed graphs as adjacency matrices.

pub mod export;
pub mod paths;
pub mod pdag;
pub mod topology;
pub mod view;

pub use export::EdgeMark;
pub use pdag::{FixedGaps, Pdag};
