//! Trait seams between the search engine and its collaborators.

pub mod cancellation;
pub mod score;

pub use cancellation::{Cancellable, CancellationToken};
pub use score::{LocalScore, LocalScoreModel};
