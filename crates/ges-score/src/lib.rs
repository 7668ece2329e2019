//! # ges-score
//!
//! Decomposable scores for GES. Both models implement
//! [`ges_core::LocalScoreModel`]; wrap them in `ges_search::ScoreCache`
//! before handing them to the search.

pub mod dataset;
pub mod gauss_cluster;
pub mod gauss_obs;
pub mod regression;

pub use dataset::Dataset;
pub use gauss_cluster::GaussClusterL0Pen;
pub use gauss_obs::GaussObsL0Pen;
