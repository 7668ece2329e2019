//! Shared constants for the GES workspace.

/// GES version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default cap on the size of a per-edge candidate set (T0 for Insert, H0 for Delete).
pub const DEFAULT_MAX_SUBSET_SIZE: u32 = 20;

/// Largest cap accepted by config validation. Flag arrays are sized 2^cap.
pub const HARD_MAX_SUBSET_SIZE: u32 = 24;

/// Default phase sequence.
pub const DEFAULT_PHASES: [&str; 2] = ["forward", "backward"];

/// Default for repeating the phase sequence while the score improves.
pub const DEFAULT_ITERATE: bool = false;

/// Default for evaluating step candidates on the rayon pool.
pub const DEFAULT_PARALLEL: bool = false;

/// Default for memoizing local scores.
pub const DEFAULT_SCORE_CACHE: bool = true;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "GES_LOG";

/// Filter used when `GES_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "ges=info";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "ges.toml";
