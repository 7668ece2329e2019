//! `ges fit` and the fixed-signature binding entry point.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use ges_core::config::{CliOverrides, GesConfig};
use ges_core::errors::SearchError;
use ges_core::LocalScoreModel;
use ges_score::{Dataset, GaussClusterL0Pen, GaussObsL0Pen};
use ges_search::{FitOptions, GesEngine, Pdag, ScoreCache};

use crate::error::CliError;
use crate::input::{load_data, load_fixed_gaps, load_groups, load_initial_graph};
use crate::output::FitReport;

/// Everything `ges fit` needs, already parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct FitArgs {
    pub data: PathBuf,
    pub fixed_gaps: Option<PathBuf>,
    pub initial: Option<PathBuf>,
    /// When set, nodes are groups of data columns scored with the clustered model.
    pub groups: Option<PathBuf>,
    /// Explicit config file; otherwise `ges.toml` under `root` and the user config.
    pub config: Option<PathBuf>,
    pub root: PathBuf,
    pub overrides: CliOverrides,
}

/// Resolve the layered configuration for a run.
pub fn resolve_config(
    config: Option<&Path>,
    root: &Path,
    overrides: &CliOverrides,
) -> Result<GesConfig, CliError> {
    let resolved = match config {
        Some(path) => GesConfig::load_file(path, Some(overrides))?,
        None => GesConfig::load(root, Some(overrides))?,
    };
    Ok(resolved)
}

pub fn run_fit(args: &FitArgs) -> Result<FitReport, CliError> {
    let config = resolve_config(args.config.as_deref(), &args.root, &args.overrides)?;
    let data = load_data(&args.data)?;

    match &args.groups {
        Some(path) => {
            let groups = load_groups(path)?;
            let model = GaussClusterL0Pen::from_config(data, groups, &config.score)?;
            fit_with_model(model, args, &config)
        }
        None => {
            let model = GaussObsL0Pen::from_config(data, &config.score)?;
            fit_with_model(model, args, &config)
        }
    }
}

fn fit_with_model<M: LocalScoreModel>(
    model: M,
    args: &FitArgs,
    config: &GesConfig,
) -> Result<FitReport, CliError> {
    let n = model.num_nodes();
    let initial = match &args.initial {
        Some(path) => load_initial_graph(path)?,
        None => Pdag::empty(n),
    };

    let mut options = FitOptions::from_config(config)?;
    if let Some(path) = &args.fixed_gaps {
        options = options.with_fixed_gaps(load_fixed_gaps(path)?);
    }

    let score = ScoreCache::with_enabled(model, config.score.effective_cache());
    let result = GesEngine::new(options).fit(&initial, &score)?;
    let cache = score.stats();
    if result.budget_exhausted {
        warn!(max_steps = ?config.search.max_steps, "step budget exhausted before convergence");
    }
    info!(
        accepted = result.accepted.len(),
        total_score = result.total_score,
        cache_hits = cache.hits,
        cache_misses = cache.misses,
        "fit finished"
    );

    Ok(FitReport {
        cpdag: result.cpdag,
        total_score: result.total_score,
        accepted_steps: result.accepted.len(),
        budget_exhausted: result.budget_exhausted,
        cache,
    })
}

/// Binding entry point: samples × variables rows in, CPDAG adjacency out.
///
/// Gaussian observational score with the BIC penalty, empty starting graph,
/// forward then backward phase, a single pass.
pub fn run_ges(rows: &[Vec<f64>]) -> Result<Vec<Vec<u8>>, SearchError> {
    let data = Dataset::from_rows(rows)?;
    let n = data.num_variables();
    let score = ScoreCache::new(GaussObsL0Pen::new(data));
    let result = ges_search::fit(&Pdag::empty(n), &score, &FitOptions::default())?;
    Ok(result.cpdag.to_rows())
}
