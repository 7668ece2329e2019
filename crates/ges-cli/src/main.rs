//! `ges`: learn a CPDAG from observational data.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use ges_cli::{resolve_config, run_fit, CliError, FitArgs, OutputFormat};
use ges_core::config::CliOverrides;
use ges_core::errors::GesErrorCode;
use ges_core::tracing::init_tracing_with_verbosity;

#[derive(Parser)]
#[command(name = "ges", version, about = "Greedy Equivalence Search over CPDAGs")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run the search on a JSON data file and print the CPDAG.
    Fit(FitCmd),
    /// Print the resolved configuration as TOML.
    Config(ConfigCmd),
}

#[derive(Args)]
struct FitCmd {
    /// JSON array of sample rows.
    #[arg(long)]
    data: PathBuf,
    /// JSON n×n 0/1 matrix of pairs that must stay non-adjacent.
    #[arg(long)]
    fixed_gaps: Option<PathBuf>,
    /// JSON n×n 0/1 starting graph (defaults to empty).
    #[arg(long)]
    initial: Option<PathBuf>,
    /// JSON list of column groups, one per node, for the clustered score.
    #[arg(long)]
    groups: Option<PathBuf>,
    #[command(flatten)]
    settings: SettingsArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Args)]
struct ConfigCmd {
    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Args)]
struct SettingsArgs {
    /// Config file to use instead of ges.toml and ~/.ges/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Comma-separated phase names, e.g. forward,backward.
    #[arg(long, value_delimiter = ',')]
    phases: Option<Vec<String>>,
    /// Repeat passes while the score improves.
    #[arg(long)]
    iterate: bool,
    /// Evaluate candidate edges in parallel.
    #[arg(long)]
    parallel: bool,
    /// Penalty per parameter (defaults to 0.5 ln n).
    #[arg(long)]
    lambda: Option<f64>,
    #[arg(long)]
    max_subset_size: Option<u32>,
    /// Stop after this many accepted operators.
    #[arg(long)]
    max_steps: Option<u64>,
    /// Disable the local score cache.
    #[arg(long)]
    no_cache: bool,
}

impl SettingsArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            phases: self.phases.clone(),
            iterate: self.iterate.then_some(true),
            parallel: self.parallel.then_some(true),
            max_subset_size: self.max_subset_size,
            max_steps: self.max_steps,
            lambda: self.lambda,
            cache: self.no_cache.then_some(false),
        }
    }
}

fn current_dir() -> Result<PathBuf, CliError> {
    std::env::current_dir().map_err(|source| CliError::Io {
        path: ".".to_string(),
        source,
    })
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Cmd::Fit(cmd) => {
            let args = FitArgs {
                data: cmd.data,
                fixed_gaps: cmd.fixed_gaps,
                initial: cmd.initial,
                groups: cmd.groups,
                config: cmd.settings.config.clone(),
                root: current_dir()?,
                overrides: cmd.settings.overrides(),
            };
            run_fit(&args)?.render(cmd.format)
        }
        Cmd::Config(cmd) => {
            let config = resolve_config(
                cmd.settings.config.as_deref(),
                &current_dir()?,
                &cmd.settings.overrides(),
            )?;
            Ok(config.to_toml()?)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing_with_verbosity(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {}", e.coded_string());
            std::process::exit(1);
        }
    }
}
