//! Quadra CLI - Numerical quadrature comparison
//!
//! # Commands
//!
//! - `quadra compare` - Compare trapezoid, midpoint, Simpson and Monte Carlo
//!   estimates against the exact integral
//! - `quadra check` - Print the resolved configuration and integrand catalogue
//!
//! # Configuration
//!
//! Settings are resolved from CLI arguments, then `QUADRA_*` environment
//! variables, then the `--config` TOML file, then defaults.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use quadra_cli::config::{build_config, CliArgs, LogLevel, OutputFormat};
use quadra_cli::integrands::BuiltinIntegrand;
use quadra_cli::{commands, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Quadra numerical integration CLI
#[derive(Parser)]
#[command(name = "quadra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare all quadrature methods on a built-in integrand
    Compare(ProblemArgs),

    /// Check configuration and list available integrands
    Check(ProblemArgs),
}

/// Problem overrides shared by all commands
#[derive(Args)]
struct ProblemArgs {
    /// Integrand (constant, linear, square, cube, sin, exp, sqrt)
    #[arg(short, long)]
    integrand: Option<BuiltinIntegrand>,

    /// Lower integration bound
    #[arg(short, long, allow_negative_numbers = true)]
    lower: Option<f64>,

    /// Upper integration bound
    #[arg(short, long, allow_negative_numbers = true)]
    upper: Option<f64>,

    /// Number of subintervals
    #[arg(short = 'n', long)]
    intervals: Option<usize>,

    /// Number of Monte Carlo samples
    #[arg(short = 'N', long)]
    samples: Option<usize>,

    /// Monte Carlo seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format (table, csv, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let problem = match &self.command {
            Commands::Compare(args) | Commands::Check(args) => args,
        };
        let log_level = if self.verbose {
            Some(LogLevel::Debug)
        } else {
            self.log_level
        };

        CliArgs {
            config_file: self.config.clone(),
            integrand: problem.integrand,
            lower: problem.lower,
            upper: problem.upper,
            intervals: problem.intervals,
            samples: problem.samples,
            seed: problem.seed,
            format: problem.format,
            log_level,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Compare(_) => commands::compare::run(&config),
        Commands::Check(_) => commands::check::run(&config),
    }
}
