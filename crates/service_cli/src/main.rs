//! Replistrat CLI - Asian option pricing and replication on the command line
//!
//! Front end for the `pricer_lattice` engine.
//!
//! # Commands
//!
//! - `replistrat price` - Model constants, root price, and initial hedge
//! - `replistrat tree` - The full per-node table (table, JSON, or CSV)
//!
//! # Architecture
//!
//! The engine is a pure library function; this crate only parses
//! parameters, invokes one computation per run, and renders the result.

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricer_lattice::{LatticeParams, OptionKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Replistrat Asian option lattice CLI
#[derive(Parser)]
#[command(name = "replistrat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Call/put choice on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    /// Average-strike call
    Call,
    /// Average-strike put
    Put,
}

impl From<KindArg> for OptionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Call => OptionKind::Call,
            KindArg::Put => OptionKind::Put,
        }
    }
}

/// Option and model parameters shared by all commands.
#[derive(Args)]
struct ModelArgs {
    /// Option kind
    #[arg(short, long, value_enum, default_value = "call")]
    kind: KindArg,

    /// Initial underlying price S
    #[arg(short, long, default_value = "100.0")]
    spot: f64,

    /// Strike price K
    #[arg(short = 'K', long, default_value = "100.0")]
    strike: f64,

    /// Risk-free rate r, per annum
    #[arg(short, long, default_value = "0.05")]
    rate: f64,

    /// Maturity T in years
    #[arg(short, long, default_value = "1.0")]
    maturity: f64,

    /// Drift mu of the geometric random walk, per annum
    #[arg(short, long, default_value = "0.10")]
    drift: f64,

    /// Volatility sigma, per annum
    #[arg(short = 'o', long, default_value = "0.20")]
    volatility: f64,

    /// Number of tree periods N (tree size is 2^(N+1) - 1 nodes)
    #[arg(short, long, default_value = "4")]
    periods: usize,
}

impl ModelArgs {
    fn to_params(&self) -> LatticeParams {
        LatticeParams {
            kind: self.kind.into(),
            spot: self.spot,
            strike: self.strike,
            rate: self.rate,
            maturity: self.maturity,
            drift: self.drift,
            volatility: self.volatility,
            periods: self.periods,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price the option and show the initial hedge
    Price {
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Print the full tree, one row per path node
    Tree {
        #[command(flatten)]
        model: ModelArgs,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { model } => commands::price::run(&model.to_params()),
        Commands::Tree { model, format } => commands::tree::run(&model.to_params(), &format),
    }
}
