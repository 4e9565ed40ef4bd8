//! Command line argument parsing for the osadist CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::distance::{DistanceConfig, SubstitutionMode, SymbolMode, WeightOverrides};
use crate::error::Result;

/// osadist - weighted optimal string alignment distance
#[derive(Parser, Debug, Clone)]
#[command(name = "osadist")]
#[command(about = "Weighted Damerau-Levenshtein (optimal string alignment) distance")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OsadistArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OsadistArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity. `-q` still reports errors.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the distance between two strings
    Distance(DistanceArgs),

    /// Compute distances for every pair in a JSONL file
    Batch(BatchArgs),
}

/// Weight and mode options shared by all commands.
#[derive(Args, Debug, Clone, Default)]
pub struct WeightArgs {
    /// Cost of swapping two adjacent symbols (default 1)
    #[arg(long, allow_negative_numbers = true)]
    pub swap: Option<f64>,

    /// Cost of substituting one symbol (default 1)
    #[arg(long, allow_negative_numbers = true)]
    pub substitute: Option<f64>,

    /// Cost of inserting one symbol (default 1)
    #[arg(long, allow_negative_numbers = true)]
    pub insert: Option<f64>,

    /// Cost of deleting one symbol (default 1)
    #[arg(long, allow_negative_numbers = true)]
    pub delete: Option<f64>,

    /// Substitution comparison mode
    #[arg(short = 'm', long)]
    pub mode: Option<SubstitutionMode>,

    /// How strings are split into symbols
    #[arg(short = 's', long)]
    pub symbols: Option<SymbolMode>,

    /// Distance configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl WeightArgs {
    /// Weights given on the command line.
    pub fn overrides(&self) -> WeightOverrides<f64> {
        WeightOverrides {
            swap: self.swap,
            substitute: self.substitute,
            insert: self.insert,
            delete: self.delete,
        }
    }

    /// Build the effective configuration: config file first, then flags.
    pub fn to_config(&self) -> Result<DistanceConfig<f64>> {
        let mut config = match &self.config {
            Some(path) => DistanceConfig::from_json_file(path)?,
            None => DistanceConfig::default(),
        };

        config.weights = config.weights.merge(self.overrides());
        if let Some(mode) = self.mode {
            config.substitution = mode;
        }
        if let Some(symbols) = self.symbols {
            config.symbols = symbols;
        }

        config.resolved_weights()?;
        Ok(config)
    }
}

/// Arguments for a single distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Source string
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target string
    #[arg(value_name = "TARGET")]
    pub target: String,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Arguments for batch evaluation
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSONL file with one {"source": .., "target": ..} object per line
    #[arg(value_name = "PAIRS_FILE")]
    pub input: PathBuf,

    /// Number of threads to use
    #[arg(short, long)]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distance_command() {
        let args = OsadistArgs::try_parse_from([
            "osadist",
            "distance",
            "Floor",
            "Flower",
            "--swap",
            "0.5",
            "--mode",
            "canonical",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Distance(distance) => {
                assert_eq!(distance.source, "Floor");
                assert_eq!(distance.target, "Flower");
                assert_eq!(distance.weights.swap, Some(0.5));
                assert_eq!(distance.weights.insert, None);
                assert_eq!(distance.weights.mode, Some(SubstitutionMode::Canonical));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_negative_weight_reaches_validation() {
        let args =
            OsadistArgs::try_parse_from(["osadist", "distance", "a", "b", "--delete", "-1"])
                .unwrap();
        let Command::Distance(distance) = args.command else {
            panic!("expected distance command");
        };
        assert_eq!(distance.weights.delete, Some(-1.0));
        assert!(distance.weights.to_config().is_err());
    }

    #[test]
    fn test_flags_keep_explicit_zero() {
        let weights = WeightArgs {
            swap: Some(0.0),
            ..Default::default()
        };
        let config = weights.to_config().unwrap();
        let resolved = config.resolved_weights().unwrap();
        assert_eq!(resolved.swap, 0.0);
        assert_eq!(resolved.substitute, 1.0);
    }

    #[test]
    fn test_verbosity() {
        let args = OsadistArgs::try_parse_from(["osadist", "-q", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
        let args =
            OsadistArgs::try_parse_from(["osadist", "-vvv", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 3);
    }

    #[test]
    fn test_log_level() {
        let level = |argv: &[&str]| OsadistArgs::try_parse_from(argv).unwrap().log_level();
        assert_eq!(level(&["osadist", "-q", "-vv", "distance", "a", "b"]), LevelFilter::Error);
        assert_eq!(level(&["osadist", "distance", "a", "b"]), LevelFilter::Warn);
        assert_eq!(level(&["osadist", "-vv", "distance", "a", "b"]), LevelFilter::Info);
        assert_eq!(level(&["osadist", "-vvvv", "batch", "pairs.jsonl"]), LevelFilter::Debug);
    }
}
