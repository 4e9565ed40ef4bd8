//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OsadistArgs, OutputFormat};
use crate::distance::{CostWeights, SubstitutionMode, SymbolMode};
use crate::error::Result;

/// Result structure for a single distance.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub source: String,
    pub target: String,
    pub distance: f64,
    pub weights: CostWeights<f64>,
    pub substitution: SubstitutionMode,
    pub symbols: SymbolMode,
    pub duration_us: u64,
}

impl fmt::Display for DistanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.distance)
    }
}

/// One evaluated pair of a batch.
#[derive(Debug, Serialize, Deserialize)]
pub struct PairDistance {
    pub source: String,
    pub target: String,
    pub distance: f64,
}

/// Result structure for batch evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResults {
    pub results: Vec<PairDistance>,
    pub total_pairs: usize,
    pub threads: usize,
    pub duration_ms: u64,
}

impl fmt::Display for BatchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}\t{}\t{}", pair.distance, pair.source, pair.target)?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &OsadistArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    println!("{}", render_result(message, result, args)?);
    Ok(())
}

/// Render a result the way [`output_result`] prints it.
pub fn render_result<T>(message: &str, result: &T, args: &OsadistArgs) -> Result<String>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => Ok(render_human(message, result, args)),
        OutputFormat::Json => render_json(result, args),
    }
}

fn render_human<T: fmt::Display>(message: &str, result: &T, args: &OsadistArgs) -> String {
    if args.verbosity() > 1 {
        format!("{message}\n{result}")
    } else {
        result.to_string()
    }
}

fn render_json<T: Serialize>(result: &T, args: &OsadistArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
