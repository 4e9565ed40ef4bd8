//! Command implementations for the osadist CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::batch::{BatchConfig, BatchEngine, StringPair};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::distance::DistanceEngine;
use crate::error::{EditDistanceError, Result};

/// Execute a CLI command.
pub fn execute_command(args: OsadistArgs) -> Result<()> {
    match &args.command {
        Command::Distance(distance_args) => compute_distance(distance_args.clone(), &args),
        Command::Batch(batch_args) => compute_batch(batch_args.clone(), &args),
    }
}

/// Compute a single distance.
fn compute_distance(args: DistanceArgs, cli_args: &OsadistArgs) -> Result<()> {
    let config = args.weights.to_config()?;
    let engine = DistanceEngine::new(config)?;
    debug!(
        "Computing distance with {:?} ({} mode, {} symbols)",
        engine.weights(),
        engine.config().substitution.name(),
        engine.config().symbols.name()
    );

    let start_time = Instant::now();
    let distance = engine.distance_str(&args.source, &args.target);
    let duration = start_time.elapsed();

    output_result(
        "Distance computed",
        &DistanceResult {
            source: args.source,
            target: args.target,
            distance,
            weights: *engine.weights(),
            substitution: engine.config().substitution,
            symbols: engine.config().symbols,
            duration_us: duration.as_micros() as u64,
        },
        cli_args,
    )
}

/// Compute distances for every pair in a JSONL file.
fn compute_batch(args: BatchArgs, cli_args: &OsadistArgs) -> Result<()> {
    let pairs = read_pairs(&args.input)?;
    info!("Loaded {} pairs from {}", pairs.len(), args.input.display());

    let engine = DistanceEngine::new(args.weights.to_config()?)?;
    let mut batch_config = BatchConfig::default();
    if let Some(threads) = args.threads {
        batch_config = batch_config.with_threads(threads);
    }
    let batch = BatchEngine::new(engine, batch_config)?;

    let start_time = Instant::now();
    let distances = batch.distances(&pairs);
    let duration = start_time.elapsed();

    let results = pairs
        .into_iter()
        .zip(distances)
        .map(|(pair, distance)| PairDistance {
            source: pair.source,
            target: pair.target,
            distance,
        })
        .collect::<Vec<_>>();

    output_result(
        "Batch computed",
        &BatchResults {
            total_pairs: results.len(),
            results,
            threads: batch.config().effective_threads(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Read source/target pairs from a JSONL file. Blank lines are skipped.
pub fn read_pairs(path: &Path) -> Result<Vec<StringPair>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut pairs = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let pair = serde_json::from_str::<StringPair>(&line).map_err(|e| {
            EditDistanceError::invalid_argument(format!(
                "{} line {}: {e}",
                path.display(),
                line_num + 1
            ))
        })?;
        pairs.push(pair);
    }

    Ok(pairs)
}
