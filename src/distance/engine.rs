//! Weighted optimal string alignment distance.
//!
//! The distance is the cheapest way to turn `source` into `target` using
//! substitutions, adjacent swaps, deletions and insertions, where every
//! substring is touched by at most one swap. Only three rows of the dynamic
//! programming matrix are kept alive, so memory is O(len(target)).

use std::mem;

use clap::ValueEnum;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::distance::config::DistanceConfig;
use crate::distance::symbols::{SymbolMode, graphemes};
use crate::distance::weights::{CostWeights, Weight, WeightOverrides};
use crate::error::Result;

/// Which target symbol a source symbol is compared with when pricing a
/// substitution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionMode {
    /// Compare `source[i]` with `target[i]`, the symbol at the same position,
    /// whatever target column is being filled. A source position past the end
    /// of the target always mismatches. Reproduces the long-standing reference
    /// values, e.g. `Floor -> Flower` costs 3.
    #[default]
    Positional,
    /// Compare `source[i]` with `target[j]`: textbook optimal string alignment.
    /// `Floor -> Flower` costs 2.
    Canonical,
}

impl SubstitutionMode {
    pub fn name(&self) -> &'static str {
        match self {
            SubstitutionMode::Positional => "positional",
            SubstitutionMode::Canonical => "canonical",
        }
    }
}

/// The three live rows: two rows back, previous and current.
struct WorkingRows<W> {
    two_back: Vec<W>,
    previous: Vec<W>,
    current: Vec<W>,
}

impl<W: Weight> WorkingRows<W> {
    /// Rows of `width` cells, with the previous row holding the cost of
    /// inserting every target prefix into an empty source.
    fn new(width: usize, insert: W) -> Self {
        let mut previous = Vec::with_capacity(width);
        let mut cost = W::zero();
        for _ in 0..width {
            previous.push(cost);
            cost = cost.add_cost(insert);
        }

        WorkingRows {
            two_back: vec![W::zero(); width],
            previous,
            current: vec![W::zero(); width],
        }
    }

    /// two back <- previous, previous <- current, current <- old two back.
    fn rotate(&mut self) {
        mem::swap(&mut self.two_back, &mut self.previous);
        mem::swap(&mut self.previous, &mut self.current);
    }
}

/// Compute the weighted optimal string alignment distance.
///
/// Candidates are applied in a fixed order: substitution is the baseline, then
/// swap, deletion and insertion each replace it only when strictly cheaper.
///
/// Weights are expected to be non-negative; see [`CostWeights::validate`].
/// Negative weights are not rejected here and give meaningless results.
/// With integer weights every partial sum saturates, so a distance too large
/// for `W` comes back as `W`'s maximum instead of wrapping.
#[allow(clippy::needless_range_loop)]
pub fn osa_distance<T, W>(
    source: &[T],
    target: &[T],
    weights: &CostWeights<W>,
    mode: SubstitutionMode,
) -> W
where
    T: PartialEq,
    W: Weight,
{
    let target_len = target.len();
    let mut rows = WorkingRows::new(target_len + 1, weights.insert);

    for (i, symbol) in source.iter().enumerate() {
        // previous[0] holds i * delete
        rows.current[0] = rows.previous[0].add_cost(weights.delete);

        // In positional mode the indicator does not depend on the column.
        let positional_mismatch = target.get(i) != Some(symbol);

        for j in 0..target_len {
            let mismatch = match mode {
                SubstitutionMode::Positional => positional_mismatch,
                SubstitutionMode::Canonical => target[j] != *symbol,
            };

            let mut cost = if mismatch {
                rows.previous[j].add_cost(weights.substitute)
            } else {
                rows.previous[j]
            };

            if i > 0 && j > 0 && source[i - 1] == target[j] && *symbol == target[j - 1] {
                let swapped = rows.two_back[j - 1].add_cost(weights.swap);
                if swapped < cost {
                    cost = swapped;
                }
            }

            let deleted = rows.previous[j + 1].add_cost(weights.delete);
            if deleted < cost {
                cost = deleted;
            }

            let inserted = rows.current[j].add_cost(weights.insert);
            if inserted < cost {
                cost = inserted;
            }

            rows.current[j + 1] = cost;
        }

        rows.rotate();
    }

    rows.previous[target_len]
}

/// Distance between two sequences with optional weights, in positional mode.
///
/// Weights the caller did not supply default to 1.
pub fn distance<T, W>(source: &[T], target: &[T], weights: &WeightOverrides<W>) -> W
where
    T: PartialEq,
    W: Weight,
{
    osa_distance(
        source,
        target,
        &weights.resolve(),
        SubstitutionMode::Positional,
    )
}

/// Distance engine bound to a validated configuration.
///
/// The engine holds no mutable state; a single instance can serve any number
/// of concurrent callers.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceEngine<W> {
    config: DistanceConfig<W>,
    weights: CostWeights<W>,
}

impl<W: Weight> Default for DistanceEngine<W> {
    fn default() -> Self {
        DistanceEngine {
            config: DistanceConfig::default(),
            weights: CostWeights::default(),
        }
    }
}

impl<W: Weight> DistanceEngine<W> {
    /// Create an engine, rejecting negative or NaN weights.
    pub fn new(config: DistanceConfig<W>) -> Result<Self> {
        let weights = config.resolved_weights()?;
        Ok(DistanceEngine { config, weights })
    }

    /// Create an engine from fully specified weights and default modes.
    pub fn with_weights(weights: CostWeights<W>) -> Result<Self> {
        Self::new(DistanceConfig::new().with_weights(weights.into()))
    }

    pub fn config(&self) -> &DistanceConfig<W> {
        &self.config
    }

    pub fn weights(&self) -> &CostWeights<W> {
        &self.weights
    }

    pub fn substitution_mode(&self) -> SubstitutionMode {
        self.config.substitution
    }

    /// Distance between two symbol sequences.
    pub fn distance<T: PartialEq>(&self, source: &[T], target: &[T]) -> W {
        trace!(
            "osa distance: source_len={} target_len={} mode={}",
            source.len(),
            target.len(),
            self.config.substitution.name()
        );
        osa_distance(source, target, &self.weights, self.config.substitution)
    }

    /// Distance between two strings, segmented per the configured symbol mode.
    pub fn distance_str(&self, source: &str, target: &str) -> W {
        match self.config.symbols {
            SymbolMode::Bytes => self.distance(source.as_bytes(), target.as_bytes()),
            SymbolMode::Chars => {
                let source: Vec<char> = source.chars().collect();
                let target: Vec<char> = target.chars().collect();
                self.distance(&source, &target)
            }
            SymbolMode::Graphemes => self.distance(&graphemes(source), &graphemes(target)),
        }
    }
}
