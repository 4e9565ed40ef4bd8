//! Configuration for the distance engine.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::distance::engine::SubstitutionMode;
use crate::distance::symbols::SymbolMode;
use crate::distance::weights::{CostWeights, Weight, WeightOverrides};
use crate::error::{EditDistanceError, Result};

/// Configuration for a [`DistanceEngine`](crate::distance::DistanceEngine).
///
/// Every field may be omitted when deserializing; missing weights resolve
/// to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig<W> {
    /// Per-operation weights as supplied by the caller.
    pub weights: WeightOverrides<W>,

    /// Which target symbol substitutions are priced against.
    pub substitution: SubstitutionMode,

    /// How strings are split into symbols.
    pub symbols: SymbolMode,
}

impl<W> Default for DistanceConfig<W> {
    fn default() -> Self {
        Self {
            weights: WeightOverrides::default(),
            substitution: SubstitutionMode::default(),
            symbols: SymbolMode::default(),
        }
    }
}

impl<W: Weight> DistanceConfig<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: WeightOverrides<W>) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_substitution(mut self, substitution: SubstitutionMode) -> Self {
        self.substitution = substitution;
        self
    }

    pub fn with_symbols(mut self, symbols: SymbolMode) -> Self {
        self.symbols = symbols;
        self
    }

    /// Resolve unset weights to 1 and check the result is non-negative.
    pub fn resolved_weights(&self) -> Result<CostWeights<W>> {
        let weights = self.weights.resolve();
        weights.validate()?;
        Ok(weights)
    }
}

impl<W: Weight + DeserializeOwned> DistanceConfig<W> {
    /// Parse a configuration from JSON and validate its weights.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.resolved_weights()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading distance config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            EditDistanceError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }
}
