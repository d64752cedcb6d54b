//! Configuration for algokit
//!
//! Centralized configuration with sensible defaults, loadable from JSON.
//! Only the demo driver consumes it; the data structures themselves take
//! their parameters directly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};
use crate::sorting::SortAlgorithm;

/// Main configuration for an algokit run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Priority Queue Configuration
    // -------------------------------------------------------------------------
    /// Fixed capacity of the demo priority queue
    pub queue_capacity: usize,

    // -------------------------------------------------------------------------
    // Sorting Configuration
    // -------------------------------------------------------------------------
    /// Algorithm used to sort the random sample
    pub sort_algorithm: SortAlgorithm,

    /// Number of random values in the sample
    pub sample_size: usize,

    /// Sample values are drawn from `0..sample_bound`
    pub sample_bound: u32,

    /// RNG seed; `None` draws from entropy
    pub seed: Option<u64>,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue_capacity: 16,
            sort_algorithm: SortAlgorithm::default(),
            sample_size: 5,
            sample_bound: 100,
            seed: None,
            log_filter: "info,algokit=debug".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a JSON document; missing fields take their default values
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| AlgoError::Config(format!("invalid JSON config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Reject values the demo cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            return Err(AlgoError::Config(
                "queue_capacity must be greater than zero".to_string(),
            ));
        }
        if self.sample_bound == 0 {
            return Err(AlgoError::Config(
                "sample_bound must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from an existing config (e.g. one loaded from a file)
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the priority queue capacity
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    /// Set the sort algorithm
    pub fn sort_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.config.sort_algorithm = algorithm;
        self
    }

    /// Set the number of sampled values
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Set the exclusive upper bound for sampled values
    pub fn sample_bound(mut self, bound: u32) -> Self {
        self.config.sample_bound = bound;
        self
    }

    /// Set a fixed RNG seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the default log filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    /// Finish building, validating the result
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
