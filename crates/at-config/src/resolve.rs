//! Aggregate configuration and JSON file loading.

use std::fs;
use std::path::Path;

use at_common::Result;
use serde::{Deserialize, Serialize};

use crate::anneal::AnnealConfig;
use crate::policy::PolicyConfig;

/// Default number of rounds per simulated episode.
pub const DEFAULT_ROUNDS: u64 = 1000;

/// Configuration for one simulated episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of select/feedback rounds per episode.
    pub rounds: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(at_common::Error::InvalidConfig(
                "rounds must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete armtune configuration: policy, simulation, and annealing sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TuneConfig {
    pub policy: PolicyConfig,
    pub simulation: SimulationConfig,
    pub annealing: AnnealConfig,
}

impl TuneConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.policy.validate()?;
        self.simulation.validate()?;
        self.annealing.validate()
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: TuneConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}
