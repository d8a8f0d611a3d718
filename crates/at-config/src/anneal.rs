//! Simulated annealing configuration.

use at_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default starting temperature.
pub const DEFAULT_TEMPERATURE: f64 = 10_000.0;
/// Default geometric cooling rate applied every iteration.
pub const DEFAULT_COOLING_RATE: f64 = 0.9991;
/// Default iteration budget.
pub const DEFAULT_ITERATIONS: u64 = 10_000;
/// Default relative perturbation scale for candidate proposals.
pub const DEFAULT_PERTURBATION_SCALE: f64 = 0.001;

/// Configuration for the annealing search over (epsilon, decay).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealConfig {
    /// Starting temperature T0.
    pub initial_temperature: f64,
    /// Geometric cooling rate r, in (0, 1); T ← T·r every iteration.
    pub cooling_rate: f64,
    /// Number of annealing iterations.
    pub iterations: u64,
    /// Relative perturbation scale δ; candidates are x + x·δ·U(-1, 1).
    pub perturbation_scale: f64,
    /// Starting epsilon for the search, in [0, 1].
    pub epsilon: f64,
    /// Starting decay for the search, in [0, 1].
    pub decay: f64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: DEFAULT_TEMPERATURE,
            cooling_rate: DEFAULT_COOLING_RATE,
            iterations: DEFAULT_ITERATIONS,
            perturbation_scale: DEFAULT_PERTURBATION_SCALE,
            epsilon: 0.6,
            decay: 0.9,
        }
    }
}

impl AnnealConfig {
    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig(
                "iterations must be positive".to_string(),
            ));
        }
        if !(self.perturbation_scale > 0.0 && self.perturbation_scale <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "perturbation_scale must be in (0, 1], got {}",
                self.perturbation_scale
            )));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidConfig(format!(
                "starting epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(Error::InvalidConfig(format!(
                "starting decay must be in [0, 1], got {}",
                self.decay
            )));
        }
        Ok(())
    }
}
