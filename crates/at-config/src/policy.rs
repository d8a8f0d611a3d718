//! Bandit policy configuration.

use at_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of arms (the original six labeled configurations).
pub const DEFAULT_ARM_COUNT: usize = 6;
/// Default starting exploration rate.
pub const DEFAULT_EPSILON: f64 = 0.6;
/// Default geometric decay applied to the exploration rate each round.
pub const DEFAULT_DECAY: f64 = 0.9;
/// Default dispersion-score threshold above which an arm is excluded.
pub const DEFAULT_ELIMINATION_THRESHOLD: f64 = 0.5;
/// Default number of rounds per phase before exploration statistics reset.
pub const DEFAULT_PHASE_LEN: u64 = 1000;

/// Configuration for the epsilon-greedy bandit policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Number of arms. At least 3: the reward environment reserves two
    /// penalty slots and needs one viable arm.
    pub arm_count: usize,
    /// Starting exploration rate, in [0, 1].
    pub epsilon: f64,
    /// Per-round geometric decay of the exploration rate, in [0, 1].
    pub decay: f64,
    /// Dispersion-score threshold for arm exclusion.
    pub elimination_threshold: f64,
    /// Rounds per phase; phase-local statistics reset at each boundary.
    pub phase_len: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            arm_count: DEFAULT_ARM_COUNT,
            epsilon: DEFAULT_EPSILON,
            decay: DEFAULT_DECAY,
            elimination_threshold: DEFAULT_ELIMINATION_THRESHOLD,
            phase_len: DEFAULT_PHASE_LEN,
        }
    }
}

impl PolicyConfig {
    /// Validate parameter ranges, rejecting values the policy cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.arm_count < 3 {
            return Err(Error::InvalidConfig(format!(
                "arm_count must be at least 3, got {}",
                self.arm_count
            )));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidConfig(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(Error::InvalidConfig(format!(
                "decay must be in [0, 1], got {}",
                self.decay
            )));
        }
        if !self.elimination_threshold.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "elimination_threshold must be finite, got {}",
                self.elimination_threshold
            )));
        }
        if self.phase_len == 0 {
            return Err(Error::InvalidConfig(
                "phase_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
