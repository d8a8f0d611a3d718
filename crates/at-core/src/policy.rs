//! Epsilon-greedy bandit policy with decaying exploration and arm pruning.
//!
//! The policy runs in phases of `phase_len` rounds. Within a phase it
//! first round-robins every active arm once, then alternates between
//! exploration (uniform random active arm, probability ε) and exploitation
//! (highest running mean). ε decays geometrically each non-round-robin
//! round. At every phase boundary the policy considers excluding one
//! underperforming arm via the dispersion score, then resets its
//! phase-local statistics.
//!
//! Exclusion is monotonic: an excluded arm is never selected, never reset,
//! and never rejoins. Lifetime sums and pull counts survive phase resets.

use at_common::{Error, Result};
use at_config::PolicyConfig;
use at_math::dispersion_scores;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

// ── Policy state ────────────────────────────────────────────────────────

/// Stateful epsilon-greedy decision engine over a fixed set of arm indices.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    config: PolicyConfig,
    /// Current exploration rate; decays within a phase, restored on reset.
    epsilon: f64,
    /// Rounds played in the current phase.
    round_in_phase: u64,
    /// Exclusion flags over fixed arm indices (replaces the list-mutation
    /// approach; indices stay valid for the policy's lifetime).
    excluded: Vec<bool>,
    /// Lifetime pull counts, untouched by phase resets.
    lifetime_pulls: Vec<u64>,
    /// Lifetime reward sums, untouched by phase resets.
    lifetime_sums: Vec<f64>,
    /// Pulls since the last phase reset.
    phase_pulls: Vec<u64>,
    /// Reward sums since the last phase reset.
    phase_sums: Vec<f64>,
    /// Running mean estimates: phase sum / phase pulls, per arm.
    means: Vec<f64>,
}

/// Serializable snapshot of policy state for reports and diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyStats {
    pub lifetime_pulls: Vec<u64>,
    pub phase_pulls: Vec<u64>,
    pub running_means: Vec<f64>,
    pub excluded: Vec<bool>,
    pub cumulative_reward: f64,
    pub exploration_rate: f64,
}

impl EpsilonGreedy {
    /// Create a fresh policy. Rejects invalid configurations.
    pub fn new(config: PolicyConfig) -> Result<Self> {
        config.validate()?;
        let n = config.arm_count;
        Ok(Self {
            epsilon: config.epsilon,
            round_in_phase: 0,
            excluded: vec![false; n],
            lifetime_pulls: vec![0; n],
            lifetime_sums: vec![0.0; n],
            phase_pulls: vec![0; n],
            phase_sums: vec![0.0; n],
            means: vec![0.0; n],
            config,
        })
    }

    // ── Selection ───────────────────────────────────────────────────────

    /// Select the next arm to play.
    ///
    /// Crossing the phase boundary first runs one elimination pass, then
    /// resets phase-local statistics (this call becomes round 1 of the new
    /// phase). While any active arm is unsampled in the current phase the
    /// choice is a deterministic round-robin; afterwards ε decays and the
    /// policy explores or exploits. Never returns an excluded arm.
    pub fn select_arm<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        self.round_in_phase += 1;
        if self.round_in_phase > self.config.phase_len {
            self.maybe_eliminate_arm();
            self.reset();
            self.round_in_phase = 1;
        }

        let active: Vec<usize> = (0..self.config.arm_count)
            .filter(|&i| !self.excluded[i])
            .collect();
        if active.is_empty() {
            // Unreachable while the last-arm guard holds; surfaced rather
            // than panicking in case of caller misuse.
            return Err(Error::DegenerateElimination {
                arm_count: self.config.arm_count,
            });
        }

        // Forced round-robin: every active arm gets sampled once per phase
        // before exploitation begins.
        if active.iter().any(|&i| self.phase_pulls[i] == 0) {
            let mut fewest = active[0];
            for &i in &active[1..] {
                if self.phase_pulls[i] < self.phase_pulls[fewest] {
                    fewest = i;
                }
            }
            return Ok(fewest);
        }

        self.epsilon *= self.config.decay;
        if rng.random::<f64>() < self.epsilon {
            return Ok(active[rng.random_range(0..active.len())]);
        }

        let mut best = active[0];
        for &i in &active[1..] {
            if self.means[i] > self.means[best] {
                best = i;
            }
        }
        Ok(best)
    }

    // ── Feedback ────────────────────────────────────────────────────────

    /// Record an observed reward for an arm.
    ///
    /// Updates lifetime and phase-local sums and counts, then recomputes
    /// that arm's running mean only.
    pub fn record_feedback(&mut self, arm: usize, reward: f64) -> Result<()> {
        if arm >= self.config.arm_count {
            return Err(Error::InvalidArm {
                index: arm,
                arm_count: self.config.arm_count,
            });
        }
        self.lifetime_sums[arm] += reward;
        self.lifetime_pulls[arm] += 1;
        self.phase_sums[arm] += reward;
        self.phase_pulls[arm] += 1;
        self.means[arm] = self.phase_sums[arm] / self.phase_pulls[arm] as f64;
        Ok(())
    }

    // ── Elimination ─────────────────────────────────────────────────────

    /// Exclude at most one underperforming arm.
    ///
    /// Computes every arm's dispersion score and excludes the first
    /// (ascending index) active arm whose score exceeds the threshold.
    /// Refuses to exclude the last remaining active arm.
    pub fn maybe_eliminate_arm(&mut self) {
        if self.active_count() <= 1 {
            return;
        }
        let scores = dispersion_scores(&self.means, &self.excluded);
        for (i, &score) in scores.iter().enumerate() {
            if !self.excluded[i] && score > self.config.elimination_threshold {
                self.excluded[i] = true;
                debug!(arm = i, score, "excluded underperforming arm");
                return;
            }
        }
    }

    // ── Phase reset ─────────────────────────────────────────────────────

    /// Reset phase-local statistics.
    ///
    /// Clears the round counter, phase-local sums, pulls-since-reset, and
    /// running means of active arms, and restores the exploration rate to
    /// its configured starting value. Lifetime sums and pull counts are
    /// untouched. Excluded arms are neither reset nor reinstated.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.round_in_phase = 0;
        self.epsilon = self.config.epsilon;
        for i in 0..self.config.arm_count {
            if self.excluded[i] {
                continue;
            }
            self.phase_pulls[i] = 0;
            self.phase_sums[i] = 0.0;
            self.means[i] = 0.0;
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Total reward accumulated across all arms over the policy's lifetime.
    pub fn total_reward(&self) -> f64 {
        self.lifetime_sums.iter().sum()
    }

    /// Running mean estimate for an arm, if the index is valid.
    pub fn running_mean(&self, arm: usize) -> Option<f64> {
        self.means.get(arm).copied()
    }

    /// Whether an arm has been excluded. Out-of-range indices report false.
    pub fn is_excluded(&self, arm: usize) -> bool {
        self.excluded.get(arm).copied().unwrap_or(false)
    }

    /// Number of arms still in play.
    pub fn active_count(&self) -> usize {
        self.excluded.iter().filter(|&&e| !e).count()
    }

    /// Current exploration rate.
    pub fn exploration_rate(&self) -> f64 {
        self.epsilon
    }

    /// Configuration reference.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Snapshot of the policy state.
    pub fn stats(&self) -> PolicyStats {
        PolicyStats {
            lifetime_pulls: self.lifetime_pulls.clone(),
            phase_pulls: self.phase_pulls.clone(),
            running_means: self.means.clone(),
            excluded: self.excluded.clone(),
            cumulative_reward: self.total_reward(),
            exploration_rate: self.epsilon,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
