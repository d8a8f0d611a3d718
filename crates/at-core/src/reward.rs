//! Synthetic reward environment.
//!
//! Each episode draws a fresh ground truth: most arms earn uniform rewards
//! in [1.0, 1.5), two arms carry fixed penalties, and the assignment is
//! shuffled. Re-randomizing per episode is intentional: the tuner is graded
//! on robustness to the operating point, not on memorizing one environment.

use at_common::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// The two fixed penalty rewards present in every environment.
pub const PENALTY_REWARDS: [f64; 2] = [-5.0, -10.0];

/// Standard deviation of the Gaussian observation noise.
pub const NOISE_STDDEV: f64 = 0.5;

/// Upper bound (exclusive) of the uniform offset added to every sample.
pub const NOISE_OFFSET_MAX: f64 = 0.5;

/// Fixed-but-randomized true expected reward per arm for one episode.
#[derive(Debug, Clone)]
pub struct RewardModel {
    expected: Vec<f64>,
    noise: Normal<f64>,
}

impl RewardModel {
    /// Draw a fresh ground truth for `arm_count` arms.
    ///
    /// `arm_count - 2` arms get uniform rewards in [1.0, 1.5); the remaining
    /// two get the fixed penalties. Assignment is a random permutation.
    pub fn generate<R: Rng + ?Sized>(arm_count: usize, rng: &mut R) -> Result<Self> {
        if arm_count < 3 {
            return Err(Error::InvalidConfig(format!(
                "reward model needs at least 3 arms (two penalty slots), got {arm_count}"
            )));
        }
        let mut expected: Vec<f64> = (0..arm_count - 2)
            .map(|_| 1.0 + rng.random::<f64>() / 2.0)
            .collect();
        expected.extend_from_slice(&PENALTY_REWARDS);
        expected.shuffle(rng);

        let noise = Normal::new(0.0, NOISE_STDDEV)
            .map_err(|e| Error::InvalidConfig(format!("noise distribution: {e}")))?;
        Ok(Self { expected, noise })
    }

    /// Number of arms in the environment.
    pub fn arm_count(&self) -> usize {
        self.expected.len()
    }

    /// True expected reward of an arm, if the index is valid.
    pub fn true_expected(&self, arm: usize) -> Option<f64> {
        self.expected.get(arm).copied()
    }

    /// Index of the arm with the maximum true expected reward (first
    /// occurrence on ties).
    pub fn best_arm(&self) -> usize {
        let mut best = 0;
        for (i, &value) in self.expected.iter().enumerate().skip(1) {
            if value > self.expected[best] {
                best = i;
            }
        }
        best
    }

    /// Sample a noisy reward for an arm: Gaussian around the true expected
    /// reward plus an independent uniform offset in [0, `NOISE_OFFSET_MAX`).
    pub fn sample<R: Rng + ?Sized>(&self, arm: usize, rng: &mut R) -> Result<f64> {
        let mean = self
            .expected
            .get(arm)
            .copied()
            .ok_or(Error::InvalidArm {
                index: arm,
                arm_count: self.expected.len(),
            })?;
        Ok(mean + self.noise.sample(rng) + rng.random::<f64>() * NOISE_OFFSET_MAX)
    }
}
