//! Simulated annealing over the policy's (epsilon, decay) hyperparameters.
//!
//! Classic Metropolis chain on a 2-dimensional continuous space clamped to
//! [0, 1] per axis. Each iteration proposes a relative perturbation of the
//! current point, evaluates it with a fresh policy against a fresh reward
//! environment, and accepts by the Metropolis rule; the temperature cools
//! geometrically every iteration regardless of acceptance. Only the
//! best-so-far record survives across episodes.

use at_common::Result;
use at_config::{AnnealConfig, PolicyConfig, SimulationConfig, TuneConfig};
use at_math::{acceptance_probability, clamp_unit};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

use crate::policy::EpsilonGreedy;
use crate::reward::RewardModel;
use crate::simulate::evaluate;

/// Result of one annealing run.
#[derive(Debug, Clone, Serialize)]
pub struct AnnealOutcome {
    /// Lowest regret observed on an accepted configuration.
    pub best_regret: f64,
    /// Epsilon that produced the best regret.
    pub best_epsilon: f64,
    /// Decay that produced the best regret.
    pub best_decay: f64,
    /// Regret of the starting configuration, evaluated once.
    pub initial_regret: f64,
    /// Iterations performed.
    pub iterations: u64,
    /// Candidates accepted (including unconditional improvements).
    pub accepted: u64,
    /// Temperature after the final cooling step.
    pub final_temperature: f64,
}

/// Simulated-annealing tuner using the episode simulator as its objective.
#[derive(Debug, Clone)]
pub struct Annealer {
    anneal: AnnealConfig,
    policy: PolicyConfig,
    simulation: SimulationConfig,
}

impl Annealer {
    /// Create a tuner from a validated aggregate configuration.
    pub fn new(config: TuneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            anneal: config.annealing,
            policy: config.policy,
            simulation: config.simulation,
        })
    }

    /// Evaluate one candidate: fresh policy, fresh environment, one episode.
    fn episode<R: Rng + ?Sized>(&self, epsilon: f64, decay: f64, rng: &mut R) -> Result<f64> {
        let config = PolicyConfig {
            epsilon,
            decay,
            ..self.policy.clone()
        };
        let mut policy = EpsilonGreedy::new(config)?;
        let model = RewardModel::generate(self.policy.arm_count, rng)?;
        let outcome = evaluate(&mut policy, &model, self.simulation.rounds, rng)?;
        Ok(outcome.regret)
    }

    /// Run the full annealing chain and report the best configuration found.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<AnnealOutcome> {
        let delta = self.anneal.perturbation_scale;
        let mut temperature = self.anneal.initial_temperature;
        let mut epsilon = self.anneal.epsilon;
        let mut decay = self.anneal.decay;

        let mut regret = self.episode(epsilon, decay, rng)?;
        let initial_regret = regret;
        let mut best_regret = regret;
        let mut best_epsilon = epsilon;
        let mut best_decay = decay;
        let mut accepted = 0u64;

        for iteration in 0..self.anneal.iterations {
            let candidate_epsilon =
                clamp_unit(epsilon + epsilon * delta * (rng.random::<f64>() * 2.0 - 1.0));
            let candidate_decay =
                clamp_unit(decay + decay * delta * (rng.random::<f64>() * 2.0 - 1.0));
            let candidate_regret = self.episode(candidate_epsilon, candidate_decay, rng)?;
            let delta_regret = candidate_regret - regret;

            let accept = if delta_regret < 0.0 {
                true
            } else {
                rng.random::<f64>() < acceptance_probability(delta_regret, temperature)
            };

            if accept {
                regret = candidate_regret;
                epsilon = candidate_epsilon;
                decay = candidate_decay;
                accepted += 1;
                if regret < best_regret {
                    best_regret = regret;
                    best_epsilon = epsilon;
                    best_decay = decay;
                    debug!(iteration, regret, epsilon, decay, "new best configuration");
                }
            }
            trace!(iteration, temperature, candidate_regret, accept, "annealing step");

            temperature *= self.anneal.cooling_rate;
        }

        Ok(AnnealOutcome {
            best_regret,
            best_epsilon,
            best_decay,
            initial_regret,
            iterations: self.anneal.iterations,
            accepted,
            final_temperature: temperature,
        })
    }
}
