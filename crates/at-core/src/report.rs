//! Serializable run reports for the CLI.
//!
//! The text rendering mirrors the minimal reporting sink of the reference
//! scripts (best regret, best epsilon, best decay); the JSON rendering adds
//! a schema version, timestamps, the effective configuration, and arm
//! labels for machine consumers.

use at_common::{ArmSet, Result, SCHEMA_VERSION};
use at_config::TuneConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::anneal::AnnealOutcome;
use crate::simulate::EpisodeOutcome;

/// Report for a full annealing run.
#[derive(Debug, Clone, Serialize)]
pub struct TuneReport {
    pub schema_version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub arms: ArmSet,
    pub config: TuneConfig,
    pub outcome: AnnealOutcome,
}

impl TuneReport {
    pub fn new(config: TuneConfig, outcome: AnnealOutcome) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            arms: ArmSet::with_count(config.policy.arm_count),
            config,
            outcome,
        }
    }

    /// Render the human-readable summary.
    pub fn render_text(&self) -> String {
        format!(
            "minimal regret: {}\nepsilon: {}, decay: {}\naccepted {}/{} candidates\n",
            self.outcome.best_regret,
            self.outcome.best_epsilon,
            self.outcome.best_decay,
            self.outcome.accepted,
            self.outcome.iterations,
        )
    }

    /// Render the machine-readable report.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Report for a single simulated episode.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeReport {
    pub schema_version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub arms: ArmSet,
    pub outcome: EpisodeOutcome,
}

impl EpisodeReport {
    pub fn new(arm_count: usize, outcome: EpisodeOutcome) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            arms: ArmSet::with_count(arm_count),
            outcome,
        }
    }

    /// Render the human-readable summary.
    pub fn render_text(&self) -> String {
        let best_label = self
            .arms
            .label(self.outcome.best_arm)
            .unwrap_or("<unknown>");
        format!(
            "regret: {}\ncumulative reward: {}\nbest arm: {best_label}\n",
            self.outcome.regret, self.outcome.cumulative_reward,
        )
    }

    /// Render the machine-readable report.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
