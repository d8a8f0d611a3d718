//! armtune core: bandit policy, episode simulator, and annealing tuner.
//!
//! The crate is organized leaf-first:
//! - [`reward`] — synthetic ground-truth reward environment for one episode
//! - [`policy`] — epsilon-greedy arm selection with decaying exploration,
//!   phase resets, and dispersion-based arm exclusion
//! - [`simulate`] — runs a policy against a reward model and computes regret
//! - [`anneal`] — simulated annealing over the policy's (epsilon, decay)
//! - [`report`] — serializable run reports for the CLI
//!
//! Everything stochastic takes a caller-supplied [`rand::Rng`], so tests
//! drive the whole stack from a seeded `StdRng`.

pub mod anneal;
pub mod policy;
pub mod report;
pub mod reward;
pub mod simulate;

pub use anneal::{AnnealOutcome, Annealer};
pub use policy::{EpsilonGreedy, PolicyStats};
pub use report::{EpisodeReport, TuneReport};
pub use reward::RewardModel;
pub use simulate::{evaluate, EpisodeOutcome, OPTIMISM_MARGIN};
