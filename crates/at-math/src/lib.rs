//! armtune numeric helpers.
//!
//! Small pure functions shared by the policy and the annealer:
//! - Metropolis acceptance probability with a temperature-underflow guard
//! - Unit-interval clamping for hyperparameter proposals
//! - The asymmetric dispersion score driving arm exclusion

pub mod schedule;
pub mod spread;

pub use schedule::{acceptance_probability, clamp_unit};
pub use spread::dispersion_scores;
