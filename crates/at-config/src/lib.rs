//! armtune configuration loading and validation.
//!
//! This crate provides:
//! - Typed structs for the bandit policy, simulation, and annealing sections
//! - Semantic validation rejecting degenerate parameter values
//! - JSON file loading for the aggregate `TuneConfig`

pub mod anneal;
pub mod policy;
pub mod resolve;

pub use anneal::AnnealConfig;
pub use policy::PolicyConfig;
pub use resolve::{SimulationConfig, TuneConfig};
