//! armtune common types and errors.
//!
//! This crate provides foundational pieces shared across armtune crates:
//! - Arm set labeling for one bandit episode
//! - The unified error type and result alias
//! - Report schema versioning

pub mod arms;
pub mod error;

pub use arms::ArmSet;
pub use error::{Error, Result};

/// Schema version for machine-readable reports.
pub const SCHEMA_VERSION: &str = "1.0.0";
