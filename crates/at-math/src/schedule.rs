//! Annealing schedule helpers.

/// Metropolis acceptance probability for a candidate with objective change
/// `delta` at temperature `temperature`.
///
/// Improvements (`delta < 0`) are accepted with probability 1. Worsening
/// moves are accepted with probability `exp(-delta / T)`. A temperature at
/// or below zero (geometric cooling can underflow to 0.0 after enough
/// iterations) yields probability 0 rather than dividing by zero.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    if temperature <= 0.0 || !temperature.is_finite() {
        return 0.0;
    }
    (-delta / temperature).exp().min(1.0)
}

/// Clamp a proposed hyperparameter to the unit interval.
///
/// NaN proposals (possible when a current value is itself pathological)
/// clamp to 0.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}
