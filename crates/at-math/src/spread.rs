//! Asymmetric dispersion scores for arm exclusion.
//!
//! This is deliberately not a standard deviation: there is no squaring and
//! no square root, and each arm's score sums the signed deviations of the
//! *other* arms. The exact numeric behavior determines elimination timing
//! in the policy, so it is preserved as found.

/// Compute the dispersion score of every arm.
///
/// The overall mean sums the running means of non-excluded arms and divides
/// by the total arm count. Arm `i`'s score is the sum of `mean_j - overall`
/// over every other non-excluded arm `j`, again divided by the total arm
/// count. Excluded arms receive a score computed the same way; callers skip
/// them when deciding exclusions.
pub fn dispersion_scores(means: &[f64], excluded: &[bool]) -> Vec<f64> {
    debug_assert_eq!(means.len(), excluded.len());
    let arm_count = means.len();
    if arm_count == 0 {
        return Vec::new();
    }
    let overall: f64 = means
        .iter()
        .zip(excluded.iter())
        .filter(|(_, &skip)| !skip)
        .map(|(&m, _)| m)
        .sum::<f64>()
        / arm_count as f64;

    (0..arm_count)
        .map(|i| {
            let deviation: f64 = (0..arm_count)
                .filter(|&j| j != i && !excluded[j])
                .map(|j| means[j] - overall)
                .sum();
            deviation / arm_count as f64
        })
        .collect()
}
