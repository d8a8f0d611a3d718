//! Property-based tests for the bandit policy invariants.

use at_config::PolicyConfig;
use at_core::EpsilonGreedy;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fresh(arm_count: usize) -> EpsilonGreedy {
    EpsilonGreedy::new(PolicyConfig {
        arm_count,
        ..Default::default()
    })
    .expect("valid policy config")
}

proptest! {
    /// During the first `arm_count` rounds on a fresh policy, every arm is
    /// selected exactly once regardless of seed or observed rewards.
    #[test]
    fn round_robin_covers_each_arm_exactly_once(
        arm_count in 3usize..=12,
        seed in any::<u64>(),
        reward in -10.0f64..10.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut policy = fresh(arm_count);
        let mut seen = vec![0u32; arm_count];
        for _ in 0..arm_count {
            let arm = policy.select_arm(&mut rng).unwrap();
            seen[arm] += 1;
            policy.record_feedback(arm, reward).unwrap();
        }
        prop_assert!(seen.iter().all(|&c| c == 1), "selections: {seen:?}");
    }

    /// The running mean after any feedback sequence equals the phase-local
    /// sum divided by the pulls-since-reset for that arm.
    #[test]
    fn running_mean_matches_phase_statistics(
        rewards in proptest::collection::vec((0usize..4, -10.0f64..10.0), 1..64),
    ) {
        let mut policy = fresh(4);
        let mut sums = [0.0f64; 4];
        let mut pulls = [0u64; 4];
        for (arm, reward) in rewards {
            policy.record_feedback(arm, reward).unwrap();
            sums[arm] += reward;
            pulls[arm] += 1;
            let expected = sums[arm] / pulls[arm] as f64;
            let actual = policy.running_mean(arm).unwrap();
            prop_assert!((actual - expected).abs() < 1e-9);
        }
    }

    /// Epsilon outside the unit interval is rejected at construction.
    #[test]
    fn out_of_range_epsilon_rejected(epsilon in 1.0001f64..100.0) {
        let config = PolicyConfig { epsilon, ..Default::default() };
        prop_assert!(EpsilonGreedy::new(config).is_err());
    }

    /// Decay outside the unit interval is rejected at construction.
    #[test]
    fn negative_decay_rejected(decay in -100.0f64..-0.0001) {
        let config = PolicyConfig { decay, ..Default::default() };
        prop_assert!(EpsilonGreedy::new(config).is_err());
    }

    /// An excluded arm is never selected again, whatever the seed.
    #[test]
    fn excluded_arm_never_selected(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut policy = EpsilonGreedy::new(PolicyConfig {
            arm_count: 4,
            // Any positive score crosses this threshold.
            elimination_threshold: -1.0,
            epsilon: 1.0,
            decay: 1.0,
            ..Default::default()
        })
        .unwrap();
        for (arm, reward) in [(0, 1.0), (1, 2.0), (2, 3.0), (3, 4.0)] {
            policy.record_feedback(arm, reward).unwrap();
        }
        policy.maybe_eliminate_arm();
        let excluded: Vec<usize> = (0..4).filter(|&i| policy.is_excluded(i)).collect();
        prop_assert_eq!(excluded.len(), 1);
        for _ in 0..200 {
            let arm = policy.select_arm(&mut rng).unwrap();
            prop_assert!(!policy.is_excluded(arm));
            policy.record_feedback(arm, 1.0).unwrap();
        }
    }

    /// Repeated elimination passes exclude at most one arm each and never
    /// drop below one active arm.
    #[test]
    fn elimination_is_monotonic_and_bounded(calls in 1usize..12) {
        let mut policy = EpsilonGreedy::new(PolicyConfig {
            arm_count: 5,
            elimination_threshold: -1.0,
            ..Default::default()
        })
        .unwrap();
        for arm in 0..5 {
            policy.record_feedback(arm, arm as f64).unwrap();
        }
        let mut active = policy.active_count();
        for _ in 0..calls {
            policy.maybe_eliminate_arm();
            let now = policy.active_count();
            prop_assert!(active - now <= 1);
            prop_assert!(now >= 1);
            active = now;
        }
    }
}
