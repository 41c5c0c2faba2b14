//! Property-based tests for the statistics core
//!
//! Covers the value parser, descriptive summaries and the significance
//! backend with random inputs. Kept fast enough to run on every commit.

use dockbench::stats::{ci_multiplier, summarize};
use dockbench::value::parse_value;
use proptest::prelude::*;

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..80)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_parse_value_never_panics(input in ".{0,24}") {
        // Whatever comes back must be a finite number
        if let Some(v) = parse_value(&input) {
            prop_assert!(v.is_finite());
        }
    }

    #[test]
    fn prop_parse_value_accepts_suffixed_numbers(
        v in -1.0e9f64..1.0e9,
        suffix in prop::sample::select(vec!["", "ms", " ms", "%", "MB/s", " GiB"]),
    ) {
        let text = format!("  {}{}  ", v, suffix);
        prop_assert_eq!(parse_value(&text), Some(v));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_summary_bounds(values in sample()) {
        let s = summarize(&values).unwrap();

        prop_assert_eq!(s.n, values.len());
        prop_assert!(s.min <= s.median && s.median <= s.max);
        prop_assert!(s.min <= s.mean + 0.01 && s.mean <= s.max + 0.01);
        prop_assert!(s.std >= 0.0);
        prop_assert!(s.ci_95 >= 0.0);
    }

    #[test]
    fn prop_ci_brackets_mean(values in sample()) {
        // Bounds come from unrounded values, so allow one rounding step
        let s = summarize(&values).unwrap();
        prop_assert!(s.ci_lower <= s.mean + 0.011);
        prop_assert!(s.mean <= s.ci_upper + 0.011);
        prop_assert!(((s.ci_upper - s.ci_lower) - 2.0 * s.ci_95).abs() <= 0.03);
    }

    #[test]
    fn prop_median_is_upper_middle(values in sample()) {
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        let expected = sorted[values.len() / 2];

        let s = summarize(&values).unwrap();
        prop_assert!((s.median - expected).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn prop_single_value_has_no_spread(v in -1.0e6f64..1.0e6) {
        let s = summarize(&[v]).unwrap();
        prop_assert_eq!(s.std, 0.0);
        prop_assert_eq!(s.ci_95, 0.0);
        prop_assert_eq!(s.min, s.max);
    }

    #[test]
    fn prop_multiplier_brackets(n in 0usize..200) {
        let expected = if n >= 30 {
            1.96
        } else if n >= 20 {
            2.045
        } else if n >= 10 {
            2.262
        } else {
            2.776
        };
        prop_assert_eq!(ci_multiplier(n), expected);
    }

    #[test]
    fn prop_multiplier_non_increasing(n in 0usize..200) {
        prop_assert!(ci_multiplier(n + 1) <= ci_multiplier(n));
    }
}

#[cfg(feature = "significance")]
mod significance {
    use dockbench::significance::{
        mann_whitney_u, RankSumBackend, SignificanceBackend, SignificanceConfig,
    };
    use proptest::prelude::*;

    fn group() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.0f64..1000.0, 5..40)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_result_ranges(a in group(), b in group()) {
            let backend = RankSumBackend::new(SignificanceConfig::default());
            let r = backend.compare(&a, &b).unwrap();

            prop_assert!((0.0..=1.0).contains(&r.p_value));
            prop_assert!((-1.0..=1.0).contains(&r.cliffs_delta));
            prop_assert!(r.u_statistic >= 0.0);
            prop_assert!(r.u_statistic <= (a.len() * b.len()) as f64);
        }

        #[test]
        fn prop_swapping_groups_mirrors_u(a in group(), b in group()) {
            let ab = mann_whitney_u(&a, &b).unwrap();
            let ba = mann_whitney_u(&b, &a).unwrap();

            let total = (a.len() * b.len()) as f64;
            prop_assert!((ab.u1 + ba.u1 - total).abs() < 1e-6);
            prop_assert!((ab.p_value - ba.p_value).abs() < 1e-9);
        }

        #[test]
        fn prop_significance_matches_level(a in group(), b in group(), level in 0.001f64..0.2) {
            let config = SignificanceConfig {
                significance_level: level,
                ..SignificanceConfig::default()
            };
            let exact = mann_whitney_u(&a, &b).unwrap();
            let r = RankSumBackend::new(config).compare(&a, &b).unwrap();
            prop_assert_eq!(r.significant, exact.p_value < level);
        }

        #[test]
        fn prop_undersized_group_is_not_tested(
            a in prop::collection::vec(0.0f64..1000.0, 1..5),
            b in group(),
        ) {
            let backend = RankSumBackend::new(SignificanceConfig::default());
            prop_assert!(backend.compare(&a, &b).is_none());
            prop_assert!(backend.compare(&b, &a).is_none());
        }
    }
}
