//! Golden tests for the ranking policy.
//!
//! These tests pin the full rank pipeline (score, filter, sort, truncate)
//! against known symptom reports and the built-in catalog.

use medcheck_core::catalog::ConditionCatalog;
use medcheck_core::models::PredictionSource;
use medcheck_core::ranking::{Ranker, CONFIDENCE_THRESHOLD, MAX_PREDICTIONS};

/// Expected outcome for one symptom report.
struct GoldenCase {
    id: &'static str,
    reported: &'static [&'static str],
    /// (condition id, probability) pairs in expected output order
    expected: &'static [(&'static str, u8)],
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "cold-hallmarks",
            reported: &["resp-1", "resp-5", "resp-6", "gen-1"],
            expected: &[("common-cold", 64), ("allergies", 60), ("flu", 40)],
        },
        GoldenCase {
            id: "migraine-triad",
            reported: &["neuro-1", "neuro-2", "gi-1"],
            expected: &[("migraine", 90)],
        },
        GoldenCase {
            id: "gerd-triad",
            reported: &["gi-1", "gi-5", "cardio-1"],
            expected: &[("gerd", 75)],
        },
        GoldenCase {
            id: "noisy-arthritis",
            reported: &["ms-1", "ms-5", "gen-2", "derm-1", "derm-3", "gi-3", "neuro-5"],
            expected: &[("arthritis", 56)],
        },
        GoldenCase {
            id: "bronchial-overlap",
            reported: &["resp-2", "resp-3", "resp-1"],
            expected: &[("asthma", 60), ("common-cold", 40), ("flu", 40)],
        },
        GoldenCase {
            id: "single-symptom-all-damped",
            reported: &["gen-1"],
            expected: &[],
        },
        GoldenCase {
            id: "empty-report",
            reported: &[],
            expected: &[],
        },
    ]
}

#[test]
fn test_golden_cases() {
    let catalog = ConditionCatalog::builtin();
    let ranker = Ranker::new(&catalog);

    for case in get_golden_cases() {
        let reported: Vec<String> = case.reported.iter().map(|s| s.to_string()).collect();
        let predictions = ranker.rank(&reported);

        let actual: Vec<(&str, u8)> = predictions
            .iter()
            .map(|p| (p.condition_ref.as_str(), p.probability))
            .collect();

        assert_eq!(
            actual, case.expected,
            "Case {}: ranking mismatch", case.id
        );
    }
}

#[test]
fn test_golden_cases_respect_policy_invariants() {
    let catalog = ConditionCatalog::builtin();
    let ranker = Ranker::new(&catalog);

    for case in get_golden_cases() {
        let reported: Vec<String> = case.reported.iter().map(|s| s.to_string()).collect();
        let predictions = ranker.rank(&reported);

        assert!(
            predictions.len() <= MAX_PREDICTIONS,
            "Case {}: too many predictions", case.id
        );
        assert!(
            predictions.iter().all(|p| p.probability > CONFIDENCE_THRESHOLD),
            "Case {}: threshold violated", case.id
        );
        assert!(
            predictions.windows(2).all(|w| w[0].probability >= w[1].probability),
            "Case {}: not sorted descending", case.id
        );
        assert!(
            predictions.iter().all(|p| p.source == PredictionSource::Local),
            "Case {}: wrong source", case.id
        );
        assert!(
            predictions.iter().all(|p| !p.is_fallback()),
            "Case {}: local path never produces fallbacks", case.id
        );
    }
}

#[test]
fn test_rank_twice_is_identical() {
    let catalog = ConditionCatalog::builtin();
    let ranker = Ranker::new(&catalog);

    for case in get_golden_cases() {
        let reported: Vec<String> = case.reported.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            ranker.rank(&reported),
            ranker.rank(&reported),
            "Case {}: rank is not idempotent", case.id
        );
    }
}
