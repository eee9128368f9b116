//! Deterministic symptom-overlap scorer.
//!
//! Pure function from a reported symptom set and a condition's hallmark set
//! to a calibrated probability. Total: every input produces a valid integer.

use std::collections::HashSet;

use crate::models::SymptomId;

/// Score returned for an empty report: almost no evidence, almost no
/// confidence, but never zero so sorting and display stay non-degenerate.
pub const MIN_EVIDENCE_SCORE: u8 = 10;

/// Hard cap; 100 is reserved to avoid implying certainty.
pub const MAX_SCORE: u8 = 99;

/// Fraction of the hallmark set that must be covered before the
/// condition-specific calibration factor kicks in.
const HIGH_OVERLAP_RATIO: f64 = 0.7;

/// Damp applied when at most one hallmark symptom matches.
const SINGLE_MATCH_DAMP: f64 = 0.3;

/// Penalty applied when unrelated symptoms outnumber the hallmark set.
const NOISE_PENALTY: f64 = 0.8;

/// Compute the calibrated probability that a reported symptom set points at
/// a condition with the given hallmark set.
///
/// `calibration` is the condition's tunable boost for high-overlap matches,
/// in (0, 1].
pub fn score(reported: &HashSet<&str>, characteristic: &[SymptomId], calibration: f64) -> u8 {
    if reported.is_empty() {
        return MIN_EVIDENCE_SCORE;
    }
    // A condition with no hallmark symptoms can never accumulate evidence.
    if characteristic.is_empty() {
        return 0;
    }

    let hallmark_len = characteristic.len() as f64;
    let overlap = characteristic
        .iter()
        .filter(|s| reported.contains(s.as_str()))
        .count();

    let mut probability = overlap as f64 / hallmark_len * 100.0;

    // The boost and the damp are mutually exclusive: a fully-matched small
    // hallmark set takes the boost branch.
    if overlap as f64 >= HIGH_OVERLAP_RATIO * hallmark_len {
        probability *= calibration;
    } else if overlap <= 1 {
        probability *= SINGLE_MATCH_DAMP;
    }

    let unrelated = reported.len() - overlap;
    if unrelated > characteristic.len() {
        probability *= NOISE_PENALTY;
    }

    (probability.round() as u8).min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(list: &[&str]) -> Vec<SymptomId> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn reported<'a>(list: &[&'a str]) -> HashSet<&'a str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_empty_report_scores_minimum() {
        let characteristic = ids(&["resp-1", "resp-5", "gen-1"]);
        assert_eq!(score(&HashSet::new(), &characteristic, 0.8), MIN_EVIDENCE_SCORE);
        assert_eq!(score(&HashSet::new(), &characteristic, 0.1), MIN_EVIDENCE_SCORE);
        assert_eq!(score(&HashSet::new(), &[], 0.9), MIN_EVIDENCE_SCORE);
    }

    #[test]
    fn test_empty_hallmark_set_scores_zero() {
        assert_eq!(score(&reported(&["gen-1"]), &[], 0.8), 0);
    }

    #[test]
    fn test_full_overlap_applies_calibration() {
        let characteristic = ids(&["resp-1", "resp-5", "gen-1"]);
        // 3/3 hallmarks reported: 100 * 0.8
        assert_eq!(score(&reported(&["resp-1", "resp-5", "gen-1"]), &characteristic, 0.8), 80);
    }

    #[test]
    fn test_single_match_is_damped() {
        let characteristic = ids(&["resp-1", "resp-5", "gen-1", "resp-2", "resp-6"]);
        // 1/5 hallmarks: 20 * 0.3
        assert_eq!(score(&reported(&["resp-1"]), &characteristic, 0.8), 6);
    }

    #[test]
    fn test_mid_overlap_has_no_adjustment() {
        let characteristic = ids(&["resp-1", "resp-5", "gen-1", "resp-2", "resp-6"]);
        // 2/5 hallmarks: below the 0.7 boost cutoff, above the damp cutoff
        assert_eq!(score(&reported(&["resp-1", "gen-1"]), &characteristic, 0.8), 40);
    }

    #[test]
    fn test_fully_matched_single_hallmark_takes_boost_branch() {
        let characteristic = ids(&["neuro-1"]);
        // overlap == 1 == hallmark size: the boost wins over the damp
        assert_eq!(score(&reported(&["neuro-1"]), &characteristic, 0.9), 90);
    }

    #[test]
    fn test_noise_penalty() {
        let characteristic = ids(&["gi-1", "gi-5"]);
        // 2/2 matched but 3 unrelated symptoms against a 2-entry hallmark set:
        // 100 * 0.75 * 0.8
        let symptoms = reported(&["gi-1", "gi-5", "derm-1", "derm-2", "derm-3"]);
        assert_eq!(score(&symptoms, &characteristic, 0.75), 60);

        // Same match without the noise
        assert_eq!(score(&reported(&["gi-1", "gi-5"]), &characteristic, 0.75), 75);
    }

    #[test]
    fn test_confident_match_outranks_incidental_match() {
        let characteristic = ids(&["resp-1", "resp-5", "gen-1", "resp-2", "resp-6"]);
        let full = score(
            &reported(&["resp-1", "resp-5", "gen-1", "resp-2", "resp-6"]),
            &characteristic,
            0.8,
        );
        let incidental = score(&reported(&["resp-1"]), &characteristic, 0.8);
        assert!(full > incidental);
    }

    #[test]
    fn test_never_reaches_one_hundred() {
        let characteristic = ids(&["gen-1"]);
        assert_eq!(score(&reported(&["gen-1"]), &characteristic, 1.0), MAX_SCORE);
    }

    proptest! {
        #[test]
        fn prop_score_is_always_in_range(
            reported_ids in proptest::collection::hash_set("[a-z]{1,4}-[0-9]", 0..12),
            characteristic in proptest::collection::vec("[a-z]{1,4}-[0-9]", 0..12),
            calibration in 0.05f64..=1.0,
        ) {
            let reported_refs: HashSet<&str> = reported_ids.iter().map(String::as_str).collect();
            let value = score(&reported_refs, &characteristic, calibration);
            prop_assert!(value <= MAX_SCORE);
        }

        #[test]
        fn prop_empty_report_is_constant(
            characteristic in proptest::collection::vec("[a-z]{1,4}-[0-9]", 0..12),
            calibration in 0.05f64..=1.0,
        ) {
            prop_assert_eq!(score(&HashSet::new(), &characteristic, calibration), MIN_EVIDENCE_SCORE);
        }
    }
}
