//! Analysis report assembly.
//!
//! Joins a prediction list against the provider directory and the advice
//! tables into the shape the caller renders and persists.

use serde::{Deserialize, Serialize};

use crate::advice::{self, AdviceSheet};
use crate::directory::ProviderDirectory;
use crate::models::{Prediction, Provider};

/// Providers recommended for one specialist category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialistReferral {
    pub specialist: String,
    /// Directory matches in declaration order; legitimately empty for
    /// specialties the directory does not cover
    pub providers: Vec<Provider>,
}

/// A complete analysis result: ranked predictions, specialist referrals,
/// and attached advice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub predictions: Vec<Prediction>,
    pub referrals: Vec<SpecialistReferral>,
    pub advice: AdviceSheet,
}

/// Enrich a prediction list with provider referrals and advice.
///
/// Referrals cover each distinct specialist in prediction order, once.
pub fn build_report(predictions: Vec<Prediction>, directory: &ProviderDirectory) -> AnalysisReport {
    let advice = advice::for_predictions(&predictions);

    let mut referrals: Vec<SpecialistReferral> = Vec::new();
    for prediction in &predictions {
        if referrals
            .iter()
            .any(|r| r.specialist.eq_ignore_ascii_case(&prediction.specialist))
        {
            continue;
        }
        referrals.push(SpecialistReferral {
            specialist: prediction.specialist.clone(),
            providers: directory
                .find_providers(&prediction.specialist)
                .into_iter()
                .cloned()
                .collect(),
        });
    }

    AnalysisReport {
        predictions,
        referrals,
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PredictionSource;

    fn prediction(condition_ref: &str, specialist: &str) -> Prediction {
        Prediction {
            condition_ref: condition_ref.into(),
            name: condition_ref.into(),
            probability: 60,
            specialist: specialist.into(),
            description: String::new(),
            source: PredictionSource::Local,
        }
    }

    #[test]
    fn test_referrals_dedup_specialists_in_order() {
        let directory = ProviderDirectory::builtin();
        let report = build_report(
            vec![
                prediction("common-cold", "General Physician"),
                prediction("flu", "General Physician"),
                prediction("allergies", "Allergist"),
            ],
            &directory,
        );

        assert_eq!(report.referrals.len(), 2);
        assert_eq!(report.referrals[0].specialist, "General Physician");
        assert_eq!(report.referrals[0].providers.len(), 2);
        assert_eq!(report.referrals[1].specialist, "Allergist");
        assert_eq!(report.referrals[1].providers.len(), 1);
    }

    #[test]
    fn test_unknown_specialist_keeps_empty_referral() {
        let directory = ProviderDirectory::builtin();
        let report = build_report(vec![prediction("x", "Sleep Specialist")], &directory);

        assert_eq!(report.referrals.len(), 1);
        assert!(report.referrals[0].providers.is_empty());
    }

    #[test]
    fn test_empty_predictions_build_an_empty_report_with_general_advice() {
        let directory = ProviderDirectory::builtin();
        let report = build_report(Vec::new(), &directory);

        assert!(report.predictions.is_empty());
        assert!(report.referrals.is_empty());
        assert!(!report.advice.precautions.is_empty());
    }
}
