//! Prediction output models.

use serde::{Deserialize, Serialize};

use super::condition::Condition;

/// Which path produced a prediction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PredictionSource {
    /// Deterministic symptom-overlap scorer
    Local,
    /// External zero-shot classifier
    Classifier,
    /// Fallback resolver (non-evidence-based, clearly flagged)
    Fallback,
}

/// A scored, ranked output associating a condition with a probability and a
/// recommended specialist. Owned by the caller; never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    /// Catalog condition id, or a synthesized id for labels the catalog
    /// does not know
    pub condition_ref: String,
    /// Condition display name
    pub name: String,
    /// Calibrated probability, integer 0-100
    pub probability: u8,
    /// Specialist category for provider lookup
    pub specialist: String,
    /// Condition description (empty for unmatched classifier labels)
    pub description: String,
    /// Provenance of this prediction
    pub source: PredictionSource,
}

impl Prediction {
    /// Build a prediction from a catalog condition and a computed score.
    pub fn from_condition(condition: &Condition, probability: u8, source: PredictionSource) -> Self {
        Self {
            condition_ref: condition.id.clone(),
            name: condition.name.clone(),
            probability,
            specialist: condition.specialist.clone(),
            description: condition.description.clone(),
            source,
        }
    }

    /// Whether this prediction came from the fallback resolver rather than
    /// a scoring path.
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, PredictionSource::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_condition() {
        let condition = Condition {
            id: "migraine".into(),
            name: "Migraine".into(),
            description: "A neurological condition causing severe headaches.".into(),
            specialist: "Neurologist".into(),
            characteristic_symptoms: vec!["neuro-1".into()],
            calibration: 0.9,
        };

        let prediction = Prediction::from_condition(&condition, 72, PredictionSource::Local);
        assert_eq!(prediction.condition_ref, "migraine");
        assert_eq!(prediction.probability, 72);
        assert_eq!(prediction.specialist, "Neurologist");
        assert!(!prediction.is_fallback());
    }

    #[test]
    fn test_is_fallback() {
        let prediction = Prediction {
            condition_ref: "common-cold".into(),
            name: "Common Cold".into(),
            probability: 80,
            specialist: "General Physician".into(),
            description: String::new(),
            source: PredictionSource::Fallback,
        };
        assert!(prediction.is_fallback());
    }

    #[test]
    fn test_serde_round_trip() {
        let prediction = Prediction {
            condition_ref: "flu".into(),
            name: "Influenza".into(),
            probability: 64,
            specialist: "General Physician".into(),
            description: "A contagious respiratory illness.".into(),
            source: PredictionSource::Classifier,
        };

        let json = serde_json::to_string(&prediction).unwrap();
        let back: Prediction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prediction);
    }
}
