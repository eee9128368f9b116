//! Condition models.

use serde::{Deserialize, Serialize};

use super::symptom::SymptomId;

/// A catalog-defined candidate condition with characteristic symptoms and a
/// recommended specialist category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    /// Stable, unique identifier (e.g. "common-cold")
    pub id: String,
    /// Display name, unique within the catalog
    pub name: String,
    /// Plain-language description shown with predictions
    pub description: String,
    /// Specialist category used to join against the provider directory
    pub specialist: String,
    /// Symptom ids used by the scorer as this condition's hallmark set
    pub characteristic_symptoms: Vec<SymptomId>,
    /// Per-condition multiplier applied to high-overlap matches, in (0, 1]
    pub calibration: f64,
}

impl Condition {
    /// Check whether a symptom id belongs to this condition's hallmark set.
    pub fn is_characteristic(&self, symptom_id: &str) -> bool {
        self.characteristic_symptoms.iter().any(|s| s == symptom_id)
    }
}
