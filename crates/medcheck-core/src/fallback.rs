//! Fallback resolver.
//!
//! When the classifier path is unavailable or inconclusive, the caller still
//! receives exactly one plausible, clearly-flagged prediction pointing at a
//! reasonable specialist. Selection is uniform over a small fixed list of
//! common conditions, behind an injectable picker so tests stay exact.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Prediction, PredictionSource};

/// Why the fallback resolver was invoked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FallbackReason {
    /// The model runtime never became ready
    InitFailed,
    /// The classification call failed mid-flight
    CallFailed,
    /// The classifier answered but nothing cleared the confidence threshold
    NoConfidentMatch,
}

impl FallbackReason {
    /// Fixed display probability for this reason. These are presentation
    /// constants, not computed confidences; the fallback flag distinguishes
    /// them from genuine scores.
    pub fn display_probability(self) -> u8 {
        match self {
            FallbackReason::InitFailed => 85,
            FallbackReason::CallFailed => 80,
            FallbackReason::NoConfidentMatch => 75,
        }
    }
}

/// Index selection strategy for the fallback list.
pub trait FallbackPicker: Send + Sync {
    /// Pick an index into a list of `len` entries (`len` is always >= 1).
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random selection, the production default.
pub struct UniformPicker;

impl FallbackPicker for UniformPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic selection for tests.
pub struct FixedPicker(pub usize);

impl FallbackPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// One entry in the fixed fallback list.
#[derive(Debug, Clone)]
struct FallbackChoice {
    condition_ref: &'static str,
    name: &'static str,
    specialist: &'static str,
    description: &'static str,
}

/// Resolver over the fixed fallback list. Total: `resolve` always returns a
/// prediction and never fails.
pub struct FallbackResolver {
    choices: Vec<FallbackChoice>,
}

impl Default for FallbackResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackResolver {
    /// Build the resolver with the default list of common conditions.
    pub fn new() -> Self {
        Self {
            choices: vec![
                FallbackChoice {
                    condition_ref: "common-cold",
                    name: "Common Cold",
                    specialist: "General Physician",
                    description: "A viral infection of the upper respiratory tract that primarily affects the nose and throat.",
                },
                FallbackChoice {
                    condition_ref: "flu",
                    name: "Influenza",
                    specialist: "General Physician",
                    description: "A contagious respiratory illness caused by influenza viruses that infect the nose, throat, and lungs.",
                },
                FallbackChoice {
                    condition_ref: "allergies",
                    name: "Seasonal Allergies",
                    specialist: "Allergist",
                    description: "An immune system response to allergens like pollen, dust, or pet dander.",
                },
                FallbackChoice {
                    condition_ref: "migraine",
                    name: "Migraine",
                    specialist: "Neurologist",
                    description: "A neurological condition that causes severe, recurring headaches, often with other symptoms.",
                },
            ],
        }
    }

    /// Produce the single marked fallback prediction for the given reason.
    pub fn resolve(&self, reason: FallbackReason, picker: &dyn FallbackPicker) -> Prediction {
        let idx = picker.pick(self.choices.len()) % self.choices.len();
        let choice = &self.choices[idx];

        tracing::warn!(
            reason = ?reason,
            condition = %choice.name,
            "serving fallback prediction"
        );

        Prediction {
            condition_ref: choice.condition_ref.to_string(),
            name: choice.name.to_string(),
            probability: reason.display_probability(),
            specialist: choice.specialist.to_string(),
            description: choice.description.to_string(),
            source: PredictionSource::Fallback,
        }
    }
}
