//! Ranking and selection policy for the deterministic (offline) path.
//!
//! Scores every condition in the catalog, filters marginal matches, sorts,
//! and truncates to a bounded result set.

mod scorer;

pub use scorer::*;

use std::collections::HashSet;

use crate::catalog::ConditionCatalog;
use crate::models::{Prediction, PredictionSource, SymptomId};

/// Conditions scoring at or below this are not surfaced.
pub const CONFIDENCE_THRESHOLD: u8 = 20;

/// Upper bound on the returned prediction list.
pub const MAX_PREDICTIONS: usize = 3;

/// Apply the shared selection policy: drop scores at or below the
/// confidence threshold, sort descending (stable, so catalog declaration
/// order breaks ties), and keep the top entries.
///
/// The classifier path reuses this on its own scores.
pub fn select_top(mut predictions: Vec<Prediction>) -> Vec<Prediction> {
    predictions.retain(|p| p.probability > CONFIDENCE_THRESHOLD);
    predictions.sort_by(|a, b| b.probability.cmp(&a.probability));
    predictions.truncate(MAX_PREDICTIONS);
    predictions
}

/// Ranker over an immutable condition catalog.
pub struct Ranker<'a> {
    catalog: &'a ConditionCatalog,
}

impl<'a> Ranker<'a> {
    pub fn new(catalog: &'a ConditionCatalog) -> Self {
        Self { catalog }
    }

    /// Rank the catalog against a reported symptom set.
    ///
    /// The whole catalog is scanned before any ordering happens; an empty
    /// report short-circuits to an empty result without scoring.
    pub fn rank(&self, reported: &[SymptomId]) -> Vec<Prediction> {
        if reported.is_empty() {
            return Vec::new();
        }

        let reported_set: HashSet<&str> = reported.iter().map(String::as_str).collect();

        let scored: Vec<Prediction> = self
            .catalog
            .iter()
            .map(|condition| {
                let probability = score(
                    &reported_set,
                    &condition.characteristic_symptoms,
                    condition.calibration,
                );
                Prediction::from_condition(condition, probability, PredictionSource::Local)
            })
            .collect();

        let selected = select_top(scored);

        tracing::debug!(
            reported = reported.len(),
            surfaced = selected.len(),
            "ranked condition catalog"
        );

        selected
    }
}
