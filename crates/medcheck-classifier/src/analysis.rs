//! Classifier-backed analysis entry point.
//!
//! Pipeline: validate input → ensure the runtime is ready → classify →
//! map labels back to catalog conditions → filter/sort/truncate → fall back
//! to a single flagged prediction on any failure.

use std::sync::Arc;

use thiserror::Error;

use medcheck_core::catalog::ConditionCatalog;
use medcheck_core::fallback::{FallbackPicker, FallbackReason, FallbackResolver, UniformPicker};
use medcheck_core::models::{Prediction, PredictionSource};
use medcheck_core::ranking;

use crate::runtime::{ClassifierError, ModelHandle};

/// Specialist assigned to classifier labels the catalog does not know, so no
/// classifier output is silently lost.
const UNMATCHED_LABEL_SPECIALIST: &str = "General Physician";

/// The one failure `analyze` surfaces to the caller. Everything on the
/// classifier side is recovered internally.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("at least one symptom is required for analysis")]
    EmptySymptoms,
}

/// Analysis entry point over an injected model runtime and a condition
/// catalog.
pub struct ClassifierAnalyzer<'a> {
    catalog: &'a ConditionCatalog,
    handle: Arc<ModelHandle>,
    fallback: FallbackResolver,
    picker: Box<dyn FallbackPicker>,
}

impl<'a> ClassifierAnalyzer<'a> {
    pub fn new(catalog: &'a ConditionCatalog, handle: Arc<ModelHandle>) -> Self {
        Self {
            catalog,
            handle,
            fallback: FallbackResolver::new(),
            picker: Box::new(UniformPicker),
        }
    }

    /// Replace the fallback selection strategy (tests use a fixed picker).
    pub fn with_picker(mut self, picker: Box<dyn FallbackPicker>) -> Self {
        self.picker = picker;
        self
    }

    /// Analyze a reported symptom list.
    ///
    /// Resolves with 1-3 predictions: classifier results when the runtime
    /// cooperates, otherwise exactly one flagged fallback. The only error is
    /// an empty report.
    pub async fn analyze(&self, symptoms: &[String]) -> Result<Vec<Prediction>, AnalyzeError> {
        if symptoms.is_empty() {
            return Err(AnalyzeError::EmptySymptoms);
        }

        let predictions = match self.classify_symptoms(symptoms).await {
            Ok(predictions) if !predictions.is_empty() => predictions,
            Ok(_) => vec![self
                .fallback
                .resolve(FallbackReason::NoConfidentMatch, self.picker.as_ref())],
            Err(ClassifierError::Unavailable(_)) => vec![self
                .fallback
                .resolve(FallbackReason::InitFailed, self.picker.as_ref())],
            Err(ClassifierError::CallFailed(_)) => vec![self
                .fallback
                .resolve(FallbackReason::CallFailed, self.picker.as_ref())],
        };

        tracing::info!(
            symptoms = symptoms.len(),
            predictions = predictions.len(),
            fallback = predictions[0].is_fallback(),
            "symptom analysis complete"
        );

        Ok(predictions)
    }

    async fn classify_symptoms(
        &self,
        symptoms: &[String],
    ) -> Result<Vec<Prediction>, ClassifierError> {
        self.handle.ensure_ready().await?;

        let prompt = symptoms.join(", ");
        let labels = self.catalog.candidate_labels();
        let output = self.handle.classify(&prompt, &labels).await?;

        let scored: Vec<Prediction> = output
            .labels
            .iter()
            .zip(output.scores.iter())
            .map(|(label, &score)| self.map_label(label, score))
            .collect();

        Ok(ranking::select_top(scored))
    }

    /// Map a classifier label back to a catalog condition; unmatched labels
    /// keep their score under a synthesized reference rather than being
    /// dropped.
    fn map_label(&self, label: &str, score: f64) -> Prediction {
        let probability = scale_score(score);
        match self.catalog.find_by_name(label) {
            Some(condition) => {
                Prediction::from_condition(condition, probability, PredictionSource::Classifier)
            }
            None => Prediction {
                condition_ref: format!("label-{}", uuid::Uuid::new_v4()),
                name: label.to_string(),
                probability,
                specialist: UNMATCHED_LABEL_SPECIALIST.to_string(),
                description: String::new(),
                source: PredictionSource::Classifier,
            },
        }
    }
}

/// Scale a raw [0, 1] confidence to the 0-100 probability range.
fn scale_score(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
