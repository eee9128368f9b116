//! Analysis history record shape.
//!
//! The core only produces the serializable record; persistence belongs to
//! the caller's history sink.

use serde::{Deserialize, Serialize};

use crate::models::Prediction;

/// One completed analysis: the reported symptoms and the predictions they
/// produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    /// Record id, generated locally
    pub id: String,
    /// RFC 3339 creation timestamp
    pub recorded_at: String,
    /// Reported symptom names as the user entered them
    pub symptoms: Vec<String>,
    /// Predictions returned for this analysis
    pub predictions: Vec<Prediction>,
}

impl HistoryRecord {
    /// Create a record stamped with the current time.
    pub fn new(symptoms: Vec<String>, predictions: Vec<Prediction>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            recorded_at: chrono::Utc::now().to_rfc3339(),
            symptoms,
            predictions,
        }
    }
}
