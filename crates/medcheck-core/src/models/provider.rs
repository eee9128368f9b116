//! Provider directory models.

use serde::{Deserialize, Serialize};

/// A doctor or facility entry in the specialist directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    /// Unique identifier (e.g. "doc-1")
    pub id: String,
    /// Provider name
    pub name: String,
    /// Specialist category, matches Condition::specialist
    pub specialty: String,
    /// Hospital or clinic affiliation
    pub affiliation: String,
    /// City-level location label
    pub location_label: String,
    /// Street address
    pub address: String,
    /// Contact phone number
    pub contact: String,
    /// Optional maps link
    pub map_link: Option<String>,
}

impl Provider {
    /// Case-insensitive specialty match.
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialty.eq_ignore_ascii_case(specialty)
    }
}
