//! Symptom models.

use serde::{Deserialize, Serialize};

/// Identifier of a symptom in the catalog (e.g. "resp-1").
pub type SymptomId = String;

/// A single catalog-defined reported health signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Symptom {
    /// Stable, unique identifier
    pub id: SymptomId,
    /// Display name (unique within the catalog)
    pub name: String,
    /// Category label (e.g. "Respiratory", "Neurological")
    pub category: String,
    /// Short plain-language description
    pub description: Option<String>,
}

impl Symptom {
    /// Create a symptom with a description.
    pub fn new(id: &str, name: &str, category: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: Some(description.to_string()),
        }
    }

    /// Case-insensitive match of a search term against name or description.
    pub fn matches_term(&self, term_lower: &str) -> bool {
        if self.name.to_lowercase().contains(term_lower) {
            return true;
        }
        self.description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(term_lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_term_name() {
        let symptom = Symptom::new("gen-1", "Fever", "General", "Elevated body temperature");
        assert!(symptom.matches_term("fever"));
        assert!(symptom.matches_term("fev"));
        assert!(!symptom.matches_term("cough"));
    }

    #[test]
    fn test_matches_term_description() {
        let symptom = Symptom::new("gen-1", "Fever", "General", "Elevated body temperature");
        assert!(symptom.matches_term("temperature"));
    }

    #[test]
    fn test_matches_term_without_description() {
        let symptom = Symptom {
            id: "x-1".into(),
            name: "Test".into(),
            category: "General".into(),
            description: None,
        };
        assert!(symptom.matches_term("test"));
        assert!(!symptom.matches_term("temperature"));
    }
}
