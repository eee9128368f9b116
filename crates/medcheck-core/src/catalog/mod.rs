//! Immutable reference catalogs: symptoms, conditions, and the built-in data
//! behind them.
//!
//! Catalogs are constructed once at startup and shared read-only across
//! concurrent analyses; nothing here mutates after construction.

pub(crate) mod defaults;

use std::collections::HashMap;

use strsim::{jaro_winkler, normalized_levenshtein};
use thiserror::Error;

use crate::models::{Condition, Symptom};

/// Minimum blended similarity for a fuzzy search hit.
const FUZZY_SEARCH_THRESHOLD: f64 = 0.75;

/// Catalog authoring errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate symptom id: {0}")]
    DuplicateSymptom(String),

    #[error("duplicate condition id: {0}")]
    DuplicateCondition(String),

    #[error("condition {condition} references unknown symptom {symptom}")]
    UnknownSymptom { condition: String, symptom: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// The set of known symptoms, with id lookup, category grouping, and
/// free-text search.
pub struct SymptomCatalog {
    symptoms: Vec<Symptom>,
    by_id: HashMap<String, usize>,
}

impl SymptomCatalog {
    /// Build a catalog from an authored symptom list, rejecting duplicate ids.
    pub fn new(symptoms: Vec<Symptom>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(symptoms.len());
        for (idx, symptom) in symptoms.iter().enumerate() {
            if by_id.insert(symptom.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSymptom(symptom.id.clone()));
            }
        }
        Ok(Self { symptoms, by_id })
    }

    /// The built-in symptom catalog.
    pub fn builtin() -> Self {
        let symptoms = defaults::default_symptoms();
        let by_id = symptoms
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.id.clone(), idx))
            .collect();
        Self { symptoms, by_id }
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Look up a symptom by id.
    pub fn get(&self, id: &str) -> Option<&Symptom> {
        self.by_id.get(id).map(|&idx| &self.symptoms[idx])
    }

    /// Whether the catalog knows this symptom id.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All symptoms in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter()
    }

    /// Unique categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for symptom in &self.symptoms {
            if !seen.contains(&symptom.category.as_str()) {
                seen.push(symptom.category.as_str());
            }
        }
        seen
    }

    /// Symptoms grouped by category, categories in first-seen order.
    pub fn by_category(&self) -> Vec<(&str, Vec<&Symptom>)> {
        let mut grouped: Vec<(&str, Vec<&Symptom>)> = Vec::new();
        for symptom in &self.symptoms {
            match grouped.iter_mut().find(|(c, _)| *c == symptom.category) {
                Some((_, list)) => list.push(symptom),
                None => grouped.push((symptom.category.as_str(), vec![symptom])),
            }
        }
        grouped
    }

    /// Free-text search over names and descriptions.
    ///
    /// An empty term returns the whole catalog. Substring matches win; when
    /// none exist the search falls back to fuzzy name similarity so a typo
    /// like "feverr" still surfaces candidates.
    pub fn search(&self, term: &str) -> Vec<&Symptom> {
        if term.is_empty() {
            return self.symptoms.iter().collect();
        }

        let term_lower = term.to_lowercase();
        let matched: Vec<&Symptom> = self
            .symptoms
            .iter()
            .filter(|s| s.matches_term(&term_lower))
            .collect();

        if !matched.is_empty() {
            return matched;
        }

        self.symptoms
            .iter()
            .filter(|s| fuzzy_match(&term_lower, &s.name.to_lowercase()) >= FUZZY_SEARCH_THRESHOLD)
            .collect()
    }
}

/// The set of candidate conditions scored by the ranking policy.
pub struct ConditionCatalog {
    conditions: Vec<Condition>,
    by_id: HashMap<String, usize>,
}

impl ConditionCatalog {
    /// Build a catalog from an authored condition list, rejecting duplicate ids.
    pub fn new(conditions: Vec<Condition>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(conditions.len());
        for (idx, condition) in conditions.iter().enumerate() {
            if by_id.insert(condition.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateCondition(condition.id.clone()));
            }
        }
        Ok(Self { conditions, by_id })
    }

    /// The built-in condition catalog.
    pub fn builtin() -> Self {
        let conditions = defaults::default_conditions();
        let by_id = conditions
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id.clone(), idx))
            .collect();
        Self { conditions, by_id }
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Look up a condition by id.
    pub fn get(&self, id: &str) -> Option<&Condition> {
        self.by_id.get(id).map(|&idx| &self.conditions[idx])
    }

    /// Look up a condition by exact display name. Classifier labels are the
    /// catalog's own names, so no fuzzy matching here.
    pub fn find_by_name(&self, name: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.name == name)
    }

    /// All conditions in declaration order (the ranking tie-break order).
    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    /// Condition names in declaration order, for use as classifier
    /// candidate labels.
    pub fn candidate_labels(&self) -> Vec<String> {
        self.conditions.iter().map(|c| c.name.clone()).collect()
    }

    /// Check the authoring invariant that every characteristic symptom
    /// references a known symptom id. Not applied to user input.
    pub fn validate(&self, symptoms: &SymptomCatalog) -> CatalogResult<()> {
        for condition in &self.conditions {
            for symptom_id in &condition.characteristic_symptoms {
                if !symptoms.contains(symptom_id) {
                    return Err(CatalogError::UnknownSymptom {
                        condition: condition.id.clone(),
                        symptom: symptom_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler catches typos, Levenshtein overall similarity
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    jw * 0.6 + lev * 0.4
}
