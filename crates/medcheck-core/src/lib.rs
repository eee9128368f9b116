//! Medcheck Core Library
//!
//! Symptom-to-condition triage engine for a consumer health app: immutable
//! reference catalogs, a deterministic overlap scorer, the ranking policy,
//! and the fallback policy that keeps results usable when the classifier
//! path is down.
//!
//! # Architecture
//!
//! ```text
//! Reported symptoms ──► Ranking Policy ──► Deterministic Scorer (local path)
//!         │                                        │
//!         │                              filter > threshold, sort, top 3
//!         ▼                                        │
//! Classifier Adapter (medcheck-classifier)         ▼
//!         │                                  Predictions
//!         │ unavailable / failed / inconclusive    │
//!         ▼                                        ▼
//!   Fallback Resolver ──► single flagged     Specialist Directory
//!         prediction                          (provider lookup)
//! ```
//!
//! # Core Principle
//!
//! **The caller always receives an explainable result.** The local path is
//! pure and total; the classifier path recovers through the fallback
//! resolver; only an empty symptom report is rejected.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Symptom, Condition, Prediction, Provider)
//! - [`catalog`]: Immutable symptom/condition catalogs with lookup and search
//! - [`ranking`]: Deterministic scorer and the filter/sort/truncate policy
//! - [`fallback`]: Fallback resolver with injectable selection
//! - [`directory`]: Specialist-to-provider lookup
//! - [`report`]: Prediction enrichment with referrals and advice
//! - [`history`]: Serializable analysis record for the caller's history sink
//! - [`advice`]: Precaution and diet recommendation tables

pub mod advice;
pub mod catalog;
pub mod directory;
pub mod fallback;
pub mod history;
pub mod models;
pub mod ranking;
pub mod report;

// Re-export commonly used types
pub use advice::AdviceSheet;
pub use catalog::{CatalogError, ConditionCatalog, SymptomCatalog};
pub use directory::ProviderDirectory;
pub use fallback::{FallbackPicker, FallbackReason, FallbackResolver, FixedPicker, UniformPicker};
pub use history::HistoryRecord;
pub use models::{Condition, Prediction, PredictionSource, Provider, Symptom, SymptomId};
pub use ranking::{Ranker, CONFIDENCE_THRESHOLD, MAX_PREDICTIONS};
pub use report::{build_report, AnalysisReport, SpecialistReferral};
