//! oncolyx-matcher — The molecular actionability matching engine.
//!
//! Decides, for a patient's detected genomic alterations, which pieces
//! of external evidence and which trials apply. Per-category predicate
//! matchers feed a combination algebra with vacuous-success and
//! short-circuit semantics; the combined matcher runs one patient's
//! profile against the full knowledge base.

pub mod assembly;
pub mod characteristic;
pub mod criterium;
pub mod engine;
pub mod fusion;
pub mod gene;
pub mod hotspot;
pub mod range;
pub mod result;

pub use assembly::{assemble, DriverActionability, TreatmentEvidenceEntry, TrialMatchEntry};
pub use criterium::match_criterium;
pub use engine::{match_knowledge_base, ActionabilityMatch};
pub use result::MatchResult;
