//! oncolyx-eligibility — Contract between the actionability core and the
//! eligibility-rule evaluators.
//!
//! The evaluator catalog itself (lab thresholds, comorbidity checks)
//! lives outside this workspace; what is shared is the verdict model,
//! the evaluation trait, and the generic combinators rule mappings are
//! composed from.

pub mod combinators;
pub mod evaluation;
pub mod record;

pub use combinators::{And, Not, Or, WarnIf};
pub use evaluation::{Evaluation, EvaluationFunction, EvaluationResult};
pub use record::{EligibilityRule, PatientRecord};
