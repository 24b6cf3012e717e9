/// Verdict model shared by all eligibility-rule evaluators.

use serde::{Deserialize, Serialize};

use crate::record::PatientRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationResult {
    Pass,
    Warn,
    Fail,
    /// The rule applies but the record lacks the data to decide.
    Undetermined,
    /// The rule does not apply to this record at all.
    NotEvaluated,
}

impl EvaluationResult {
    /// Severity used by combinators: Fail > Undetermined > Warn > Pass >
    /// NotEvaluated.
    pub(crate) fn severity(&self) -> u8 {
        match self {
            EvaluationResult::Fail         => 4,
            EvaluationResult::Undetermined => 3,
            EvaluationResult::Warn         => 2,
            EvaluationResult::Pass         => 1,
            EvaluationResult::NotEvaluated => 0,
        }
    }
}

/// One evaluator's verdict with human-readable justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub result: EvaluationResult,
    pub messages: Vec<String>,
}

impl Evaluation {
    pub fn new(result: EvaluationResult, message: impl Into<String>) -> Self {
        Self { result, messages: vec![message.into()] }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(EvaluationResult::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(EvaluationResult::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(EvaluationResult::Fail, message)
    }

    pub fn undetermined(message: impl Into<String>) -> Self {
        Self::new(EvaluationResult::Undetermined, message)
    }
}

/// One eligibility rule evaluator.
///
/// Implementations are constructed by the rule-mapping layer from
/// external function specifications; the core only relies on this
/// signature.
pub trait EvaluationFunction: Send + Sync {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(EvaluationResult::Fail.severity() > EvaluationResult::Undetermined.severity());
        assert!(EvaluationResult::Undetermined.severity() > EvaluationResult::Warn.severity());
        assert!(EvaluationResult::Warn.severity() > EvaluationResult::Pass.severity());
        assert!(EvaluationResult::Pass.severity() > EvaluationResult::NotEvaluated.severity());
    }

    #[test]
    fn test_constructor_messages() {
        let evaluation = Evaluation::fail("WHO status above threshold");
        assert_eq!(evaluation.result, EvaluationResult::Fail);
        assert_eq!(evaluation.messages, vec!["WHO status above threshold".to_string()]);
    }
}
