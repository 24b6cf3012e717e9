//! Generic evaluator combinators.
//!
//! Rule mappings compose concrete evaluators with these; the catalog of
//! concrete evaluators itself lives outside the workspace.

use crate::evaluation::{Evaluation, EvaluationFunction, EvaluationResult};
use crate::record::PatientRecord;

fn combined_messages(evaluations: &[Evaluation]) -> Vec<String> {
    evaluations.iter().flat_map(|e| e.messages.iter().cloned()).collect()
}

/// Passes only if every inner evaluator passes; the worst verdict wins.
pub struct And {
    functions: Vec<Box<dyn EvaluationFunction>>,
}

impl And {
    pub fn new(functions: Vec<Box<dyn EvaluationFunction>>) -> Self {
        Self { functions }
    }
}

impl EvaluationFunction for And {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let evaluations: Vec<Evaluation> =
            self.functions.iter().map(|f| f.evaluate(record)).collect();
        let result = evaluations
            .iter()
            .map(|e| e.result)
            .max_by_key(EvaluationResult::severity)
            .unwrap_or(EvaluationResult::NotEvaluated);
        Evaluation { result, messages: combined_messages(&evaluations) }
    }
}

/// Passes if any inner evaluator passes; the best verdict wins.
pub struct Or {
    functions: Vec<Box<dyn EvaluationFunction>>,
}

impl Or {
    pub fn new(functions: Vec<Box<dyn EvaluationFunction>>) -> Self {
        Self { functions }
    }
}

impl EvaluationFunction for Or {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let evaluations: Vec<Evaluation> =
            self.functions.iter().map(|f| f.evaluate(record)).collect();
        // Verdicts that did apply outrank NotEvaluated.
        let result = evaluations
            .iter()
            .map(|e| e.result)
            .filter(|r| *r != EvaluationResult::NotEvaluated)
            .min_by_key(EvaluationResult::severity)
            .unwrap_or(EvaluationResult::NotEvaluated);
        Evaluation { result, messages: combined_messages(&evaluations) }
    }
}

/// Swaps Pass and Fail; Warn and Undetermined stay as they are.
pub struct Not {
    function: Box<dyn EvaluationFunction>,
}

impl Not {
    pub fn new(function: Box<dyn EvaluationFunction>) -> Self {
        Self { function }
    }
}

impl EvaluationFunction for Not {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let inner = self.function.evaluate(record);
        let result = match inner.result {
            EvaluationResult::Pass => EvaluationResult::Fail,
            EvaluationResult::Fail => EvaluationResult::Pass,
            other => other,
        };
        Evaluation { result, messages: inner.messages }
    }
}

/// Downgrades a passing inner evaluator to a warning; a failing inner
/// evaluator passes. Used for criteria a trial tolerates but wants
/// surfaced to the clinician.
pub struct WarnIf {
    function: Box<dyn EvaluationFunction>,
}

impl WarnIf {
    pub fn new(function: Box<dyn EvaluationFunction>) -> Self {
        Self { function }
    }
}

impl EvaluationFunction for WarnIf {
    fn evaluate(&self, record: &PatientRecord) -> Evaluation {
        let inner = self.function.evaluate(record);
        let result = match inner.result {
            EvaluationResult::Pass | EvaluationResult::Warn => EvaluationResult::Warn,
            EvaluationResult::Fail => EvaluationResult::Pass,
            other => other,
        };
        Evaluation { result, messages: inner.messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncolyx_molecular::MolecularProfile;

    struct Fixed(EvaluationResult);

    impl EvaluationFunction for Fixed {
        fn evaluate(&self, _record: &PatientRecord) -> Evaluation {
            Evaluation::new(self.0, "fixed")
        }
    }

    fn record() -> PatientRecord {
        PatientRecord {
            patient_id: "ONC-001".to_string(),
            birth_year: Some(1960),
            who_status: Some(1),
            molecular: MolecularProfile::new(vec![], vec![]),
        }
    }

    fn boxed(result: EvaluationResult) -> Box<dyn EvaluationFunction> {
        Box::new(Fixed(result))
    }

    #[test]
    fn test_and_takes_worst_verdict() {
        let and = And::new(vec![boxed(EvaluationResult::Pass), boxed(EvaluationResult::Fail)]);
        assert_eq!(and.evaluate(&record()).result, EvaluationResult::Fail);

        let and = And::new(vec![boxed(EvaluationResult::Pass), boxed(EvaluationResult::Warn)]);
        assert_eq!(and.evaluate(&record()).result, EvaluationResult::Warn);
    }

    #[test]
    fn test_and_collects_messages() {
        let and = And::new(vec![boxed(EvaluationResult::Pass), boxed(EvaluationResult::Pass)]);
        assert_eq!(and.evaluate(&record()).messages.len(), 2);
    }

    #[test]
    fn test_or_takes_best_applicable_verdict() {
        let or = Or::new(vec![boxed(EvaluationResult::Fail), boxed(EvaluationResult::Pass)]);
        assert_eq!(or.evaluate(&record()).result, EvaluationResult::Pass);

        let or = Or::new(vec![boxed(EvaluationResult::Fail), boxed(EvaluationResult::NotEvaluated)]);
        assert_eq!(or.evaluate(&record()).result, EvaluationResult::Fail);
    }

    #[test]
    fn test_not_swaps_pass_and_fail() {
        assert_eq!(
            Not::new(boxed(EvaluationResult::Pass)).evaluate(&record()).result,
            EvaluationResult::Fail
        );
        assert_eq!(
            Not::new(boxed(EvaluationResult::Fail)).evaluate(&record()).result,
            EvaluationResult::Pass
        );
        assert_eq!(
            Not::new(boxed(EvaluationResult::Undetermined)).evaluate(&record()).result,
            EvaluationResult::Undetermined
        );
    }

    #[test]
    fn test_warn_if_downgrades_pass() {
        assert_eq!(
            WarnIf::new(boxed(EvaluationResult::Pass)).evaluate(&record()).result,
            EvaluationResult::Warn
        );
        assert_eq!(
            WarnIf::new(boxed(EvaluationResult::Fail)).evaluate(&record()).result,
            EvaluationResult::Pass
        );
    }
}
