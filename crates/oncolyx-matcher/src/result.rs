//! Match-result combination algebra.
//!
//! Absence of a match is a normal value (`Failure`), not an error.
//! `Failure` is absorbing under combination; the empty `Success` is the
//! identity element. Folding an empty sequence therefore yields a
//! vacuous success, which is what gives empty criterium categories
//! their pass-through semantics.

use oncolyx_knowledge::MolecularCriterium;
use oncolyx_molecular::Actionable;

#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    Success {
        actionables: Vec<Actionable>,
        criteria: Vec<MolecularCriterium>,
    },
    Failure,
}

impl MatchResult {
    /// The identity element: a success carrying nothing.
    pub fn empty() -> Self {
        MatchResult::Success { actionables: vec![], criteria: vec![] }
    }

    pub fn success(actionables: Vec<Actionable>) -> Self {
        MatchResult::Success { actionables, criteria: vec![] }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MatchResult::Success { .. })
    }

    /// Merge two results; `Failure` absorbs.
    ///
    /// Actionables are deduplicated by driver identity so one driver
    /// satisfying several sub-criteria appears once; criteria lists are
    /// deduplicated by value.
    pub fn combine(self, other: MatchResult) -> MatchResult {
        match (self, other) {
            (
                MatchResult::Success { mut actionables, mut criteria },
                MatchResult::Success { actionables: other_actionables, criteria: other_criteria },
            ) => {
                for actionable in other_actionables {
                    if !actionables.contains(&actionable) {
                        actionables.push(actionable);
                    }
                }
                for criterium in other_criteria {
                    if !criteria.contains(&criterium) {
                        criteria.push(criterium);
                    }
                }
                MatchResult::Success { actionables, criteria }
            }
            _ => MatchResult::Failure,
        }
    }

    /// Fold results in order, stopping at the first `Failure`.
    ///
    /// Zero results fold to the vacuous success.
    pub fn combine_all<I>(results: I) -> MatchResult
    where
        I: IntoIterator<Item = MatchResult>,
    {
        let mut combined = MatchResult::empty();
        for result in results {
            match result {
                MatchResult::Failure => return MatchResult::Failure,
                success => combined = combined.combine(success),
            }
        }
        combined
    }

    /// Record the criterium a successful match was evaluated against.
    pub fn with_criterium(self, criterium: &MolecularCriterium) -> MatchResult {
        match self {
            MatchResult::Success { actionables, mut criteria } => {
                if !criteria.contains(criterium) {
                    criteria.push(criterium.clone());
                }
                MatchResult::Success { actionables, criteria }
            }
            MatchResult::Failure => MatchResult::Failure,
        }
    }
}
