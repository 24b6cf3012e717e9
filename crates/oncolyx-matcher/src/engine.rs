//! Combined evidence matcher.
//!
//! Runs one patient's full driver set against every evidence record and
//! every (trial, criterium) pair in the knowledge base, and groups the
//! hits by driver identity. Matching per record is independent, so the
//! knowledge base is fanned out across threads; results merge
//! sequentially. A malformed record is logged and skipped; it never
//! aborts the rest of the evaluation.

use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use oncolyx_knowledge::{
    extract_event, EvidenceRecord, KnowledgeBase, MolecularCriterium, TrialRecord,
};
use oncolyx_molecular::{Actionable, MolecularProfile};

use crate::criterium::match_criterium;
use crate::result::MatchResult;

/// Everything that applies to one matched driver.
#[derive(Debug, Clone, Default)]
pub struct ActionabilityMatch {
    pub evidence: HashSet<EvidenceRecord>,
    /// Trials keyed by identity; a trial matching through several of its
    /// alternative criteria carries the union of those criteria.
    pub trials: HashMap<TrialRecord, HashSet<MolecularCriterium>>,
}

/// Validate a criterium, then match it. Returns the matched drivers, or
/// None for a no-match or a skipped malformed record.
fn checked_match(
    profile: &MolecularProfile,
    criterium: &MolecularCriterium,
    record_label: &str,
) -> Option<Vec<Actionable>> {
    if let Err(error) = extract_event(criterium) {
        warn!("Skipping {}: {}", record_label, error);
        return None;
    }
    match match_criterium(profile, criterium) {
        MatchResult::Success { actionables, .. } if !actionables.is_empty() => Some(actionables),
        _ => None,
    }
}

/// Match one profile against the full knowledge base.
pub fn match_knowledge_base(
    profile: &MolecularProfile,
    knowledge_base: &KnowledgeBase,
) -> HashMap<Actionable, ActionabilityMatch> {
    let evidence_hits: Vec<(Actionable, &EvidenceRecord)> = knowledge_base
        .evidence()
        .par_iter()
        .flat_map_iter(|record| {
            let label = format!("evidence for '{}'", record.treatment);
            checked_match(profile, &record.criterium, &label)
                .unwrap_or_default()
                .into_iter()
                .map(move |actionable| (actionable, record))
                .collect::<Vec<_>>()
        })
        .collect();

    let trial_pairs: Vec<(&TrialRecord, &MolecularCriterium)> = knowledge_base
        .trials()
        .iter()
        .flat_map(|trial| trial.criteria.iter().map(move |criterium| (trial, criterium)))
        .collect();

    let trial_hits: Vec<(Actionable, &TrialRecord, &MolecularCriterium)> = trial_pairs
        .par_iter()
        .flat_map_iter(|(trial, criterium)| {
            let label = format!("trial {}", trial.nct_id);
            checked_match(profile, criterium, &label)
                .unwrap_or_default()
                .into_iter()
                .map(move |actionable| (actionable, *trial, *criterium))
                .collect::<Vec<_>>()
        })
        .collect();

    let mut results: HashMap<Actionable, ActionabilityMatch> = HashMap::new();
    for (actionable, record) in evidence_hits {
        results.entry(actionable).or_default().evidence.insert(record.clone());
    }
    for (actionable, trial, criterium) in trial_hits {
        results
            .entry(actionable)
            .or_default()
            .trials
            .entry(trial.clone())
            .or_default()
            .insert(criterium.clone());
    }
    results
}
