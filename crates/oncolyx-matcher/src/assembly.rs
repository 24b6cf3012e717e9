//! Result assembly for the reporting collaborator.
//!
//! Converts the per-driver match map plus cancer-type applicability
//! labels into the evidence and trial summaries the report renders.
//! Ordering is deterministic: evidence by level, direction, then
//! treatment; trials by registry id; drivers by display name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use oncolyx_knowledge::{EvidenceDirection, EvidenceLevel};
use oncolyx_molecular::Actionable;
use oncolyx_ontology::{CancerTypeApplicability, CancerTypeResolver};

use crate::engine::ActionabilityMatch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentEvidenceEntry {
    pub treatment: String,
    pub level: EvidenceLevel,
    pub direction: EvidenceDirection,
    pub date: NaiveDate,
    pub source_event: String,
    /// Rendered apart downstream: pan-cancer evidence must not read as
    /// tumor-type-specific.
    pub applicability: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialMatchEntry {
    pub nct_id: String,
    pub title: String,
    pub acronym: Option<String>,
    pub countries: Vec<String>,
    /// How many of the trial's alternative criteria this driver satisfied.
    pub matched_criteria: usize,
    pub applicability: String,
}

/// Actionability summary for one matched driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverActionability {
    pub actionable: Actionable,
    pub evidence: Vec<TreatmentEvidenceEntry>,
    pub trials: Vec<TrialMatchEntry>,
}

fn applicability_label(applicability: CancerTypeApplicability) -> String {
    applicability.as_str().to_string()
}

/// Responsive evidence sorts before resistance evidence, which sorts
/// before no-benefit findings.
fn direction_rank(direction: EvidenceDirection) -> u8 {
    if direction.is_responsive() {
        0
    } else if direction.is_resistant() {
        1
    } else {
        2
    }
}

/// Assemble the reporting-facing summaries.
pub fn assemble(
    matches: &HashMap<Actionable, ActionabilityMatch>,
    resolver: &CancerTypeResolver,
) -> Vec<DriverActionability> {
    let mut assembled: Vec<DriverActionability> = matches
        .iter()
        .map(|(actionable, matched)| {
            let mut evidence: Vec<TreatmentEvidenceEntry> = matched
                .evidence
                .iter()
                .map(|record| TreatmentEvidenceEntry {
                    treatment: record.treatment.clone(),
                    level: record.level,
                    direction: record.direction,
                    date: record.source_date,
                    source_event: record.source_event.clone(),
                    applicability: applicability_label(resolver.classify(&record.indication)),
                })
                .collect();
            evidence.sort_by(|a, b| {
                a.level
                    .cmp(&b.level)
                    .then_with(|| direction_rank(a.direction).cmp(&direction_rank(b.direction)))
                    .then_with(|| a.treatment.cmp(&b.treatment))
                    .then_with(|| b.date.cmp(&a.date))
            });
            evidence.dedup();

            let mut trials: Vec<TrialMatchEntry> = matched
                .trials
                .iter()
                .map(|(trial, criteria)| TrialMatchEntry {
                    nct_id: trial.nct_id.clone(),
                    title: trial.title.clone(),
                    acronym: trial.acronym.clone(),
                    countries: trial.countries.iter().map(|c| c.name.clone()).collect(),
                    matched_criteria: criteria.len(),
                    applicability: applicability_label(resolver.classify_best(&trial.indications)),
                })
                .collect();
            trials.sort_by(|a, b| a.nct_id.cmp(&b.nct_id));

            DriverActionability { actionable: actionable.clone(), evidence, trials }
        })
        .collect();

    assembled.sort_by_key(|entry| entry.actionable.driver.display());
    assembled
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncolyx_common::CurationConfig;
    use oncolyx_knowledge::KnowledgeBase;
    use oncolyx_molecular::MolecularProfile;
    use oncolyx_test_utils::{
        braf_v600e_criterium, braf_v600e_variant, evidence_for, evidence_with_level,
        indication_for, melanoma_indication, melanoma_ontology, trial_for,
    };

    use crate::engine::match_knowledge_base;

    #[test]
    fn test_evidence_sorted_by_level_then_treatment() {
        let profile =
            MolecularProfile::new(vec![braf_v600e_variant(true)], vec!["1909".to_string()]);
        let kb = KnowledgeBase::new(
            vec![
                evidence_with_level("Zelboraf", braf_v600e_criterium(), melanoma_indication(), EvidenceLevel::B),
                evidence_with_level("Dabrafenib", braf_v600e_criterium(), melanoma_indication(), EvidenceLevel::A),
                evidence_with_level("Atezolizumab", braf_v600e_criterium(), melanoma_indication(), EvidenceLevel::B),
            ],
            vec![],
            &CurationConfig::default(),
        );
        let resolver = CancerTypeResolver::new(&melanoma_ontology(), &profile.tumor_doids);

        let assembled = assemble(&match_knowledge_base(&profile, &kb), &resolver);
        assert_eq!(assembled.len(), 1);
        let treatments: Vec<&str> =
            assembled[0].evidence.iter().map(|e| e.treatment.as_str()).collect();
        assert_eq!(treatments, vec!["Dabrafenib", "Atezolizumab", "Zelboraf"]);
    }

    #[test]
    fn test_applicability_labels_partition() {
        let profile =
            MolecularProfile::new(vec![braf_v600e_variant(true)], vec!["1909".to_string()]);
        let kb = KnowledgeBase::new(
            vec![
                evidence_for("OnLabel", braf_v600e_criterium(), melanoma_indication()),
                evidence_for("PanTumor", braf_v600e_criterium(), indication_for("162")),
                evidence_for("OffLabel", braf_v600e_criterium(), indication_for("1749")),
            ],
            vec![],
            &CurationConfig::default(),
        );
        let resolver = CancerTypeResolver::new(&melanoma_ontology(), &profile.tumor_doids);

        let assembled = assemble(&match_knowledge_base(&profile, &kb), &resolver);
        let by_treatment: HashMap<&str, &str> = assembled[0]
            .evidence
            .iter()
            .map(|e| (e.treatment.as_str(), e.applicability.as_str()))
            .collect();
        assert_eq!(by_treatment["OnLabel"], "on_label");
        assert_eq!(by_treatment["PanTumor"], "pan_cancer");
        assert_eq!(by_treatment["OffLabel"], "off_label");
    }

    #[test]
    fn test_trial_entry_counts_matched_criteria() {
        let profile =
            MolecularProfile::new(vec![braf_v600e_variant(true)], vec!["1909".to_string()]);
        let trial = trial_for(
            "NCT00000001",
            vec![braf_v600e_criterium()],
            vec![melanoma_indication()],
        );
        let kb = KnowledgeBase::new(vec![], vec![trial], &CurationConfig::default());
        let resolver = CancerTypeResolver::new(&melanoma_ontology(), &profile.tumor_doids);

        let assembled = assemble(&match_knowledge_base(&profile, &kb), &resolver);
        assert_eq!(assembled.len(), 1);
        assert_eq!(assembled[0].trials.len(), 1);
        assert_eq!(assembled[0].trials[0].matched_criteria, 1);
        assert_eq!(assembled[0].trials[0].applicability, "on_label");
    }
}
