//! Load-time applicability filtering.
//!
//! Removes knowledge-base entries whose criterium matches a curated
//! exclusion (over-broad hotspot definitions, deprecated gene events).
//! Runs once when the knowledge base is loaded; it never sees patient
//! data, so the cost is amortized across all patients.

use oncolyx_common::CurationConfig;
use tracing::{debug, info};

use crate::criterium::MolecularCriterium;
use crate::record::{EvidenceRecord, TrialRecord};

/// Does any curated exclusion rule hit this criterium?
pub fn is_applicable(criterium: &MolecularCriterium, curation: &CurationConfig) -> bool {
    let excluded_hotspot = criterium
        .hotspots
        .iter()
        .any(|h| curation.excludes_hotspot(&h.gene, h.annotation.as_deref()));

    let excluded_gene_event = criterium
        .gene_events
        .iter()
        .any(|g| curation.excludes_gene_event(&g.gene, g.kind.as_str()));

    !excluded_hotspot && !excluded_gene_event
}

/// Drop evidence records hit by a curated exclusion.
pub fn filter_evidence(records: Vec<EvidenceRecord>, curation: &CurationConfig) -> Vec<EvidenceRecord> {
    let before = records.len();
    let kept: Vec<EvidenceRecord> = records
        .into_iter()
        .filter(|record| {
            let applicable = is_applicable(&record.criterium, curation);
            if !applicable {
                debug!("Filtered evidence for '{}' ({})", record.treatment, record.criterium.summary());
            }
            applicable
        })
        .collect();
    info!("Evidence filtering kept {}/{} records", kept.len(), before);
    kept
}

/// Prune excluded criteria from each trial's any-of set; drop trials with
/// no applicable criterium left.
pub fn filter_trials(records: Vec<TrialRecord>, curation: &CurationConfig) -> Vec<TrialRecord> {
    let before = records.len();
    let kept: Vec<TrialRecord> = records
        .into_iter()
        .filter_map(|mut trial| {
            trial.criteria.retain(|criterium| {
                let applicable = is_applicable(criterium, curation);
                if !applicable {
                    debug!("Filtered criterium ({}) from trial {}", criterium.summary(), trial.nct_id);
                }
                applicable
            });
            if trial.criteria.is_empty() {
                None
            } else {
                Some(trial)
            }
        })
        .collect();
    info!("Trial filtering kept {}/{} records", kept.len(), before);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{GeneEvent, GeneEventKind, Hotspot};
    use crate::record::{CancerTypeRef, EvidenceDirection, EvidenceLevel, Indication};
    use chrono::NaiveDate;
    use oncolyx_common::{ExcludedGeneEvent, ExcludedHotspot};

    fn hotspot_criterium(gene: &str, annotation: &str) -> MolecularCriterium {
        MolecularCriterium {
            hotspots: vec![Hotspot {
                gene: gene.to_string(),
                chromosome: "7".to_string(),
                position: 140453136,
                ref_allele: "A".to_string(),
                alt_allele: "T".to_string(),
                annotation: Some(annotation.to_string()),
            }],
            ..Default::default()
        }
    }

    fn evidence(criterium: MolecularCriterium) -> EvidenceRecord {
        EvidenceRecord {
            criterium,
            indication: Indication {
                applicable: CancerTypeRef { name: "Melanoma".to_string(), doid: "1909".to_string() },
                excluded_subtypes: vec![],
            },
            treatment: "Vemurafenib".to_string(),
            level: EvidenceLevel::A,
            direction: EvidenceDirection::Responsive,
            source_date: NaiveDate::from_ymd_opt(2021, 2, 3).unwrap(),
            source_event: "BRAF V600E".to_string(),
            source_url: None,
        }
    }

    #[test]
    fn test_empty_curation_keeps_everything() {
        let records = vec![evidence(hotspot_criterium("BRAF", "p.V600E"))];
        let kept = filter_evidence(records, &CurationConfig::default());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_excluded_hotspot_removed() {
        let curation = CurationConfig {
            excluded_hotspots: vec![ExcludedHotspot { gene: "BRAF".to_string(), annotation: None }],
            ..Default::default()
        };
        let records = vec![
            evidence(hotspot_criterium("BRAF", "p.V600E")),
            evidence(hotspot_criterium("KRAS", "p.G12C")),
        ];
        let kept = filter_evidence(records, &curation);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].criterium.hotspots[0].gene, "KRAS");
    }

    #[test]
    fn test_trial_loses_excluded_criterium_but_survives() {
        let curation = CurationConfig {
            excluded_gene_events: vec![ExcludedGeneEvent {
                gene: "VEGFA".to_string(),
                event_kind: Some("amplification".to_string()),
            }],
            ..Default::default()
        };
        let trial = TrialRecord {
            nct_id: "NCT00000001".to_string(),
            title: "Basket trial".to_string(),
            acronym: None,
            criteria: vec![
                MolecularCriterium {
                    gene_events: vec![GeneEvent {
                        gene: "VEGFA".to_string(),
                        kind: GeneEventKind::Amplification,
                    }],
                    ..Default::default()
                },
                hotspot_criterium("BRAF", "p.V600E"),
            ],
            indications: vec![],
            countries: vec![],
        };
        let kept = filter_trials(vec![trial], &curation);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].criteria.len(), 1);
        assert_eq!(kept[0].criteria[0].summary(), "hotspot BRAF");
    }

    #[test]
    fn test_trial_with_no_applicable_criterium_dropped() {
        let curation = CurationConfig {
            excluded_hotspots: vec![ExcludedHotspot { gene: "BRAF".to_string(), annotation: None }],
            ..Default::default()
        };
        let trial = TrialRecord {
            nct_id: "NCT00000002".to_string(),
            title: "Single-arm".to_string(),
            acronym: None,
            criteria: vec![hotspot_criterium("BRAF", "p.V600E")],
            indications: vec![],
            countries: vec![],
        };
        assert!(filter_trials(vec![trial], &curation).is_empty());
    }
}
