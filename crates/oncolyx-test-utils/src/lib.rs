//! oncolyx-test-utils — Shared builders for workspace tests.
//!
//! Canned drivers, criteria, and knowledge-base records around the BRAF
//! V600E melanoma scenario, so matcher and assembly tests stay short.

use chrono::NaiveDate;
use oncolyx_common::ProteinEffect;
use oncolyx_knowledge::{
    CancerTypeRef, EvidenceDirection, EvidenceLevel, EvidenceRecord, GeneEvent, GeneEventKind,
    Hotspot, Indication, MolecularCriterium, TrialRecord,
};
use oncolyx_molecular::{Driver, Variant};
use oncolyx_ontology::MockOntologyProvider;

/// BRAF V600E as a reportable (or not) observed variant.
pub fn braf_v600e_variant(reportable: bool) -> Driver {
    Driver::Variant(Variant {
        gene: "BRAF".to_string(),
        chromosome: "7".to_string(),
        position: 140453136,
        ref_allele: "A".to_string(),
        alt_allele: "T".to_string(),
        annotation: Some("p.V600E".to_string()),
        affected_codon: Some(600),
        affected_exon: Some(15),
        protein_effect: ProteinEffect::GainOfFunction,
        is_reportable: reportable,
    })
}

/// Hotspot criterium with the same coordinates as `braf_v600e_variant`.
pub fn braf_v600e_criterium() -> MolecularCriterium {
    MolecularCriterium {
        hotspots: vec![Hotspot {
            gene: "BRAF".to_string(),
            chromosome: "7".to_string(),
            position: 140453136,
            ref_allele: "A".to_string(),
            alt_allele: "T".to_string(),
            annotation: Some("p.V600E".to_string()),
        }],
        ..Default::default()
    }
}

pub fn gene_event_criterium(gene: &str, kind: GeneEventKind) -> MolecularCriterium {
    MolecularCriterium {
        gene_events: vec![GeneEvent { gene: gene.to_string(), kind }],
        ..Default::default()
    }
}

pub fn indication_for(doid: &str) -> Indication {
    Indication {
        applicable: CancerTypeRef { name: format!("DOID:{doid}"), doid: doid.to_string() },
        excluded_subtypes: vec![],
    }
}

/// Melanoma, DOID 1909.
pub fn melanoma_indication() -> Indication {
    Indication {
        applicable: CancerTypeRef { name: "Melanoma".to_string(), doid: "1909".to_string() },
        excluded_subtypes: vec![],
    }
}

pub fn evidence_with_level(
    treatment: &str,
    criterium: MolecularCriterium,
    indication: Indication,
    level: EvidenceLevel,
) -> EvidenceRecord {
    EvidenceRecord {
        criterium,
        indication,
        treatment: treatment.to_string(),
        level,
        direction: EvidenceDirection::Responsive,
        source_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        source_event: "BRAF V600E".to_string(),
        source_url: None,
    }
}

pub fn evidence_for(
    treatment: &str,
    criterium: MolecularCriterium,
    indication: Indication,
) -> EvidenceRecord {
    evidence_with_level(treatment, criterium, indication, EvidenceLevel::A)
}

pub fn trial_for(
    nct_id: &str,
    criteria: Vec<MolecularCriterium>,
    indications: Vec<Indication>,
) -> TrialRecord {
    TrialRecord {
        nct_id: nct_id.to_string(),
        title: format!("Study {nct_id}"),
        acronym: None,
        criteria,
        indications,
        countries: vec![],
    }
}

/// Melanoma under cell-type cancer and disease. Deliberately does not
/// route through the advanced-solid-tumor sentinel, so pan-cancer and
/// on-label classifications stay distinguishable in tests.
pub fn melanoma_ontology() -> MockOntologyProvider {
    MockOntologyProvider::new()
        .with("1909", &["0050687"])
        .with("0050687", &["14566"])
        .with("14566", &["4"])
}
