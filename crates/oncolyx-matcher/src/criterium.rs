//! Criterium-level matching: the seven-category fold.
//!
//! Every category of a criterium is evaluated against the profile, not
//! just the populated one. An empty category folds to a vacuous success
//! (mapping zero entries yields zero results), a populated category must
//! find at least one matching driver per entry, and the categories
//! combine as a short-circuit AND. By knowledge-base convention exactly
//! one category is populated, so the fold usually degenerates to a
//! single category test, but a criterium carrying several categories is
//! still required to satisfy all of them.

use oncolyx_knowledge::{CharacteristicKind, MolecularCriterium};
use oncolyx_molecular::{Actionable, MolecularProfile};
use tracing::warn;

use crate::characteristic::{characteristic_matches, characteristic_matches_virus};
use crate::fusion::exact_fusion_matches;
use crate::gene::{
    gene_event_matches_copy_number, gene_event_matches_disruption, gene_event_matches_fusion,
    gene_event_matches_homozygous_disruption, gene_event_matches_variant,
};
use crate::hotspot::hotspot_matches;
use crate::range::{codon_range_matches, exon_range_matches};
use crate::result::MatchResult;

/// One entry of one category: succeed with every driver it matches, or
/// fail.
fn entry_result(matched: Vec<Actionable>) -> MatchResult {
    if matched.is_empty() {
        MatchResult::Failure
    } else {
        MatchResult::success(matched)
    }
}

fn match_hotspots(profile: &MolecularProfile, criterium: &MolecularCriterium) -> MatchResult {
    MatchResult::combine_all(criterium.hotspots.iter().map(|hotspot| {
        entry_result(
            profile
                .variants()
                .filter(|(_, variant)| hotspot_matches(hotspot, variant))
                .map(|(actionable, _)| actionable.clone())
                .collect(),
        )
    }))
}

fn match_codon_ranges(profile: &MolecularProfile, criterium: &MolecularCriterium) -> MatchResult {
    MatchResult::combine_all(criterium.codon_ranges.iter().map(|range| {
        entry_result(
            profile
                .variants()
                .filter(|(_, variant)| codon_range_matches(range, variant))
                .map(|(actionable, _)| actionable.clone())
                .collect(),
        )
    }))
}

fn match_exon_ranges(profile: &MolecularProfile, criterium: &MolecularCriterium) -> MatchResult {
    MatchResult::combine_all(criterium.exon_ranges.iter().map(|range| {
        entry_result(
            profile
                .variants()
                .filter(|(_, variant)| exon_range_matches(range, variant))
                .map(|(actionable, _)| actionable.clone())
                .collect(),
        )
    }))
}

fn match_gene_events(profile: &MolecularProfile, criterium: &MolecularCriterium) -> MatchResult {
    MatchResult::combine_all(criterium.gene_events.iter().map(|event| {
        let mut matched: Vec<Actionable> = Vec::new();
        matched.extend(
            profile
                .variants()
                .filter(|(_, variant)| gene_event_matches_variant(event, variant))
                .map(|(actionable, _)| actionable.clone()),
        );
        matched.extend(
            profile
                .copy_numbers()
                .filter(|(_, copy_number)| gene_event_matches_copy_number(event, copy_number))
                .map(|(actionable, _)| actionable.clone()),
        );
        matched.extend(
            profile
                .homozygous_disruptions()
                .filter(|(_, disruption)| gene_event_matches_homozygous_disruption(event, disruption))
                .map(|(actionable, _)| actionable.clone()),
        );
        matched.extend(
            profile
                .disruptions()
                .filter(|(_, disruption)| gene_event_matches_disruption(event, disruption))
                .map(|(actionable, _)| actionable.clone()),
        );
        matched.extend(
            profile
                .fusions()
                .filter(|(_, fusion)| gene_event_matches_fusion(event, fusion))
                .map(|(actionable, _)| actionable.clone()),
        );
        entry_result(matched)
    }))
}

fn match_fusions(profile: &MolecularProfile, criterium: &MolecularCriterium) -> MatchResult {
    MatchResult::combine_all(criterium.fusions.iter().map(|pair| {
        entry_result(
            profile
                .fusions()
                .filter(|(_, fusion)| exact_fusion_matches(pair, fusion))
                .map(|(actionable, _)| actionable.clone())
                .collect(),
        )
    }))
}

fn match_characteristics(profile: &MolecularProfile, criterium: &MolecularCriterium) -> MatchResult {
    MatchResult::combine_all(criterium.characteristics.iter().map(|characteristic| {
        let kind: CharacteristicKind = characteristic.kind;
        let mut matched: Vec<Actionable> = profile
            .characteristics()
            .filter(|(_, tc)| characteristic_matches(kind, tc))
            .map(|(actionable, _)| actionable.clone())
            .collect();
        matched.extend(
            profile
                .viruses()
                .filter(|(_, virus)| characteristic_matches_virus(kind, virus))
                .map(|(actionable, _)| actionable.clone()),
        );
        entry_result(matched)
    }))
}

/// HLA criteria are unsupported: the upstream knowledge base carries no
/// matchable HLA data, so any populated HLA category is a hard, logged
/// failure rather than a silent pass.
fn match_hla(criterium: &MolecularCriterium) -> MatchResult {
    MatchResult::combine_all(criterium.hla.iter().map(|hla| {
        warn!("HLA criterium ({}) is unsupported; treating as no match", hla.allele);
        MatchResult::Failure
    }))
}

/// Evaluate one criterium against one profile.
///
/// The categories are evaluated lazily in a fixed order so the fold can
/// stop at the first failing category.
pub fn match_criterium(profile: &MolecularProfile, criterium: &MolecularCriterium) -> MatchResult {
    let hotspots = || match_hotspots(profile, criterium);
    let codon_ranges = || match_codon_ranges(profile, criterium);
    let exon_ranges = || match_exon_ranges(profile, criterium);
    let gene_events = || match_gene_events(profile, criterium);
    let fusions = || match_fusions(profile, criterium);
    let characteristics = || match_characteristics(profile, criterium);
    let hla = || match_hla(criterium);
    let categories: [&dyn Fn() -> MatchResult; 7] = [
        &hotspots,
        &codon_ranges,
        &exon_ranges,
        &gene_events,
        &fusions,
        &characteristics,
        &hla,
    ];

    let mut combined = MatchResult::empty();
    for category in categories {
        match category() {
            MatchResult::Failure => return MatchResult::Failure,
            success => combined = combined.combine(success),
        }
    }
    combined.with_criterium(criterium)
}
