//! Fusion matching.
//!
//! Two sub-cases: an exact fusion match against a curated partner pair
//! with exon bounds, and a promiscuous match where a gene-level event
//! (FUSION / ACTIVATION / ANY_MUTATION) names one partner gene only.

use oncolyx_knowledge::FusionPair;
use oncolyx_molecular::{FusionDriver, FusionDriverType};

fn exon_within(observed: Option<u32>, min: Option<u32>, max: Option<u32>) -> bool {
    match (min, max) {
        // No declared bound on this side.
        (None, None) => true,
        // A declared bound requires the fused exon to be known.
        _ => observed.is_some_and(|exon| {
            min.map_or(true, |lo| exon >= lo) && max.map_or(true, |hi| exon <= hi)
        }),
    }
}

/// Both partner genes equal and each side's fused exon inside the
/// criterium's declared bounds.
pub fn exact_fusion_matches(pair: &FusionPair, fusion: &FusionDriver) -> bool {
    fusion.is_reportable
        && fusion.gene_start == pair.gene_up
        && fusion.gene_end == pair.gene_down
        && exon_within(fusion.fused_exon_up, pair.min_exon_up, pair.max_exon_up)
        && exon_within(fusion.fused_exon_down, pair.min_exon_down, pair.max_exon_down)
}

/// One partner gene equals the criterium gene, honoring the observed
/// fusion's direction class: a 3'-promiscuous fusion is only actionable
/// through its downstream gene, a 5'-promiscuous one only through its
/// upstream gene.
pub fn promiscuous_fusion_matches(gene: &str, fusion: &FusionDriver) -> bool {
    if !fusion.is_reportable {
        return false;
    }
    match fusion.driver_type {
        FusionDriverType::Promiscuous3 => fusion.gene_end == gene,
        FusionDriverType::Promiscuous5 => fusion.gene_start == gene,
        _ => fusion.gene_start == gene || fusion.gene_end == gene,
    }
}
