//! Gene-level event matching.
//!
//! A gene event names a gene plus an event kind; each driver type has
//! its own compatibility table against the kinds.

use oncolyx_common::GeneRole;
use oncolyx_knowledge::{GeneEvent, GeneEventKind};
use oncolyx_molecular::{CopyNumber, Disruption, FusionDriver, HomozygousDisruption, Variant};

use crate::fusion::promiscuous_fusion_matches;

/// ACTIVATION / INACTIVATION / ANY_MUTATION accept any reportable
/// variant of the gene.
pub fn gene_event_matches_variant(event: &GeneEvent, variant: &Variant) -> bool {
    matches!(
        event.kind,
        GeneEventKind::Activation | GeneEventKind::Inactivation | GeneEventKind::AnyMutation
    ) && variant.is_reportable
        && variant.gene == event.gene
}

pub fn gene_event_matches_copy_number(event: &GeneEvent, copy_number: &CopyNumber) -> bool {
    copy_number.gene == event.gene
        && match event.kind {
            GeneEventKind::Amplification => copy_number.kind.is_gain(),
            GeneEventKind::Deletion => copy_number.kind == oncolyx_molecular::CopyNumberKind::Loss,
            _ => false,
        }
}

pub fn gene_event_matches_homozygous_disruption(
    event: &GeneEvent,
    disruption: &HomozygousDisruption,
) -> bool {
    disruption.gene == event.gene
        && matches!(
            event.kind,
            GeneEventKind::Deletion | GeneEventKind::Inactivation | GeneEventKind::AnyMutation
        )
}

/// A (non-homozygous) disruption of a non-TSG gene counts as a
/// loss-of-function-agnostic hit under ANY_MUTATION only. Disrupted
/// tumor suppressors are captured by the LOSS / INACTIVATION paths
/// instead; disrupting an oncogene is not itself clearly actionable
/// loss-of-function.
pub fn gene_event_matches_disruption(event: &GeneEvent, disruption: &Disruption) -> bool {
    event.kind == GeneEventKind::AnyMutation
        && disruption.is_reportable
        && disruption.gene == event.gene
        && disruption.gene_role != GeneRole::TumorSuppressor
}

/// FUSION / ACTIVATION / ANY_MUTATION gene events accept promiscuous
/// fusions involving the gene.
pub fn gene_event_matches_fusion(event: &GeneEvent, fusion: &FusionDriver) -> bool {
    matches!(
        event.kind,
        GeneEventKind::Fusion | GeneEventKind::Activation | GeneEventKind::AnyMutation
    ) && promiscuous_fusion_matches(&event.gene, fusion)
}
