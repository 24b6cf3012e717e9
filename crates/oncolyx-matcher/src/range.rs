//! Codon- and exon-range matching. Bounds are inclusive on both ends.

use oncolyx_knowledge::{CodonRange, ExonRange};
use oncolyx_molecular::Variant;

pub fn codon_range_matches(range: &CodonRange, variant: &Variant) -> bool {
    variant.is_reportable
        && variant.gene == range.gene
        && variant
            .effective_codon()
            .is_some_and(|codon| codon >= range.start_codon && codon <= range.end_codon)
}

pub fn exon_range_matches(range: &ExonRange, variant: &Variant) -> bool {
    variant.is_reportable
        && variant.gene == range.gene
        && variant
            .affected_exon
            .is_some_and(|exon| exon >= range.start_exon && exon <= range.end_exon)
}
