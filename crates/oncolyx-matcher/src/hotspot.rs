//! Hotspot matching: exact coordinate equality.

use oncolyx_knowledge::Hotspot;
use oncolyx_molecular::Variant;

/// A reportable variant matches a hotspot iff gene, chromosome, position
/// and both alleles are identical.
pub fn hotspot_matches(hotspot: &Hotspot, variant: &Variant) -> bool {
    variant.is_reportable
        && variant.gene == hotspot.gene
        && variant.chromosome == hotspot.chromosome
        && variant.position == hotspot.position
        && variant.ref_allele == hotspot.ref_allele
        && variant.alt_allele == hotspot.alt_allele
}
