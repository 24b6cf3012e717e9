//! Molecular criterium: the matching condition of one knowledge-base entry.

use serde::{Deserialize, Serialize};

use crate::event::{Characteristic, CodonRange, ExonRange, FusionPair, GeneEvent, HlaAllele, Hotspot};

/// Zero-or-more entries per category.
///
/// By knowledge-base convention exactly one category is populated per
/// criterium. The matcher does not assume this: it evaluates every
/// category and requires all populated ones to match, so a criterium
/// that ever carries two categories is still combined correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MolecularCriterium {
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
    #[serde(default)]
    pub codon_ranges: Vec<CodonRange>,
    #[serde(default)]
    pub exon_ranges: Vec<ExonRange>,
    #[serde(default)]
    pub gene_events: Vec<GeneEvent>,
    #[serde(default)]
    pub fusions: Vec<FusionPair>,
    #[serde(default)]
    pub characteristics: Vec<Characteristic>,
    #[serde(default)]
    pub hla: Vec<HlaAllele>,
}

impl MolecularCriterium {
    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
            && self.codon_ranges.is_empty()
            && self.exon_ranges.is_empty()
            && self.gene_events.is_empty()
            && self.fusions.is_empty()
            && self.characteristics.is_empty()
            && self.hla.is_empty()
    }

    /// Compact identity for log lines, e.g. "hotspot BRAF" or "gene_event MYC".
    pub fn summary(&self) -> String {
        if let Some(h) = self.hotspots.first() {
            return format!("hotspot {}", h.gene);
        }
        if let Some(c) = self.codon_ranges.first() {
            return format!("codon_range {}", c.gene);
        }
        if let Some(e) = self.exon_ranges.first() {
            return format!("exon_range {}", e.gene);
        }
        if let Some(g) = self.gene_events.first() {
            return format!("gene_event {} {}", g.gene, g.kind.as_str());
        }
        if let Some(f) = self.fusions.first() {
            return format!("fusion {}::{}", f.gene_up, f.gene_down);
        }
        if let Some(c) = self.characteristics.first() {
            return format!("characteristic {:?}", c.kind);
        }
        if let Some(h) = self.hla.first() {
            return format!("hla {}", h.allele);
        }
        "empty".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::GeneEventKind;

    #[test]
    fn test_default_is_empty() {
        assert!(MolecularCriterium::default().is_empty());
    }

    #[test]
    fn test_summary_names_populated_category() {
        let criterium = MolecularCriterium {
            gene_events: vec![GeneEvent { gene: "MYC".to_string(), kind: GeneEventKind::Amplification }],
            ..Default::default()
        };
        assert!(!criterium.is_empty());
        assert_eq!(criterium.summary(), "gene_event MYC amplification");
    }
}
