/// Observed driver alterations in a patient's tumor.
/// These are Rust representations of the molecular profile a sequencing
/// pipeline reports per patient.

use oncolyx_common::{GeneRole, ProteinEffect};
use serde::{Deserialize, Serialize};

use crate::annotation::codon_from_annotation;

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub gene: String,
    pub chromosome: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
    /// Protein annotation on the canonical transcript, e.g. "p.V600E".
    pub annotation: Option<String>,
    pub affected_codon: Option<u32>,
    pub affected_exon: Option<u32>,
    pub protein_effect: ProteinEffect,
    pub is_reportable: bool,
}

impl Variant {
    /// Codon affected on the canonical transcript, falling back to the
    /// protein annotation when the pipeline did not populate the field.
    pub fn effective_codon(&self) -> Option<u32> {
        self.affected_codon
            .or_else(|| self.annotation.as_deref().and_then(codon_from_annotation))
    }
}

// ---------------------------------------------------------------------------
// Copy number
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyNumberKind {
    FullGain,
    PartialGain,
    Loss,
    None,
}

impl CopyNumberKind {
    pub fn is_gain(&self) -> bool {
        matches!(self, CopyNumberKind::FullGain | CopyNumberKind::PartialGain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyNumber {
    pub gene: String,
    pub kind: CopyNumberKind,
}

// ---------------------------------------------------------------------------
// Disruption
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disruption {
    pub gene: String,
    pub gene_role: GeneRole,
    pub is_reportable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomozygousDisruption {
    pub gene: String,
}

// ---------------------------------------------------------------------------
// Fusion
// ---------------------------------------------------------------------------

/// Classification of an observed fusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionDriverType {
    /// Both partners form a known oncogenic pair.
    KnownPair,
    /// Only the 5' (upstream) gene drives the fusion.
    Promiscuous5,
    /// Only the 3' (downstream) gene drives the fusion.
    Promiscuous3,
    /// Either partner drives the fusion.
    PromiscuousBoth,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FusionDriver {
    pub gene_start: String,
    pub gene_end: String,
    pub driver_type: FusionDriverType,
    pub fused_exon_up: Option<u32>,
    pub fused_exon_down: Option<u32>,
    pub is_reportable: bool,
}

// ---------------------------------------------------------------------------
// Virus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirusKind {
    HumanPapillomavirus,
    EpsteinBarrVirus,
    HepatitisB,
    MerkelCellPolyomavirus,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Virus {
    pub kind: VirusKind,
    pub is_reportable: bool,
}

// ---------------------------------------------------------------------------
// Tumor characteristics
// ---------------------------------------------------------------------------

/// Genome-wide tumor properties. Absent flags mean the property was not
/// determined for this sample; they never match either polarity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TumorCharacteristics {
    pub microsatellite_unstable: Option<bool>,
    pub high_tumor_mutational_burden: Option<bool>,
    pub high_tumor_mutational_load: Option<bool>,
    pub homologous_recombination_deficient: Option<bool>,
}

// ---------------------------------------------------------------------------
// Driver union
// ---------------------------------------------------------------------------

/// One observed driver alteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Driver {
    Variant(Variant),
    CopyNumber(CopyNumber),
    Disruption(Disruption),
    HomozygousDisruption(HomozygousDisruption),
    Fusion(FusionDriver),
    Virus(Virus),
    TumorCharacteristics(TumorCharacteristics),
}

impl Driver {
    /// Gene symbol for gene-anchored drivers; fusions report both partners.
    pub fn display(&self) -> String {
        match self {
            Driver::Variant(v) => match &v.annotation {
                Some(annotation) => format!("{} {}", v.gene, annotation),
                None => format!("{} {}:{} {}>{}", v.gene, v.chromosome, v.position, v.ref_allele, v.alt_allele),
            },
            Driver::CopyNumber(cn) => format!("{} copy number", cn.gene),
            Driver::Disruption(d) => format!("{} disruption", d.gene),
            Driver::HomozygousDisruption(hd) => format!("{} hom. disruption", hd.gene),
            Driver::Fusion(f) => format!("{}::{} fusion", f.gene_start, f.gene_end),
            Driver::Virus(v) => format!("{:?}", v.kind),
            Driver::TumorCharacteristics(_) => "tumor characteristics".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_codon_prefers_explicit_field() {
        let variant = Variant {
            gene: "BRAF".to_string(),
            chromosome: "7".to_string(),
            position: 140453136,
            ref_allele: "A".to_string(),
            alt_allele: "T".to_string(),
            annotation: Some("p.V600E".to_string()),
            affected_codon: Some(601),
            affected_exon: None,
            protein_effect: ProteinEffect::GainOfFunction,
            is_reportable: true,
        };
        assert_eq!(variant.effective_codon(), Some(601));
    }

    #[test]
    fn test_effective_codon_falls_back_to_annotation() {
        let variant = Variant {
            gene: "BRAF".to_string(),
            chromosome: "7".to_string(),
            position: 140453136,
            ref_allele: "A".to_string(),
            alt_allele: "T".to_string(),
            annotation: Some("p.V600E".to_string()),
            affected_codon: None,
            affected_exon: None,
            protein_effect: ProteinEffect::GainOfFunction,
            is_reportable: true,
        };
        assert_eq!(variant.effective_codon(), Some(600));
    }

    #[test]
    fn test_copy_number_kind_gain() {
        assert!(CopyNumberKind::FullGain.is_gain());
        assert!(CopyNumberKind::PartialGain.is_gain());
        assert!(!CopyNumberKind::Loss.is_gain());
        assert!(!CopyNumberKind::None.is_gain());
    }

    #[test]
    fn test_driver_serde_tagging() {
        let driver = Driver::CopyNumber(CopyNumber {
            gene: "MYC".to_string(),
            kind: CopyNumberKind::FullGain,
        });
        let json = serde_json::to_string(&driver).unwrap();
        assert!(json.contains("\"type\":\"copy_number\""));
        let parsed: Driver = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, driver);
    }
}
