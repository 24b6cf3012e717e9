/// Molecular criterium categories carried by knowledge-base entries.
/// Each entry targets exactly one of these seven event shapes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Hotspot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hotspot {
    pub gene: String,
    pub chromosome: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
    /// Protein annotation of the curated change, e.g. "p.V600E".
    #[serde(default)]
    pub annotation: Option<String>,
}

// ---------------------------------------------------------------------------
// Codon / exon ranges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodonRange {
    pub gene: String,
    pub transcript: String,
    pub start_codon: u32,
    pub end_codon: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExonRange {
    pub gene: String,
    pub transcript: String,
    pub start_exon: u32,
    pub end_exon: u32,
}

// ---------------------------------------------------------------------------
// Gene-level events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneEventKind {
    Amplification,
    Deletion,
    Activation,
    Inactivation,
    AnyMutation,
    Fusion,
    Overexpression,
    Underexpression,
    PresenceOfProtein,
    AbsenceOfProtein,
}

impl GeneEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneEventKind::Amplification     => "amplification",
            GeneEventKind::Deletion          => "deletion",
            GeneEventKind::Activation        => "activation",
            GeneEventKind::Inactivation      => "inactivation",
            GeneEventKind::AnyMutation       => "any_mutation",
            GeneEventKind::Fusion            => "fusion",
            GeneEventKind::Overexpression    => "overexpression",
            GeneEventKind::Underexpression   => "underexpression",
            GeneEventKind::PresenceOfProtein => "presence_of_protein",
            GeneEventKind::AbsenceOfProtein  => "absence_of_protein",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneEvent {
    pub gene: String,
    pub kind: GeneEventKind,
}

// ---------------------------------------------------------------------------
// Fusion pairs
// ---------------------------------------------------------------------------

/// Curated fusion with optional exon bounds per side (None = unbounded).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FusionPair {
    pub gene_up: String,
    pub gene_down: String,
    #[serde(default)]
    pub min_exon_up: Option<u32>,
    #[serde(default)]
    pub max_exon_up: Option<u32>,
    #[serde(default)]
    pub min_exon_down: Option<u32>,
    #[serde(default)]
    pub max_exon_down: Option<u32>,
}

// ---------------------------------------------------------------------------
// Tumor characteristics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacteristicKind {
    MicrosatelliteUnstable,
    MicrosatelliteStable,
    HighTumorMutationalBurden,
    LowTumorMutationalBurden,
    HighTumorMutationalLoad,
    LowTumorMutationalLoad,
    HomologousRecombinationDeficient,
    HpvPositive,
    EbvPositive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Characteristic {
    pub kind: CharacteristicKind,
}

// ---------------------------------------------------------------------------
// HLA
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HlaAllele {
    /// e.g. "A*02:01"
    pub allele: String,
}

// ---------------------------------------------------------------------------
// Event union
// ---------------------------------------------------------------------------

/// The single populated category of a molecular criterium.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ActionableEvent {
    Hotspot(Hotspot),
    CodonRange(CodonRange),
    ExonRange(ExonRange),
    GeneEvent(GeneEvent),
    Fusion(FusionPair),
    Characteristic(Characteristic),
    Hla(HlaAllele),
}

impl ActionableEvent {
    pub fn category(&self) -> &'static str {
        match self {
            ActionableEvent::Hotspot(_)        => "hotspot",
            ActionableEvent::CodonRange(_)     => "codon_range",
            ActionableEvent::ExonRange(_)      => "exon_range",
            ActionableEvent::GeneEvent(_)      => "gene_event",
            ActionableEvent::Fusion(_)         => "fusion",
            ActionableEvent::Characteristic(_) => "characteristic",
            ActionableEvent::Hla(_)            => "hla",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_tagging() {
        let event = ActionableEvent::GeneEvent(GeneEvent {
            gene: "MYC".to_string(),
            kind: GeneEventKind::Amplification,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"category\":\"gene_event\""));
        assert!(json.contains("\"kind\":\"amplification\""));
        let parsed: ActionableEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_gene_event_kind_as_str() {
        assert_eq!(GeneEventKind::AnyMutation.as_str(), "any_mutation");
        assert_eq!(GeneEventKind::PresenceOfProtein.as_str(), "presence_of_protein");
    }
}
