/// Evidence and trial records as extracted from the knowledge base.
/// Loaded once per run and immutable thereafter; the core never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::criterium::MolecularCriterium;

// ---------------------------------------------------------------------------
// Cancer-type indications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CancerTypeRef {
    pub name: String,
    pub doid: String,
}

/// Cancer-type applicability of one evidence/trial entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Indication {
    pub applicable: CancerTypeRef,
    #[serde(default)]
    pub excluded_subtypes: Vec<CancerTypeRef>,
}

// ---------------------------------------------------------------------------
// Evidence level / direction
// ---------------------------------------------------------------------------

/// Strength tier of a piece of evidence. `A` is strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EvidenceLevel {
    A,
    B,
    C,
    D,
}

impl EvidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceLevel::A => "A",
            EvidenceLevel::B => "B",
            EvidenceLevel::C => "C",
            EvidenceLevel::D => "D",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceDirection {
    Responsive,
    PredictedResponsive,
    Resistant,
    PredictedResistant,
    NoBenefit,
}

impl EvidenceDirection {
    pub fn is_responsive(&self) -> bool {
        matches!(self, EvidenceDirection::Responsive | EvidenceDirection::PredictedResponsive)
    }

    pub fn is_resistant(&self) -> bool {
        matches!(self, EvidenceDirection::Resistant | EvidenceDirection::PredictedResistant)
    }
}

// ---------------------------------------------------------------------------
// Evidence record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub criterium: MolecularCriterium,
    pub indication: Indication,
    pub treatment: String,
    pub level: EvidenceLevel,
    pub direction: EvidenceDirection,
    pub source_date: NaiveDate,
    /// The molecular event as phrased by the source, e.g. "BRAF V600E".
    pub source_event: String,
    #[serde(default)]
    pub source_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Trial record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// Hospitals recruiting for the trial, grouped per city.
    #[serde(default)]
    pub hospitals_per_city: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialRecord {
    pub nct_id: String,
    pub title: String,
    #[serde(default)]
    pub acronym: Option<String>,
    /// Any-of set: the trial recruits a patient if any one criterium matches.
    pub criteria: Vec<MolecularCriterium>,
    pub indications: Vec<Indication>,
    #[serde(default)]
    pub countries: Vec<Country>,
}

// Trial identity is the registry id. Two loads of the same trial compare
// equal even if metadata was re-curated in between.
impl PartialEq for TrialRecord {
    fn eq(&self, other: &Self) -> bool {
        self.nct_id == other.nct_id
    }
}

impl Eq for TrialRecord {}

impl std::hash::Hash for TrialRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.nct_id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_level_ordering() {
        assert!(EvidenceLevel::A < EvidenceLevel::B);
        assert!(EvidenceLevel::B < EvidenceLevel::D);
        let mut levels = vec![EvidenceLevel::D, EvidenceLevel::A, EvidenceLevel::C];
        levels.sort();
        assert_eq!(levels, vec![EvidenceLevel::A, EvidenceLevel::C, EvidenceLevel::D]);
    }

    #[test]
    fn test_direction_helpers() {
        assert!(EvidenceDirection::Responsive.is_responsive());
        assert!(EvidenceDirection::PredictedResponsive.is_responsive());
        assert!(EvidenceDirection::Resistant.is_resistant());
        assert!(!EvidenceDirection::NoBenefit.is_responsive());
        assert!(!EvidenceDirection::NoBenefit.is_resistant());
    }

    #[test]
    fn test_trial_identity_is_nct_id() {
        let a = TrialRecord {
            nct_id: "NCT00000001".to_string(),
            title: "Trial A".to_string(),
            acronym: None,
            criteria: vec![],
            indications: vec![],
            countries: vec![],
        };
        let mut b = a.clone();
        b.title = "Re-curated title".to_string();
        assert_eq!(a, b);
    }
}
