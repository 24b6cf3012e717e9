//! Cancer-type applicability resolution.
//!
//! Personalizes matched evidence/trial entries by the patient's tumor
//! type. The split is three-way, not boolean: pan-cancer evidence is
//! reported, but rendered apart from tumor-type-specific evidence.

use std::collections::HashSet;

use oncolyx_knowledge::Indication;

use crate::expansion::expand_doid_set;
use crate::model::OntologyProvider;

/// Knowledge-base sentinel for indications applicable to any advanced
/// solid tumor.
pub const PAN_CANCER_DOID: &str = "162";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancerTypeApplicability {
    /// Indication lies within the patient's tumor-type lineage.
    OnLabel,
    /// Indication targets the advanced-solid-tumor sentinel.
    PanCancer,
    OffLabel,
}

impl CancerTypeApplicability {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancerTypeApplicability::OnLabel   => "on_label",
            CancerTypeApplicability::PanCancer => "pan_cancer",
            CancerTypeApplicability::OffLabel  => "off_label",
        }
    }

    /// OnLabel > PanCancer > OffLabel.
    fn rank(&self) -> u8 {
        match self {
            CancerTypeApplicability::OnLabel   => 0,
            CancerTypeApplicability::PanCancer => 1,
            CancerTypeApplicability::OffLabel  => 2,
        }
    }
}

/// Classifies indications against one patient's tumor-type lineage.
///
/// The ancestor closure is computed once at construction and reused for
/// every indication; build one resolver per patient evaluation.
#[derive(Debug, Clone)]
pub struct CancerTypeResolver {
    expanded: HashSet<String>,
}

impl CancerTypeResolver {
    pub fn new(provider: &dyn OntologyProvider, patient_doids: &[String]) -> Self {
        Self { expanded: expand_doid_set(provider, patient_doids) }
    }

    /// The patient's expanded tumor-type term set.
    pub fn expanded_terms(&self) -> &HashSet<String> {
        &self.expanded
    }

    pub fn classify(&self, indication: &Indication) -> CancerTypeApplicability {
        let applicable = self.expanded.contains(&indication.applicable.doid);
        let excluded = indication
            .excluded_subtypes
            .iter()
            .any(|subtype| self.expanded.contains(&subtype.doid));

        if applicable && !excluded {
            CancerTypeApplicability::OnLabel
        } else if indication.applicable.doid == PAN_CANCER_DOID {
            CancerTypeApplicability::PanCancer
        } else {
            CancerTypeApplicability::OffLabel
        }
    }

    /// Best classification across an any-of indication set (trials carry
    /// several indications).
    pub fn classify_best(&self, indications: &[Indication]) -> CancerTypeApplicability {
        indications
            .iter()
            .map(|indication| self.classify(indication))
            .min_by_key(CancerTypeApplicability::rank)
            .unwrap_or(CancerTypeApplicability::OffLabel)
    }
}
