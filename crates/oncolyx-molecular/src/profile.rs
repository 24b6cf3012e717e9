//! Per-patient molecular profile and driver identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::driver::{
    CopyNumber, Disruption, Driver, FusionDriver, HomozygousDisruption, TumorCharacteristics,
    Variant, Virus,
};

/// One observed driver with a stable identity.
///
/// Identity is the profile-slot id, not the driver value: two identical
/// drivers reported twice stay distinct keys in match results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actionable {
    id: Uuid,
    pub driver: Driver,
}

impl Actionable {
    pub fn new(driver: Driver) -> Self {
        Self { id: Uuid::new_v4(), driver }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl PartialEq for Actionable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Actionable {}

impl std::hash::Hash for Actionable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Immutable snapshot of one patient's molecular state.
///
/// Constructed once per patient evaluation; all matching is read-only
/// over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MolecularProfile {
    drivers: Vec<Actionable>,
    /// DOID terms for the patient's tumor type(s).
    pub tumor_doids: Vec<String>,
}

impl MolecularProfile {
    pub fn new(drivers: Vec<Driver>, tumor_doids: Vec<String>) -> Self {
        Self {
            drivers: drivers.into_iter().map(Actionable::new).collect(),
            tumor_doids,
        }
    }

    pub fn drivers(&self) -> &[Actionable] {
        &self.drivers
    }

    pub fn variants(&self) -> impl Iterator<Item = (&Actionable, &Variant)> + '_ {
        self.drivers.iter().filter_map(|a| match &a.driver {
            Driver::Variant(v) => Some((a, v)),
            _ => None,
        })
    }

    pub fn copy_numbers(&self) -> impl Iterator<Item = (&Actionable, &CopyNumber)> + '_ {
        self.drivers.iter().filter_map(|a| match &a.driver {
            Driver::CopyNumber(cn) => Some((a, cn)),
            _ => None,
        })
    }

    pub fn disruptions(&self) -> impl Iterator<Item = (&Actionable, &Disruption)> + '_ {
        self.drivers.iter().filter_map(|a| match &a.driver {
            Driver::Disruption(d) => Some((a, d)),
            _ => None,
        })
    }

    pub fn homozygous_disruptions(&self) -> impl Iterator<Item = (&Actionable, &HomozygousDisruption)> + '_ {
        self.drivers.iter().filter_map(|a| match &a.driver {
            Driver::HomozygousDisruption(hd) => Some((a, hd)),
            _ => None,
        })
    }

    pub fn fusions(&self) -> impl Iterator<Item = (&Actionable, &FusionDriver)> + '_ {
        self.drivers.iter().filter_map(|a| match &a.driver {
            Driver::Fusion(f) => Some((a, f)),
            _ => None,
        })
    }

    pub fn viruses(&self) -> impl Iterator<Item = (&Actionable, &Virus)> + '_ {
        self.drivers.iter().filter_map(|a| match &a.driver {
            Driver::Virus(v) => Some((a, v)),
            _ => None,
        })
    }

    pub fn characteristics(&self) -> impl Iterator<Item = (&Actionable, &TumorCharacteristics)> + '_ {
        self.drivers.iter().filter_map(|a| match &a.driver {
            Driver::TumorCharacteristics(tc) => Some((a, tc)),
            _ => None,
        })
    }
}
