//! Tumor-characteristic and virus matching.
//!
//! Each characteristic kind maps to exactly one flag on
//! `TumorCharacteristics` or to the presence of one virus type. "Stable"
//! and "low" polarities require the flag to be present and false; an
//! undetermined flag matches neither polarity.

use oncolyx_knowledge::CharacteristicKind;
use oncolyx_molecular::{TumorCharacteristics, Virus, VirusKind};

pub fn characteristic_matches(kind: CharacteristicKind, characteristics: &TumorCharacteristics) -> bool {
    match kind {
        CharacteristicKind::MicrosatelliteUnstable => {
            characteristics.microsatellite_unstable == Some(true)
        }
        CharacteristicKind::MicrosatelliteStable => {
            characteristics.microsatellite_unstable == Some(false)
        }
        CharacteristicKind::HighTumorMutationalBurden => {
            characteristics.high_tumor_mutational_burden == Some(true)
        }
        CharacteristicKind::LowTumorMutationalBurden => {
            characteristics.high_tumor_mutational_burden == Some(false)
        }
        CharacteristicKind::HighTumorMutationalLoad => {
            characteristics.high_tumor_mutational_load == Some(true)
        }
        CharacteristicKind::LowTumorMutationalLoad => {
            characteristics.high_tumor_mutational_load == Some(false)
        }
        CharacteristicKind::HomologousRecombinationDeficient => {
            characteristics.homologous_recombination_deficient == Some(true)
        }
        // Viral characteristics are satisfied by virus drivers, not flags.
        CharacteristicKind::HpvPositive | CharacteristicKind::EbvPositive => false,
    }
}

pub fn characteristic_matches_virus(kind: CharacteristicKind, virus: &Virus) -> bool {
    virus.is_reportable
        && match kind {
            CharacteristicKind::HpvPositive => virus.kind == VirusKind::HumanPapillomavirus,
            CharacteristicKind::EbvPositive => virus.kind == VirusKind::EpsteinBarrVirus,
            _ => false,
        }
}
