//! oncolyx-molecular — Patient-side molecular model.
//!
//! One immutable `MolecularProfile` snapshot per patient: the observed
//! driver set (variants, copy numbers, disruptions, fusions, viruses,
//! tumor characteristics) plus the patient's tumor-type DOID terms.

pub mod annotation;
pub mod driver;
pub mod profile;

pub use driver::{
    CopyNumber, CopyNumberKind, Disruption, Driver, FusionDriver, FusionDriverType,
    HomozygousDisruption, TumorCharacteristics, Variant, Virus, VirusKind,
};
pub use profile::{Actionable, MolecularProfile};
