//! oncolyx-ontology — Cancer-type ontology expansion and applicability.
//!
//! Expands the patient's tumor-type DOID term(s) to the full ancestor
//! closure and classifies each evidence/trial indication as on-label,
//! pan-cancer-applicable, or off-label.

pub mod expansion;
pub mod model;
pub mod resolver;

pub use expansion::expand_doid_set;
pub use model::{DoidModel, MockOntologyProvider, OntologyProvider};
pub use resolver::{CancerTypeApplicability, CancerTypeResolver, PAN_CANCER_DOID};
