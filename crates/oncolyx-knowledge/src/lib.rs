//! oncolyx-knowledge — Knowledge-base side of the actionability engine.
//!
//! Immutable evidence and trial records, each tagged with a molecular
//! criterium and cancer-type indications, sourced wholesale from the
//! knowledge base at load time. Curated exclusions are applied once
//! here, before any patient-specific matching.

pub mod criterium;
pub mod event;
pub mod extraction;
pub mod filter;
pub mod loader;
pub mod record;

pub use criterium::MolecularCriterium;
pub use event::{
    ActionableEvent, Characteristic, CharacteristicKind, CodonRange, ExonRange, FusionPair,
    GeneEvent, GeneEventKind, HlaAllele, Hotspot,
};
pub use extraction::extract_event;
pub use loader::{JsonFileSource, KnowledgeBase, KnowledgeSource};
pub use record::{
    CancerTypeRef, Country, EvidenceDirection, EvidenceLevel, EvidenceRecord, Indication,
    TrialRecord,
};
