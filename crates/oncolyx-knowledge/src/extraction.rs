//! Criterium event extraction.
//!
//! Pulls the populated category out of a criterium, trying categories in
//! a fixed priority order. A criterium with zero populated categories is
//! malformed and yields a hard error carrying the criterium's identity;
//! the caller skips that one record and keeps going.

use oncolyx_common::{OncolyxError, Result};

use crate::criterium::MolecularCriterium;
use crate::event::ActionableEvent;

/// Extract the single event a criterium actually carries.
///
/// Priority order: hotspot, codon range, exon range, gene event, fusion,
/// characteristic, HLA. The order only matters for the (out-of-convention)
/// case of a criterium with several populated categories; the first in
/// priority order names the record.
pub fn extract_event(criterium: &MolecularCriterium) -> Result<ActionableEvent> {
    if let Some(hotspot) = criterium.hotspots.first() {
        return Ok(ActionableEvent::Hotspot(hotspot.clone()));
    }
    if let Some(range) = criterium.codon_ranges.first() {
        return Ok(ActionableEvent::CodonRange(range.clone()));
    }
    if let Some(range) = criterium.exon_ranges.first() {
        return Ok(ActionableEvent::ExonRange(range.clone()));
    }
    if let Some(event) = criterium.gene_events.first() {
        return Ok(ActionableEvent::GeneEvent(event.clone()));
    }
    if let Some(fusion) = criterium.fusions.first() {
        return Ok(ActionableEvent::Fusion(fusion.clone()));
    }
    if let Some(characteristic) = criterium.characteristics.first() {
        return Ok(ActionableEvent::Characteristic(*characteristic));
    }
    if let Some(hla) = criterium.hla.first() {
        return Ok(ActionableEvent::Hla(hla.clone()));
    }

    Err(OncolyxError::MalformedCriterium(format!(
        "no populated category in criterium ({})",
        criterium.summary()
    )))
}
