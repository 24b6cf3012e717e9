//! Ancestor-closure expansion over the disease ontology.

use std::collections::HashSet;
use tracing::warn;

use crate::model::OntologyProvider;

/// Expand terms to their full ancestor closure: every term plus all of
/// its transitive parents.
///
/// The walk is iterative with a visited set, so shared ancestors in the
/// DAG are visited once and a malformed cycle cannot hang the expansion.
/// A term absent from the model degrades to itself (logged); the caller
/// proceeds with the partial closure.
pub fn expand_doid_set(provider: &dyn OntologyProvider, terms: &[String]) -> HashSet<String> {
    let mut expanded: HashSet<String> = HashSet::new();
    let mut pending: Vec<String> = Vec::new();

    for term in terms {
        if !provider.has_term(term) {
            warn!("DOID {} not found in ontology model; treating as isolated term", term);
        }
        pending.push(term.clone());
    }

    while let Some(term) = pending.pop() {
        if !expanded.insert(term.clone()) {
            continue;
        }
        pending.extend(provider.parents_of(&term));
    }

    expanded
}
