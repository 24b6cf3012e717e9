//! Trait for disease-ontology access.
//!
//! Provides an abstraction over the DOID model, allowing the resolver to
//! query parent terms without being tightly coupled to how the ontology
//! was materialized.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Trait for accessing the disease ontology parent structure.
///
/// Implementations can use:
/// - An in-memory DOID model loaded at startup
/// - Mock data (testing)
pub trait OntologyProvider: Send + Sync {
    /// Direct parent terms of a DOID. Empty for root terms and for terms
    /// absent from the model; use `has_term` to tell the two apart.
    fn parents_of(&self, doid: &str) -> Vec<String>;

    /// Is the term present in the model at all?
    fn has_term(&self, doid: &str) -> bool;
}

// ── In-memory DOID model ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoidNode {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parents: Vec<String>,
}

/// The disease ontology as a parent-lookup DAG, loaded once per run and
/// immutable thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoidModel {
    nodes: HashMap<String, DoidNode>,
}

impl DoidModel {
    pub fn new(nodes: HashMap<String, DoidNode>) -> Self {
        Self { nodes }
    }

    /// Build from (child, parent) edges.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut nodes: HashMap<String, DoidNode> = HashMap::new();
        for (child, parent) in edges {
            nodes
                .entry(child)
                .or_insert_with(|| DoidNode { name: None, parents: vec![] })
                .parents
                .push(parent.clone());
            nodes.entry(parent).or_insert_with(|| DoidNode { name: None, parents: vec![] });
        }
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl OntologyProvider for DoidModel {
    fn parents_of(&self, doid: &str) -> Vec<String> {
        self.nodes.get(doid).map(|node| node.parents.clone()).unwrap_or_default()
    }

    fn has_term(&self, doid: &str) -> bool {
        self.nodes.contains_key(doid)
    }
}

// ── Mock Implementation for Testing ────────────────────────────────────────

/// Mock provider with hardcoded parent edges for unit tests.
pub struct MockOntologyProvider {
    parents: HashMap<String, Vec<String>>,
}

impl MockOntologyProvider {
    pub fn new() -> Self {
        Self { parents: HashMap::new() }
    }

    /// Add a term with its direct parents.
    pub fn with(mut self, doid: &str, parents: &[&str]) -> Self {
        self.parents
            .insert(doid.to_string(), parents.iter().map(|p| p.to_string()).collect());
        self
    }
}

impl Default for MockOntologyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyProvider for MockOntologyProvider {
    fn parents_of(&self, doid: &str) -> Vec<String> {
        self.parents.get(doid).cloned().unwrap_or_default()
    }

    fn has_term(&self, doid: &str) -> bool {
        self.parents.contains_key(doid)
            || self.parents.values().any(|parents| parents.iter().any(|p| p == doid))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_edges() {
        let model = DoidModel::from_edges(vec![
            ("1909".to_string(), "162".to_string()),
            ("162".to_string(), "14566".to_string()),
        ]);
        assert!(model.has_term("1909"));
        assert!(model.has_term("14566"));
        assert_eq!(model.parents_of("1909"), vec!["162".to_string()]);
        assert!(model.parents_of("14566").is_empty());
    }

    #[test]
    fn test_mock_provider() {
        let provider = MockOntologyProvider::new().with("1909", &["162"]);
        assert_eq!(provider.parents_of("1909"), vec!["162".to_string()]);
        assert!(provider.has_term("1909"));
        assert!(provider.has_term("162"));
        assert!(!provider.has_term("0000"));
    }
}
