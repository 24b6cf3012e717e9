//! Curated exclusion sets for knowledge-base entries.
//!
//! Some knowledge-base entries are deliberately excluded from matching:
//! over-broad hotspot definitions that would fire on unrelated variants,
//! and gene-level events curators have marked as deprecated. The sets are
//! explicit configuration loaded once at startup and passed into the
//! load-time filter; there is no ambient singleton.

use serde::{Deserialize, Serialize};

/// A hotspot definition excluded from matching.
///
/// `annotation` narrows the exclusion to one protein change
/// (e.g. "p.V600E"); `None` excludes every hotspot on the gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedHotspot {
    pub gene: String,
    #[serde(default)]
    pub annotation: Option<String>,
}

/// A gene-level event excluded from matching.
///
/// `event_kind` holds the serialized kind name (e.g. "any_mutation");
/// `None` excludes all event kinds on the gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedGeneEvent {
    pub gene: String,
    #[serde(default)]
    pub event_kind: Option<String>,
}

/// Complete curation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurationConfig {
    #[serde(default)]
    pub excluded_hotspots: Vec<ExcludedHotspot>,

    #[serde(default)]
    pub excluded_gene_events: Vec<ExcludedGeneEvent>,
}

impl CurationConfig {
    /// Load from YAML file
    pub fn from_yaml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Is a hotspot on `gene` with protein annotation `annotation` excluded?
    pub fn excludes_hotspot(&self, gene: &str, annotation: Option<&str>) -> bool {
        self.excluded_hotspots.iter().any(|excluded| {
            excluded.gene == gene
                && match (&excluded.annotation, annotation) {
                    (None, _) => true,
                    (Some(curated), Some(observed)) => curated == observed,
                    (Some(_), None) => false,
                }
        })
    }

    /// Is a gene-level event of serialized kind `event_kind` on `gene` excluded?
    pub fn excludes_gene_event(&self, gene: &str, event_kind: &str) -> bool {
        self.excluded_gene_events.iter().any(|excluded| {
            excluded.gene == gene
                && excluded
                    .event_kind
                    .as_deref()
                    .map_or(true, |kind| kind == event_kind)
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_excludes_nothing() {
        let config = CurationConfig::default();
        assert!(!config.excludes_hotspot("BRAF", Some("p.V600E")));
        assert!(!config.excludes_gene_event("KRAS", "any_mutation"));
    }

    #[test]
    fn test_gene_wide_hotspot_exclusion() {
        let config = CurationConfig {
            excluded_hotspots: vec![ExcludedHotspot { gene: "TP53".to_string(), annotation: None }],
            ..Default::default()
        };
        assert!(config.excludes_hotspot("TP53", Some("p.R175H")));
        assert!(config.excludes_hotspot("TP53", None));
        assert!(!config.excludes_hotspot("BRAF", Some("p.V600E")));
    }

    #[test]
    fn test_annotation_specific_exclusion() {
        let config = CurationConfig {
            excluded_hotspots: vec![ExcludedHotspot {
                gene: "EGFR".to_string(),
                annotation: Some("p.T790M".to_string()),
            }],
            ..Default::default()
        };
        assert!(config.excludes_hotspot("EGFR", Some("p.T790M")));
        assert!(!config.excludes_hotspot("EGFR", Some("p.L858R")));
        // An exclusion narrowed to one annotation never fires on an
        // unannotated hotspot.
        assert!(!config.excludes_hotspot("EGFR", None));
    }

    #[test]
    fn test_gene_event_exclusion_by_kind() {
        let config = CurationConfig {
            excluded_gene_events: vec![ExcludedGeneEvent {
                gene: "VEGFA".to_string(),
                event_kind: Some("amplification".to_string()),
            }],
            ..Default::default()
        };
        assert!(config.excludes_gene_event("VEGFA", "amplification"));
        assert!(!config.excludes_gene_event("VEGFA", "deletion"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = CurationConfig {
            excluded_hotspots: vec![ExcludedHotspot { gene: "TP53".to_string(), annotation: None }],
            excluded_gene_events: vec![],
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: CurationConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.excluded_hotspots, parsed.excluded_hotspots);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "excluded_hotspots:\n  - gene: TP53\nexcluded_gene_events:\n  - gene: VEGFA\n    event_kind: amplification"
        )
        .unwrap();

        let config = CurationConfig::from_yaml(file.path().to_str().unwrap()).unwrap();
        assert!(config.excludes_hotspot("TP53", None));
        assert!(config.excludes_gene_event("VEGFA", "amplification"));
    }
}
