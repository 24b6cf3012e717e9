//! Knowledge-base loading.
//!
//! The knowledge base is fully materialized in memory before any matching
//! starts; loading is the only suspension point in the system. Evidence
//! and trials load concurrently, then curated exclusions are applied.

use anyhow::Context;
use async_trait::async_trait;
use oncolyx_common::{CurationConfig, Result};
use std::path::PathBuf;
use tracing::info;

use crate::filter::{filter_evidence, filter_trials};
use crate::record::{EvidenceRecord, TrialRecord};

/// Source of knowledge-base extracts.
///
/// Implementations can read a serialized extract from disk, an object
/// store, or hardcode records for testing.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    async fn load_evidence(&self) -> Result<Vec<EvidenceRecord>>;
    async fn load_trials(&self) -> Result<Vec<TrialRecord>>;
}

/// Extract serialized as two JSON files.
pub struct JsonFileSource {
    evidence_path: PathBuf,
    trials_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(evidence_path: impl Into<PathBuf>, trials_path: impl Into<PathBuf>) -> Self {
        Self { evidence_path: evidence_path.into(), trials_path: trials_path.into() }
    }
}

#[async_trait]
impl KnowledgeSource for JsonFileSource {
    async fn load_evidence(&self) -> Result<Vec<EvidenceRecord>> {
        let content = tokio::fs::read_to_string(&self.evidence_path)
            .await
            .with_context(|| format!("reading evidence extract {:?}", self.evidence_path))?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn load_trials(&self) -> Result<Vec<TrialRecord>> {
        let content = tokio::fs::read_to_string(&self.trials_path)
            .await
            .with_context(|| format!("reading trial extract {:?}", self.trials_path))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// The immutable, filtered knowledge base shared read-only across all
/// patient evaluations.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    evidence: Vec<EvidenceRecord>,
    trials: Vec<TrialRecord>,
}

impl KnowledgeBase {
    /// Apply curated exclusions to already-materialized records.
    pub fn new(
        evidence: Vec<EvidenceRecord>,
        trials: Vec<TrialRecord>,
        curation: &CurationConfig,
    ) -> Self {
        Self {
            evidence: filter_evidence(evidence, curation),
            trials: filter_trials(trials, curation),
        }
    }

    /// Load evidence and trials concurrently, then filter.
    pub async fn load(source: &dyn KnowledgeSource, curation: &CurationConfig) -> Result<Self> {
        info!("Loading knowledge base...");
        let (evidence, trials) = tokio::join!(source.load_evidence(), source.load_trials());
        let kb = Self::new(evidence?, trials?, curation);
        info!(
            "Knowledge base loaded: {} evidence records, {} trials",
            kb.evidence.len(),
            kb.trials.len()
        );
        Ok(kb)
    }

    pub fn evidence(&self) -> &[EvidenceRecord] {
        &self.evidence
    }

    pub fn trials(&self) -> &[TrialRecord] {
        &self.trials
    }
}
