/// Shared genomic enums used on both the patient and knowledge-base side.

use serde::{Deserialize, Serialize};

/// Role a gene plays in tumorigenesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneRole {
    Oncogene,
    TumorSuppressor,
    /// Acts as oncogene or tumor suppressor depending on context.
    Both,
    Unknown,
}

impl GeneRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneRole::Oncogene        => "oncogene",
            GeneRole::TumorSuppressor => "tumor_suppressor",
            GeneRole::Both            => "both",
            GeneRole::Unknown         => "unknown",
        }
    }
}

/// Predicted effect of a variant on protein function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinEffect {
    GainOfFunction,
    GainOfFunctionPredicted,
    LossOfFunction,
    LossOfFunctionPredicted,
    NoEffect,
    Unknown,
}

impl ProteinEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProteinEffect::GainOfFunction          => "gain_of_function",
            ProteinEffect::GainOfFunctionPredicted => "gain_of_function_predicted",
            ProteinEffect::LossOfFunction          => "loss_of_function",
            ProteinEffect::LossOfFunctionPredicted => "loss_of_function_predicted",
            ProteinEffect::NoEffect                => "no_effect",
            ProteinEffect::Unknown                 => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_role_serde_roundtrip() {
        let json = serde_json::to_string(&GeneRole::TumorSuppressor).unwrap();
        assert_eq!(json, "\"tumor_suppressor\"");
        let parsed: GeneRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, GeneRole::TumorSuppressor);
    }
}
