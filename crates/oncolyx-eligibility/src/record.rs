/// Patient record and rule parameterization as the evaluators see them.
/// The clinical side is intentionally thin here: evaluators consume it,
/// the actionability core does not.

use serde::{Deserialize, Serialize};

use oncolyx_molecular::MolecularProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    pub birth_year: Option<i32>,
    /// WHO performance status, 0..=5.
    pub who_status: Option<u8>,
    pub molecular: MolecularProfile,
}

/// External rule reference plus its raw parameters, e.g.
/// `HAS_LAB_VALUE_ABOVE ["hemoglobin", "5.5"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRule {
    pub rule: String,
    #[serde(default)]
    pub parameters: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_serde_defaults_parameters() {
        let rule: EligibilityRule = serde_json::from_str(r#"{"rule": "IS_AT_LEAST_18_YEARS_OLD"}"#).unwrap();
        assert_eq!(rule.rule, "IS_AT_LEAST_18_YEARS_OLD");
        assert!(rule.parameters.is_empty());
    }
}
