//! Protein annotation parsing.
//!
//! Sequencing pipelines report protein changes in HGVS-like notation
//! (p.V600E, p.Gly12Asp). Only the codon number is needed here.

use regex::Regex;

fn lazy_codon_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Match patterns like: V600E, p.V600E, p.Gly12Asp
        Regex::new(r"^(?:p\.)?(?:[A-Z][a-z]{2}|[A-Z])(\d+)").unwrap()
    })
}

/// Extract the codon number from a protein annotation.
///
/// Returns None for frame-shift/splice notations that carry no single
/// affected codon in this form.
pub fn codon_from_annotation(annotation: &str) -> Option<u32> {
    lazy_codon_regex()
        .captures(annotation)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_letter_annotation() {
        assert_eq!(codon_from_annotation("p.V600E"), Some(600));
        assert_eq!(codon_from_annotation("V600E"), Some(600));
    }

    #[test]
    fn test_three_letter_annotation() {
        assert_eq!(codon_from_annotation("p.Gly12Asp"), Some(12));
    }

    #[test]
    fn test_unparseable_annotation() {
        assert_eq!(codon_from_annotation("c.35G>A"), None);
        assert_eq!(codon_from_annotation(""), None);
    }
}
