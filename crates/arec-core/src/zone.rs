//! Zone types and the zone-candidate walk
//!
//! A zone is resolved by stripping leftmost labels from the target hostname
//! until the remaining suffix names exactly one owned zone. Candidate
//! generation is pure so the walk is testable without a network.

use serde::Deserialize;

use crate::error::{Error, Result};

/// A registered domain under account control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zone {
    /// Provider-assigned zone identifier
    pub id: u64,
    /// Fully-qualified zone name
    #[serde(rename = "customer_name")]
    pub name: String,
}

/// Candidate zone suffixes for a hostname, most specific first
///
/// Strips one leading label per step, splitting on the first "." only.
/// A bare final label (e.g. "com") is never a candidate, so the walk is
/// bounded by the label count.
pub fn zone_candidates(domain: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut rest = domain;
    while rest.contains('.') {
        candidates.push(rest);
        match rest.split_once('.') {
            Some((_, suffix)) => rest = suffix,
            None => break,
        }
    }
    candidates
}

/// Basic RFC 1035 shape check for a domain name
///
/// Not comprehensive, but catches empty labels, overlong names, and
/// characters that can never appear in a hosted zone.
pub fn validate_domain_name(domain: &str) -> Result<()> {
    if domain.is_empty() {
        return Err(Error::invalid_input("domain name cannot be empty"));
    }

    if domain.len() > 253 {
        return Err(Error::invalid_input(format!(
            "domain name too long: {} chars (max 253)",
            domain.len()
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(Error::invalid_input(format!(
                "domain name has empty label: '{domain}'"
            )));
        }
        if label.len() > 63 {
            return Err(Error::invalid_input(format!(
                "domain label too long: {} chars (max 63): '{label}'",
                label.len()
            )));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::invalid_input(format!(
                "domain label contains invalid characters: '{label}'"
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(Error::invalid_input(format!(
                "domain label cannot start or end with hyphen: '{label}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_walk_up_the_label_hierarchy() {
        assert_eq!(
            zone_candidates("a.b.example.com"),
            vec!["a.b.example.com", "b.example.com", "example.com"]
        );
    }

    #[test]
    fn apex_domain_is_its_own_only_candidate() {
        assert_eq!(zone_candidates("example.com"), vec!["example.com"]);
    }

    #[test]
    fn bare_label_yields_no_candidates() {
        assert!(zone_candidates("localhost").is_empty());
        assert!(zone_candidates("").is_empty());
    }

    #[test]
    fn zone_deserializes_from_product_payload() {
        let zone: Zone = serde_json::from_str(
            r#"{"id": 654321, "service_name": "domain", "customer_name": "example.com"}"#,
        )
        .unwrap();
        assert_eq!(
            zone,
            Zone {
                id: 654321,
                name: "example.com".to_string()
            }
        );
    }

    #[test]
    fn domain_validation_accepts_normal_names() {
        assert!(validate_domain_name("example.com").is_ok());
        assert!(validate_domain_name("www.example.com").is_ok());
        assert!(validate_domain_name("xn--bcher-kva.example").is_ok());
    }

    #[test]
    fn domain_validation_rejects_malformed_names() {
        assert!(validate_domain_name("").is_err());
        assert!(validate_domain_name("example..com").is_err());
        assert!(validate_domain_name("-bad.example.com").is_err());
        assert!(validate_domain_name("bad_label.example.com").is_err());
        assert!(validate_domain_name(&"a".repeat(64)).is_err());
    }
}
