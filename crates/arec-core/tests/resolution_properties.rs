//! Behavioral tests for zone-candidate walks and record selection
//!
//! These cover the resolution properties end to end over in-memory data:
//! - a hostname resolves to its owning zone at any subdomain depth
//! - source "" and "." are interchangeable and denote the zone apex
//! - selection refuses to pick among zero or several matches

use arec_core::error::Error;
use arec_core::record::{DEFAULT_TTL, Record, qualify_source, select_record};
use arec_core::zone::zone_candidates;

/// Walk candidates against a fixed set of owned zones, the way the live
/// resolver walks them against the provider's product lookup.
fn resolve<'a>(domain: &'a str, owned: &[&'a str]) -> Option<&'a str> {
    zone_candidates(domain)
        .into_iter()
        .find(|candidate| owned.contains(candidate))
}

fn a_record(id: u64, source: &str, target: &str) -> Record {
    Record {
        id,
        record_type: "A".to_string(),
        source: source.to_string(),
        target: target.to_string(),
        ttl: DEFAULT_TTL,
    }
}

#[test]
fn owning_zone_is_found_at_any_subdomain_depth() {
    let owned = ["example.com", "other.net"];
    for domain in [
        "example.com",
        "www.example.com",
        "a.b.c.example.com",
        "deep.nested.sub.example.com",
    ] {
        assert_eq!(resolve(domain, &owned), Some("example.com"), "{domain}");
    }
}

#[test]
fn unowned_domain_exhausts_all_candidates() {
    let owned = ["example.com"];
    assert_eq!(resolve("www.example.org", &owned), None);
    assert_eq!(resolve("com", &owned), None);
}

#[test]
fn more_specific_zone_wins_over_its_parent() {
    // Both the subzone and the parent are owned; the walk starts at the
    // most specific suffix, so the subzone matches first.
    let owned = ["sub.example.com", "example.com"];
    assert_eq!(resolve("www.sub.example.com", &owned), Some("sub.example.com"));
    assert_eq!(resolve("www.example.com", &owned), Some("example.com"));
}

#[test]
fn apex_spellings_select_the_same_record() {
    let records = vec![
        a_record(10, ".", "192.0.2.1"),
        a_record(11, "www", "192.0.2.1"),
    ];
    let via_empty = select_record(&records, "example.com", "", "192.0.2.1").unwrap();
    let via_dot = select_record(&records, "example.com", ".", "192.0.2.1").unwrap();
    assert_eq!(via_empty.id, 10);
    assert_eq!(via_dot.id, 10);
}

#[test]
fn selection_is_exact_on_source_and_target() {
    let records = vec![
        a_record(1, "www", "10.0.0.1"),
        a_record(2, "www", "10.0.0.2"),
        a_record(3, "mail", "10.0.0.1"),
    ];
    assert_eq!(
        select_record(&records, "example.com", "www", "10.0.0.2")
            .unwrap()
            .id,
        2
    );
    assert!(matches!(
        select_record(&records, "example.com", "www", "10.0.0.3"),
        Err(Error::RecordNotFound(_))
    ));
}

#[test]
fn duplicate_matches_refuse_to_select() {
    let records = vec![
        a_record(1, "www", "10.0.0.1"),
        a_record(2, "www", "10.0.0.1"),
    ];
    assert!(matches!(
        select_record(&records, "example.com", "www", "10.0.0.1"),
        Err(Error::AmbiguousRecord(_))
    ));
}

#[test]
fn qualification_agrees_for_relative_and_qualified_spellings() {
    for spelling in ["www", "www.example.com"] {
        assert_eq!(qualify_source(spelling, "example.com"), "www.example.com");
    }
}
