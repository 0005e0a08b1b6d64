//! DNS record types and exact-match selection
//!
//! The provider stores record sources relative to the zone apex ("" or "."
//! for the apex itself), while callers may hand us anything from a bare
//! label to a fully-qualified name. Both sides are qualified with the zone
//! name before comparison, so deletion only ever acts on an exact match.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default record time-to-live in seconds
pub const DEFAULT_TTL: u32 = 3600;

/// A DNS resource record within a zone
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Provider-assigned record identifier
    pub id: u64,
    /// Record type ("A" is the only type this tool manages)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Subdomain relative to the zone apex; "" or "." means the apex
    #[serde(default)]
    pub source: String,
    /// Record value; an IPv4 literal for A records
    pub target: String,
    /// Time-to-live in seconds
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

/// Normalize a caller-supplied source to the relative form the API expects
///
/// "" and "." both denote the zone apex, encoded as the empty relative name.
pub fn relative_source(source: &str) -> &str {
    if source == "." { "" } else { source }
}

/// Qualify a record source with its zone name
///
/// The apex ("" or ".") becomes the zone name itself. A source that already
/// carries the zone suffix is kept as-is, but only when the suffix sits on a
/// label boundary: `www.example.com` is qualified under `example.com`,
/// `oldexample.com` is not.
pub fn qualify_source(source: &str, zone: &str) -> String {
    let source = relative_source(source);
    if source.is_empty() {
        return zone.to_string();
    }
    if source == zone || source.ends_with(&format!(".{zone}")) {
        return source.to_string();
    }
    format!("{source}.{zone}")
}

/// Select the single A record matching (source, target) within a zone
///
/// Zero matches is `RecordNotFound`; two or more is `AmbiguousRecord`, and
/// nothing is ever deleted on an ambiguous match.
pub fn select_record<'a>(
    records: &'a [Record],
    zone: &str,
    source: &str,
    target: &str,
) -> Result<&'a Record> {
    let wanted = qualify_source(source, zone);
    let matches: Vec<&Record> = records
        .iter()
        .filter(|record| {
            record.record_type == "A"
                && qualify_source(&record.source, zone) == wanted
                && record.target == target
        })
        .collect();

    match matches.as_slice() {
        [] => Err(Error::RecordNotFound(format!("{wanted} -> {target}"))),
        [record] => Ok(*record),
        _ => Err(Error::AmbiguousRecord(format!("{wanted} -> {target}"))),
    }
}
