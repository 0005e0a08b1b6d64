// # arec-core
//
// Core library for the arec A-record management tool.
//
// This crate holds everything that does not touch the network:
// - **Error**: enumerated failure kinds shared across the workspace
// - **Config**: environment-driven configuration
// - **Zone / Record**: typed views of the provider's payloads
// - zone-candidate generation and exact-match record selection, kept as
//   pure functions so the resolution logic is testable offline
//
// The HTTP client lives in `arec-provider-infomaniak`; the CLI in `arecctl`.

pub mod config;
pub mod error;
pub mod record;
pub mod zone;

// Re-export core types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use record::{DEFAULT_TTL, Record, qualify_source, relative_source, select_record};
pub use zone::{Zone, validate_domain_name, zone_candidates};
