// # arec-provider-infomaniak
//
// Infomaniak DNS API client for the arec A-record tool.
//
// The client owns one authenticated HTTP handle for its lifetime and issues
// strictly sequential requests:
//
// - zone lookup: GET `/1/product?service_name=domain&customer_name={candidate}`
// - record listing: GET `/1/domain/{zone_id}/dns/record`
// - record creation: POST `/1/domain/{zone_id}/dns/record` (form-encoded)
// - record removal: DELETE `/1/domain/{zone_id}/dns/record/{record_id}`
//
// Every request carries `Authorization: Bearer <token>`. The token never
// appears in logs or Debug output. There is no retry, backoff, or caching;
// every failure aborts the current operation.

pub mod types;

use std::net::Ipv4Addr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use arec_core::config::Config;
use arec_core::error::{Error, Result};
use arec_core::record::{Record, relative_source, select_record};
use arec_core::zone::{Zone, validate_domain_name, zone_candidates};

use crate::types::{NewRecord, decode_envelope};

/// Infomaniak DNS API client
///
/// One instance per invocation; the underlying connection is reused across
/// all requests of that invocation.
pub struct InfomaniakClient {
    /// API bearer token
    /// Never log this value
    api_token: String,

    /// Base URL of the API endpoint
    api_base: String,

    /// HTTP client, constructed with the configured request timeout
    http: reqwest::Client,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for InfomaniakClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfomaniakClient")
            .field("api_token", &"<REDACTED>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl InfomaniakClient {
    /// Create a client from a validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_token: config.api_token.clone(),
            api_base: config.api_base.clone(),
            http,
        })
    }

    /// Send a prepared request, check the HTTP status, return the raw body
    ///
    /// A non-2xx status is surfaced as `Error::Status`, distinct from
    /// API-level failures which are diagnosed from the body by the caller.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<String> {
        tracing::debug!("{} {}", method, path);

        let response = request
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| Error::transport(format!("{method} {path}: {e}")))?;

        let status = response.status();
        tracing::debug!("{} {} -> {}", method, path, status);

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("{method} {path}: failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.api_base, path);
        let body = self
            .dispatch(self.http.get(&url).query(query), "GET", path)
            .await?;
        decode_envelope(&body)
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &impl Serialize,
    ) -> Result<T> {
        let url = format!("{}{}", self.api_base, path);
        let body = self
            .dispatch(self.http.post(&url).form(form), "POST", path)
            .await?;
        decode_envelope(&body)
    }

    async fn delete_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.api_base, path);
        let body = self.dispatch(self.http.delete(&url), "DELETE", path).await?;
        decode_envelope(&body)
    }

    /// Resolve the owned zone for a hostname
    ///
    /// Walks the candidate suffixes most specific first; the first candidate
    /// the provider reports exactly one product for is the zone. A candidate
    /// with several products aborts with `AmbiguousZone` rather than
    /// guessing; exhausting the walk is `ZoneNotFound`.
    pub async fn find_zone(&self, domain: &str) -> Result<Zone> {
        for candidate in zone_candidates(domain) {
            tracing::debug!("zone candidate {}", candidate);
            let products: Vec<Zone> = self
                .get_data(
                    "/1/product",
                    &[("service_name", "domain"), ("customer_name", candidate)],
                )
                .await?;

            match products.as_slice() {
                [] => continue,
                [zone] => {
                    tracing::debug!("resolved zone {} (id {}) for {}", zone.name, zone.id, domain);
                    return Ok(zone.clone());
                }
                _ => return Err(Error::AmbiguousZone(candidate.to_string())),
            }
        }
        Err(Error::ZoneNotFound(domain.to_string()))
    }

    /// Fetch the complete record set of a zone, in API order
    pub async fn list_records(&self, zone_id: u64) -> Result<Vec<Record>> {
        let records: Vec<Record> = self
            .get_data(&format!("/1/domain/{zone_id}/dns/record"), &[])
            .await?;
        tracing::debug!("fetched {} records for zone {}", records.len(), zone_id);
        Ok(records)
    }

    /// Create an A record
    ///
    /// No pre-existence check is made; whether duplicates are accepted is the
    /// API's own concern.
    pub async fn add_a_record(
        &self,
        domain: &str,
        source: &str,
        target: Ipv4Addr,
        ttl: u32,
    ) -> Result<()> {
        validate_domain_name(domain)?;
        let zone = self.find_zone(domain).await?;

        let target = target.to_string();
        let record = NewRecord {
            record_type: "A",
            source: relative_source(source),
            target: &target,
            ttl,
        };
        let _: serde_json::Value = self
            .post_form(&format!("/1/domain/{}/dns/record", zone.id), &record)
            .await?;

        tracing::info!("added A record {} -> {} in zone {}", record.source, target, zone.name);
        Ok(())
    }

    /// Delete the single A record matching (source, target)
    ///
    /// Zero matches fails with `RecordNotFound`; several matches fail with
    /// `AmbiguousRecord` and nothing is deleted.
    pub async fn delete_a_record(
        &self,
        domain: &str,
        source: &str,
        target: Ipv4Addr,
    ) -> Result<()> {
        validate_domain_name(domain)?;
        let zone = self.find_zone(domain).await?;
        let records = self.list_records(zone.id).await?;

        let target = target.to_string();
        let record = select_record(&records, &zone.name, source, &target)?;
        let _: serde_json::Value = self
            .delete_data(&format!("/1/domain/{}/dns/record/{}", zone.id, record.id))
            .await?;

        tracing::info!("deleted A record {} -> {} in zone {}", record.source, target, zone.name);
        Ok(())
    }

    /// Replace the target of an A record
    ///
    /// Composed strictly as delete(old_target) then add(new_target); there is
    /// no transaction. If the add fails after the delete succeeded the record
    /// is left absent, and no rollback is attempted.
    pub async fn update_a_record(
        &self,
        domain: &str,
        source: &str,
        old_target: Ipv4Addr,
        new_target: Ipv4Addr,
        ttl: u32,
    ) -> Result<()> {
        self.delete_a_record(domain, source, old_target).await?;
        self.add_a_record(domain, source, new_target, ttl).await
    }
}
