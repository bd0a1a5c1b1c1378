//! Shared fixtures for Linode provider contract tests
//!
//! Every test runs the provider against an `httpmock` server standing in for
//! the Linode API.

#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use libdns_core::{Record, Rr};
use libdns_linode::LinodeProvider;
use serde_json::{Value, json};
use std::time::Duration;

pub const TOKEN: &str = "test-token";
pub const ZONE: &str = "example.com.";
pub const DOMAIN: &str = "example.com";
pub const DOMAIN_ID: u64 = 1234;

/// `Authorization` header every request must carry
pub const AUTH_HEADER: &str = "Bearer test-token";

/// `X-Filter` header of the zone lookup for `example.com`
pub const DOMAIN_FILTER: &str = r#"{"domain":"example.com"}"#;

/// Build a provider pointed at the mock server
pub fn provider_for(server: &MockServer) -> LinodeProvider {
    LinodeProvider::new(TOKEN, Some(server.base_url()), None)
        .expect("provider construction succeeds")
}

/// Wrap items in a single-page list response
pub fn single_page(data: Value) -> Value {
    let results = data.as_array().map(Vec::len).unwrap_or(0);
    json!({ "data": data, "page": 1, "pages": 1, "results": results })
}

/// A Linode domain record response body
pub fn api_record(id: u64, name: &str, record_type: &str, target: &str, ttl_sec: u32) -> Value {
    json!({
        "id": id,
        "type": record_type,
        "name": name,
        "target": target,
        "priority": 0,
        "weight": 0,
        "port": 0,
        "service": null,
        "protocol": null,
        "ttl_sec": ttl_sec,
        "tag": null,
        "created": "2024-01-01T00:00:00",
        "updated": "2024-01-01T00:00:00"
    })
}

/// Mock the zone lookup for `example.com`, resolving to [`DOMAIN_ID`]
pub async fn mock_zone_lookup(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/domains")
                .header("Authorization", AUTH_HEADER)
                .header("X-Filter", DOMAIN_FILTER);
            then.status(200).json_body(single_page(json!([
                { "id": DOMAIN_ID, "domain": DOMAIN, "type": "master", "status": "active" }
            ])));
        })
        .await
}

/// Path of the record collection of the test domain
pub fn records_path() -> String {
    format!("/v4/domains/{}/records", DOMAIN_ID)
}

/// Path of one record of the test domain
pub fn record_path(record_id: u64) -> String {
    format!("/v4/domains/{}/records/{}", DOMAIN_ID, record_id)
}

/// `www 300 A 1.2.3.4`
pub fn www() -> Rr {
    Rr::new("www", "A", "1.2.3.4", Duration::from_secs(300))
}

/// `www 300 A 1.2.3.4` as a record that Linode has not seen yet
pub fn new_www() -> Record {
    Record::new(www())
}
