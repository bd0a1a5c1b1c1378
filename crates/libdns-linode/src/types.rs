//! Linode API v4 wire types
//!
//! Only the fields this provider reads or writes are modelled; unknown
//! response fields are ignored.

use serde::{Deserialize, Serialize};

/// Maximum page size accepted by the Linode API
pub const MAX_PAGE_SIZE: u32 = 500;

/// A domain (zone) managed by Linode DNS Manager
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Domain {
    pub id: u64,
    /// Domain name without trailing dot (e.g. "example.com")
    pub domain: String,
}

/// A record inside a Linode domain
///
/// `name` is relative to the domain; the apex is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target: String,
    /// 0 means the domain default TTL
    #[serde(default)]
    pub ttl_sec: u32,
}

/// Request body for creating or updating a domain record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRecordOptions {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub target: String,
    pub ttl_sec: u32,
}

/// One page of a paginated list response
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub pages: u32,
}

/// Error body returned by the Linode API on non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorReason>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorReason {
    pub reason: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl ApiErrorBody {
    /// Join all reasons into one line, prefixing field-level reasons
    pub fn reasons(&self) -> String {
        self.errors
            .iter()
            .map(|e| match &e.field {
                Some(field) => format!("{}: {}", field, e.reason),
                None => e.reason.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}
