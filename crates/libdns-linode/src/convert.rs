//! Translation between libdns records and Linode domain records
//!
//! Linode stores names relative to the domain and uses the empty string for
//! the apex; libdns uses `@`. TTLs travel as whole seconds.

use std::time::Duration;

use libdns_core::names::{APEX, relative_name};
use libdns_core::{Record, Rr};

use crate::types::{DomainRecord, DomainRecordOptions};

/// A record as known to Linode: the libdns record plus its Linode ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinodeRecord {
    pub record: Rr,
    pub id: u64,
}

impl LinodeRecord {
    pub fn rr(&self) -> &Rr {
        &self.record
    }
}

impl From<LinodeRecord> for Record {
    fn from(record: LinodeRecord) -> Self {
        Record::with_id(record.record, record.id)
    }
}

/// Build the create/update request body for `rr` in `zone`
pub fn to_record_options(rr: &Rr, zone: &str) -> DomainRecordOptions {
    let name = relative_name(&rr.name, zone);
    DomainRecordOptions {
        record_type: rr.record_type.clone(),
        name: if name == APEX { String::new() } else { name },
        target: rr.data.clone(),
        ttl_sec: u32::try_from(rr.ttl.as_secs()).unwrap_or(u32::MAX),
    }
}

/// Convert a Linode API record into a [`LinodeRecord`]
pub fn from_domain_record(record: &DomainRecord, zone: &str) -> LinodeRecord {
    merge(None, record, zone)
}

/// Pair a Linode API response with the record the caller supplied
///
/// When `existing` is given its fields are kept as-is, so values the API
/// normalises (case, trailing dots, default TTLs) round-trip unchanged.
/// Otherwise the record is derived from the response. The ID always comes
/// from the response.
pub fn merge(existing: Option<&Rr>, record: &DomainRecord, zone: &str) -> LinodeRecord {
    let rr = match existing {
        Some(rr) => rr.clone(),
        None => Rr {
            name: relative_name(&record.name, zone),
            record_type: record.record_type.clone(),
            data: record.target.clone(),
            ttl: Duration::from_secs(u64::from(record.ttl_sec)),
        },
    };

    LinodeRecord {
        record: rr,
        id: record.id,
    }
}
