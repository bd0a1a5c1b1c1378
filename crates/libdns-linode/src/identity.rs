//! Record identity resolution
//!
//! Linode addresses records by numeric ID. A libdns [`Record`] carries that
//! ID (as an opaque string) only when it came back from this provider.

use libdns_core::Record;

/// Extract the Linode record ID carried by `record`
///
/// Returns `None` when the record has no ID or the ID is not a Linode
/// numeric ID; callers treat both as "not yet created".
pub fn id_from_record(record: &Record) -> Option<u64> {
    let id = record.id()?;
    match id.as_str().parse::<u64>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(
                "Ignoring non-numeric record ID '{}' on {} record '{}'",
                id,
                record.rr().record_type,
                record.rr().name
            );
            None
        }
    }
}
