//! Provider-agnostic DNS record types
//!
//! - [`Rr`]: the plain resource record (name, type, data, TTL)
//! - [`Record`]: an [`Rr`] plus the provider-assigned identifier, if any
//! - [`Zone`]: a zone as reported by a provider

use std::fmt;
use std::time::Duration;

/// A resource record in its provider-agnostic form
///
/// `name` is relative to the zone it lives in; the zone apex is `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rr {
    /// Name relative to the zone (e.g. "www", or "@" for the apex)
    pub name: String,
    /// Record type (e.g. "A", "AAAA", "TXT")
    pub record_type: String,
    /// Record data in zone-file presentation form
    pub data: String,
    /// Time-to-live
    pub ttl: Duration,
}

impl Rr {
    /// Create a new resource record
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        data: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            data: data.into(),
            ttl,
        }
    }
}

impl fmt::Display for Rr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name,
            self.ttl.as_secs(),
            self.record_type,
            self.data
        )
    }
}

/// Opaque provider-assigned record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Borrow the identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A record exchanged with a provider
///
/// Records returned by a provider carry the identifier the provider
/// assigned. Records built by callers usually don't; providers treat
/// those as new.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    rr: Rr,
    id: Option<RecordId>,
}

impl Record {
    /// Create a record with no provider identifier
    pub fn new(rr: Rr) -> Self {
        Self { rr, id: None }
    }

    /// Create a record carrying a provider identifier
    pub fn with_id(rr: Rr, id: impl Into<RecordId>) -> Self {
        Self {
            rr,
            id: Some(id.into()),
        }
    }

    /// The provider-agnostic resource record
    pub fn rr(&self) -> &Rr {
        &self.rr
    }

    /// The provider-assigned identifier, if any
    pub fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    /// Consume the record, keeping only the resource record
    pub fn into_rr(self) -> Rr {
        self.rr
    }
}

impl From<Rr> for Record {
    fn from(rr: Rr) -> Self {
        Self::new(rr)
    }
}

/// A DNS zone hosted by a provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone {
    /// Fully-qualified zone name with trailing dot (e.g. "example.com.")
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_id() {
        let rr = Rr::new("www", "A", "1.2.3.4", Duration::from_secs(300));
        let record = Record::from(rr.clone());

        assert_eq!(record.rr(), &rr);
        assert!(record.id().is_none());
    }

    #[test]
    fn test_record_with_numeric_id() {
        let rr = Rr::new("www", "A", "1.2.3.4", Duration::from_secs(300));
        let record = Record::with_id(rr, 12345u64);

        assert_eq!(record.id().map(RecordId::as_str), Some("12345"));
    }

    #[test]
    fn test_rr_display() {
        let rr = Rr::new("@", "TXT", "hello", Duration::from_secs(60));
        assert_eq!(rr.to_string(), "@ 60 TXT hello");
    }
}
