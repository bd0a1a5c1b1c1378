// # DNS Provider Trait
//
// Defines the capability interface a DNS provider exposes to callers.
//
// ## Implementations
//
// - Linode: `libdns-linode` crate
//
// ## Usage
//
// ```rust,ignore
// use libdns_core::{DnsProvider, Record, Rr};
// use std::time::Duration;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let provider = /* DnsProvider implementation */;
//
//     let www = Rr::new("www", "A", "192.0.2.1", Duration::from_secs(300));
//     let created = provider.append_records("example.com.", &[Record::new(www)]).await?;
//
//     // `created` carries provider identifiers; pass them back to update or delete
//     provider.delete_records("example.com.", &created).await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::record::{Record, Zone};

/// Trait for DNS provider implementations
///
/// Zones are passed as names, with or without a trailing dot. Record names
/// are relative to the zone.
///
/// # Record identity
///
/// Every record a provider returns carries the identifier the provider
/// assigned to it. Callers pass those records back unchanged to update or
/// delete them. A record without an identifier is new: `set_records`
/// creates it and `delete_records` rejects it with
/// [`Error::RecordIdentityMissing`].
///
/// # Batches
///
/// Batch operations process records in order and stop at the first failure.
/// Records applied before the failure stay applied.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
/// Operations issue their own API calls and may run concurrently.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// List every record in the zone
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Create the given records, returning them with identifiers attached
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Create or update the given records
    ///
    /// Records with an identifier update the existing provider record;
    /// records without one are created.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Delete the given records, returning the records that were deleted
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// List the zones the credentials can manage
    ///
    /// Providers that cannot enumerate zones keep the default, which
    /// returns [`Error::Unsupported`].
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        Err(Error::unsupported(format!(
            "{} cannot list zones",
            self.provider_name()
        )))
    }

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}

/// Helper trait for constructing DNS providers from configuration
pub trait DnsProviderFactory: Send + Sync {
    /// Create a DnsProvider instance from configuration
    fn create(&self, config: &crate::config::ProviderConfig) -> Result<Box<dyn DnsProvider>>;
}
