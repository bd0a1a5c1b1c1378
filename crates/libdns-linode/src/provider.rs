use async_trait::async_trait;
use libdns_core::names::absolute_name;
use libdns_core::{DnsProvider, Error, Record, Result, Rr, Zone};

use crate::PROVIDER_NAME;
use crate::client::LinodeClient;
use crate::convert::{LinodeRecord, from_domain_record, merge, to_record_options};
use crate::identity::id_from_record;

/// Linode DNS provider
///
/// Every top-level operation first resolves the zone name to a Linode domain
/// ID, then issues its record calls scoped to that domain. Nothing is cached
/// between calls.
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API token.
#[derive(Debug, Clone)]
pub struct LinodeProvider {
    client: LinodeClient,
}

impl LinodeProvider {
    /// Create a new Linode provider
    ///
    /// # Parameters
    ///
    /// - `api_token`: Linode personal access token with Domains read/write scope
    /// - `api_url`: Optional alternate API base URL
    /// - `api_version`: Optional API version (default `v4`)
    ///
    /// # Returns
    ///
    /// - `Err(Error::Config)`: If the token is empty or the URL is invalid
    pub fn new(
        api_token: impl Into<String>,
        api_url: Option<String>,
        api_version: Option<String>,
    ) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.is_empty() {
            return Err(Error::config("Linode API token cannot be empty"));
        }

        let client = LinodeClient::new(api_token, api_url.as_deref(), api_version.as_deref())
            .map_err(|e| Error::config(e.to_string()))?;

        Ok(Self::with_client(client))
    }

    /// Create a provider around an already configured client
    pub fn with_client(client: LinodeClient) -> Self {
        Self { client }
    }

    /// Get the underlying API client
    pub fn client(&self) -> &LinodeClient {
        &self.client
    }

    /// Resolve a zone name to its Linode domain ID
    ///
    /// # Returns
    ///
    /// - `Err(Error::ZoneNotFound)`: No domain matches the zone
    /// - `Err(Error::AmbiguousZone)`: More than one domain matches the zone
    pub async fn resolve_zone_id(&self, zone: &str) -> Result<u64> {
        let domain = absolute_name(zone, "");
        tracing::debug!("Looking up domain ID for zone: {}", domain);

        let domains = self
            .client
            .list_domains(Some(&domain))
            .await
            .map_err(|e| e.during("could not list domains"))?;

        let matches: Vec<u64> = domains
            .iter()
            .filter(|d| d.domain.eq_ignore_ascii_case(&domain))
            .map(|d| d.id)
            .collect();

        match matches.as_slice() {
            [] => Err(Error::zone_not_found(domain)),
            [id] => {
                tracing::debug!("Found domain ID: {}", id);
                Ok(*id)
            }
            _ => Err(Error::ambiguous_zone(format!(
                "{} matches {} domains",
                domain,
                matches.len()
            ))),
        }
    }

    /// List every record of a domain
    pub async fn list_records(&self, zone: &str, domain_id: u64) -> Result<Vec<LinodeRecord>> {
        let records = self
            .client
            .list_domain_records(domain_id)
            .await
            .map_err(|e| e.during("could not list domain records"))?;

        Ok(records
            .iter()
            .map(|record| from_domain_record(record, zone))
            .collect())
    }

    /// Create the record, or update it when it already carries a Linode ID
    pub async fn upsert_record(
        &self,
        zone: &str,
        domain_id: u64,
        record: &Record,
    ) -> Result<LinodeRecord> {
        match id_from_record(record) {
            None => self.create_record(zone, domain_id, record.rr()).await,
            Some(record_id) => {
                self.update_record(zone, domain_id, record_id, record.rr())
                    .await
            }
        }
    }

    /// Create a record in a domain
    pub async fn create_record(&self, zone: &str, domain_id: u64, rr: &Rr) -> Result<LinodeRecord> {
        tracing::info!("Creating Linode DNS record in {}: {}", zone, rr);

        let created = self
            .client
            .create_domain_record(domain_id, &to_record_options(rr, zone))
            .await
            .map_err(|e| e.during("could not create domain record"))?;

        tracing::debug!("Created record ID: {}", created.id);
        Ok(merge(Some(rr), &created, zone))
    }

    /// Update the record with the given Linode ID
    pub async fn update_record(
        &self,
        zone: &str,
        domain_id: u64,
        record_id: u64,
        rr: &Rr,
    ) -> Result<LinodeRecord> {
        tracing::info!("Updating Linode DNS record {} in {}: {}", record_id, zone, rr);

        let updated = self
            .client
            .update_domain_record(domain_id, record_id, &to_record_options(rr, zone))
            .await
            .map_err(|e| e.during("could not update domain record"))?;

        Ok(merge(Some(rr), &updated, zone))
    }

    /// Delete a record by the Linode ID it carries
    ///
    /// A record without an ID fails with [`Error::RecordIdentityMissing`]
    /// before any API call is made.
    pub async fn delete_record(&self, domain_id: u64, record: &Record) -> Result<()> {
        let rr = record.rr();
        let record_id = id_from_record(record).ok_or_else(|| {
            Error::identity_missing(format!(
                "cannot delete {} record '{}' without a Linode record ID",
                rr.record_type, rr.name
            ))
        })?;

        tracing::info!("Deleting Linode DNS record {}: {}", record_id, rr);

        self.client
            .delete_domain_record(domain_id, record_id)
            .await
            .map_err(|e| e.during("could not delete domain record"))
    }
}

#[async_trait]
impl DnsProvider for LinodeProvider {
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let domain_id = self.resolve_zone_id(zone).await?;
        let records = self.list_records(zone, domain_id).await?;
        Ok(records.into_iter().map(Record::from).collect())
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let domain_id = self.resolve_zone_id(zone).await?;

        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let added = self.create_record(zone, domain_id, record.rr()).await?;
            created.push(Record::from(added));
        }
        Ok(created)
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let domain_id = self.resolve_zone_id(zone).await?;

        let mut applied = Vec::with_capacity(records.len());
        for record in records {
            let upserted = self.upsert_record(zone, domain_id, record).await?;
            applied.push(Record::from(upserted));
        }
        Ok(applied)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let domain_id = self.resolve_zone_id(zone).await?;

        let mut deleted = Vec::with_capacity(records.len());
        for record in records {
            self.delete_record(domain_id, record).await?;
            deleted.push(record.clone());
        }
        Ok(deleted)
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let domains = self
            .client
            .list_domains(None)
            .await
            .map_err(|e| e.during("could not list domains"))?;

        Ok(domains
            .into_iter()
            .map(|d| Zone {
                name: format!("{}.", d.domain),
            })
            .collect())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        let result = LinodeProvider::new("", None, None);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = LinodeProvider::new("token", Some("http://".to_string()), None);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_provider_name() {
        let provider = LinodeProvider::new("token", None, None).unwrap();
        assert_eq!(provider.provider_name(), "linode");
    }

    #[test]
    fn test_api_token_not_exposed_in_debug() {
        let provider = LinodeProvider::new("secret_token_12345", None, None).unwrap();

        let debug_str = format!("{:?}", provider);
        assert!(!debug_str.contains("secret_token_12345"));
        assert!(debug_str.contains("LinodeProvider"));
    }

    #[tokio::test]
    async fn test_delete_without_id_fails_before_any_call() {
        // Port 9 (discard) is never contacted: the ID check comes first
        let provider =
            LinodeProvider::new("token", Some("http://127.0.0.1:9".to_string()), None).unwrap();
        let record = Record::new(Rr::new(
            "www",
            "A",
            "1.2.3.4",
            std::time::Duration::from_secs(300),
        ));

        let result = provider.delete_record(1, &record).await;
        assert!(matches!(result, Err(Error::RecordIdentityMissing(_))));
    }

    #[tokio::test]
    async fn test_empty_batches_skip_zone_lookup() {
        let provider =
            LinodeProvider::new("token", Some("http://127.0.0.1:9".to_string()), None).unwrap();

        assert!(provider.append_records("example.com.", &[]).await.unwrap().is_empty());
        assert!(provider.set_records("example.com.", &[]).await.unwrap().is_empty());
        assert!(provider.delete_records("example.com.", &[]).await.unwrap().is_empty());
    }
}
