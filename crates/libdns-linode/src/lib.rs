// # Linode DNS Provider
//
// This crate provides a Linode DNS Manager implementation of the libdns
// `DnsProvider` trait.
//
// ## Behaviour
//
// - Each top-level operation resolves the zone name to a Linode domain ID
//   (`GET /domains` with an exact-name filter), then works on that domain
// - `append_records` always creates; `set_records` updates records that
//   carry a Linode ID and creates the rest; `delete_records` requires an ID
// - Records returned to callers keep the fields the caller supplied and gain
//   the ID Linode assigned
// - One HTTP request per record operation, errors propagated as-is
// - NO retry, backoff, caching or batching
//
// ## Security Requirements
//
// - API token NEVER appears in logs or Debug output
// - Provider MUST fail fast if token is empty
//
// ## API Reference
//
// - Linode API v4: https://techdocs.akamai.com/linode-api/reference/api
// - Domains: `/v4/domains`, Domain Records: `/v4/domains/:domain_id/records`

pub mod client;
pub mod convert;
pub mod error;
pub mod identity;
pub mod provider;
pub mod types;

pub use client::LinodeClient;
pub use convert::LinodeRecord;
pub use error::LinodeError;
pub use provider::LinodeProvider;

use libdns_core::{DnsProvider, DnsProviderFactory, Error, ProviderConfig, ProviderRegistry, Result};

/// Name under which the provider registers and reports errors
pub const PROVIDER_NAME: &str = "linode";

/// Factory for creating Linode providers
pub struct LinodeFactory;

impl DnsProviderFactory for LinodeFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn DnsProvider>> {
        match config {
            ProviderConfig::Linode {
                api_token,
                api_url,
                api_version,
            } => Ok(Box::new(LinodeProvider::new(
                api_token.clone(),
                api_url.clone(),
                api_version.clone(),
            )?)),
            _ => Err(Error::config("Invalid config for Linode provider")),
        }
    }
}

/// Register the Linode provider with a registry
///
/// # Example
///
/// ```rust
/// use libdns_core::ProviderRegistry;
///
/// let registry = ProviderRegistry::new();
/// libdns_linode::register(&registry);
/// assert!(registry.has_provider("linode"));
/// ```
pub fn register(registry: &ProviderRegistry) {
    registry.register_provider(PROVIDER_NAME, Box::new(LinodeFactory));
}
