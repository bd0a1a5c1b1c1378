// # Linode Records Demo
//
// Read-only tool exercising the Linode provider against the real Linode API.
// With a zone it prints every record of that zone; without one it prints the
// zones the token can manage.
//
// ## Usage
//
// ```bash
// LINODE_TOKEN=your_token \
// LIBDNS_ZONE=example.com. \
// cargo run -p libdns-linode-demos --bin linode_records
// ```
//
// ## Environment Variables
//
// Required:
// - `LINODE_TOKEN`: Linode personal access token (Domains read scope)
//
// Optional:
// - `LIBDNS_ZONE`: Zone to list records for
// - `LINODE_URL`: Alternate API base URL
// - `LINODE_API_VERSION`: API version (default: v4)
// - `LIBDNS_LOG_LEVEL`: trace, debug, info, warn, error (default: info)

use anyhow::{Context, Result};
use libdns_core::{DnsProvider, ProviderConfig, ProviderRegistry};
use std::env;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let log_level = match env::var("LIBDNS_LOG_LEVEL")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let config = ProviderConfig::Linode {
        api_token: env::var("LINODE_TOKEN").context("LINODE_TOKEN is required")?,
        api_url: env::var("LINODE_URL").ok(),
        api_version: env::var("LINODE_API_VERSION").ok(),
    };

    let registry = ProviderRegistry::new();
    libdns_linode::register(&registry);
    let provider = registry.create_provider(&config)?;

    match env::var("LIBDNS_ZONE") {
        Ok(zone) => {
            let records = provider.get_records(&zone).await?;
            info!("{} record(s) in {}", records.len(), zone);
            for record in records {
                let id = record.id().map(|id| id.to_string()).unwrap_or_default();
                println!("{:>10}  {}", id, record.rr());
            }
        }
        Err(_) => {
            let zones = provider.list_zones().await?;
            info!("{} zone(s) available", zones.len());
            for zone in zones {
                println!("{}", zone.name);
            }
        }
    }

    Ok(())
}
