// # libdns-core
//
// Provider-agnostic DNS record management.
//
// ## Architecture Overview
//
// This library defines what every DNS provider adapter shares:
// - **Rr / Record**: Resource records, optionally tagged with the identifier
//   the provider assigned
// - **DnsProvider**: Trait for listing, creating, updating and deleting
//   records via a provider API
// - **ProviderRegistry**: Plugin-based registry that builds providers from
//   configuration
// - **names**: Helpers converting between zone-relative and absolute names
//
// ## Design Principles
//
// 1. **Explicit identity**: A record's provider identifier travels with it
//    as data, never inferred from its type
// 2. **Explicit construction**: Providers are configured once, when built
// 3. **Plugin-Based**: Providers are registered dynamically, no hard-coded if-else
// 4. **No hidden policy**: No retries, caching or batching inside providers

pub mod config;
pub mod error;
pub mod names;
pub mod record;
pub mod registry;
pub mod traits;

// Re-export core types for convenience
pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use record::{Record, RecordId, Rr, Zone};
pub use registry::ProviderRegistry;
pub use traits::{DnsProvider, DnsProviderFactory};
