//! Core traits for libdns providers
//!
//! - [`DnsProvider`]: Manage the records of a zone via a provider API
//! - [`DnsProviderFactory`]: Build a provider from configuration

pub mod dns_provider;

pub use dns_provider::{DnsProvider, DnsProviderFactory};
