//! Test doubles for provider contract tests
//!
//! An in-memory provider that follows the record identity rules of the
//! `DnsProvider` trait, plus a factory so it can be built via the registry.

#![allow(dead_code)]

use libdns_core::error::{Error, Result};
use libdns_core::{DnsProvider, DnsProviderFactory, ProviderConfig, Record};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// An in-memory DnsProvider with numeric IDs
pub struct MemoryProvider {
    zone: String,
    records: Mutex<BTreeMap<u64, Record>>,
    next_id: AtomicU64,
    api_calls: AtomicUsize,
}

impl MemoryProvider {
    pub fn new(zone: &str) -> Self {
        Self {
            zone: zone.trim_end_matches('.').to_string(),
            records: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            api_calls: AtomicUsize::new(0),
        }
    }

    /// Number of simulated API calls made so far
    pub fn api_calls(&self) -> usize {
        self.api_calls.load(Ordering::SeqCst)
    }

    fn check_zone(&self, zone: &str) -> Result<()> {
        self.api_calls.fetch_add(1, Ordering::SeqCst);
        if zone.trim_end_matches('.') == self.zone {
            Ok(())
        } else {
            Err(Error::zone_not_found(zone))
        }
    }

    fn create(&self, record: &Record) -> Record {
        self.api_calls.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Record::with_id(record.rr().clone(), id);
        self.records.lock().unwrap().insert(id, stored.clone());
        stored
    }

    fn parse_id(record: &Record) -> Option<u64> {
        record.id().and_then(|id| id.as_str().parse().ok())
    }
}

#[async_trait::async_trait]
impl DnsProvider for MemoryProvider {
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        self.check_zone(zone)?;
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        self.check_zone(zone)?;
        Ok(records.iter().map(|r| self.create(r)).collect())
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        self.check_zone(zone)?;
        let mut applied = Vec::new();
        for record in records {
            match Self::parse_id(record) {
                None => applied.push(self.create(record)),
                Some(id) => {
                    self.api_calls.fetch_add(1, Ordering::SeqCst);
                    let mut store = self.records.lock().unwrap();
                    if !store.contains_key(&id) {
                        return Err(Error::provider(
                            "memory",
                            "could not update record",
                            "not found",
                        ));
                    }
                    let stored = Record::with_id(record.rr().clone(), id);
                    store.insert(id, stored.clone());
                    applied.push(stored);
                }
            }
        }
        Ok(applied)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        self.check_zone(zone)?;
        let mut deleted = Vec::new();
        for record in records {
            let id = Self::parse_id(record)
                .ok_or_else(|| Error::identity_missing(record.rr().name.clone()))?;
            self.api_calls.fetch_add(1, Ordering::SeqCst);
            self.records.lock().unwrap().remove(&id);
            deleted.push(record.clone());
        }
        Ok(deleted)
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}

/// Factory building a [`MemoryProvider`] from `{"zone": "..."}`
pub struct MemoryFactory;

impl DnsProviderFactory for MemoryFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn DnsProvider>> {
        match config {
            ProviderConfig::Custom { config, .. } => {
                let zone = config["zone"]
                    .as_str()
                    .ok_or_else(|| Error::config("memory provider needs a zone"))?;
                Ok(Box::new(MemoryProvider::new(zone)))
            }
            _ => Err(Error::config("Invalid config for memory provider")),
        }
    }
}
