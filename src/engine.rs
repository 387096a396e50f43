// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine: the owned, hot-swappable home of the current store.
//!
//! Callers hold one `Engine` for the life of the process. It starts out
//! **unavailable** (no store) and stays that way until a load succeeds. While
//! unavailable, every query answers with an empty list or `None`, so the
//! presentation layer never has to tell "no data" apart from "no results".
//!
//! Readers take the lock only long enough to clone an `Arc<Store>` and then
//! run lock-free. A reload builds the new store off to the side and replaces
//! the whole thing in one write, so a reader sees either the old records and
//! indexes or the new ones, never a mix.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::LoadError;
use crate::search::FilterSpec;
use crate::stats::{AreaStats, NearbyOutcode};
use crate::store::Store;
use crate::suggest::Suggestion;
use crate::types::{Agent, GlobalStats, MatchedAgent};

#[derive(Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    current: RwLock<Option<Arc<Store>>>,
}

impl Engine {
    /// An unavailable engine that will build stores with `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            current: RwLock::new(None),
        }
    }

    /// An engine that is available from the start.
    pub fn with_store(store: Store) -> Self {
        let engine = Self::new(store.config().clone());
        engine.swap(store);
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Load a dataset file and swap it in.
    ///
    /// On failure the error is logged and the previous store (if any) stays
    /// in place; an engine that never loaded stays unavailable. Returns
    /// whether the load succeeded.
    pub fn load_path(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.absorb(Store::from_path(path, self.config.clone()), &path.display().to_string())
    }

    /// Parse a dataset document and swap it in. Same failure handling as
    /// [`load_path`](Self::load_path).
    pub fn load_json_bytes(&self, bytes: &[u8]) -> bool {
        self.absorb(Store::from_json_slice(bytes, self.config.clone()), "<bytes>")
    }

    fn absorb(&self, result: Result<Store, LoadError>, source: &str) -> bool {
        match result {
            Ok(store) => {
                self.swap(store);
                true
            }
            Err(err) => {
                warn!(source, error = %err, available = self.is_available(), "dataset load failed");
                false
            }
        }
    }

    /// Replace the current store as one unit.
    pub fn swap(&self, store: Store) {
        let fingerprint = store
            .fingerprint()
            .map_or_else(|| "-".to_string(), |crc| format!("{:08x}", crc));
        info!(
            agents = store.len(),
            outcodes = store.indexes().outcodes.len(),
            areas = store.indexes().areas.len(),
            %fingerprint,
            "store loaded"
        );
        *self.current.write() = Some(Arc::new(store));
    }

    /// Drop the current store. The engine becomes unavailable.
    pub fn clear(&self) {
        *self.current.write() = None;
    }

    /// The current store, if one is loaded.
    pub fn snapshot(&self) -> Option<Arc<Store>> {
        self.current.read().clone()
    }

    pub fn is_available(&self) -> bool {
        self.current.read().is_some()
    }

    // =========================================================================
    // QUERY SURFACE (empty / None while unavailable)
    // =========================================================================

    /// Resolve, filter, and rank `query`.
    pub fn search(&self, query: &str, filters: &FilterSpec) -> Vec<MatchedAgent> {
        self.snapshot().map_or_else(Vec::new, |store| {
            store
                .search(query, filters)
                .iter()
                .map(|hit| hit.to_owned_hit())
                .collect()
        })
    }

    /// [`search`](Self::search) with no filters.
    pub fn resolve(&self, query: &str) -> Vec<MatchedAgent> {
        self.search(query, &FilterSpec::default())
    }

    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        self.snapshot()
            .map_or_else(Vec::new, |store| store.suggest(query))
    }

    pub fn area_stats(&self, outcode: &str) -> Option<AreaStats> {
        self.snapshot()?.area_stats(outcode)
    }

    pub fn nearby_outcodes(&self, outcode: &str, limit: usize) -> Vec<NearbyOutcode> {
        self.snapshot()
            .map_or_else(Vec::new, |store| store.nearby_outcodes(outcode, limit))
    }

    pub fn agent(&self, id: usize) -> Option<Agent> {
        self.snapshot()?.agent(id).cloned()
    }

    pub fn global_stats(&self) -> Option<GlobalStats> {
        self.snapshot().map(|store| store.global_stats().clone())
    }
}
