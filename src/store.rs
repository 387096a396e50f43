// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: one loaded dataset and the indexes derived from it.
//!
//! A `Store` is built once and never mutated. Refreshing the data means
//! building a new `Store` and swapping it into the [`Engine`](crate::Engine)
//! as a whole, so no reader ever sees records from one dataset paired with
//! indexes from another.
//!
//! Loading is the only fallible step. Once a store exists, every query on it
//! returns a (possibly empty) answer.

use std::fs;
use std::path::Path;

use crate::config::EngineConfig;
use crate::contracts::check_ids_are_positions;
use crate::error::{LoadError, Result};
use crate::index::{build_indexes, Indexes};
use crate::search::{CandidateSet, FilterSpec, TierSearcher};
use crate::stats::{self, AreaStats, NearbyOutcode};
use crate::suggest::{self, Suggestion};
use crate::types::{Agent, Dataset, GlobalStats, Hit};

#[derive(Debug, Clone)]
pub struct Store {
    agents: Vec<Agent>,
    stats: GlobalStats,
    indexes: Indexes,
    config: EngineConfig,
    /// CRC32 of the bytes the store was parsed from, when it came from bytes.
    fingerprint: Option<u32>,
}

impl Store {
    /// Build a store from an already-parsed dataset.
    ///
    /// Fails if any agent's id is not its position in the list.
    pub fn build(dataset: Dataset, config: EngineConfig) -> Result<Self> {
        if let Some((position, agent)) = dataset
            .agents
            .iter()
            .enumerate()
            .find(|(position, agent)| agent.id != *position)
        {
            return Err(LoadError::MisplacedId {
                position,
                id: agent.id,
            });
        }
        check_ids_are_positions(&dataset.agents);

        let indexes = build_indexes(&dataset.agents);
        Ok(Self {
            agents: dataset.agents,
            stats: dataset.stats,
            indexes,
            config,
            fingerprint: None,
        })
    }

    /// Parse a dataset document and build a store from it.
    pub fn from_json_slice(bytes: &[u8], config: EngineConfig) -> Result<Self> {
        let dataset: Dataset = serde_json::from_slice(bytes)?;
        let mut store = Self::build(dataset, config)?;
        store.fingerprint = Some(crc32fast::hash(bytes));
        Ok(store)
    }

    /// Read, parse, and build from a dataset file.
    pub fn from_path(path: impl AsRef<Path>, config: EngineConfig) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&bytes, config)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: usize) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn global_stats(&self) -> &GlobalStats {
        &self.stats
    }

    pub fn indexes(&self) -> &Indexes {
        &self.indexes
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fingerprint(&self) -> Option<u32> {
        self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn searcher(&self) -> TierSearcher<'_> {
        TierSearcher::new(&self.agents, &self.indexes, &self.config)
    }

    /// Unranked first-match-wins candidates for `query`.
    pub fn resolve_candidates(&self, query: &str) -> CandidateSet {
        self.searcher().resolve_candidates(query)
    }

    /// Ranked hits for `query`, unfiltered.
    pub fn resolve(&self, query: &str) -> Vec<Hit<'_>> {
        self.searcher().resolve(query)
    }

    /// Ranked hits for `query` that pass `filters`.
    pub fn search(&self, query: &str, filters: &FilterSpec) -> Vec<Hit<'_>> {
        self.searcher().search(query, filters)
    }

    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        suggest::suggest(&self.agents, &self.indexes, &self.config.suggest, query)
    }

    pub fn area_stats(&self, outcode: &str) -> Option<AreaStats> {
        stats::area_stats(
            &self.agents,
            &self.indexes,
            &self.stats,
            self.config.top_agents,
            outcode,
        )
    }

    pub fn nearby_outcodes(&self, outcode: &str, limit: usize) -> Vec<NearbyOutcode> {
        stats::nearby_outcodes(&self.indexes, outcode, limit)
    }
}
