// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The four-tier query resolver: postcode → nearby → area → name.
//!
//! Every tier is a cheap scan over something the index builder already
//! prepared. Tier 1 is a single hash lookup on the outcode index. If you type
//! "SW1A" you get the SW1A bucket immediately. Tier 2 walks the outcode keys
//! looking for ones that extend the query: "SW1" reaches SW1A and SW1V.
//! Tier 3 walks the area keys with a word-boundary check, so "chester" finds
//! Chester but not Godmanchester. Tier 4 is the fallback: a substring scan over
//! agent names.
//!
//! The tiers run in fixed order and feed one [`CandidateSet`]. A record keeps
//! the tier that reached it first, so an agent in SW1A that also covers
//! "Westminster" is a postcode hit, never an area hit.
//!
//! Each tier is gated on the query length. Short queries skip tiers instead of
//! erroring, and a query no tier matches resolves to nothing.

use tracing::debug;

use crate::config::EngineConfig;
use crate::contracts::{check_tiers_ordered, check_unique_ids};
use crate::index::Indexes;
use crate::scoring::ranking::rank_hits;
use crate::search::candidates::CandidateSet;
use crate::search::filter::{self, FilterSpec};
use crate::types::{Agent, Hit, MatchType};
use crate::util::text::{char_len, contains_word};

/// Whether an area index key matches a lowercased query.
///
/// Three ways in: the key equals the query, the query is a whole word (or
/// run of words) inside the key, or the key is a whole word inside the query.
/// The last one lets "manchester city centre" reach "manchester".
pub fn area_key_matches(key: &str, query: &str) -> bool {
    key == query || contains_word(key, query) || contains_word(query, key)
}

/// Borrowing view over one store's records and indexes that runs the tiers.
///
/// Cheap to construct: it is three references. The returned hits borrow the
/// records, so they live as long as the store does.
#[derive(Debug, Clone, Copy)]
pub struct TierSearcher<'a> {
    agents: &'a [Agent],
    indexes: &'a Indexes,
    config: &'a EngineConfig,
}

impl<'a> TierSearcher<'a> {
    pub fn new(agents: &'a [Agent], indexes: &'a Indexes, config: &'a EngineConfig) -> Self {
        Self {
            agents,
            indexes,
            config,
        }
    }

    /// Tier 1: the bucket stored under exactly `outcode` (already uppercased).
    pub fn search_tier1_exact(&self, outcode: &str) -> &'a [usize] {
        self.indexes.outcodes.get(outcode).unwrap_or(&[])
    }

    /// Tier 2: buckets of every outcode key that strictly extends `prefix`.
    ///
    /// Keys come back in index order. The exact key is skipped here because
    /// tier 1 already owns it.
    pub fn search_tier2_prefix(&self, prefix: &str) -> Vec<&'a [usize]> {
        if char_len(prefix) < self.config.min_prefix_len {
            return Vec::new();
        }
        self.indexes
            .outcodes
            .iter()
            .filter(|(key, _)| *key != prefix && key.starts_with(prefix))
            .map(|(_, ids)| ids)
            .collect()
    }

    /// Tier 3: buckets of every area key matching `query` (already lowercased)
    /// on word boundaries.
    pub fn search_tier3_area(&self, query: &str) -> Vec<&'a [usize]> {
        if char_len(query) < self.config.min_area_len {
            return Vec::new();
        }
        self.indexes
            .areas
            .iter()
            .filter(|(key, _)| area_key_matches(key, query))
            .map(|(_, ids)| ids)
            .collect()
    }

    /// Tier 4: ids of every agent whose lowercased name contains `query`.
    pub fn search_tier4_name(&self, query: &str) -> Vec<usize> {
        if char_len(query) < self.config.min_name_len {
            return Vec::new();
        }
        self.agents
            .iter()
            .filter(|agent| agent.name.to_lowercase().contains(query))
            .map(|agent| agent.id)
            .collect()
    }

    /// Run all four tiers and fold them into one first-match-wins set.
    ///
    /// The set is in discovery order, not ranked.
    pub fn resolve_candidates(&self, query: &str) -> CandidateSet {
        let mut candidates = CandidateSet::new();
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return candidates;
        }
        let upper = trimmed.to_uppercase();
        let lower = trimmed.to_lowercase();

        candidates.offer_all(self.search_tier1_exact(&upper), MatchType::Postcode);
        for ids in self.search_tier2_prefix(&upper) {
            candidates.offer_all(ids, MatchType::Nearby);
        }
        for ids in self.search_tier3_area(&lower) {
            candidates.offer_all(ids, MatchType::Area);
        }
        candidates.offer_all(&self.search_tier4_name(&lower), MatchType::Name);

        check_unique_ids(candidates.iter().map(|c| c.id));
        candidates
    }

    /// Resolve, filter, and rank a query.
    ///
    /// Output is ordered by tier, then by trust plus richness descending,
    /// with ties left in discovery order.
    pub fn search(&self, query: &str, filters: &FilterSpec) -> Vec<Hit<'a>> {
        let candidates = self.resolve_candidates(query);
        let [postcode, nearby, area, name] = candidates.tier_counts();

        let hits: Vec<Hit<'a>> = candidates
            .iter()
            .filter_map(|candidate| {
                self.agents.get(candidate.id).map(|agent| Hit {
                    agent,
                    match_type: candidate.match_type,
                })
            })
            .collect();

        let mut hits = filter::apply(hits, filters);
        rank_hits(&mut hits);
        check_tiers_ordered(&hits);

        debug!(
            query = query.trim(),
            postcode,
            nearby,
            area,
            name,
            kept = hits.len(),
            "resolved query"
        );
        hits
    }

    /// [`search`](Self::search) with no filters.
    pub fn resolve(&self, query: &str) -> Vec<Hit<'a>> {
        self.search(query, &FilterSpec::default())
    }
}
