// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query resolution and filtering.
//!
//! Throws arbitrary text and filter combinations at the resolver and checks
//! the output invariants: no panics, no duplicates, tier order, and filters
//! that only ever remove.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

use agentfind::testing::sample_agents;
use agentfind::{apply_filters, Dataset, EngineConfig, FilterSpec, GlobalStats, Store};

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    min_trust: Option<u8>,
    has_reviews: bool,
    has_fees: bool,
    arla: bool,
    cmp: bool,
}

fn store() -> &'static Store {
    static STORE: OnceLock<Store> = OnceLock::new();
    STORE.get_or_init(|| {
        Store::build(
            Dataset {
                agents: sample_agents(),
                stats: GlobalStats::default(),
            },
            EngineConfig::default(),
        )
        .expect("sample agents have positional ids")
    })
}

fuzz_target!(|input: Input| {
    let store = store();

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();
    let hits = store.resolve(&query);

    // INVARIANT 1: every id points at a real agent, at most once
    let mut seen = HashSet::new();
    for hit in &hits {
        assert!(hit.agent.id < store.len());
        assert!(seen.insert(hit.agent.id), "duplicate id {}", hit.agent.id);
    }

    // INVARIANT 2: tier first, composite second
    for pair in hits.windows(2) {
        assert!(pair[0].match_type <= pair[1].match_type);
        if pair[0].match_type == pair[1].match_type {
            assert!(pair[0].agent.rank_score() >= pair[1].agent.rank_score());
        }
    }

    // INVARIANT 3: blank queries find nothing
    if query.trim().is_empty() {
        assert!(hits.is_empty());
    }

    // INVARIANT 4: filtering keeps a subsequence and matches the search path
    let spec = FilterSpec {
        min_trust: input.min_trust.map(u32::from),
        has_reviews: input.has_reviews,
        has_fees: input.has_fees,
        arla: input.arla,
        cmp: input.cmp,
        ..FilterSpec::default()
    };
    let filtered = apply_filters(hits.clone(), &spec);
    assert!(filtered.len() <= hits.len());
    let searched = store.search(&query, &spec);
    let a: Vec<usize> = filtered.iter().map(|h| h.agent.id).collect();
    let b: Vec<usize> = searched.iter().map(|h| h.agent.id).collect();
    assert_eq!(a, b);
});
