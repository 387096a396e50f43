// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for autocomplete.
//!
//! Multi-byte text, stray commas and whitespace runs must never panic the
//! suggestion builder or break its caps.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use agentfind::testing::sample_agents;
use agentfind::{Dataset, EngineConfig, GlobalStats, Store};

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

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();
    let suggestions = store().suggest(&query);

    assert!(suggestions.len() <= store().config().suggest.final_total);
    if query.trim().chars().count() < 2 {
        assert!(suggestions.is_empty());
    }
    for suggestion in &suggestions {
        assert!(suggestion.count >= 1);
        assert!(!suggestion.text.is_empty());
    }
});
