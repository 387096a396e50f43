// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dataset loading.
//!
//! Arbitrary bytes either fail with an error or produce a store whose indexes
//! only reference its own agents. Panicking is never acceptable.

#![no_main]

use libfuzzer_sys::fuzz_target;

use agentfind::{EngineConfig, Store};

fuzz_target!(|bytes: &[u8]| {
    let Ok(store) = Store::from_json_slice(bytes, EngineConfig::default()) else {
        return;
    };

    for (_, ids) in store.indexes().outcodes.iter() {
        assert!(!ids.is_empty());
        assert!(ids.iter().all(|&id| id < store.len()));
    }
    for (_, ids) in store.indexes().areas.iter() {
        assert!(!ids.is_empty());
        assert!(ids.iter().all(|&id| id < store.len()));
    }
});
