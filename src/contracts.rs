// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the ranked output.
//!
//! Debug-mode assertions that check the properties the rest of the crate leans
//! on. They:
//!
//! 1. Are **skipped entirely in release builds** (guarded by `debug_assertions`)
//! 2. Fail loudly in tests, next to the code that broke them
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                     |
//! |------------------------------|----------------------------------------------|
//! | `check_indexes_well_formed`  | keys normalized, buckets non-empty, ids valid |
//! | `check_ids_are_positions`    | `agents[i].id == i`                          |
//! | `check_tiers_ordered`        | postcode < nearby < area < name in output    |
//! | `check_unique_ids`           | a record appears at most once in a result    |

use std::collections::HashSet;

use crate::index::{Indexes, KeyIndex};
use crate::types::{Agent, Hit};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check every index against the agent list it was built from.
///
/// # Panics (debug builds only)
/// Panics if a key is not in its normalized case, a bucket is empty or holds a
/// duplicate, or an id is out of bounds.
#[inline]
pub fn check_indexes_well_formed(indexes: &Indexes, agents: &[Agent]) {
    if !cfg!(debug_assertions) {
        return;
    }
    check_key_index(&indexes.outcodes, agents.len(), "outcode", |k| {
        k == k.to_uppercase()
    });
    check_key_index(&indexes.postcodes, agents.len(), "postcode", |k| {
        k == k.to_uppercase()
    });
    check_key_index(&indexes.areas, agents.len(), "area", |k| {
        k == k.to_lowercase()
    });
}

fn check_key_index(index: &KeyIndex, num_agents: usize, label: &str, normalized: impl Fn(&str) -> bool) {
    for (key, ids) in index.iter() {
        debug_assert!(
            !key.is_empty(),
            "Contract violation: {} index has an empty key",
            label
        );
        debug_assert!(
            normalized(key),
            "Contract violation: {} key '{}' is not normalized",
            label,
            key
        );
        debug_assert!(
            !ids.is_empty(),
            "Contract violation: {} key '{}' has an empty bucket",
            label,
            key
        );
        for &id in ids {
            debug_assert!(
                id < num_agents,
                "Contract violation: {} key '{}' holds id {} >= agents.len() {}",
                label,
                key,
                id,
                num_agents
            );
        }
        check_unique_ids(ids.iter().copied());
    }
}

/// Check that every agent's id is its position in the list.
#[inline]
pub fn check_ids_are_positions(agents: &[Agent]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (position, agent) in agents.iter().enumerate() {
        debug_assert_eq!(
            agent.id, position,
            "Contract violation: agents[{}].id is {}",
            position, agent.id
        );
    }
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that tiers never interleave: priorities are non-decreasing.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair where a worse tier precedes a better one.
#[inline]
pub fn check_tiers_ordered(hits: &[Hit<'_>]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for pair in hits.windows(2) {
        debug_assert!(
            pair[0].priority() <= pair[1].priority(),
            "Contract violation: {} hit (agent {}) ranked after {} hit (agent {})",
            pair[1].match_type,
            pair[1].agent.id,
            pair[0].match_type,
            pair[0].agent.id
        );
    }
}

/// Check that no id appears twice.
#[inline]
pub fn check_unique_ids(ids: impl IntoIterator<Item = usize>) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut seen = HashSet::new();
    for id in ids {
        debug_assert!(
            seen.insert(id),
            "Contract violation: id {} appears more than once",
            id
        );
    }
}
