// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the lookup tables every query starts from.
//!
//! Two indexes, built once when a dataset is loaded and never touched again:
//! - **Outcode index**: uppercased outcode ("SW1A") → agents based there
//! - **Area index**: lowercased area name ("west end") → agents covering it
//!
//! A third table, full postcode → agents, backs the postcode autocomplete's
//! frequency ranking. It lives here because it is built in the same pass.

mod key_index;

pub use key_index::KeyIndex;

use crate::types::Agent;

/// The derived lookup structures for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indexes {
    /// Uppercased outcode → ids.
    pub outcodes: KeyIndex,
    /// Lowercased area name → ids.
    pub areas: KeyIndex,
    /// Uppercased, whitespace-collapsed full postcode → ids.
    pub postcodes: KeyIndex,
}

/// Build all indexes from the agent list.
///
/// Pure function of its input. Absent or blank outcodes, postcodes, and area
/// names are skipped; there are no error cases.
pub fn build_indexes(agents: &[Agent]) -> Indexes {
    let mut indexes = Indexes::default();

    for agent in agents {
        if let Some(outcode) = agent.outcode_key() {
            indexes.outcodes.insert(outcode, agent.id);
        }
        if let Some(postcode) = agent.postcode_key() {
            indexes.postcodes.insert(postcode, agent.id);
        }
        for area in &agent.areas {
            let key = area.trim().to_lowercase();
            if !key.is_empty() {
                indexes.areas.insert(key, agent.id);
            }
        }
    }

    crate::contracts::check_indexes_well_formed(&indexes, agents);
    indexes
}
