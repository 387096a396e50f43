// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: turning what someone typed into a ranked list of agents.
//!
//! Everything culminates here. The index builder prepared the outcode and
//! area tables; now a query walks them tier by tier (postcode → nearby →
//! area → name), the filter engine narrows what was found, and the ranker
//! puts it in order.

pub mod candidates;
pub mod filter;
pub mod resolve;

pub use candidates::{Candidate, CandidateSet};
pub use filter::{
    apply as apply_filters, AgentTypeFilter, CategoryFilter, FilterSpec, ServiceType,
};
pub use resolve::{area_key_matches, TierSearcher};
