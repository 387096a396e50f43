// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how result lists get their order.
//!
//! The key insight is that the match tier dominates everything else. A
//! postcode hit with trust 55 beats a name hit with trust 95. Scores only
//! break ties inside a tier, or drive the user-chosen re-sorts.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_hits, rank_hits, sort_records, sort_records_named, SortCriterion};
