// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers every comparator reads.
//!
//! Tier dominates score. A name match with the best trust in the country still
//! ranks below a postcode match with the worst. Within a tier, the composite
//! `trust_score + data_richness` decides.
//!
//! # Absent values
//!
//! | Key                | Absent becomes       | Effect                            |
//! |--------------------|----------------------|-----------------------------------|
//! | review count       | 0                    | sorts with the unreviewed         |
//! | review rating      | 0.0                  | sorts below any real rating       |
//! | years trading      | 0                    | sorts with the newest             |
//! | management percent | `ABSENT_FEE_RANK`    | sorts after every published fee   |

use crate::types::Agent;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Rank given to a missing management percentage under "lowest fees first".
///
/// Infinite, so agencies without fee data land after every published
/// percentage however large, whatever their trust.
pub const ABSENT_FEE_RANK: f64 = f64::INFINITY;

// =============================================================================
// SORT KEYS
// =============================================================================

/// Composite tie-break score: trust plus richness.
#[inline]
pub fn composite_score(agent: &Agent) -> u32 {
    agent.rank_score()
}

#[inline]
pub fn review_count(agent: &Agent) -> u32 {
    agent.reviews.count
}

#[inline]
pub fn rating_or_zero(agent: &Agent) -> f64 {
    agent.reviews.rating().unwrap_or(0.0)
}

#[inline]
pub fn years_or_zero(agent: &Agent) -> u32 {
    agent.performance.years_trading().unwrap_or(0)
}

/// Management percentage, or [`ABSENT_FEE_RANK`] when none was published.
#[inline]
pub fn fee_rank(agent: &Agent) -> f64 {
    agent.fees.management_pct().unwrap_or(ABSENT_FEE_RANK)
}
