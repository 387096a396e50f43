// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: the tier order search produces and the re-sorts users pick.
//!
//! Search output is bucketed by match tier, not by raw score. A postcode hit
//! with composite 55 beats a name hit with composite 120. The composite score
//! only matters as a tiebreaker within each bucket.
//!
//! Bucket hierarchy: Postcode > Nearby > Area > Name
//!
//! Re-sorting by a [`SortCriterion`] ignores tiers entirely and is always
//! stable: records that compare equal keep the order they came in, which is
//! what makes sorting idempotent.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::core::{composite_score, fee_rank, rating_or_zero, review_count, years_or_zero};
use crate::types::{Agent, AgentRecord, Hit};
use crate::util::text::collation_key;

/// Compare two hits for search ranking.
///
/// Sort order:
/// 1. **Match tier** - bucket hierarchy dominates (Postcode > ... > Name)
/// 2. **Composite score** - `trust_score + data_richness`, higher wins
///
/// Equal hits compare `Equal`; callers use a stable sort so discovery order
/// settles the rest.
pub fn compare_hits(a: &Hit<'_>, b: &Hit<'_>) -> Ordering {
    match a.match_type.cmp(&b.match_type) {
        Ordering::Equal => composite_score(b.agent).cmp(&composite_score(a.agent)),
        ord => ord,
    }
}

/// Sort hits in place into search order.
pub fn rank_hits(hits: &mut [Hit<'_>]) {
    hits.sort_by(compare_hits);
}

// =============================================================================
// USER-CHOSEN RE-SORTS
// =============================================================================

/// A named ordering offered to users after a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Trust plus richness, descending.
    Trust,
    /// Review count, descending.
    Reviews,
    /// Review average, descending.
    Rating,
    /// Agencies with fee data first, then trust plus richness.
    HasFees,
    /// Management percentage ascending; missing fees last.
    FeesLow,
    /// Years trading, descending.
    Years,
    /// Name, A to Z, accent-insensitive.
    Name,
}

impl SortCriterion {
    /// Every criterion, in menu order.
    pub const ALL: [SortCriterion; 7] = [
        SortCriterion::Trust,
        SortCriterion::Reviews,
        SortCriterion::Rating,
        SortCriterion::HasFees,
        SortCriterion::FeesLow,
        SortCriterion::Years,
        SortCriterion::Name,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortCriterion::Trust => "trust",
            SortCriterion::Reviews => "reviews",
            SortCriterion::Rating => "rating",
            SortCriterion::HasFees => "has_fees",
            SortCriterion::FeesLow => "fees_low",
            SortCriterion::Years => "years",
            SortCriterion::Name => "name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::Trust => "Trust Score",
            SortCriterion::Reviews => "Most Reviews",
            SortCriterion::Rating => "Highest Rated",
            SortCriterion::HasFees => "Has Fee Data",
            SortCriterion::FeesLow => "Lowest Fees",
            SortCriterion::Years => "Most Experienced",
            SortCriterion::Name => "Name (A-Z)",
        }
    }

    /// Parse a criterion name, returning `None` for anything unrecognized.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str().eq_ignore_ascii_case(value))
    }

    /// Compare two agents under this criterion.
    ///
    /// Not used for [`SortCriterion::Name`], which sorts by a cached
    /// collation key instead.
    fn compare(self, a: &Agent, b: &Agent) -> Ordering {
        match self {
            SortCriterion::Trust => composite_score(b).cmp(&composite_score(a)),
            SortCriterion::Reviews => review_count(b).cmp(&review_count(a)),
            SortCriterion::Rating => rating_or_zero(b).total_cmp(&rating_or_zero(a)),
            SortCriterion::HasFees => b
                .fees
                .has_any()
                .cmp(&a.fees.has_any())
                .then_with(|| composite_score(b).cmp(&composite_score(a))),
            SortCriterion::FeesLow => fee_rank(a).total_cmp(&fee_rank(b)),
            SortCriterion::Years => years_or_zero(b).cmp(&years_or_zero(a)),
            SortCriterion::Name => collation_key(&a.name).cmp(&collation_key(&b.name)),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for [`SortCriterion::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort criterion '{0}'")]
pub struct UnknownCriterion(pub String);

impl FromStr for SortCriterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| UnknownCriterion(s.to_string()))
    }
}

/// Return a freshly sorted copy of `records`. The input is untouched.
pub fn sort_records<T: AgentRecord + Clone>(records: &[T], criterion: SortCriterion) -> Vec<T> {
    let mut sorted = records.to_vec();
    match criterion {
        SortCriterion::Name => sorted.sort_by_cached_key(|record| {
            let name = &record.agent().name;
            (collation_key(name), name.clone())
        }),
        _ => sorted.sort_by(|a, b| criterion.compare(a.agent(), b.agent())),
    }
    sorted
}

/// Sort by a criterion name. Unrecognized names return the input order.
pub fn sort_records_named<T: AgentRecord + Clone>(records: &[T], criterion: &str) -> Vec<T> {
    match SortCriterion::parse_lenient(criterion) {
        Some(criterion) => sort_records(records, criterion),
        None => records.to_vec(),
    }
}
