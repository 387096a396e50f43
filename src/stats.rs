// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Area statistics: what the agents in one outcode look like as a group.
//!
//! Everything here is recomputed per call from the outcode bucket; nothing is
//! cached. An outcode the index has never seen yields `None`, which is not the
//! same thing as an empty area: index keys only exist when at least one agent
//! maps to them.
//!
//! Zero-valued ratings, fees, and years are scrape artifacts and are left out
//! of the averages, the same way [`Fees::management_pct`](crate::Fees::management_pct)
//! and friends report them as absent.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::index::Indexes;
use crate::types::{Agent, Category, GlobalStats, ProviderType};
use crate::util::text::alpha_prefix;

/// Mean, min, and max management percentage, each to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeSummary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// A top-ranked agent in an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentSummary {
    pub id: usize,
    pub name: String,
    /// Trust plus richness.
    pub score: u32,
}

/// National figures from the dataset's own aggregates, for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NationalComparison {
    pub avg_fee: Option<f64>,
    pub avg_trust: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaStats {
    pub outcode: String,
    pub agent_count: usize,
    pub avg_trust: u32,
    pub avg_rating: Option<f64>,
    pub fees: Option<FeeSummary>,
    pub avg_years: Option<u32>,
    pub provider_types: BTreeMap<ProviderType, usize>,
    pub categories: BTreeMap<Category, usize>,
    pub with_fees: usize,
    pub with_arla: usize,
    pub with_cmp: usize,
    pub with_reviews: usize,
    pub top_agents: Vec<AgentSummary>,
    pub agent_ids: Vec<usize>,
    pub national: Option<NationalComparison>,
}

/// An outcode sharing a lettered prefix with the one asked about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearbyOutcode {
    pub outcode: String,
    pub count: usize,
}

#[inline]
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Summarize the agents under `outcode`. Case and surrounding whitespace in
/// the outcode are ignored.
pub fn area_stats(
    agents: &[Agent],
    indexes: &Indexes,
    global: &GlobalStats,
    top_n: usize,
    outcode: &str,
) -> Option<AreaStats> {
    let key = outcode.trim().to_uppercase();
    let ids = indexes.outcodes.get(&key)?;
    let members: Vec<&Agent> = ids.iter().filter_map(|&id| agents.get(id)).collect();
    if members.is_empty() {
        return None;
    }

    let trust: Vec<f64> = members.iter().map(|a| f64::from(a.trust_score)).collect();
    let ratings: Vec<f64> = members.iter().filter_map(|a| a.reviews.rating()).collect();
    let fees: Vec<f64> = members.iter().filter_map(|a| a.fees.management_pct()).collect();
    let years: Vec<f64> = members
        .iter()
        .filter_map(|a| a.performance.years_trading())
        .map(f64::from)
        .collect();

    let fee_summary = mean(&fees).map(|avg| FeeSummary {
        avg: round1(avg),
        min: round1(fees.iter().copied().fold(f64::INFINITY, f64::min)),
        max: round1(fees.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
    });

    let mut provider_types = BTreeMap::new();
    let mut categories = BTreeMap::new();
    for agent in &members {
        if let Some(provider_type) = agent.provider_type {
            *provider_types.entry(provider_type).or_insert(0) += 1;
        }
        *categories.entry(agent.category).or_insert(0) += 1;
    }

    let mut ranked = members.clone();
    ranked.sort_by(|a, b| b.rank_score().cmp(&a.rank_score()));
    let top_agents = ranked
        .iter()
        .take(top_n)
        .map(|a| AgentSummary {
            id: a.id,
            name: a.name.clone(),
            score: a.rank_score(),
        })
        .collect();

    let national = (global.avg_fee.is_some() || global.avg_trust.is_some()).then(|| {
        NationalComparison {
            avg_fee: global.avg_fee,
            avg_trust: global.avg_trust,
        }
    });

    Some(AreaStats {
        outcode: key,
        agent_count: members.len(),
        avg_trust: mean(&trust).map_or(0, |avg| avg.round() as u32),
        avg_rating: mean(&ratings).map(round1),
        fees: fee_summary,
        avg_years: mean(&years).map(|avg| avg.round() as u32),
        provider_types,
        categories,
        with_fees: members.iter().filter(|a| a.fees.has_any()).count(),
        with_arla: members.iter().filter(|a| a.regulatory.arla).count(),
        with_cmp: members.iter().filter(|a| a.regulatory.cmp).count(),
        with_reviews: members.iter().filter(|a| a.reviews.rating().is_some()).count(),
        top_agents,
        agent_ids: members.iter().map(|a| a.id).collect(),
        national,
    })
}

/// Other outcodes with the same leading letters, busiest first.
///
/// "SW1" → prefix "SW" → SW1A, SW1V, SW3, ... but never SW1 itself, and never
/// S1 (prefix "S"). Equal counts keep index order. This is lexical
/// adjacency only; no geography is involved.
pub fn nearby_outcodes(indexes: &Indexes, outcode: &str, limit: usize) -> Vec<NearbyOutcode> {
    let key = outcode.trim().to_uppercase();
    let prefix = alpha_prefix(&key);
    if prefix.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut nearby: Vec<NearbyOutcode> = indexes
        .outcodes
        .iter()
        .filter(|(candidate, _)| *candidate != key && alpha_prefix(candidate) == prefix)
        .map(|(candidate, ids)| NearbyOutcode {
            outcode: candidate.to_string(),
            count: ids.len(),
        })
        .collect();
    nearby.sort_by(|a, b| b.count.cmp(&a.count));
    nearby.truncate(limit);
    nearby
}
