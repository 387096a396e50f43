// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the directory.
//!
//! An [`Agent`] is one letting or estate agency as it arrives in the dataset.
//! Most of it is optional: the scrape that produced the data filled in whatever
//! it could find, and the precomputed `trust_score` / `data_richness` pair is
//! the only thing ranking can always rely on.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Agent ids**: `agents[i].id == i`. Ids are positions, so lookups are a
//!   slice index and index buckets can store bare `usize`s.
//!
//! - **Scores**: `trust_score` and `data_richness` are always present. Every
//!   tie-break sums them, so a missing score would poison the whole ordering.
//!
//! - **Category**: always one of letting / estate / both. Anything else fails
//!   deserialization rather than silently matching no filter.
//!
//! Field names follow the dataset JSON (`agent_type`, `mgmt_pct`, ...), not
//! the Rust names, so the same file the static site serves loads unchanged.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::text::{first_token_upper, non_empty};

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// What kind of business the agency runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Letting,
    Estate,
    Both,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Letting => "letting",
            Category::Estate => "estate",
            Category::Both => "both",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the agency trades: shop front, purely online, or a mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    HighStreet,
    Online,
    Hybrid,
}

impl ProviderType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderType::HighStreet => "high_street",
            ProviderType::Online => "online",
            ProviderType::Hybrid => "hybrid",
        }
    }

    /// Human-readable label used by listings.
    pub fn label(self) -> &'static str {
        match self {
            ProviderType::HighStreet => "High Street",
            ProviderType::Online => "Online",
            ProviderType::Hybrid => "Hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high_street" | "high-street" | "highstreet" => Some(ProviderType::HighStreet),
            "online" => Some(ProviderType::Online),
            "hybrid" => Some(ProviderType::Hybrid),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recent listing activity, precomputed alongside the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Active,
    Moderate,
    Low,
}

impl Activity {
    pub fn label(self) -> &'static str {
        match self {
            Activity::Active => "Active",
            Activity::Moderate => "Moderate",
            Activity::Low => "Low Activity",
        }
    }
}

// =============================================================================
// STRUCTURED DETAIL
// =============================================================================

/// A fee as the source published it: either a bare number or a phrase
/// like "6% + VAT".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeeAmount {
    Amount(f64),
    Text(String),
}

impl FeeAmount {
    /// Zero amounts and blank text count as "not published".
    pub fn is_present(&self) -> bool {
        match self {
            FeeAmount::Amount(value) => value.is_finite() && *value > 0.0,
            FeeAmount::Text(text) => !text.trim().is_empty(),
        }
    }
}

impl fmt::Display for FeeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeAmount::Amount(value) => write!(f, "£{}", value),
            FeeAmount::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    #[serde(default)]
    pub tenant_find: Option<FeeAmount>,
    #[serde(default)]
    pub full_management: Option<FeeAmount>,
    /// Management fee as a percentage of rent.
    #[serde(default)]
    pub mgmt_pct: Option<f64>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub guaranteed_rent: Option<FeeAmount>,
}

impl Fees {
    /// Management percentage, if one was published.
    ///
    /// A zero percentage is a scrape artifact, not a free service, so it is
    /// reported as absent.
    pub fn management_pct(&self) -> Option<f64> {
        self.mgmt_pct.filter(|pct| pct.is_finite() && *pct > 0.0)
    }

    /// True when any of tenant-find, full-management, or percentage is known.
    pub fn has_any(&self) -> bool {
        self.tenant_find.as_ref().is_some_and(FeeAmount::is_present)
            || self.full_management.as_ref().is_some_and(FeeAmount::is_present)
            || self.management_pct().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reviews {
    /// Average rating on a 0-5 scale.
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub count: u32,
    /// Review platforms the agency appears on.
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl Reviews {
    pub fn rating(&self) -> Option<f64> {
        self.avg.filter(|avg| avg.is_finite() && *avg > 0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulatory {
    #[serde(default)]
    pub arla: bool,
    #[serde(default)]
    pub tpo: bool,
    #[serde(default)]
    pub prs: bool,
    #[serde(default)]
    pub cmp: bool,
    #[serde(default)]
    pub deposit: bool,
}

impl Regulatory {
    /// Display names of the schemes this agency belongs to.
    pub fn present_labels(&self) -> Vec<&'static str> {
        [
            (self.arla, "ARLA Propertymark"),
            (self.tpo, "The Property Ombudsman"),
            (self.prs, "Property Redress Scheme"),
            (self.cmp, "Client Money Protection"),
            (self.deposit, "Deposit Protection"),
        ]
        .into_iter()
        .filter_map(|(present, label)| present.then_some(label))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Years this branch has been trading.
    #[serde(default)]
    pub years: Option<u32>,
    #[serde(default)]
    pub brand_age: Option<u32>,
    #[serde(default)]
    pub offices: Option<u32>,
    /// Properties under management.
    #[serde(default)]
    pub managed: Option<u32>,
    /// Properties currently listed.
    #[serde(default)]
    pub listed: Option<u32>,
    /// Average days to let.
    #[serde(default)]
    pub avg_time_to_let: Option<f64>,
}

impl Performance {
    pub fn years_trading(&self) -> Option<u32> {
        self.years.filter(|years| *years > 0)
    }
}

// =============================================================================
// THE RECORD
// =============================================================================

/// One agency in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: usize,
    pub name: String,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub outcode: Option<String>,
    /// Comma-delimited street address.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    pub category: Category,
    #[serde(default, rename = "agent_type")]
    pub provider_type: Option<ProviderType>,
    #[serde(default)]
    pub service_tiers: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub fees: Fees,
    #[serde(default)]
    pub reviews: Reviews,
    #[serde(default)]
    pub regulatory: Regulatory,
    #[serde(default)]
    pub performance: Performance,
    /// Presence flag per social channel.
    #[serde(default)]
    pub social: BTreeMap<String, bool>,
    /// Presence flag per listing portal.
    #[serde(default)]
    pub portals: BTreeMap<String, bool>,
    /// Area names this agency covers.
    #[serde(default)]
    pub areas: Vec<String>,
    pub trust_score: u32,
    pub data_richness: u32,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub activity: Option<Activity>,
    #[serde(default)]
    pub guaranteed_rent: bool,
}

impl Agent {
    /// Trust plus richness: the score every tie-break uses.
    #[inline]
    pub fn rank_score(&self) -> u32 {
        self.trust_score.saturating_add(self.data_richness)
    }

    /// Uppercased outcode: the explicit field if present, otherwise the first
    /// token of the postcode.
    pub fn outcode_key(&self) -> Option<String> {
        self.outcode
            .as_deref()
            .and_then(non_empty)
            .or_else(|| self.postcode.as_deref().and_then(non_empty))
            .and_then(first_token_upper)
    }

    /// Uppercased full postcode with whitespace collapsed to single spaces.
    pub fn postcode_key(&self) -> Option<String> {
        let postcode = self.postcode.as_deref().and_then(non_empty)?;
        Some(
            postcode
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_uppercase(),
        )
    }

    /// Service tiers and services, lowercased and joined into one haystack.
    pub fn services_text(&self) -> String {
        self.service_tiers
            .iter()
            .chain(self.services.iter())
            .map(|s| s.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "SW1A 1AA - London": postcode (or "UK") plus the city, or the last
    /// address component when no city is recorded.
    pub fn location_line(&self) -> String {
        let mut parts = vec![self
            .postcode
            .as_deref()
            .and_then(non_empty)
            .unwrap_or("UK")
            .to_string()];
        if let Some(city) = self.city.as_deref().and_then(non_empty) {
            parts.push(city.to_string());
        } else if let Some(address) = self.address.as_deref().and_then(non_empty) {
            if let Some(last) = address.rsplit(',').next().map(str::trim) {
                if !last.is_empty() {
                    parts.push(last.to_string());
                }
            }
        }
        parts.join(" - ")
    }
}

// =============================================================================
// DATASET
// =============================================================================

/// Dataset-level aggregates computed by the export job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    #[serde(default)]
    pub total_agents: Option<usize>,
    /// National average management percentage.
    #[serde(default)]
    pub avg_fee: Option<f64>,
    /// National average trust score.
    #[serde(default)]
    pub avg_trust: Option<f64>,
    /// Anything else the export job decided to publish.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The file the directory is loaded from.
///
/// Pre-built `postcodeIndex` / `areaIndex` keys that older exports carry are
/// ignored: indexes are always derived from `agents`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub stats: GlobalStats,
}

// =============================================================================
// MATCHING
// =============================================================================

/// Which resolution tier first matched a record.
///
/// Declaration order is priority order: `Postcode < Nearby < Area < Name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Postcode,
    Nearby,
    Area,
    Name,
}

impl MatchType {
    /// Priority tier, 1 = best.
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            MatchType::Postcode => 1,
            MatchType::Nearby => 2,
            MatchType::Area => 3,
            MatchType::Name => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Postcode => "postcode",
            MatchType::Nearby => "nearby",
            MatchType::Area => "area",
            MatchType::Name => "name",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved record borrowed from the store, annotated with how it matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit<'a> {
    #[serde(flatten)]
    pub agent: &'a Agent,
    #[serde(rename = "_matchType")]
    pub match_type: MatchType,
}

impl Hit<'_> {
    pub fn priority(&self) -> u8 {
        self.match_type.priority()
    }

    pub fn to_owned_hit(&self) -> MatchedAgent {
        MatchedAgent {
            agent: self.agent.clone(),
            match_type: self.match_type,
        }
    }
}

/// Owned form of [`Hit`], returned across the [`Engine`](crate::Engine)
/// boundary where borrows cannot outlive the store snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedAgent {
    #[serde(flatten)]
    pub agent: Agent,
    #[serde(rename = "_matchType")]
    pub match_type: MatchType,
}

/// Anything that carries an agent record: bare records, hits, owned hits.
///
/// The filter engine and ranker are written against this so the same
/// predicates and comparators work on every stage of the pipeline.
pub trait AgentRecord {
    fn agent(&self) -> &Agent;
}

impl AgentRecord for Agent {
    fn agent(&self) -> &Agent {
        self
    }
}

impl AgentRecord for &Agent {
    fn agent(&self) -> &Agent {
        self
    }
}

impl AgentRecord for Hit<'_> {
    fn agent(&self) -> &Agent {
        self.agent
    }
}

impl AgentRecord for MatchedAgent {
    fn agent(&self) -> &Agent {
        &self.agent
    }
}
