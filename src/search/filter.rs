// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The filter engine: pure narrowing over a result set.
//!
//! A [`FilterSpec`] is a bag of independent, optional predicates. Each field
//! that is set narrows the set; unset fields impose nothing. Predicates are
//! ANDed, so applying two specs one after the other gives the same result as
//! applying their conjunction once.
//!
//! Nothing in here can fail. Unrecognized service types and categories parse
//! to an `Unrecognized` variant that constrains nothing. An unrecognized
//! agency type also parses, but no agency carries it, so it matches nothing.
//! A blank experience label is no constraint.

use serde::{Deserialize, Serialize};

use crate::types::{Agent, AgentRecord, Category, ProviderType};

/// Which service the user needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    TenantFind,
    FullManagement,
    GuaranteedRent,
    #[serde(other)]
    Unrecognized,
}

impl ServiceType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tenant_find" => ServiceType::TenantFind,
            "full_management" => ServiceType::FullManagement,
            "guaranteed_rent" => ServiceType::GuaranteedRent,
            _ => ServiceType::Unrecognized,
        }
    }

    fn matches(self, agent: &Agent) -> bool {
        let text = agent.services_text();
        match self {
            ServiceType::TenantFind => text.contains("tenant find"),
            ServiceType::FullManagement => {
                text.contains("full management") || text.contains("fully managed")
            }
            ServiceType::GuaranteedRent => agent.guaranteed_rent || text.contains("guaranteed rent"),
            ServiceType::Unrecognized => true,
        }
    }
}

/// Category narrowing.
///
/// `Letting` and `Estate` also accept agencies that do both; the `*Only`
/// variants and `Both` require the exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    Letting,
    Estate,
    LettingOnly,
    EstateOnly,
    Both,
    #[serde(other)]
    Unrecognized,
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "letting" => CategoryFilter::Letting,
            "estate" => CategoryFilter::Estate,
            "letting_only" => CategoryFilter::LettingOnly,
            "estate_only" => CategoryFilter::EstateOnly,
            "both" => CategoryFilter::Both,
            _ => CategoryFilter::Unrecognized,
        }
    }

    fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::Letting => matches!(category, Category::Letting | Category::Both),
            CategoryFilter::Estate => matches!(category, Category::Estate | Category::Both),
            CategoryFilter::LettingOnly => category == Category::Letting,
            CategoryFilter::EstateOnly => category == Category::Estate,
            CategoryFilter::Both => category == Category::Both,
            CategoryFilter::Unrecognized => true,
        }
    }
}

/// Agency type narrowing; exact match on the record's provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentTypeFilter {
    HighStreet,
    Online,
    Hybrid,
    #[serde(other)]
    Unrecognized,
}

impl AgentTypeFilter {
    fn matches(self, provider: Option<ProviderType>) -> bool {
        let wanted = match self {
            AgentTypeFilter::HighStreet => ProviderType::HighStreet,
            AgentTypeFilter::Online => ProviderType::Online,
            AgentTypeFilter::Hybrid => ProviderType::Hybrid,
            AgentTypeFilter::Unrecognized => return false,
        };
        provider == Some(wanted)
    }
}

impl From<ProviderType> for AgentTypeFilter {
    fn from(provider: ProviderType) -> Self {
        match provider {
            ProviderType::HighStreet => AgentTypeFilter::HighStreet,
            ProviderType::Online => AgentTypeFilter::Online,
            ProviderType::Hybrid => AgentTypeFilter::Hybrid,
        }
    }
}

/// Independently optional predicates, ANDed together.
///
/// Field names serialize in camelCase to match the query-string keys the
/// presentation layer already uses (`minTrust`, `hasReviews`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub service_type: Option<ServiceType>,
    pub agent_type: Option<AgentTypeFilter>,
    pub min_trust: Option<u32>,
    pub has_reviews: bool,
    pub has_fees: bool,
    pub arla: bool,
    pub cmp: bool,
    pub guaranteed_rent: bool,
    pub experience: Option<String>,
    pub category: Option<CategoryFilter>,
}

impl FilterSpec {
    /// True when no field is set, i.e. the spec keeps everything.
    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// Whether `agent` passes every set predicate.
    pub fn matches(&self, agent: &Agent) -> bool {
        if let Some(service) = self.service_type {
            if !service.matches(agent) {
                return false;
            }
        }
        if let Some(agent_type) = self.agent_type {
            if !agent_type.matches(agent.provider_type) {
                return false;
            }
        }
        if let Some(min_trust) = self.min_trust {
            if agent.trust_score < min_trust {
                return false;
            }
        }
        if self.has_reviews && agent.reviews.rating().is_none() {
            return false;
        }
        if self.has_fees && !agent.fees.has_any() {
            return false;
        }
        if self.arla && !agent.regulatory.arla {
            return false;
        }
        if self.cmp && !agent.regulatory.cmp {
            return false;
        }
        if self.guaranteed_rent && !agent.guaranteed_rent {
            return false;
        }
        if let Some(experience) = self.experience_label() {
            if agent.experience.as_deref() != Some(experience) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if !category.matches(agent.category) {
                return false;
            }
        }
        true
    }

    /// The experience label to match, if one was given and is not blank.
    pub fn experience_label(&self) -> Option<&str> {
        self.experience.as_deref().filter(|label| !label.trim().is_empty())
    }

    /// Conjunction of two specs.
    ///
    /// Boolean requirements are ORed together and `min_trust` takes the
    /// stricter threshold. For the remaining fields, when both sides set
    /// different values the left one is kept, so only specs with independent
    /// fields compose into an exact conjunction.
    pub fn and(&self, other: &FilterSpec) -> FilterSpec {
        FilterSpec {
            service_type: self.service_type.or(other.service_type),
            agent_type: self.agent_type.or(other.agent_type),
            min_trust: match (self.min_trust, other.min_trust) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, b) => a.or(b),
            },
            has_reviews: self.has_reviews || other.has_reviews,
            has_fees: self.has_fees || other.has_fees,
            arla: self.arla || other.arla,
            cmp: self.cmp || other.cmp,
            guaranteed_rent: self.guaranteed_rent || other.guaranteed_rent,
            experience: self
                .experience_label()
                .or_else(|| other.experience_label())
                .map(str::to_string),
            category: self.category.or(other.category),
        }
    }
}

/// Keep the records that pass `spec`, preserving their order.
pub fn apply<T: AgentRecord>(records: Vec<T>, spec: &FilterSpec) -> Vec<T> {
    if spec.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| spec.matches(record.agent()))
        .collect()
}
