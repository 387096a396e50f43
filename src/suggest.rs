// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete: typed suggestions for a partial query.
//!
//! Four category lists are built independently, each with its own cap:
//!
//! | Category | Source                          | Count              |
//! |----------|---------------------------------|--------------------|
//! | postcode | outcode keys, then full postcodes | agents under key |
//! | area     | area keys                        | agents covering it |
//! | address  | first two address components     | agents sharing it  |
//! | agent    | agent names                      | always 1           |
//!
//! Each list is then trimmed to its share of the final list and the lists are
//! concatenated in the order above. Category order is fixed: a strong agent
//! name never pushes a postcode out.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::config::SuggestConfig;
use crate::index::Indexes;
use crate::types::Agent;
use crate::util::text::{char_len, has_letter_and_digit, normalize, starts_at_word, title_case};

/// What a suggestion points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Postcode,
    Area,
    Address,
    Agent,
}

impl SuggestionKind {
    /// Icon name the presentation layer renders next to the text.
    pub fn icon(self) -> &'static str {
        match self {
            SuggestionKind::Postcode => "hash",
            SuggestionKind::Area => "map",
            SuggestionKind::Address => "map-pin",
            SuggestionKind::Agent => "building",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Postcode => "postcode",
            SuggestionKind::Area => "area",
            SuggestionKind::Address => "address",
            SuggestionKind::Agent => "agent",
        }
    }
}

/// One autocomplete entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Display text.
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// How many agents sit behind this entry (1 for agent names).
    pub count: usize,
    /// Canonical value to search for, or the agent id for agent entries.
    pub value: String,
    pub icon: &'static str,
}

impl Suggestion {
    fn new(kind: SuggestionKind, text: String, count: usize, value: String) -> Self {
        Self {
            text,
            kind,
            count,
            value,
            icon: kind.icon(),
        }
    }
}

/// Build the combined suggestion list for `query`.
///
/// Queries shorter than `config.min_len` characters (after trimming) get
/// nothing.
pub fn suggest(
    agents: &[Agent],
    indexes: &Indexes,
    config: &SuggestConfig,
    query: &str,
) -> Vec<Suggestion> {
    let query = query.trim();
    if char_len(query) < config.min_len {
        return Vec::new();
    }
    let lower = query.to_lowercase();

    let postcodes = postcode_suggestions(indexes, config, query);
    let areas = area_suggestions(indexes, config, &lower);
    let addresses = address_suggestions(agents, config, &lower);
    let names = agent_suggestions(agents, config, &lower);

    trace!(
        query,
        postcodes = postcodes.len(),
        areas = areas.len(),
        addresses = addresses.len(),
        agents = names.len(),
        "built suggestion lists"
    );

    let mut combined: Vec<Suggestion> = postcodes
        .into_iter()
        .take(config.final_postcode)
        .chain(areas.into_iter().take(config.final_area))
        .chain(addresses.into_iter().take(config.final_address))
        .chain(names.into_iter().take(config.final_agent))
        .collect();
    combined.truncate(config.final_total);
    combined
}

/// Outcodes starting with the query, then full postcodes by frequency when the
/// query already looks like a postcode.
fn postcode_suggestions(indexes: &Indexes, config: &SuggestConfig, query: &str) -> Vec<Suggestion> {
    let upper = query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    let mut suggestions: Vec<Suggestion> = indexes
        .outcodes
        .iter()
        .filter(|(key, _)| key.starts_with(&upper))
        .take(config.postcode_cap)
        .map(|(key, ids)| {
            Suggestion::new(SuggestionKind::Postcode, key.to_string(), ids.len(), key.to_string())
        })
        .collect();

    if has_letter_and_digit(query) && char_len(query) >= config.full_postcode_min_len {
        let seen: HashSet<&str> = suggestions.iter().map(|s| s.value.as_str()).collect();
        let mut full: Vec<(&str, usize)> = indexes
            .postcodes
            .iter()
            .filter(|(key, _)| key.starts_with(&upper) && !seen.contains(key))
            .map(|(key, ids)| (key, ids.len()))
            .collect();
        full.sort_by(|a, b| b.1.cmp(&a.1));

        let extra: Vec<Suggestion> = full
            .into_iter()
            .take(config.full_postcode_cap)
            .map(|(key, count)| {
                Suggestion::new(SuggestionKind::Postcode, key.to_string(), count, key.to_string())
            })
            .collect();
        suggestions.extend(extra);
    }
    suggestions
}

/// Area keys matching the query. Short queries must hit a word start; longer
/// ones may match anywhere.
fn area_suggestions(indexes: &Indexes, config: &SuggestConfig, lower: &str) -> Vec<Suggestion> {
    let word_start_only = char_len(lower) <= config.area_word_start_max_len;
    indexes
        .areas
        .iter()
        .filter(|(key, _)| char_len(key) > config.area_min_key_len)
        .filter(|(key, _)| {
            if word_start_only {
                starts_at_word(key, lower)
            } else {
                key.contains(lower)
            }
        })
        .take(config.area_cap)
        .map(|(key, ids)| {
            Suggestion::new(SuggestionKind::Area, title_case(key), ids.len(), key.to_string())
        })
        .collect()
}

/// "12 High Street, Leeds, West Yorkshire" → "12 High Street, Leeds".
fn address_head(address: &str) -> Option<String> {
    let head = address
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(", ");
    (!head.is_empty()).then_some(head)
}

/// Distinct address heads of agents whose address contains the query.
///
/// Counts cover every matching agent, not just the ones that made the cap.
fn address_suggestions(agents: &[Agent], config: &SuggestConfig, lower: &str) -> Vec<Suggestion> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for address in agents.iter().filter_map(|a| a.address.as_deref()) {
        if !address.to_lowercase().contains(lower) {
            continue;
        }
        let Some(head) = address_head(address) else {
            continue;
        };
        let key = normalize(&head);
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push((key, head));
        }
        *count += 1;
    }

    order
        .into_iter()
        .take(config.address_cap)
        .map(|(key, head)| {
            let count = counts.get(&key).copied().unwrap_or(1);
            Suggestion::new(SuggestionKind::Address, head.clone(), count, head)
        })
        .collect()
}

/// Agents whose name contains the query, in dataset order.
fn agent_suggestions(agents: &[Agent], config: &SuggestConfig, lower: &str) -> Vec<Suggestion> {
    agents
        .iter()
        .filter(|agent| agent.name.to_lowercase().contains(lower))
        .take(config.agent_cap)
        .map(|agent| {
            Suggestion::new(SuggestionKind::Agent, agent.name.clone(), 1, agent.id.to_string())
        })
        .collect()
}
