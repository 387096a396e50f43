// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration: tier gates, suggestion caps, trust bands.
//!
//! Every field has a default, so an empty `{}` file (or no file at all) gives
//! the stock behaviour. A config file only needs the keys it changes:
//!
//! ```json
//! {
//!   "min_name_len": 4,
//!   "suggest": { "final_total": 10 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum query lengths (in characters) for each resolution tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tier 2: postcode prefix scan.
    pub min_prefix_len: usize,
    /// Tier 3: area-name match.
    pub min_area_len: usize,
    /// Tier 4: name substring fallback.
    pub min_name_len: usize,
    pub suggest: SuggestConfig,
    /// Trust score at or above which an agent is banded "high".
    pub trust_high: u32,
    /// Trust score at or above which an agent is banded "mid".
    pub trust_mid: u32,
    /// How many agents area statistics list as top performers.
    pub top_agents: usize,
    /// Default result count for nearby-outcode discovery.
    pub nearby_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: 2,
            min_area_len: 2,
            min_name_len: 3,
            suggest: SuggestConfig::default(),
            trust_high: 80,
            trust_mid: 68,
            top_agents: 3,
            nearby_limit: 5,
        }
    }
}

/// Per-category caps for autocomplete.
///
/// Each category list is built up to its `*_cap`, then trimmed to its
/// `final_*` share before the lists are concatenated and capped at
/// `final_total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub min_len: usize,
    /// Outcode keys by prefix.
    pub postcode_cap: usize,
    /// Full postcodes by frequency, on top of the outcode keys.
    pub full_postcode_cap: usize,
    /// Minimum query length before full postcodes are considered.
    pub full_postcode_min_len: usize,
    pub area_cap: usize,
    /// Area keys this short or shorter are never suggested.
    pub area_min_key_len: usize,
    /// Queries up to this length use word-start matching for areas; longer
    /// queries use plain substring matching.
    pub area_word_start_max_len: usize,
    pub address_cap: usize,
    pub agent_cap: usize,
    pub final_postcode: usize,
    pub final_area: usize,
    pub final_address: usize,
    pub final_agent: usize,
    pub final_total: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            min_len: 2,
            postcode_cap: 6,
            full_postcode_cap: 4,
            full_postcode_min_len: 3,
            area_cap: 5,
            area_min_key_len: 2,
            area_word_start_max_len: 3,
            address_cap: 4,
            agent_cap: 4,
            final_postcode: 5,
            final_area: 4,
            final_address: 3,
            final_agent: 3,
            final_total: 14,
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would silently disable a feature.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_prefix_len == 0 || self.min_area_len == 0 || self.min_name_len == 0 {
            return Err(ConfigError::Invalid(
                "tier minimum lengths must be at least 1".into(),
            ));
        }
        if self.suggest.min_len == 0 {
            return Err(ConfigError::Invalid(
                "suggest.min_len must be at least 1".into(),
            ));
        }
        if self.suggest.final_total == 0 {
            return Err(ConfigError::Invalid(
                "suggest.final_total must be at least 1".into(),
            ));
        }
        if self.trust_mid > self.trust_high {
            return Err(ConfigError::Invalid(format!(
                "trust_mid ({}) must not exceed trust_high ({})",
                self.trust_mid, self.trust_high
            )));
        }
        Ok(())
    }
}

/// Coarse trust grouping used for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustBand {
    High,
    Mid,
    Low,
}

impl TrustBand {
    pub fn classify(trust_score: u32, config: &EngineConfig) -> Self {
        if trust_score >= config.trust_high {
            TrustBand::High
        } else if trust_score >= config.trust_mid {
            TrustBand::Mid
        } else {
            TrustBand::Low
        }
    }
}
