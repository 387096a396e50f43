// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the agentfind command-line interface.
//!
//! Six subcommands over one dataset file: `search` runs the four-tier
//! resolver with optional filters and re-sorting, `suggest` shows what
//! autocomplete would offer, `stats` and `nearby` summarize an outcode, `show`
//! prints one agent, and `info` describes the loaded dataset. Every command
//! can print JSON instead of boxes with `--json`.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use agentfind::{
    AgentTypeFilter, CategoryFilter, ConfigError, FilterSpec, LoadError, ProviderType, ServiceType,
};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "agentfind",
    about = "Search a directory of letting and estate agents by postcode, area, or name",
    version
)]
pub struct Cli {
    /// Dataset JSON file ({"agents": [...], "stats": {...}})
    #[arg(long, global = true, env = "AGENTFIND_DATA")]
    pub data: Option<PathBuf>,

    /// Engine config JSON file (tier gates, suggestion caps, trust bands)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a query into ranked agents
    Search {
        /// Postcode, outcode, area, or agent name
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Re-sort results: trust, reviews, rating, has_fees, fees_low, years, name
        ///
        /// Without this flag results stay in tier order. Unknown criteria keep
        /// tier order too.
        #[arg(short, long)]
        sort: Option<String>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show autocomplete suggestions for a partial query
    Suggest {
        /// Partial query
        query: String,
    },

    /// Summarize the agents in one outcode
    Stats {
        /// Outcode, e.g. SW1A
        outcode: String,
    },

    /// List outcodes sharing the same letters, busiest first
    Nearby {
        /// Outcode, e.g. SW1
        outcode: String,

        /// Maximum number of outcodes (defaults to the config's nearby_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print one agent in full
    Show {
        /// Agent id
        id: usize,
    },

    /// Describe the loaded dataset
    Info,
}

/// Filter flags shared by `search`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Required service: tenant_find, full_management, guaranteed_rent
    #[arg(long)]
    pub service: Option<String>,

    /// Agency type: high_street, online, hybrid
    #[arg(long, value_parser = parse_provider_type)]
    pub agent_type: Option<ProviderType>,

    /// Minimum trust score
    #[arg(long)]
    pub min_trust: Option<u32>,

    /// Only agencies with a review average
    #[arg(long)]
    pub has_reviews: bool,

    /// Only agencies publishing any fee
    #[arg(long)]
    pub has_fees: bool,

    /// Only ARLA Propertymark members
    #[arg(long)]
    pub arla: bool,

    /// Only agencies with Client Money Protection
    #[arg(long)]
    pub cmp: bool,

    /// Only agencies offering guaranteed rent
    #[arg(long)]
    pub guaranteed_rent: bool,

    /// Exact experience label
    #[arg(long)]
    pub experience: Option<String>,

    /// letting, estate, letting_only, estate_only, both
    #[arg(long)]
    pub category: Option<String>,
}

impl FilterArgs {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            service_type: self.service.as_deref().map(ServiceType::parse),
            agent_type: self.agent_type.map(AgentTypeFilter::from),
            min_trust: self.min_trust,
            has_reviews: self.has_reviews,
            has_fees: self.has_fees,
            arla: self.arla,
            cmp: self.cmp,
            guaranteed_rent: self.guaranteed_rent,
            experience: self.experience.clone(),
            category: self.category.as_deref().map(CategoryFilter::parse),
        }
    }
}

fn parse_provider_type(value: &str) -> Result<ProviderType, String> {
    ProviderType::parse(value)
        .ok_or_else(|| format!("expected high_street, online, or hybrid, got '{}'", value))
}

/// Everything that can stop a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no dataset given: pass --data <file> or set AGENTFIND_DATA")]
    MissingData,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("no agent with id {0}")]
    UnknownAgent(usize),

    #[error("outcode '{0}' is not in the dataset")]
    UnknownOutcode(String),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
