//! Postcode, area, and name search over a directory of letting and estate agents.
//!
//! This crate loads a static dataset of agencies once, derives an outcode
//! index and an area index from it, and answers free-text queries with a
//! de-duplicated, tier-ordered result list. It also produces autocomplete
//! suggestions and per-outcode statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  types.rs   │────▶│   index/     │────▶│      search/         │
//! │  (Agent,    │     │ (KeyIndex,   │     │ (TierSearcher,       │
//! │  Dataset)   │     │ build_indexes│     │  CandidateSet,       │
//! └─────────────┘     └──────────────┘     │  FilterSpec)         │
//!        │                   │             └──────────────────────┘
//!        │                   ├──────────────────┐        │
//!        ▼                   ▼                  ▼        ▼
//! ┌─────────────┐     ┌──────────────┐   ┌──────────────────────┐
//! │  store.rs   │     │ suggest.rs / │   │     scoring/         │
//! │  (Store)    │     │  stats.rs    │   │ (rank_hits,          │
//! └─────────────┘     └──────────────┘   │  SortCriterion)      │
//!        │                               └──────────────────────┘
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     engine.rs                        │
//! │  (Engine - hot-swappable store, "unavailable" state) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Query resolution
//!
//! | Tier | Match type | Source                 | Gate       |
//! |------|------------|------------------------|------------|
//! | 1    | `postcode` | exact outcode key      | none       |
//! | 2    | `nearby`   | outcode key prefix     | ≥ 2 chars  |
//! | 3    | `area`     | area key, whole words  | ≥ 2 chars  |
//! | 4    | `name`     | agent name substring   | ≥ 3 chars  |
//!
//! A record keeps the first tier that reached it. Results are ordered by tier,
//! then by `trust_score + data_richness` descending.
//!
//! # Usage
//!
//! ```ignore
//! use agentfind::{Engine, EngineConfig, FilterSpec};
//!
//! let engine = Engine::new(EngineConfig::default());
//! engine.load_path("agents.json");
//!
//! for hit in engine.search("SW1A", &FilterSpec::default()) {
//!     println!("{} ({})", hit.agent.name, hit.match_type);
//! }
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod index;
pub mod scoring;
pub mod search;
pub mod stats;
pub mod store;
pub mod suggest;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use config::{EngineConfig, SuggestConfig, TrustBand};
pub use engine::Engine;
pub use error::{ConfigError, LoadError};
pub use index::{build_indexes, Indexes, KeyIndex};
pub use scoring::{sort_records, sort_records_named, SortCriterion, ABSENT_FEE_RANK};
pub use search::{
    apply_filters, area_key_matches, AgentTypeFilter, Candidate, CandidateSet, CategoryFilter,
    FilterSpec, ServiceType, TierSearcher,
};
pub use stats::{AgentSummary, AreaStats, FeeSummary, NationalComparison, NearbyOutcode};
pub use store::Store;
pub use suggest::{Suggestion, SuggestionKind};
pub use types::{
    Activity, Agent, AgentRecord, Category, Dataset, FeeAmount, Fees, GlobalStats, Hit, MatchType,
    MatchedAgent, Performance, ProviderType, Regulatory, Reviews,
};
pub use util::text::normalize;
