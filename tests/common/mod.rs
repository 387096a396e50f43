//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use agentfind::{Dataset, EngineConfig, GlobalStats, Hit, MatchedAgent, Store};
use tempfile::NamedTempFile;

// Re-export canonical test utilities from agentfind::testing
pub use agentfind::testing::{
    make_agent, sample_agents, with_address, with_areas, with_category, with_mgmt_pct,
    with_postcode, with_scores, with_tenant_find,
};

// ============================================================================
// STORES
// ============================================================================

/// Store over the eight-agent fixture in `agentfind::testing::sample_agents`.
pub fn sample_store() -> Store {
    Store::build(
        Dataset {
            agents: sample_agents(),
            stats: GlobalStats::default(),
        },
        EngineConfig::default(),
    )
    .expect("sample agents have positional ids")
}

/// Store parsed from [`DATASET_JSON`].
pub fn json_store() -> Store {
    Store::from_json_slice(DATASET_JSON.as_bytes(), EngineConfig::default())
        .expect("fixture dataset parses")
}

// ============================================================================
// DATASET FILES
// ============================================================================

/// A dataset in the export format, with the fields real exports carry.
pub const DATASET_JSON: &str = r#"{
  "agents": [
    {
      "id": 0,
      "name": "Belgravia Residential",
      "postcode": "SW1A 1AA",
      "address": "12 Buckingham Gate, Westminster, London",
      "city": "London",
      "category": "both",
      "agent_type": "high_street",
      "service_tiers": ["Tenant Find", "Fully Managed"],
      "services": ["Inventory", "Guaranteed Rent"],
      "fees": {"tenant_find": "6% + VAT", "mgmt_pct": 14.4, "detail": "inc VAT"},
      "reviews": {"avg": 4.7, "count": 212, "platforms": ["google", "trustpilot"]},
      "regulatory": {"arla": true, "tpo": true, "cmp": true, "deposit": true},
      "performance": {"years": 22, "offices": 3, "managed": 410},
      "social": {"instagram": true},
      "portals": {"rightmove": true, "zoopla": true},
      "areas": ["Westminster", "St James's"],
      "trust_score": 88,
      "data_richness": 24,
      "experience": "established",
      "activity": "active",
      "guaranteed_rent": true
    },
    {
      "id": 1,
      "name": "Pimlico Lets",
      "postcode": "SW1V 3AB",
      "address": "40 Warwick Way, Pimlico, London",
      "category": "letting",
      "agent_type": "online",
      "service_tiers": ["Tenant Find"],
      "fees": {"mgmt_pct": 9.0},
      "reviews": {"avg": 4.1, "count": 35},
      "regulatory": {"prs": true, "cmp": true},
      "performance": {"years": 6},
      "areas": ["Pimlico", "Westminster"],
      "trust_score": 74,
      "data_richness": 15,
      "experience": "growing"
    },
    {
      "id": 2,
      "name": "Victoria Property Co",
      "postcode": "SW1V 1QP",
      "address": "8 Wilton Road, Victoria, London",
      "category": "estate",
      "agent_type": "hybrid",
      "reviews": {"count": 0},
      "areas": ["Victoria"],
      "trust_score": 61,
      "data_richness": 4
    },
    {
      "id": 3,
      "name": "Chester Lettings Hub",
      "postcode": "CH1 2HQ",
      "address": "3 Eastgate Street, Chester",
      "category": "letting",
      "agent_type": "high_street",
      "service_tiers": ["Full Management"],
      "fees": {"full_management": 120, "mgmt_pct": 12.0},
      "reviews": {"avg": 4.4, "count": 58},
      "regulatory": {"arla": true},
      "performance": {"years": 15},
      "areas": ["Chester", "Hoole"],
      "trust_score": 79,
      "data_richness": 18
    },
    {
      "id": 4,
      "name": "Huntingdon & Godmanchester Homes",
      "postcode": "PE29 2AA",
      "category": "both",
      "areas": ["Godmanchester", "Huntingdon"],
      "trust_score": 70,
      "data_richness": 9
    },
    {
      "id": 5,
      "name": "Harborne Lettings",
      "postcode": "B17 9AB",
      "address": "120 High Street, Harborne, Birmingham",
      "category": "letting",
      "agent_type": "high_street",
      "fees": {"tenant_find": 495},
      "reviews": {"avg": 4.9, "count": 80},
      "regulatory": {"arla": true, "cmp": true},
      "performance": {"years": 31},
      "areas": ["Harborne", "Edgbaston"],
      "trust_score": 91,
      "data_richness": 20
    },
    {
      "id": 6,
      "name": "Edgbaston Online Lets",
      "postcode": "B17 9AB",
      "category": "letting",
      "agent_type": "online",
      "areas": ["Harborne"],
      "trust_score": 58,
      "data_richness": 2
    },
    {
      "id": 7,
      "name": "Manchester City Lettings",
      "outcode": "M1",
      "postcode": "M1 4BT",
      "address": "1 Piccadilly, Manchester",
      "category": "letting",
      "agent_type": "hybrid",
      "fees": {"mgmt_pct": 10.5},
      "areas": ["Manchester", "Northern Quarter"],
      "trust_score": 76,
      "data_richness": 12
    }
  ],
  "stats": {"total_agents": 8, "avg_fee": 11.8, "avg_trust": 72.5},
  "postcodeIndex": {"SW1A": [0]},
  "areaIndex": {"westminster": [0, 1]}
}"#;

/// Write `contents` to a temp file that lives as long as the returned handle.
pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

pub fn hit_ids(hits: &[Hit<'_>]) -> Vec<usize> {
    hits.iter().map(|h| h.agent.id).collect()
}

pub fn matched_ids(matches: &[MatchedAgent]) -> Vec<usize> {
    matches.iter().map(|m| m.agent.id).collect()
}
