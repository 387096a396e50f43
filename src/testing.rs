//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Agent, Category, FeeAmount};

/// Create a bare agent: letting category, trust 70, richness 0, no location.
///
/// This is the canonical implementation used across all tests.
pub fn make_agent(id: usize, name: &str) -> Agent {
    Agent {
        id,
        name: name.to_string(),
        postcode: None,
        outcode: None,
        address: None,
        city: None,
        logo: None,
        category: Category::Letting,
        provider_type: None,
        service_tiers: vec![],
        services: vec![],
        fees: Default::default(),
        reviews: Default::default(),
        regulatory: Default::default(),
        performance: Default::default(),
        social: Default::default(),
        portals: Default::default(),
        areas: vec![],
        trust_score: 70,
        data_richness: 0,
        experience: None,
        activity: None,
        guaranteed_rent: false,
    }
}

pub fn with_postcode(mut agent: Agent, postcode: &str) -> Agent {
    agent.postcode = Some(postcode.to_string());
    agent
}

pub fn with_areas(mut agent: Agent, areas: &[&str]) -> Agent {
    agent.areas = areas.iter().map(|a| a.to_string()).collect();
    agent
}

pub fn with_scores(mut agent: Agent, trust_score: u32, data_richness: u32) -> Agent {
    agent.trust_score = trust_score;
    agent.data_richness = data_richness;
    agent
}

pub fn with_address(mut agent: Agent, address: &str) -> Agent {
    agent.address = Some(address.to_string());
    agent
}

pub fn with_mgmt_pct(mut agent: Agent, pct: f64) -> Agent {
    agent.fees.mgmt_pct = Some(pct);
    agent
}

pub fn with_tenant_find(mut agent: Agent, fee: &str) -> Agent {
    agent.fees.tenant_find = Some(FeeAmount::Text(fee.to_string()));
    agent
}

pub fn with_category(mut agent: Agent, category: Category) -> Agent {
    agent.category = category;
    agent
}

/// A small London/Midlands/North fixture exercising every tier.
///
/// | id | name                  | postcode  | areas                   | trust+rich |
/// |----|-----------------------|-----------|-------------------------|------------|
/// | 0  | Westminster Lets      | SW1A 1AA  | Westminster             | 80+10      |
/// | 1  | Pimlico Property      | SW1V 2BB  | Pimlico, Westminster    | 75+20      |
/// | 2  | Chester Homes         | CH1 1AA   | Chester                 | 70+5       |
/// | 3  | Godmanchester Estates | PE29 2AA  | Godmanchester           | 90+10      |
/// | 4  | Manchester Central    | M1 1AA    | Manchester              | 65+5       |
/// | 5  | Harborne Lettings     | B17 9AB   | Harborne                | 85+15      |
/// | 6  | Harborne Online       | B17 9AB   | Harborne                | 60+0       |
/// | 7  | Victoria Lets         | SW1V 4DD  | Victoria                | 50+0       |
pub fn sample_agents() -> Vec<Agent> {
    vec![
        with_scores(
            with_areas(with_postcode(make_agent(0, "Westminster Lets"), "SW1A 1AA"), &["Westminster"]),
            80,
            10,
        ),
        with_scores(
            with_areas(
                with_postcode(make_agent(1, "Pimlico Property"), "SW1V 2BB"),
                &["Pimlico", "Westminster"],
            ),
            75,
            20,
        ),
        with_scores(
            with_areas(with_postcode(make_agent(2, "Chester Homes"), "CH1 1AA"), &["Chester"]),
            70,
            5,
        ),
        with_scores(
            with_areas(
                with_postcode(make_agent(3, "Godmanchester Estates"), "PE29 2AA"),
                &["Godmanchester"],
            ),
            90,
            10,
        ),
        with_scores(
            with_areas(with_postcode(make_agent(4, "Manchester Central"), "M1 1AA"), &["Manchester"]),
            65,
            5,
        ),
        with_scores(
            with_areas(with_postcode(make_agent(5, "Harborne Lettings"), "B17 9AB"), &["Harborne"]),
            85,
            15,
        ),
        with_scores(
            with_areas(with_postcode(make_agent(6, "Harborne Online"), "B17 9AB"), &["Harborne"]),
            60,
            0,
        ),
        with_scores(
            with_areas(with_postcode(make_agent(7, "Victoria Lets"), "SW1V 4DD"), &["Victoria"]),
            50,
            0,
        ),
    ]
}
