//! Area aggregation and lettered-prefix neighbours.

use super::common::{json_store, make_agent, with_postcode, with_scores};
use agentfind::{
    AgentSummary, Category, Dataset, EngineConfig, FeeSummary, GlobalStats, NearbyOutcode,
    ProviderType, Store,
};

fn store_of(agents: Vec<agentfind::Agent>) -> Store {
    Store::build(
        Dataset {
            agents,
            stats: GlobalStats::default(),
        },
        EngineConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_sw1v_summary() {
    let store = json_store();
    let stats = store.area_stats("SW1V").expect("SW1V is indexed");

    assert_eq!(stats.outcode, "SW1V");
    assert_eq!(stats.agent_count, 2);
    // (74 + 61) / 2 = 67.5
    assert_eq!(stats.avg_trust, 68);
    assert_eq!(stats.avg_rating, Some(4.1));
    assert_eq!(
        stats.fees,
        Some(FeeSummary {
            avg: 9.0,
            min: 9.0,
            max: 9.0
        })
    );
    assert_eq!(stats.avg_years, Some(6));
    assert_eq!(stats.provider_types.get(&ProviderType::Online), Some(&1));
    assert_eq!(stats.provider_types.get(&ProviderType::Hybrid), Some(&1));
    assert_eq!(stats.provider_types.get(&ProviderType::HighStreet), None);
    assert_eq!(stats.categories.get(&Category::Letting), Some(&1));
    assert_eq!(stats.categories.get(&Category::Estate), Some(&1));
    assert_eq!(stats.with_fees, 1);
    assert_eq!(stats.with_arla, 0);
    assert_eq!(stats.with_cmp, 1);
    assert_eq!(stats.with_reviews, 1);
    assert_eq!(stats.agent_ids, vec![1, 2]);

    let national = stats.national.expect("dataset carries aggregates");
    assert_eq!(national.avg_fee, Some(11.8));
    assert_eq!(national.avg_trust, Some(72.5));
}

#[test]
fn test_top_agents_by_composite() {
    let store = json_store();
    let stats = store.area_stats("SW1V").unwrap();
    assert_eq!(
        stats.top_agents,
        vec![
            AgentSummary {
                id: 1,
                name: "Pimlico Lets".to_string(),
                score: 89
            },
            AgentSummary {
                id: 2,
                name: "Victoria Property Co".to_string(),
                score: 65
            },
        ]
    );
}

#[test]
fn test_outcode_lookup_ignores_case_and_padding() {
    let store = json_store();
    let stats = store.area_stats(" ch1 ").expect("CH1 is indexed");
    assert_eq!(stats.outcode, "CH1");
    assert_eq!(stats.agent_ids, vec![3]);
}

#[test]
fn test_unknown_outcode_is_none() {
    let store = json_store();
    assert!(store.area_stats("ZZ9").is_none());
    assert!(store.area_stats("").is_none());
}

#[test]
fn test_area_without_optional_data() {
    let store = store_of(vec![
        with_scores(with_postcode(make_agent(0, "A"), "LS1 1AA"), 80, 0),
        with_scores(with_postcode(make_agent(1, "B"), "LS1 2BB"), 60, 0),
    ]);
    let stats = store.area_stats("LS1").unwrap();

    assert_eq!(stats.avg_trust, 70);
    assert_eq!(stats.avg_rating, None);
    assert_eq!(stats.fees, None);
    assert_eq!(stats.avg_years, None);
    assert_eq!(stats.with_fees, 0);
    assert!(stats.national.is_none());
}

#[test]
fn test_nearby_outcodes_share_letters() {
    let store = store_of(vec![
        with_postcode(make_agent(0, "A"), "SW1A 1AA"),
        with_postcode(make_agent(1, "B"), "SW1V 2BB"),
        with_postcode(make_agent(2, "C"), "SW1V 3CC"),
        with_postcode(make_agent(3, "D"), "SW3 4DD"),
        with_postcode(make_agent(4, "E"), "S1 5EE"),
        with_postcode(make_agent(5, "F"), "SW1 6FF"),
    ]);

    let nearby = store.nearby_outcodes("sw1", 5);
    assert_eq!(
        nearby,
        vec![
            NearbyOutcode {
                outcode: "SW1V".to_string(),
                count: 2
            },
            NearbyOutcode {
                outcode: "SW1A".to_string(),
                count: 1
            },
            NearbyOutcode {
                outcode: "SW3".to_string(),
                count: 1
            },
        ]
    );
    assert_eq!(store.nearby_outcodes("SW1", 1).len(), 1);
    assert!(store.nearby_outcodes("SW1", 0).is_empty());
}
