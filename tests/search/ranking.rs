//! Tier ranking of search output and the user-chosen re-sorts.

use super::common::{hit_ids, json_store, sample_store};
use agentfind::{
    sort_records, sort_records_named, Agent, Dataset, EngineConfig, GlobalStats, MatchType,
    SortCriterion, Store,
};

fn ids(agents: &[Agent]) -> Vec<usize> {
    agents.iter().map(|a| a.id).collect()
}

fn sorted_ids(criterion: SortCriterion) -> Vec<usize> {
    let store = json_store();
    ids(&sort_records(store.agents(), criterion))
}

// ============================================================================
// SEARCH ORDER
// ============================================================================

#[test]
fn test_tier_order_dominates_composite() {
    let store = json_store();
    let hits = store.resolve("Chester");
    let tiers: Vec<MatchType> = hits.iter().map(|h| h.match_type).collect();
    let mut sorted = tiers.clone();
    sorted.sort();
    assert_eq!(tiers, sorted);
}

#[test]
fn test_within_tier_composite_descends() {
    let store = sample_store();
    let hits = store.resolve("SW1");
    let scores: Vec<u32> = hits.iter().map(|h| h.agent.rank_score()).collect();
    assert_eq!(scores, vec![95, 90, 50]);
}

#[test]
fn test_equal_composites_keep_index_order() {
    let store = json_store();
    let mut agents = store.agents().to_vec();
    agents[6].trust_score = 91;
    agents[6].data_richness = 20;
    // 5 and 6 now tie at 111 and share B17; bucket order settles it
    let tied = Store::build(
        Dataset {
            agents,
            stats: GlobalStats::default(),
        },
        EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(hit_ids(&tied.resolve("B17")), vec![5, 6]);
}

// ============================================================================
// RE-SORTS OVER THE FIXTURE
// ============================================================================

#[test]
fn test_sort_by_trust() {
    assert_eq!(sorted_ids(SortCriterion::Trust), vec![0, 5, 3, 1, 7, 4, 2, 6]);
}

#[test]
fn test_sort_by_has_fees() {
    // 2, 4 and 6 publish nothing and trail in composite order
    assert_eq!(sorted_ids(SortCriterion::HasFees), vec![0, 5, 3, 1, 7, 4, 2, 6]);
}

#[test]
fn test_sort_by_fees_low() {
    // 9.0, 10.5, 12.0, 14.4, then the rest in input order
    assert_eq!(sorted_ids(SortCriterion::FeesLow), vec![1, 7, 3, 0, 2, 4, 5, 6]);
}

#[test]
fn test_sort_by_name() {
    assert_eq!(sorted_ids(SortCriterion::Name), vec![0, 3, 6, 5, 4, 7, 1, 2]);
}

#[test]
fn test_sort_by_years() {
    assert_eq!(sorted_ids(SortCriterion::Years), vec![5, 0, 3, 1, 2, 4, 6, 7]);
}

#[test]
fn test_sort_by_rating() {
    assert_eq!(sorted_ids(SortCriterion::Rating), vec![5, 0, 3, 1, 2, 4, 6, 7]);
}

#[test]
fn test_sort_by_reviews() {
    assert_eq!(sorted_ids(SortCriterion::Reviews), vec![0, 5, 3, 1, 2, 4, 6, 7]);
}

#[test]
fn test_sorting_twice_changes_nothing() {
    let store = json_store();
    for criterion in SortCriterion::ALL {
        let once = sort_records(store.agents(), criterion);
        let twice = sort_records(&once, criterion);
        assert_eq!(ids(&once), ids(&twice), "criterion {}", criterion);
    }
}

#[test]
fn test_sorting_hits_keeps_match_types() {
    let store = json_store();
    let hits = store.resolve("edgbaston");
    let sorted = sort_records(&hits, SortCriterion::Name);
    // Edgbaston Online Lets before Harborne Lettings
    assert_eq!(hit_ids(&sorted), vec![6, 5]);
    assert_eq!(sorted[0].match_type, MatchType::Name);
    assert_eq!(sorted[1].match_type, MatchType::Area);
}

#[test]
fn test_unknown_criterion_returns_input_order() {
    let store = json_store();
    let hits = store.resolve("SW1");
    let passed = sort_records_named(&hits, "distance");
    assert_eq!(hit_ids(&passed), hit_ids(&hits));
}

#[test]
fn test_sort_leaves_input_untouched() {
    let store = json_store();
    let before = ids(store.agents());
    let _ = sort_records(store.agents(), SortCriterion::Name);
    assert_eq!(ids(store.agents()), before);
}
