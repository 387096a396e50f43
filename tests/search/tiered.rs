//! Four-tier resolution against the fixture datasets.
//!
//! Covers the tier gates, first-match-wins assignment, word-boundary area
//! matching, and tier-then-score ordering of the output.

use super::common::{hit_ids, json_store, sample_store};
use agentfind::MatchType;

// ============================================================================
// TIER 1 / TIER 2: POSTCODES
// ============================================================================

#[test]
fn test_exact_outcode_returns_only_its_bucket() {
    let store = sample_store();
    let hits = store.resolve("SW1A");

    assert_eq!(hit_ids(&hits), vec![0]);
    assert!(hits.iter().all(|h| h.match_type == MatchType::Postcode));
}

#[test]
fn test_outcode_prefix_returns_both_buckets_as_nearby() {
    let store = sample_store();
    let hits = store.resolve("SW1");

    // SW1V holds 1 (75+20) and 7 (50+0); SW1A holds 0 (80+10)
    assert_eq!(hit_ids(&hits), vec![1, 0, 7]);
    assert!(hits.iter().all(|h| h.match_type == MatchType::Nearby));
}

#[test]
fn test_query_is_trimmed_and_case_folded() {
    let store = sample_store();
    assert_eq!(hit_ids(&store.resolve("  sw1a ")), vec![0]);
    assert_eq!(hit_ids(&store.resolve("b17")), vec![5, 6]);
}

#[test]
fn test_single_character_skips_prefix_tier() {
    let store = sample_store();
    // "M" is not a key; prefix scanning needs two characters.
    assert!(store.resolve("M").is_empty());
}

// ============================================================================
// TIER 3: AREAS
// ============================================================================

#[test]
fn test_chester_does_not_match_godmanchester_area() {
    let store = sample_store();
    let candidates = store.resolve_candidates("chester");

    assert_eq!(candidates.match_type_of(2), Some(MatchType::Area));
    assert_ne!(candidates.match_type_of(3), Some(MatchType::Area));
    assert_ne!(candidates.match_type_of(4), Some(MatchType::Area));
}

#[test]
fn test_manchester_matches_manchester_area() {
    let store = sample_store();
    let hits = store.resolve("manchester");
    let area_ids: Vec<usize> = hits
        .iter()
        .filter(|h| h.match_type == MatchType::Area)
        .map(|h| h.agent.id)
        .collect();
    assert_eq!(area_ids, vec![4]);
}

#[test]
fn test_longer_query_containing_area_word_matches() {
    let store = sample_store();
    let hits = store.resolve("manchester city centre");
    assert_eq!(hit_ids(&hits), vec![4]);
    assert_eq!(hits[0].match_type, MatchType::Area);
}

#[test]
fn test_multi_word_area_key() {
    let store = json_store();
    let hits = store.resolve("Northern Quarter");
    assert_eq!(hit_ids(&hits), vec![7]);
    assert_eq!(hits[0].match_type, MatchType::Area);
}

// ============================================================================
// TIER 4 AND TIER INTERACTION
// ============================================================================

#[test]
fn test_first_tier_wins() {
    let store = json_store();
    // Agent 5 covers "Edgbaston"; agent 6 only has it in the name.
    let hits = store.resolve("edgbaston");
    assert_eq!(hit_ids(&hits), vec![5, 6]);
    assert_eq!(hits[0].match_type, MatchType::Area);
    assert_eq!(hits[1].match_type, MatchType::Name);
}

#[test]
fn test_name_hits_rank_after_area_hits_regardless_of_score() {
    let store = json_store();
    let hits = store.resolve("Chester");

    // area: 3; names: Manchester City Lettings (76+12), Huntingdon & Godmanchester (70+9)
    assert_eq!(hit_ids(&hits), vec![3, 7, 4]);
    let types: Vec<MatchType> = hits.iter().map(|h| h.match_type).collect();
    assert_eq!(types, vec![MatchType::Area, MatchType::Name, MatchType::Name]);
}

#[test]
fn test_agent_matched_by_several_tiers_appears_once() {
    let store = json_store();
    let hits = store.resolve("westminster");
    assert_eq!(hit_ids(&hits), vec![0, 1]);
}

#[test]
fn test_name_tier_needs_three_characters() {
    let store = json_store();
    assert!(store.searcher().search_tier4_name("hu").is_empty());
    assert_eq!(store.searcher().search_tier4_name("hub"), vec![3]);
}

#[test]
fn test_unmatched_query_is_empty_not_error() {
    let store = json_store();
    assert!(store.resolve("no such place").is_empty());
    assert!(store.resolve("").is_empty());
}
