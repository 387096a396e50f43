//! Autocomplete over the export fixture.

use super::common::json_store;
use agentfind::{Suggestion, SuggestionKind};

fn of_kind(suggestions: &[Suggestion], kind: SuggestionKind) -> Vec<(&str, usize)> {
    suggestions
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| (s.text.as_str(), s.count))
        .collect()
}

#[test]
fn test_single_character_gets_nothing() {
    let store = json_store();
    assert!(store.suggest("S").is_empty());
    assert!(store.suggest("  ").is_empty());
}

#[test]
fn test_outcodes_with_agent_counts() {
    let store = json_store();
    let suggestions = store.suggest("sw");
    assert_eq!(
        of_kind(&suggestions, SuggestionKind::Postcode),
        vec![("SW1A", 1), ("SW1V", 2)]
    );
}

#[test]
fn test_partial_full_postcode() {
    let store = json_store();
    let suggestions = store.suggest("B17 9");
    assert_eq!(
        of_kind(&suggestions, SuggestionKind::Postcode),
        vec![("B17 9AB", 2)]
    );
    assert_eq!(suggestions[0].value, "B17 9AB");
}

#[test]
fn test_short_area_query_only_matches_word_starts() {
    let store = json_store();
    let suggestions = store.suggest("che");
    assert_eq!(of_kind(&suggestions, SuggestionKind::Area), vec![("Chester", 1)]);
}

#[test]
fn test_area_suggestion_is_title_cased() {
    let store = json_store();
    let suggestions = store.suggest("north");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].text, "Northern Quarter");
    assert_eq!(suggestions[0].value, "northern quarter");
    assert_eq!(suggestions[0].icon, "map");
}

#[test]
fn test_address_suggestion_uses_first_two_parts() {
    let store = json_store();
    let suggestions = store.suggest("warwick");
    assert_eq!(
        of_kind(&suggestions, SuggestionKind::Address),
        vec![("40 Warwick Way, Pimlico", 1)]
    );
}

#[test]
fn test_agent_suggestion_points_at_id() {
    let store = json_store();
    let agent = store
        .suggest("harborne")
        .into_iter()
        .find(|s| s.kind == SuggestionKind::Agent)
        .expect("agent entry");
    assert_eq!(agent.text, "Harborne Lettings");
    assert_eq!(agent.value, "5");
}

#[test]
fn test_combined_list_is_bounded_and_grouped() {
    let store = json_store();
    for query in ["le", "lettings", "london", "sw1", "ma"] {
        let suggestions = store.suggest(query);
        assert!(suggestions.len() <= 14, "{} gave {}", query, suggestions.len());

        let ranks: Vec<u8> = suggestions
            .iter()
            .map(|s| match s.kind {
                SuggestionKind::Postcode => 0,
                SuggestionKind::Area => 1,
                SuggestionKind::Address => 2,
                SuggestionKind::Agent => 3,
            })
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{} out of order", query);
    }
}

#[test]
fn test_serialized_shape() {
    let store = json_store();
    let suggestions = store.suggest("pimlico");
    let value = serde_json::to_value(&suggestions).unwrap();
    let area = value
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["type"] == "area")
        .expect("area entry");
    assert_eq!(area["text"], "Pimlico");
    assert_eq!(area["count"], 1);
}
