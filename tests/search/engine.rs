//! Loading, reloading, and reading through the engine.

use super::common::{matched_ids, write_dataset, DATASET_JSON};
use agentfind::{Engine, EngineConfig, FilterSpec, MatchType};

const SMALL_DATASET: &str = r#"{
  "agents": [
    {"id": 0, "name": "Leeds Central Lets", "postcode": "LS1 4AP", "category": "letting",
     "areas": ["Leeds"], "trust_score": 70, "data_richness": 5}
  ]
}"#;

const MISPLACED_IDS: &str = r#"{
  "agents": [
    {"id": 3, "name": "Out Of Place", "category": "letting", "trust_score": 50, "data_richness": 0}
  ]
}"#;

#[test]
fn test_load_from_file() {
    let file = write_dataset(DATASET_JSON);
    let engine = Engine::new(EngineConfig::default());

    assert!(engine.load_path(file.path()));
    assert!(engine.is_available());

    let store = engine.snapshot().unwrap();
    assert_eq!(store.len(), 8);
    assert_eq!(
        store.fingerprint(),
        Some(crc32fast::hash(DATASET_JSON.as_bytes()))
    );
    assert_eq!(matched_ids(&engine.resolve("SW1A")), vec![0]);
    assert_eq!(engine.global_stats().and_then(|s| s.avg_trust), Some(72.5));
}

#[test]
fn test_failed_loads_leave_fresh_engine_unavailable() {
    let bad_json = write_dataset("{\"agents\": [");
    let misplaced = write_dataset(MISPLACED_IDS);

    for path in [
        bad_json.path().to_path_buf(),
        misplaced.path().to_path_buf(),
        bad_json.path().with_extension("missing"),
    ] {
        let engine = Engine::default();
        assert!(!engine.load_path(&path), "{} should fail", path.display());
        assert!(!engine.is_available());
        assert!(engine.resolve("SW1A").is_empty());
        assert!(engine.suggest("SW").is_empty());
        assert!(engine.area_stats("SW1A").is_none());
    }
}

#[test]
fn test_reload_replaces_everything() {
    let engine = Engine::default();
    assert!(engine.load_json_bytes(DATASET_JSON.as_bytes()));
    assert_eq!(engine.resolve("SW1").len(), 3);

    assert!(engine.load_json_bytes(SMALL_DATASET.as_bytes()));
    assert!(engine.resolve("SW1").is_empty());
    let leeds = engine.resolve("leeds");
    assert_eq!(matched_ids(&leeds), vec![0]);
    assert_eq!(leeds[0].match_type, MatchType::Area);
    assert_eq!(engine.agent(0).map(|a| a.name), Some("Leeds Central Lets".to_string()));
}

#[test]
fn test_failed_reload_keeps_serving_old_data() {
    let engine = Engine::default();
    assert!(engine.load_json_bytes(DATASET_JSON.as_bytes()));
    assert!(!engine.load_json_bytes(MISPLACED_IDS.as_bytes()));
    assert_eq!(matched_ids(&engine.resolve("SW1A")), vec![0]);
}

#[test]
fn test_search_with_filters_through_engine() {
    let engine = Engine::default();
    assert!(engine.load_json_bytes(DATASET_JSON.as_bytes()));
    let spec = FilterSpec {
        min_trust: Some(80),
        ..FilterSpec::default()
    };
    assert_eq!(matched_ids(&engine.search("SW1", &spec)), vec![0]);
}

#[test]
fn test_readers_see_whole_stores_during_swaps() {
    let engine = Engine::default();
    assert!(engine.load_json_bytes(DATASET_JSON.as_bytes()));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let Some(store) = engine.snapshot() else {
                        continue;
                    };
                    // Within one snapshot the indexes always describe its own agents.
                    for (_, ids) in store.indexes().outcodes.iter() {
                        assert!(ids.iter().all(|&id| id < store.len()));
                    }
                    let hits = store.resolve("SW1");
                    assert!(hits.len() == 3 || hits.is_empty());
                }
            });
        }
        scope.spawn(|| {
            for round in 0..50 {
                let doc = if round % 2 == 0 { SMALL_DATASET } else { DATASET_JSON };
                assert!(engine.load_json_bytes(doc.as_bytes()));
            }
        });
    });

    assert!(engine.is_available());
}
