//! Filter engine applied through search.

use super::common::{hit_ids, json_store};
use agentfind::{apply_filters, AgentTypeFilter, CategoryFilter, FilterSpec, ServiceType};

#[test]
fn test_service_type_reads_tiers_and_services() {
    let store = json_store();
    let tenant_find = FilterSpec {
        service_type: Some(ServiceType::TenantFind),
        ..FilterSpec::default()
    };
    let managed = FilterSpec {
        service_type: Some(ServiceType::FullManagement),
        ..FilterSpec::default()
    };
    let guaranteed = FilterSpec {
        service_type: Some(ServiceType::GuaranteedRent),
        ..FilterSpec::default()
    };

    assert_eq!(hit_ids(&store.search("SW1", &tenant_find)), vec![0, 1]);
    // "Fully Managed" counts as full management
    assert_eq!(hit_ids(&store.search("SW1", &managed)), vec![0]);
    assert_eq!(hit_ids(&store.search("SW1", &guaranteed)), vec![0]);
}

#[test]
fn test_agent_type() {
    let store = json_store();
    let online = FilterSpec {
        agent_type: Some(AgentTypeFilter::Online),
        ..FilterSpec::default()
    };
    assert_eq!(hit_ids(&store.search("B17", &online)), vec![6]);

    let unknown: FilterSpec = serde_json::from_str(r#"{"agentType": "kiosk"}"#).unwrap();
    assert!(store.search("B17", &unknown).is_empty());
}

#[test]
fn test_min_trust_threshold() {
    let store = json_store();
    let spec = FilterSpec {
        min_trust: Some(74),
        ..FilterSpec::default()
    };
    assert_eq!(hit_ids(&store.search("SW1", &spec)), vec![0, 1]);

    let stricter = FilterSpec {
        min_trust: Some(75),
        ..FilterSpec::default()
    };
    assert_eq!(hit_ids(&store.search("SW1", &stricter)), vec![0]);
}

#[test]
fn test_presence_filters() {
    let store = json_store();
    let reviews = FilterSpec {
        has_reviews: true,
        ..FilterSpec::default()
    };
    let fees = FilterSpec {
        has_fees: true,
        ..FilterSpec::default()
    };
    let arla = FilterSpec {
        arla: true,
        ..FilterSpec::default()
    };
    let cmp = FilterSpec {
        cmp: true,
        ..FilterSpec::default()
    };

    assert_eq!(hit_ids(&store.search("SW1", &reviews)), vec![0, 1]);
    assert_eq!(hit_ids(&store.search("SW1", &fees)), vec![0, 1]);
    assert_eq!(hit_ids(&store.search("SW1", &arla)), vec![0]);
    assert_eq!(hit_ids(&store.search("SW1", &cmp)), vec![0, 1]);
}

#[test]
fn test_category_variants() {
    let store = json_store();
    let run = |category| {
        let spec = FilterSpec {
            category: Some(category),
            ..FilterSpec::default()
        };
        hit_ids(&store.search("SW1", &spec))
    };

    // 0 is both, 1 letting, 2 estate
    assert_eq!(run(CategoryFilter::Letting), vec![0, 1]);
    assert_eq!(run(CategoryFilter::Estate), vec![0, 2]);
    assert_eq!(run(CategoryFilter::LettingOnly), vec![1]);
    assert_eq!(run(CategoryFilter::EstateOnly), vec![2]);
    assert_eq!(run(CategoryFilter::Both), vec![0]);
    assert_eq!(run(CategoryFilter::parse("auction")), vec![0, 1, 2]);
}

#[test]
fn test_experience_label_is_exact() {
    let store = json_store();
    let spec = FilterSpec {
        experience: Some("growing".to_string()),
        ..FilterSpec::default()
    };
    assert_eq!(hit_ids(&store.search("SW1", &spec)), vec![1]);

    let blank = FilterSpec {
        experience: Some(String::new()),
        ..FilterSpec::default()
    };
    assert_eq!(hit_ids(&store.search("SW1", &blank)), hit_ids(&store.resolve("SW1")));
}

#[test]
fn test_filtering_does_not_reorder() {
    let store = json_store();
    let hits = store.resolve("SW1");
    let spec = FilterSpec {
        has_fees: true,
        ..FilterSpec::default()
    };
    let filtered = apply_filters(hits.clone(), &spec);
    let expected: Vec<usize> = hit_ids(&hits)
        .into_iter()
        .filter(|id| [0, 1].contains(id))
        .collect();
    assert_eq!(hit_ids(&filtered), expected);
}

#[test]
fn test_sequential_filters_equal_conjunction() {
    let store = json_store();
    let hits = store.resolve("SW1");
    let f1 = FilterSpec {
        has_reviews: true,
        ..FilterSpec::default()
    };
    let f2 = FilterSpec {
        category: Some(CategoryFilter::Letting),
        ..FilterSpec::default()
    };

    let sequential = apply_filters(apply_filters(hits.clone(), &f1), &f2);
    let combined = apply_filters(hits, &f1.and(&f2));
    assert_eq!(hit_ids(&sequential), hit_ids(&combined));
}

#[test]
fn test_filter_spec_from_query_string_json() {
    let spec: FilterSpec =
        serde_json::from_str(r#"{"hasFees": true, "guaranteedRent": true, "serviceType": "express"}"#)
            .unwrap();
    assert!(spec.has_fees);
    assert!(spec.guaranteed_rent);
    assert_eq!(spec.service_type, Some(ServiceType::Unrecognized));
}
