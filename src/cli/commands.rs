// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command implementations. Each one queries the engine and either prints
//! boxes or dumps JSON.

use agentfind::{
    sort_records_named, Agent, AreaStats, Engine, EngineConfig, FilterSpec, MatchedAgent,
    SortCriterion, Store, TrustBand,
};
use serde::Serialize;

use super::display::*;
use super::{CliError, FilterArgs};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn search(
    engine: &Engine,
    query: &str,
    filters: &FilterArgs,
    sort: Option<&str>,
    limit: usize,
    json: bool,
) -> Result<(), CliError> {
    let spec: FilterSpec = filters.to_spec();
    let mut matches = engine.search(query, &spec);
    if let Some(criterion) = sort {
        matches = sort_records_named(&matches, criterion);
    }
    let total = matches.len();
    matches.truncate(limit);

    if json {
        return print_json(&matches);
    }

    let heading = match sort.and_then(SortCriterion::parse_lenient) {
        Some(criterion) => format!("{} results for \"{}\" by {}", total, query, criterion.label()),
        None => format!("{} results for \"{}\"", total, query),
    };
    section_top(&heading);
    if matches.is_empty() {
        row(&styled(&[DIM], " no agents matched"));
    }
    for (rank, hit) in matches.iter().enumerate() {
        print_match_row(rank + 1, hit, engine.config());
    }
    if total > matches.len() {
        row(&styled(&[DIM], &format!(" ... {} more", total - matches.len())));
    }
    section_bot();
    Ok(())
}

fn print_match_row(rank: usize, hit: &MatchedAgent, config: &EngineConfig) {
    let agent = &hit.agent;
    let band = TrustBand::classify(agent.trust_score, config);
    row(&format!(
        " {:>3}. {} {} {}",
        rank,
        trust_value(agent.trust_score, band),
        pad_right(&styled(&[BOLD], &truncate(&agent.name, 34)), 34),
        match_type_badge(hit.match_type)
    ));
    row(&format!(
        "      {}  {}",
        themed(GRAY, &[], &truncate(&agent.location_line(), 30)),
        rating(agent.reviews.rating(), agent.reviews.count)
    ));
}

pub fn suggest(engine: &Engine, query: &str, json: bool) -> Result<(), CliError> {
    let suggestions = engine.suggest(query);
    if json {
        return print_json(&suggestions);
    }

    section_top(&format!("suggestions for \"{}\"", query));
    if suggestions.is_empty() {
        row(&styled(&[DIM], " nothing to suggest"));
    }
    for suggestion in &suggestions {
        row(&format!(
            " {} {} {}",
            themed(CYAN, &[], suggestion_glyph(suggestion.kind)),
            pad_right(&suggestion.text, 40),
            styled(&[DIM], &format!("{} · {}", suggestion.kind.as_str(), suggestion.count))
        ));
    }
    section_bot();
    Ok(())
}

pub fn stats(engine: &Engine, outcode: &str, json: bool) -> Result<(), CliError> {
    let stats = engine
        .area_stats(outcode)
        .ok_or_else(|| CliError::UnknownOutcode(outcode.trim().to_uppercase()))?;
    if json {
        return print_json(&stats);
    }
    print_area_stats(&stats, engine.config());
    Ok(())
}

fn print_area_stats(stats: &AreaStats, config: &EngineConfig) {
    banner(&format!("{} · {} agents", stats.outcode, stats.agent_count));

    section_top("Overview");
    let band = TrustBand::classify(stats.avg_trust, config);
    field("Average trust", &trust_value(stats.avg_trust, band));
    field("Average rating", &optional(stats.avg_rating, " / 5"));
    field("Average years", &optional(stats.avg_years, ""));
    match stats.fees {
        Some(fees) => field(
            "Management fee",
            &format!("{:.1}% avg ({:.1}% - {:.1}%)", fees.avg, fees.min, fees.max),
        ),
        None => field("Management fee", &optional::<f64>(None, "")),
    }
    if let Some(national) = stats.national {
        field("National fee", &optional(national.avg_fee, "%"));
        field("National trust", &optional(national.avg_trust, ""));
    }

    section_mid("Coverage");
    field("With fees", &stats.with_fees.to_string());
    field("With reviews", &stats.with_reviews.to_string());
    field("ARLA", &stats.with_arla.to_string());
    field("CMP", &stats.with_cmp.to_string());
    for (provider_type, count) in &stats.provider_types {
        field(provider_type.label(), &count.to_string());
    }
    for (category, count) in &stats.categories {
        field(category.as_str(), &count.to_string());
    }

    section_mid("Top agents");
    for summary in &stats.top_agents {
        row(&format!(
            " {:>5}  {}  {}",
            styled(&[DIM], &format!("#{}", summary.id)),
            themed(GREEN, &[], &format!("{:>3}", summary.score)),
            summary.name
        ));
    }
    section_bot();
}

pub fn nearby(engine: &Engine, outcode: &str, limit: Option<usize>, json: bool) -> Result<(), CliError> {
    let limit = limit.unwrap_or(engine.config().nearby_limit);
    let nearby = engine.nearby_outcodes(outcode, limit);
    if json {
        return print_json(&nearby);
    }

    section_top(&format!("near {}", outcode.trim().to_uppercase()));
    if nearby.is_empty() {
        row(&styled(&[DIM], " no outcodes share these letters"));
    }
    for entry in &nearby {
        row(&format!(
            " {} {}",
            pad_right(&themed(BLUE, &[BOLD], &entry.outcode), 8),
            styled(&[DIM], &format!("{} agents", entry.count))
        ));
    }
    section_bot();
    Ok(())
}

pub fn show(engine: &Engine, id: usize, json: bool) -> Result<(), CliError> {
    let agent = engine.agent(id).ok_or(CliError::UnknownAgent(id))?;
    if json {
        return print_json(&agent);
    }
    print_agent(&agent, engine.config());
    Ok(())
}

fn print_agent(agent: &Agent, config: &EngineConfig) {
    banner(&agent.name);

    section_top("Agency");
    field("Id", &agent.id.to_string());
    field("Location", &agent.location_line());
    field("Address", &optional(agent.address.as_deref(), ""));
    field("Category", agent.category.as_str());
    field("Type", &optional(agent.provider_type.map(|t| t.label()), ""));
    field("Activity", &optional(agent.activity.map(|a| a.label()), ""));
    field(
        "Trust",
        &trust_value(agent.trust_score, TrustBand::classify(agent.trust_score, config)),
    );
    field("Data richness", &agent.data_richness.to_string());
    field("Years trading", &optional(agent.performance.years_trading(), ""));
    field("Reviews", &rating(agent.reviews.rating(), agent.reviews.count));

    section_mid("Fees");
    field("Tenant find", &optional(agent.fees.tenant_find.as_ref(), ""));
    field("Full management", &optional(agent.fees.full_management.as_ref(), ""));
    field("Management", &optional(agent.fees.management_pct(), "%"));
    field("Guaranteed rent", &flag(agent.guaranteed_rent));

    section_mid("Regulation");
    let labels = agent.regulatory.present_labels();
    if labels.is_empty() {
        row(&styled(&[DIM], " none recorded"));
    }
    for label in labels {
        row(&format!(" {} {}", themed(GREEN, &[], "✓"), label));
    }

    if !agent.areas.is_empty() {
        section_mid("Areas");
        row(&format!(" {}", truncate(&agent.areas.join(", "), BOX_WIDTH - 2)));
    }
    section_bot();
}

pub fn info(engine: &Engine, json: bool) -> Result<(), CliError> {
    let Some(store) = engine.snapshot() else {
        return Err(CliError::MissingData);
    };
    if json {
        return print_json(&info_json(&store));
    }

    banner("agentfind dataset");
    section_top("Dataset");
    field("Agents", &store.len().to_string());
    field("Outcodes", &store.indexes().outcodes.len().to_string());
    field("Postcodes", &store.indexes().postcodes.len().to_string());
    field("Areas", &store.indexes().areas.len().to_string());
    field(
        "CRC32",
        &optional(store.fingerprint().map(|crc| format!("{:08x}", crc)), ""),
    );
    let stats = store.global_stats();
    field("National fee", &optional(stats.avg_fee, "%"));
    field("National trust", &optional(stats.avg_trust, ""));

    section_mid("Sort options");
    for criterion in SortCriterion::ALL {
        field(criterion.as_str(), criterion.label());
    }
    section_bot();
    Ok(())
}

fn info_json(store: &Store) -> serde_json::Value {
    serde_json::json!({
        "agents": store.len(),
        "outcodes": store.indexes().outcodes.len(),
        "postcodes": store.indexes().postcodes.len(),
        "areas": store.indexes().areas.len(),
        "fingerprint": store.fingerprint().map(|crc| format!("{:08x}", crc)),
        "stats": store.global_stats(),
        "sort_options": SortCriterion::ALL
            .iter()
            .map(|c| serde_json::json!({"value": c.as_str(), "label": c.label()}))
            .collect::<Vec<_>>(),
    })
}
