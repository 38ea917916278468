//! # CivicGrid City Runtime
//!
//! The entry point wiring the subsystem stores together and driving a
//! short demonstration of every query surface.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration (defaults + `CG_*` environment overrides)
//! 3. Construct the subsystem container (seeding demo data if enabled)
//! 4. Walk the query surfaces: urgency listing, ticket lookup,
//!    taxonomy, issue capture, event search and recommendations, depot
//!    traversals and minimum-cost connectivity
//!
//! The stores are owned by the container and passed by reference; the
//! engine is single-threaded and synchronous throughout, so the whole
//! run completes on the main thread.

pub mod config;
pub mod container;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use cg_02_depot_routing::prim;
use cg_03_event_calendar::{recommend, tokenize};
use shared_types::{Timestamp, MS_PER_DAY};

use crate::config::RuntimeConfig;
use crate::container::CityContainer;

/// Milliseconds since the Unix epoch, from the system clock.
fn current_timestamp() -> Result<Timestamp> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?;
    Ok(elapsed.as_millis() as Timestamp)
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("===========================================");
    info!("  CivicGrid City Runtime v0.1.0");
    info!("===========================================");

    let config = RuntimeConfig::from_env();
    let now = current_timestamp()?;
    let mut city = CityContainer::new(&config, now);

    // --- Service requests -------------------------------------------------
    let status = city.requests.status();
    info!(
        total = status.total,
        open = status.open,
        critical = status.critical,
        "request store ready"
    );

    for record in city.requests.top_urgent(config.top_urgent_limit) {
        info!(
            ticket = %record.ticket,
            priority = record.priority,
            location = %record.location,
            "urgent request"
        );
    }

    match city.requests.find_by_ticket("SR-2025-0001") {
        Some(record) => info!(
            ticket = %record.ticket,
            status = %record.status,
            "ticket lookup hit"
        ),
        None => info!("ticket SR-2025-0001 not found"),
    }

    let categories: Vec<&str> = city
        .requests
        .taxonomy()
        .children()
        .iter()
        .map(|c| c.label())
        .collect();
    info!(categories = %categories.join(", "), "service categories");

    // --- Reported issues ---------------------------------------------------
    city.issues.report(
        "Strandfontein",
        "Utilities",
        "Stormwater drain blocked after the weekend rain.",
        None,
        now,
    );
    info!(count = city.issues.len(), "issue reports awaiting triage");

    // --- Events & recommendations -----------------------------------------
    city.search_log.log_search("water outage");
    let week_ahead = city.calendar.in_date_range(now, now + 7 * MS_PER_DAY);
    info!(count = week_ahead.len(), "events in the next 7 days");

    let tokens = tokenize("water outage");
    for event in recommend(city.calendar.all(), &tokens, now, 3) {
        info!(title = %event.title, category = %event.category, "recommended event");
    }

    // --- Depot network -----------------------------------------------------
    let bfs_route: Vec<&str> = city.depots.bfs(0).collect();
    info!(route = %bfs_route.join(" -> "), "breadth-first depot sweep");

    let dfs_route: Vec<&str> = city.depots.dfs(0).collect();
    info!(route = %dfs_route.join(" -> "), "depth-first depot sweep");

    let mst = prim(&city.depots, 0)?;
    if !mst.spans(&city.depots) {
        warn!("depot network is disconnected; spanning tree is partial");
    }
    for edge in &mst.edges {
        info!(
            from = city.depots.name_of(edge.from),
            to = city.depots.name_of(edge.to),
            km = edge.weight,
            "spanning-tree corridor"
        );
    }
    info!(total_km = mst.total_weight, "minimum-cost depot connectivity");

    Ok(())
}
