//! Subsystem container.
//!
//! Every store is constructed here exactly once and owned by the
//! container; consumers receive references through it. Nothing in the
//! workspace is a process-wide singleton.

use crate::config::RuntimeConfig;
use cg_01_request_indexing::{IssueLog, RequestIndexStore};
use cg_02_depot_routing::DepotGraph;
use cg_03_event_calendar::{EventCalendar, SearchLog};
use shared_types::Timestamp;
use tracing::info;

/// The subsystem stores, initialized in dependency order.
#[derive(Debug)]
pub struct CityContainer {
    /// Service requests and their indices.
    pub requests: RequestIndexStore,
    /// Resident-reported issues awaiting triage.
    pub issues: IssueLog,
    /// Events, announcements, and their indices.
    pub calendar: EventCalendar,
    /// Search behaviour feeding recommendations.
    pub search_log: SearchLog,
    /// The fixed depot network.
    pub depots: DepotGraph,
}

impl CityContainer {
    /// Builds all stores, seeding demo data when configured.
    pub fn new(config: &RuntimeConfig, now: Timestamp) -> Self {
        let mut requests = RequestIndexStore::new();
        let mut issues = IssueLog::new();
        let mut calendar = EventCalendar::new();

        if config.seed_demo_data {
            requests.seed_demo(now);
            issues.seed_demo(now);
            calendar.seed_demo(now);
        }

        info!(
            requests = requests.len(),
            issues = issues.len(),
            events = calendar.len(),
            "subsystem container initialized"
        );

        Self {
            requests,
            issues,
            calendar,
            search_log: SearchLog::new(),
            depots: DepotGraph::cape_town_demo(),
        }
    }
}
