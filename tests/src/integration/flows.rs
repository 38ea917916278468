//! # Integration Test Flows
//!
//! End-to-end journeys across the subsystem crates: a seeded request
//! store answering every query surface, the event calendar feeding the
//! recommendation engine from logged searches, and the depot network
//! under traversal and minimum-cost connectivity.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cg_01_request_indexing::{IssueLog, RequestIndexApi, RequestIndexStore};
    use cg_02_depot_routing::{prim, DepotGraph};
    use cg_03_event_calendar::{recommend, tokenize, EventCalendar, SearchLog};
    use shared_types::{ServiceRequest, Timestamp, MS_PER_DAY};

    const NOW: Timestamp = 1_750_000_000_000;

    fn request(
        ticket: &str,
        location: &str,
        priority: u8,
        created_at: Timestamp,
    ) -> ServiceRequest {
        ServiceRequest::new(
            ticket,
            "Water",
            "Leak",
            location,
            "resident report",
            priority,
            created_at,
        )
    }

    // =========================================================================
    // REQUEST STORE FLOWS
    // =========================================================================

    #[test]
    fn test_add_then_lookup_returns_identical_record() {
        let mut store = RequestIndexStore::new();
        let id = store.add(request("SR-2025-0100", "Bellville", 3, NOW));

        let hit = store.find_by_ticket("SR-2025-0100").expect("ticket indexed");
        assert_eq!(hit.id, id);
        // Same allocation as the authoritative list entry, not a copy.
        assert!(Arc::ptr_eq(&hit, &store.all()[0]));
        // The other indices resolve to the same record.
        let by_time = store.find_by_created_at(NOW).expect("instant indexed");
        let by_location = store.find_by_location("Bellville").expect("location indexed");
        assert!(Arc::ptr_eq(&hit, &by_time));
        assert!(Arc::ptr_eq(&hit, &by_location));
    }

    #[test]
    fn test_top_urgent_is_stable_between_calls() {
        let mut store = RequestIndexStore::new();
        store.seed_demo(NOW);

        let first: Vec<String> = store
            .top_urgent(5)
            .iter()
            .map(|r| r.ticket.clone())
            .collect();
        let second: Vec<String> = store
            .top_urgent(5)
            .iter()
            .map(|r| r.ticket.clone())
            .collect();

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_store_ranks_critical_tickets_first() {
        let mut store = RequestIndexStore::new();
        store.seed_demo(NOW);

        // Three seeded requests carry the Critical ordinal.
        let top: Vec<String> = store
            .top_urgent(3)
            .iter()
            .map(|r| r.ticket.clone())
            .collect();
        let critical = ["SR-2025-0001", "SR-2025-0002", "SR-2025-0013"];
        for ticket in &top {
            assert!(critical.contains(&ticket.as_str()), "unexpected {ticket}");
        }
    }

    #[test]
    fn test_urgency_order_priority_then_recency() {
        let mut store = RequestIndexStore::new();
        store.add(request("SR-2025-0201", "A", 2, NOW - 1_000));
        store.add(request("SR-2025-0202", "B", 2, NOW));
        store.add(request("SR-2025-0203", "C", 0, NOW + 5_000));
        store.add(request("SR-2025-0204", "D", 3, NOW - 9_000));

        let order: Vec<String> = store
            .top_urgent(4)
            .iter()
            .map(|r| r.ticket.clone())
            .collect();
        assert_eq!(
            order,
            vec!["SR-2025-0204", "SR-2025-0202", "SR-2025-0201", "SR-2025-0203"]
        );
    }

    #[test]
    fn test_store_through_the_api_trait() {
        let mut store = RequestIndexStore::new();
        let api: &mut dyn RequestIndexApi = &mut store;

        api.add(request("SR-2025-0300", "Parow", 1, NOW));
        assert_eq!(api.len(), 1);
        assert_eq!(api.all().len(), 1);
        assert!(api.find_by_ticket("SR-2025-0300").is_some());
        assert!(api.find_by_ticket("SR-2025-0400").is_none());
        assert_eq!(api.status().total, 1);
    }

    #[test]
    fn test_store_under_adversarial_insertion_order() {
        // Ascending tickets are the worst case for the unbalanced
        // ticket index; every lookup must still succeed and the
        // urgency drain must still be non-increasing.
        let mut store = RequestIndexStore::new();
        for i in 0..500u64 {
            let ticket = format!("SR-2025-{i:04}");
            store.add(request(&ticket, "Area", (i % 4) as u8, NOW + i));
        }

        for i in 0..500u64 {
            let ticket = format!("SR-2025-{i:04}");
            assert!(store.find_by_ticket(&ticket).is_some());
        }

        let top = store.top_urgent(50);
        for pair in top.windows(2) {
            let ordered = pair[0].priority > pair[1].priority
                || (pair[0].priority == pair[1].priority
                    && pair[0].created_at >= pair[1].created_at);
            assert!(ordered, "urgency order violated");
        }
    }

    #[test]
    fn test_captured_issue_triages_into_a_ticketed_request() {
        let mut log = IssueLog::new();
        log.report(
            "Grassy Park",
            "Sanitation",
            "Illegal dumping on the verge",
            Some("/tmp/dumping.jpg"),
            NOW,
        );

        // Triage promotes the captured report into an indexed request.
        let mut store = RequestIndexStore::new();
        let captured = &log.all()[0];
        store.add(ServiceRequest::new(
            "SR-2025-0500",
            captured.category.clone(),
            "Collection",
            captured.location.clone(),
            captured.description.clone(),
            2,
            captured.created_at,
        ));

        let hit = store.find_by_ticket("SR-2025-0500").expect("triaged request");
        assert_eq!(hit.location, "Grassy Park");
        assert_eq!(hit.created_at, captured.created_at);
        // The capture log keeps the original report.
        assert_eq!(log.len(), 1);
    }

    // =========================================================================
    // CALENDAR & RECOMMENDATION FLOWS
    // =========================================================================

    #[test]
    fn test_search_log_feeds_recommendations() {
        let mut calendar = EventCalendar::new();
        calendar.seed_demo(NOW);

        let mut log = SearchLog::new();
        log.log_search("Water OUTAGE near Bellville");
        assert!(log.distinct_terms().contains("outage"));

        let tokens = tokenize("Water OUTAGE near Bellville");
        let picks = recommend(calendar.all(), &tokens, NOW, 3);

        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].title, "Scheduled Water Outage - Bellville");
    }

    #[test]
    fn test_calendar_range_category_and_urgency_surfaces() {
        let mut calendar = EventCalendar::new();
        calendar.seed_demo(NOW);

        let week = calendar.in_date_range(NOW, NOW + 7 * MS_PER_DAY);
        assert!(week.len() >= 4);
        for event in &week {
            assert!(event.date <= NOW + 8 * MS_PER_DAY);
        }

        assert_eq!(calendar.by_category("water").len(), 1);
        assert!(calendar.categories().contains(&"Water".to_owned()));

        // High-priority bucket drains before the rest.
        let urgent = calendar.dequeue_urgent(2);
        assert!(urgent.iter().all(|e| e.priority == 0));
    }

    // =========================================================================
    // DEPOT NETWORK FLOWS
    // =========================================================================

    #[test]
    fn test_depot_network_traversals_cover_all_depots() {
        let depots = DepotGraph::cape_town_demo();

        let bfs: Vec<&str> = depots.bfs(0).collect();
        let dfs: Vec<&str> = depots.dfs(0).collect();

        assert_eq!(bfs.len(), depots.vertex_count());
        assert_eq!(dfs.len(), depots.vertex_count());
        assert_eq!(bfs[0], "Bellville Depot");
        assert_eq!(dfs[0], "Bellville Depot");
    }

    #[test]
    fn test_minimum_cost_connectivity_on_demo_network() {
        let depots = DepotGraph::cape_town_demo();
        let mst = prim(&depots, 0).expect("valid start vertex");

        assert!(mst.spans(&depots));
        assert_eq!(mst.edges.len(), depots.vertex_count() - 1);
        assert!((mst.total_weight - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_triangle_fixture_from_every_start() {
        let mut g = DepotGraph::new();
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        let c = g.add_vertex("C");
        g.add_undirected_edge(a, b, 1.0);
        g.add_undirected_edge(b, c, 2.0);
        g.add_undirected_edge(a, c, 5.0);

        for start in [a, b, c] {
            let mst = prim(&g, start).expect("valid start vertex");
            assert_eq!(mst.edges.len(), 2);
            assert!((mst.total_weight - 3.0).abs() < f64::EPSILON);
        }
    }
}
