//! # Request Index Store
//!
//! The composition layer over one authoritative record list and four
//! derived indices.
//!
//! ## Indices
//!
//! - `by_ticket`: exact lookup by ticket code (unbalanced BST)
//! - `by_created_at`: ordered by creation instant (AVL)
//! - `by_location`: ordered by location string (left-leaning red-black)
//! - `urgent`: max-heap under [`urgency_order`]
//!
//! Every index holds an `Arc` clone of the same store-owned record, so a
//! hit through any index yields the identical logical entity. All index
//! inserts happen inside one `add` call; none of them can fail, so no
//! partially-indexed state is observable.

use super::heap::MaxPriorityHeap;
use super::taxonomy::{municipal_taxonomy, TaxonomyNode};
use super::value_objects::{urgency_order, StoreStatus, UrgencyCmp};
use super::{BalancedColorTree, BalancedHeightTree, OrderedKeyTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{RequestId, ServiceRequest, Timestamp};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, info};

/// Central store and indices for service requests.
///
/// Explicitly constructed and explicitly owned; single writer by virtue
/// of `&mut self` on every mutating operation.
#[derive(Debug)]
pub struct RequestIndexStore {
    /// Authoritative record list, insertion order.
    all: Vec<Arc<ServiceRequest>>,

    /// Ticket code -> record.
    by_ticket: OrderedKeyTree<String, Arc<ServiceRequest>>,

    /// Creation instant -> record.
    by_created_at: BalancedHeightTree<Timestamp, Arc<ServiceRequest>>,

    /// Location string -> record. Empty locations key the empty string.
    by_location: BalancedColorTree<String, Arc<ServiceRequest>>,

    /// Most-urgent-first heap under [`urgency_order`].
    urgent: MaxPriorityHeap<Arc<ServiceRequest>, UrgencyCmp>,

    /// Fixed category hierarchy, built once.
    taxonomy: TaxonomyNode,
}

impl RequestIndexStore {
    /// Creates an empty store with the municipal taxonomy.
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            by_ticket: OrderedKeyTree::new(),
            by_created_at: BalancedHeightTree::new(),
            by_location: BalancedColorTree::new(),
            urgent: MaxPriorityHeap::new(urgency_order),
            taxonomy: municipal_taxonomy(),
        }
    }

    /// Returns the number of records in the authoritative list.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns true if no records have been added.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Appends a record and inserts it into every index as one logical
    /// unit. Returns the record's id.
    ///
    /// Re-adding a record whose ticket (or creation instant, or
    /// location) collides with an existing key overwrites that index
    /// entry rather than duplicating a node; the authoritative list
    /// always appends.
    pub fn add(&mut self, request: ServiceRequest) -> RequestId {
        let record = Arc::new(request);
        debug!(
            ticket = %record.ticket,
            priority = record.priority,
            "indexing service request"
        );

        self.all.push(Arc::clone(&record));
        self.by_ticket
            .insert(record.ticket.clone(), Arc::clone(&record));
        self.by_created_at
            .insert(record.created_at, Arc::clone(&record));
        self.by_location
            .insert(record.location.clone(), Arc::clone(&record));
        self.urgent.push(Arc::clone(&record));

        record.id
    }

    /// Exact lookup by ticket code.
    pub fn find_by_ticket(&self, ticket: &str) -> Option<Arc<ServiceRequest>> {
        self.by_ticket.get(ticket).cloned()
    }

    /// Exact lookup by creation instant.
    pub fn find_by_created_at(&self, created_at: Timestamp) -> Option<Arc<ServiceRequest>> {
        self.by_created_at.get(&created_at).cloned()
    }

    /// Exact lookup by location string.
    pub fn find_by_location(&self, location: &str) -> Option<Arc<ServiceRequest>> {
        self.by_location.get(location).cloned()
    }

    /// The authoritative list in insertion order.
    pub fn all(&self) -> &[Arc<ServiceRequest>] {
        &self.all
    }

    /// Up to `max` records in descending urgency order.
    ///
    /// Non-destructive: the popped records are pushed back before
    /// returning, so two consecutive calls with no intervening `add`
    /// observe the same population. Costs O(max · log n) heap churn per
    /// call.
    pub fn top_urgent(&mut self, max: usize) -> Vec<Arc<ServiceRequest>> {
        let mut drained = Vec::new();
        while drained.len() < max {
            match self.urgent.try_pop() {
                Some(record) => drained.push(record),
                None => break,
            }
        }
        for record in &drained {
            self.urgent.push(Arc::clone(record));
        }
        drained
    }

    /// Read-only access to the category taxonomy.
    pub fn taxonomy(&self) -> &TaxonomyNode {
        &self.taxonomy
    }

    /// Snapshot of store-level counts.
    pub fn status(&self) -> StoreStatus {
        StoreStatus::of(&self.all)
    }

    /// Seeds the demo request set. No-op when the store already holds
    /// records.
    ///
    /// Creation instants are `now` minus a deterministic per-ticket
    /// jitter of up to 10 000 minutes, so the seeded data exercises the
    /// creation-time index and the urgency tie-break without being
    /// random between runs.
    pub fn seed_demo(&mut self, now: Timestamp) {
        if !self.all.is_empty() {
            return;
        }

        let samples: [(&str, &str, &str, &str, &str, u8); 16] = [
            ("SR-2025-0001", "Water", "Leak", "Bellville", "Burst pipe near Voortrekker Rd", 3),
            ("SR-2025-0002", "Electricity", "Outage", "Athlone", "Area-wide outage after storm", 3),
            ("SR-2025-0003", "Roads", "Pothole", "Mitchells Plain", "Large pothole on AZ Berman Dr", 2),
            ("SR-2025-0004", "Community Safety", "Streetlight", "Khayelitsha", "Streetlight not working near school", 1),
            ("SR-2025-0005", "Water", "Low Pressure", "Strandfontein", "Low water pressure evenings", 1),
            ("SR-2025-0006", "Electricity", "Fault", "Goodwood", "Tripping in substation sector B", 2),
            ("SR-2025-0007", "Roads", "Signage", "Somerset West", "Stop sign missing at intersection", 0),
            ("SR-2025-0008", "Solid Waste", "Collection", "Grassy Park", "Missed collection for 2 days", 2),
            ("SR-2025-0009", "Water", "Leak", "Rondebosch", "Persistent leak at corner hydrant", 1),
            ("SR-2025-0010", "Electricity", "Meter", "Claremont", "Faulty pre-paid meter readings", 1),
            ("SR-2025-0011", "Roads", "Resurfacing", "Durbanville", "Request to prioritise resurfacing", 0),
            ("SR-2025-0012", "Community Safety", "Vandalism", "Retreat", "Broken fence at park", 1),
            ("SR-2025-0013", "Water", "Burst", "Macassar", "Major burst main line", 3),
            ("SR-2025-0014", "Electricity", "Outage", "Heideveld", "Isolated outage on one street", 2),
            ("SR-2025-0015", "Roads", "Pothole", "Mowbray", "Row of potholes near bridge", 1),
            ("SR-2025-0016", "Water", "Leak", "Parow", "Leak near taxi rank", 2),
        ];

        for (idx, (ticket, category, sub, location, description, priority)) in
            samples.into_iter().enumerate()
        {
            let jitter_minutes = StdRng::seed_from_u64(ticket_seed(ticket)).gen_range(0..10_000u64);
            // The extra millisecond offset keeps creation instants
            // distinct even when two jitters collide.
            let created_at = now.saturating_sub(jitter_minutes * 60_000 + idx as u64);
            self.add(ServiceRequest::new(
                ticket,
                category,
                sub,
                location,
                description,
                priority,
                created_at,
            ));
        }

        info!(count = self.all.len(), "seeded demo service requests");
    }
}

impl Default for RequestIndexStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable per-ticket seed for the demo jitter.
fn ticket_seed(ticket: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    ticket.hash(&mut hasher);
    hasher.finish()
}
