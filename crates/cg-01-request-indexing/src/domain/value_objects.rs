//! Value objects for the Request Indexing subsystem.
//!
//! The urgency order injected into the heap, and the store status
//! snapshot handed to the presentation layer.

use shared_types::{RequestStatus, ServiceRequest, Timestamp};
use std::cmp::Ordering;
use std::sync::Arc;

/// Comparator type the store's urgency heap is instantiated with.
pub type UrgencyCmp = fn(&Arc<ServiceRequest>, &Arc<ServiceRequest>) -> Ordering;

/// The composite urgency order.
///
/// Primary key: priority ordinal, higher is more urgent. Tie-break:
/// creation instant, the more recently created request outranks the
/// older one. `Greater` means "pops first" under the max-heap.
pub fn urgency_order(a: &Arc<ServiceRequest>, b: &Arc<ServiceRequest>) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Store status snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreStatus {
    /// Total records in the authoritative list.
    pub total: usize,
    /// Records not yet resolved or closed.
    pub open: usize,
    /// Records at the highest priority ordinal.
    pub critical: usize,
    /// Creation instant of the oldest record, if any.
    pub oldest_created_at: Option<Timestamp>,
    /// Creation instant of the newest record, if any.
    pub newest_created_at: Option<Timestamp>,
}

impl StoreStatus {
    /// Computes a snapshot over the authoritative list.
    pub fn of(records: &[Arc<ServiceRequest>]) -> Self {
        let open = records
            .iter()
            .filter(|r| !matches!(r.status, RequestStatus::Resolved | RequestStatus::Closed))
            .count();
        let critical = records.iter().filter(|r| r.priority == 3).count();
        Self {
            total: records.len(),
            open,
            critical,
            oldest_created_at: records.iter().map(|r| r.created_at).min(),
            newest_created_at: records.iter().map(|r| r.created_at).max(),
        }
    }
}
