//! # Inbound Port - RequestIndexApi
//!
//! Primary driving port exposing the request store to the presentation
//! collaborator. The collaborator constructs `ServiceRequest` values
//! from user input, calls these operations, and renders the returned
//! sequences; nothing else crosses this boundary.

use crate::domain::{RequestIndexStore, StoreStatus};
use shared_types::{RequestId, ServiceRequest};
use std::sync::Arc;

/// Primary API for the Request Indexing subsystem.
///
/// Lookup misses are `Option::None`, never errors; `add` cannot fail
/// for a well-formed record. Input validation belongs to the caller.
pub trait RequestIndexApi {
    /// Appends a record and updates every index as one logical unit.
    /// Returns the record's id.
    fn add(&mut self, request: ServiceRequest) -> RequestId;

    /// Exact lookup by ticket code.
    fn find_by_ticket(&self, ticket: &str) -> Option<Arc<ServiceRequest>>;

    /// The full record list in insertion order.
    fn all(&self) -> Vec<Arc<ServiceRequest>>;

    /// Up to `max` records in descending urgency order, without
    /// changing what later calls observe.
    fn top_urgent(&mut self, max: usize) -> Vec<Arc<ServiceRequest>>;

    /// Snapshot of store-level counts.
    fn status(&self) -> StoreStatus;

    /// Number of records held.
    fn len(&self) -> usize;

    /// Returns true if no records are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RequestIndexApi for RequestIndexStore {
    fn add(&mut self, request: ServiceRequest) -> RequestId {
        RequestIndexStore::add(self, request)
    }

    fn find_by_ticket(&self, ticket: &str) -> Option<Arc<ServiceRequest>> {
        RequestIndexStore::find_by_ticket(self, ticket)
    }

    fn all(&self) -> Vec<Arc<ServiceRequest>> {
        RequestIndexStore::all(self).to_vec()
    }

    fn top_urgent(&mut self, max: usize) -> Vec<Arc<ServiceRequest>> {
        RequestIndexStore::top_urgent(self, max)
    }

    fn status(&self) -> StoreStatus {
        RequestIndexStore::status(self)
    }

    fn len(&self) -> usize {
        RequestIndexStore::len(self)
    }
}
