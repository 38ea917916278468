//! # Core Domain Entities
//!
//! Defines the entities shared across CivicGrid subsystems.
//!
//! ## Clusters
//!
//! - **Service Requests**: `ServiceRequest`, `RequestId`, `RequestStatus`
//! - **Reported Issues**: `IssueReport`, `IssueId`
//! - **Events & Announcements**: `EventItem`, `EventId`
//! - **Time**: `Timestamp`, `MS_PER_DAY`

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

// =============================================================================
// CLUSTER A: TIME
// =============================================================================

/// Milliseconds since the Unix epoch. Totally ordered.
pub type Timestamp = u64;

/// Milliseconds in one calendar day.
pub const MS_PER_DAY: u64 = 86_400_000;

/// Truncates a timestamp to the start of its calendar day (UTC).
///
/// Used as the key for date-granular indices, where two instants on the
/// same day must collide.
pub fn day_key(ts: Timestamp) -> Timestamp {
    ts - ts % MS_PER_DAY
}

// =============================================================================
// CLUSTER B: SERVICE REQUESTS
// =============================================================================

/// Urgency ordinal for service requests. Higher value = more urgent.
///
/// 3 = Critical, 2 = High, 1 = Normal, 0 = Low.
pub type Priority = u8;

/// Unique identifier for a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RequestStatus {
    /// Captured but not yet assigned.
    #[default]
    New,
    /// A crew or official is working on it.
    InProgress,
    /// Waiting on a third party or on parts.
    OnHold,
    /// Work completed, awaiting closure.
    Resolved,
    /// Closed out.
    Closed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        };
        write!(f, "{}", label)
    }
}

/// A municipal service request (ticket).
///
/// Immutable once indexed: the indexing subsystem never mutates a stored
/// request, and no update path through the indices exists. `status` and
/// `history` are carried for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Opaque unique id.
    pub id: RequestId,
    /// Human-readable ticket code, e.g. `SR-2025-0001`. Unique per request.
    pub ticket: String,
    /// When the request was captured.
    pub created_at: Timestamp,
    /// Main category, e.g. Water / Electricity / Roads.
    pub category: String,
    /// Narrower label under the category, e.g. Leak / Outage.
    pub sub_category: String,
    /// Free-text area or region. May be empty.
    pub location: String,
    /// What the resident reported.
    pub description: String,
    /// Urgency ordinal, 3..=0. Higher = more urgent.
    pub priority: Priority,
    /// Lifecycle state.
    pub status: RequestStatus,
    /// Ordered textual progress notes.
    pub history: Vec<String>,
}

impl ServiceRequest {
    /// Creates a new request in the `New` state with an empty history.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ticket: impl Into<String>,
        category: impl Into<String>,
        sub_category: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: RequestId::new(),
            ticket: ticket.into(),
            created_at,
            category: category.into(),
            sub_category: sub_category.into(),
            location: location.into(),
            description: description.into(),
            priority,
            status: RequestStatus::New,
            history: Vec::new(),
        }
    }
}

// =============================================================================
// CLUSTER C: REPORTED ISSUES
// =============================================================================

/// Unique identifier for a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueId(pub Uuid);

impl IssueId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IssueId {
    fn default() -> Self {
        Self::new()
    }
}

/// A resident-reported issue, captured before triage.
///
/// Lighter than a [`ServiceRequest`]: no ticket code, no priority, no
/// lifecycle. The capture flow only ever appends these; triage into a
/// ticketed request happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    /// Opaque unique id.
    pub id: IssueId,
    /// When the issue was captured.
    pub created_at: Timestamp,
    /// Location text as entered by the resident.
    pub location: String,
    /// Category, e.g. Sanitation / Roads / Utilities / Community Safety.
    pub category: String,
    /// Short free-text description of the problem.
    pub description: String,
    /// Optional path to a supporting file chosen by the resident.
    pub attachment_path: Option<String>,
}

impl IssueReport {
    /// Creates a new report without an attachment.
    pub fn new(
        location: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: IssueId::new(),
            created_at,
            location: location.into(),
            category: category.into(),
            description: description.into(),
            attachment_path: None,
        }
    }

    /// Attaches a supporting file path.
    pub fn with_attachment(mut self, path: impl Into<String>) -> Self {
        self.attachment_path = Some(path.into());
        self
    }
}

// =============================================================================
// CLUSTER D: EVENTS & ANNOUNCEMENTS
// =============================================================================

/// Unique identifier for an event or announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

/// A local event or municipal announcement.
///
/// Event priority runs opposite to request priority: 0 = High,
/// 1 = Medium, 2 = Low.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    /// Opaque unique id.
    pub id: EventId,
    /// Short title shown in listings.
    pub title: String,
    /// Main category, e.g. Water / Roads / Clinics / Libraries.
    pub category: String,
    /// Longer description shown in a details view.
    pub description: String,
    /// When the event takes place. The date component drives sorting
    /// and range filtering.
    pub date: Timestamp,
    /// Venue or area.
    pub location: String,
    /// 0 = High, 1 = Medium, 2 = Low.
    pub priority: u8,
    /// Lowercased keyword tags for search and recommendations.
    pub tags: BTreeSet<String>,
}

impl EventItem {
    /// Creates a new event. Tags are lowercased so membership checks are
    /// case-insensitive.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        date: Timestamp,
        location: impl Into<String>,
        priority: u8,
        tags: &[&str],
    ) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            category: category.into(),
            description: description.into(),
            date,
            location: location.into(),
            priority,
            tags: tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }
}
