//! Flat capture log for resident-reported issues.
//!
//! The capture side of the subsystem: reports are appended in arrival
//! order and only ever enumerated, so a plain list is the whole store.
//! No derived indices exist here; an issue that warrants tracking is
//! triaged into a ticketed request and enters the indexed store from
//! there.

use shared_types::{IssueId, IssueReport, Timestamp};
use std::sync::Arc;
use tracing::{debug, info};

/// Append-only store of reported issues.
///
/// Explicitly constructed and explicitly owned, like the other stores;
/// single writer by virtue of `&mut self`.
#[derive(Debug, Default)]
pub struct IssueLog {
    issues: Vec<Arc<IssueReport>>,
}

impl IssueLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports held.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if no reports have been captured.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Appends an already-built report. Returns its id.
    pub fn add(&mut self, issue: IssueReport) -> IssueId {
        let issue = Arc::new(issue);
        debug!(category = %issue.category, location = %issue.location, "capturing issue report");
        self.issues.push(Arc::clone(&issue));
        issue.id
    }

    /// Builds a report from its fields and appends it. Returns its id.
    pub fn report(
        &mut self,
        location: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        attachment_path: Option<&str>,
        created_at: Timestamp,
    ) -> IssueId {
        let mut issue = IssueReport::new(location, category, description, created_at);
        if let Some(path) = attachment_path {
            issue = issue.with_attachment(path);
        }
        self.add(issue)
    }

    /// Every captured report in arrival order.
    pub fn all(&self) -> &[Arc<IssueReport>] {
        &self.issues
    }

    /// Seeds the demo issue pair. No-op when the log already holds
    /// reports.
    pub fn seed_demo(&mut self, now: Timestamp) {
        if !self.issues.is_empty() {
            return;
        }

        self.report(
            "Cape Town CBD",
            "Sanitation",
            "Overflowing public bin near the taxi rank.",
            None,
            now,
        );
        self.add(IssueReport::new(
            "Mitchells Plain",
            "Community Safety",
            "Flickering street light near school entrance.",
            now,
        ));

        info!(count = self.issues.len(), "seeded demo issue reports");
    }
}
