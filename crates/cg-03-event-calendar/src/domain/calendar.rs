//! # Event Calendar
//!
//! The store for local events and announcements. Like the request
//! store, one `add` updates every index before returning, and each
//! index holds an `Arc` clone of the same owned event.

use super::analytics::tokenize;
use shared_types::{day_key, EventId, EventItem, Timestamp, MS_PER_DAY};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;
use tracing::{debug, info};

/// Searchable haystack for an event: title, description and tags,
/// lowercased.
pub(crate) fn haystack(event: &EventItem) -> String {
    let tags: Vec<&str> = event.tags.iter().map(String::as_str).collect();
    format!(
        "{} {} {}",
        event.title,
        event.description,
        tags.join(" ")
    )
    .to_lowercase()
}

/// Central store and indices for events.
#[derive(Debug, Default)]
pub struct EventCalendar {
    /// Authoritative event list, insertion order.
    all: Vec<Arc<EventItem>>,

    /// Calendar day -> events on that day, chronological scan order.
    by_date: BTreeMap<Timestamp, Vec<Arc<EventItem>>>,

    /// Lowercased category -> events.
    by_category: HashMap<String, Vec<Arc<EventItem>>>,

    /// Lowercased category -> first-seen display casing.
    categories: BTreeMap<String, String>,

    /// Recently added FIFO.
    recent: VecDeque<Arc<EventItem>>,

    /// Priority -> FIFO queue. 0 = High, 1 = Medium, 2 = Low.
    priority_buckets: BTreeMap<u8, VecDeque<Arc<EventItem>>>,
}

impl EventCalendar {
    /// Creates an empty calendar with the priority buckets pre-created
    /// so drains observe all three levels even when empty.
    pub fn new() -> Self {
        let mut calendar = Self::default();
        for priority in 0..=2 {
            calendar.priority_buckets.insert(priority, VecDeque::new());
        }
        calendar
    }

    /// Number of events held.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns true if no events have been added.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Adds an event into every index. Returns the event's id.
    pub fn add(&mut self, event: EventItem) -> EventId {
        let event = Arc::new(event);
        debug!(title = %event.title, category = %event.category, "indexing event");

        self.all.push(Arc::clone(&event));

        self.by_date
            .entry(day_key(event.date))
            .or_default()
            .push(Arc::clone(&event));

        let category_key = event.category.to_lowercase();
        self.by_category
            .entry(category_key.clone())
            .or_default()
            .push(Arc::clone(&event));
        if !event.category.trim().is_empty() {
            self.categories
                .entry(category_key)
                .or_insert_with(|| event.category.clone());
        }

        self.recent.push_back(Arc::clone(&event));

        self.priority_buckets
            .entry(event.priority)
            .or_default()
            .push_back(Arc::clone(&event));

        event.id
    }

    /// The authoritative list in insertion order.
    pub fn all(&self) -> &[Arc<EventItem>] {
        &self.all
    }

    /// Unique category names in their first-seen casing, sorted
    /// case-insensitively for display.
    pub fn categories(&self) -> Vec<String> {
        self.categories.values().cloned().collect()
    }

    /// Events whose calendar day falls in `[from, to]`, in day order.
    pub fn in_date_range(&self, from: Timestamp, to: Timestamp) -> Vec<Arc<EventItem>> {
        self.by_date
            .range(day_key(from)..=day_key(to))
            .flat_map(|(_, events)| events.iter().cloned())
            .collect()
    }

    /// Events in a category (case-insensitive). A blank category means
    /// no filter and returns everything.
    pub fn by_category(&self, category: &str) -> Vec<Arc<EventItem>> {
        if category.trim().is_empty() {
            return self.all.clone();
        }
        self.by_category
            .get(&category.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Combined search: date range first to shrink the pool, then the
    /// category filter, then token matching against title, description
    /// and tags. A query with no tokens returns the filtered pool as-is.
    pub fn search(
        &self,
        query: &str,
        category: Option<&str>,
        from: Timestamp,
        to: Timestamp,
    ) -> Vec<Arc<EventItem>> {
        let tokens = tokenize(query);

        let mut pool = self.in_date_range(from, to);
        if let Some(category) = category.filter(|c| !c.trim().is_empty()) {
            pool.retain(|e| e.category.eq_ignore_ascii_case(category));
        }
        if tokens.is_empty() {
            return pool;
        }

        pool.retain(|e| {
            let hay = haystack(e);
            tokens.iter().any(|t| hay.contains(t.as_str()))
        });
        pool
    }

    /// Up to `max` events in priority order (High → Medium → Low),
    /// dequeued from the buckets. Destructive by design: a drained
    /// event will not be returned by a later drain.
    pub fn dequeue_urgent(&mut self, max: usize) -> Vec<Arc<EventItem>> {
        let mut result = Vec::with_capacity(max);
        for bucket in self.priority_buckets.values_mut() {
            while result.len() < max {
                match bucket.pop_front() {
                    Some(event) => result.push(event),
                    None => break,
                }
            }
            if result.len() >= max {
                break;
            }
        }
        result
    }

    /// Up to `max` recently added events, oldest first. Non-destructive
    /// peek.
    pub fn recent(&self, max: usize) -> Vec<Arc<EventItem>> {
        self.recent.iter().take(max).cloned().collect()
    }

    /// Seeds the demo event set relative to `today`. No-op when the
    /// calendar already holds events.
    pub fn seed_demo(&mut self, today: Timestamp) {
        if !self.all.is_empty() {
            return;
        }

        let day = |offset: u64| day_key(today) + offset * MS_PER_DAY;

        self.add(EventItem::new(
            "Scheduled Water Outage - Bellville",
            "Water",
            "Maintenance on main line. Expect low pressure or outage.",
            day(3),
            "Bellville CBD",
            0,
            &["water", "maintenance", "outage", "infrastructure"],
        ));
        self.add(EventItem::new(
            "Electricity Maintenance - Athlone Substation",
            "Electricity",
            "Substation upgrade; intermittent power cuts.",
            day(5),
            "Athlone",
            1,
            &["electricity", "maintenance", "upgrade", "power"],
        ));
        self.add(EventItem::new(
            "Roadworks - N2 Ramp Resurfacing",
            "Roads",
            "Night-time resurfacing. Expect lane closures.",
            day(7),
            "Somerset West N2 Ramp",
            1,
            &["roads", "resurfacing", "closures", "traffic"],
        ));
        self.add(EventItem::new(
            "Mobile Clinic Day",
            "Clinics",
            "Free screenings and vaccines. Bring ID/clinic card.",
            day(10),
            "Khayelitsha Community Hall",
            2,
            &["health", "clinic", "vaccines", "community"],
        ));
        self.add(EventItem::new(
            "Library Reading Programme",
            "Libraries",
            "Youth reading circle and book exchange.",
            day(12),
            "Mitchells Plain Library",
            2,
            &["library", "youth", "reading", "education"],
        ));
        self.add(EventItem::new(
            "Community Safety Awareness Evening",
            "Safety",
            "Neighbourhood watch orientation and safety tips.",
            day(4),
            "Grassy Park Civic",
            1,
            &["safety", "community", "awareness", "neighbourhood"],
        ));
        self.add(EventItem::new(
            "Youth Worship Night",
            "Community",
            "Open-air youth gathering; music and testimony.",
            day(9),
            "Macassar Sports Ground",
            1,
            &["youth", "community", "event", "worship"],
        ));
        self.add(EventItem::new(
            "Solid Waste Collection Delay",
            "Solid Waste",
            "Collection delayed by 1 day due to fleet maintenance.",
            day(1),
            "Strandfontein",
            0,
            &["waste", "collection", "delay", "sanitation"],
        ));

        info!(count = self.all.len(), "seeded demo events");
    }
}
