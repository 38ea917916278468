//! # Event Calendar Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Maintains local events and announcements under several indices so the
//! presentation layer can browse chronologically, filter by category,
//! and run token searches, and records search behaviour to drive the
//! recommendation engine.
//!
//! ## Index Map
//!
//! | Query | Index | Structure |
//! |-------|-------|-----------|
//! | Chronological / date range | `by_date` | `BTreeMap` keyed by calendar day |
//! | Category filter | `by_category` | `HashMap`, case-insensitive keys |
//! | Recently added | `recent` | FIFO `VecDeque` |
//! | Urgency drain | `priority_buckets` | `BTreeMap` of FIFO queues, 0 = High |
//!
//! ## Module Structure
//!
//! ```text
//! src/domain/
//! ├── calendar.rs  - EventCalendar
//! ├── analytics.rs - SearchLog, tokenize
//! └── recommend.rs - recommend (scored ranking)
//! ```

pub mod domain;

pub use domain::*;
