//! Domain layer: the calendar, search analytics, and recommendations.

pub mod analytics;
pub mod calendar;
pub mod recommend;

pub use analytics::{tokenize, SearchLog};
pub use calendar::EventCalendar;
pub use recommend::recommend;
