//! Scored event recommendations.
//!
//! Ranks a candidate pool against the resident's current search tokens.
//! The score blends four signals: direct token hits in the event text,
//! Jaccard overlap between the token set and the event's tags plus
//! category, a recency ramp over the next 90 days, and a bonus for the
//! event's own priority.

use super::calendar::haystack;
use shared_types::{day_key, EventItem, Timestamp, MS_PER_DAY};
use std::collections::BTreeSet;
use std::sync::Arc;

const TOKEN_HIT_WEIGHT: f64 = 2.0;
const JACCARD_WEIGHT: f64 = 4.0;
const RECENCY_WEIGHT: f64 = 3.0;
const RECENCY_HORIZON_DAYS: f64 = 90.0;

/// Scores the pool and returns up to `max` events, best first. Equal
/// scores are broken by date, sooner first.
pub fn recommend(
    pool: &[Arc<EventItem>],
    tokens: &[String],
    today: Timestamp,
    max: usize,
) -> Vec<Arc<EventItem>> {
    let token_set: BTreeSet<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let mut scored: Vec<(f64, Arc<EventItem>)> = pool
        .iter()
        .map(|event| (score(event, &token_set, today), Arc::clone(event)))
        .collect();

    scored.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| a.1.date.cmp(&b.1.date))
    });
    scored.truncate(max);
    scored.into_iter().map(|(_, event)| event).collect()
}

fn score(event: &EventItem, tokens: &BTreeSet<String>, today: Timestamp) -> f64 {
    let mut score = 0.0;

    // 1) Direct token hits in title/description/tags.
    if !tokens.is_empty() {
        let hay = haystack(event);
        for token in tokens {
            if hay.contains(token.as_str()) {
                score += TOKEN_HIT_WEIGHT;
            }
        }
    }

    // 2) Jaccard overlap between tokens and {tags, category}.
    let mut interest: BTreeSet<String> = event.tags.clone();
    if !event.category.trim().is_empty() {
        interest.insert(event.category.to_lowercase());
    }
    let union = tokens.union(&interest).count();
    if union > 0 {
        let intersection = tokens.intersection(&interest).count();
        score += intersection as f64 / union as f64 * JACCARD_WEIGHT;
    }

    // 3) Recency ramp: only upcoming events inside the horizon score,
    //    and sooner scores higher.
    let today_day = day_key(today);
    let event_day = day_key(event.date);
    if event_day >= today_day {
        let days_ahead = ((event_day - today_day) / MS_PER_DAY) as f64;
        if days_ahead <= RECENCY_HORIZON_DAYS {
            score += (RECENCY_HORIZON_DAYS - days_ahead) / RECENCY_HORIZON_DAYS * RECENCY_WEIGHT;
        }
    }

    // 4) Event priority bonus: High 3, Medium 2, Low 1.
    score += match event.priority {
        0 => 3.0,
        1 => 2.0,
        _ => 1.0,
    };

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: Timestamp = 1_750_000_000_000;

    fn pooled(
        title: &str,
        category: &str,
        day_offset: u64,
        priority: u8,
        tags: &[&str],
    ) -> Arc<EventItem> {
        Arc::new(EventItem::new(
            title,
            category,
            "details",
            day_key(TODAY) + day_offset * MS_PER_DAY,
            "somewhere",
            priority,
            tags,
        ))
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn test_token_match_outranks_unrelated() {
        let pool = vec![
            pooled("Water Outage", "Water", 10, 1, &["water", "outage"]),
            pooled("Reading Circle", "Libraries", 10, 1, &["library"]),
        ];

        let picks = recommend(&pool, &tokens(&["water"]), TODAY, 2);
        assert_eq!(picks[0].title, "Water Outage");
    }

    #[test]
    fn test_sooner_event_outranks_later_when_otherwise_equal() {
        let pool = vec![
            pooled("Later", "Water", 60, 1, &[]),
            pooled("Sooner", "Water", 2, 1, &[]),
        ];

        let picks = recommend(&pool, &[], TODAY, 2);
        assert_eq!(picks[0].title, "Sooner");
    }

    #[test]
    fn test_high_priority_outranks_low() {
        let pool = vec![
            pooled("Low", "Water", 5, 2, &[]),
            pooled("High", "Water", 5, 0, &[]),
        ];

        let picks = recommend(&pool, &[], TODAY, 2);
        assert_eq!(picks[0].title, "High");
    }

    #[test]
    fn test_past_and_far_future_get_no_recency_bonus() {
        // Identical except date: past, inside horizon, beyond horizon.
        // Only the one inside the horizon scores recency, so it wins.
        let past = Arc::new(EventItem::new(
            "Past",
            "Water",
            "details",
            day_key(TODAY) - 5 * MS_PER_DAY,
            "somewhere",
            1,
            &[],
        ));
        let pool = vec![
            past,
            pooled("Beyond", "Water", 120, 1, &[]),
            pooled("Inside", "Water", 30, 1, &[]),
        ];

        let picks = recommend(&pool, &[], TODAY, 3);
        assert_eq!(picks[0].title, "Inside");
    }

    #[test]
    fn test_equal_scores_tie_break_by_date() {
        let pool = vec![
            pooled("B", "Water", 7, 1, &[]),
            pooled("A", "Water", 7, 1, &[]),
        ];

        // Same day, same score: input order is preserved by the stable
        // sort, and both are returned.
        let picks = recommend(&pool, &[], TODAY, 2);
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].title, "B");
    }

    #[test]
    fn test_max_truncates() {
        let pool = vec![
            pooled("A", "Water", 1, 1, &[]),
            pooled("B", "Water", 2, 1, &[]),
            pooled("C", "Water", 3, 1, &[]),
        ];
        assert_eq!(recommend(&pool, &[], TODAY, 2).len(), 2);
        assert!(recommend(&pool, &[], TODAY, 0).is_empty());
    }

    #[test]
    fn test_category_counts_toward_overlap() {
        let pool = vec![
            pooled("Tagged Only", "Libraries", 10, 1, &["water"]),
            pooled("Category Match", "Water", 10, 1, &[]),
        ];

        // "water" appears in one event's tags and in the other's
        // category; both outrank a pool member with neither.
        let picks = recommend(&pool, &tokens(&["water"]), TODAY, 2);
        assert_eq!(picks.len(), 2);
    }
}
