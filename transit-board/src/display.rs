//! Display-side selection and formatting.
//!
//! Pure helpers for whatever renders the board. Selection never changes
//! ordering semantics: the chosen subset is re-sorted by countdown before
//! it is returned.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::Arrival;

/// Rows shown per station before "load more".
pub const DEFAULT_DEPARTURES_LIMIT: usize = 5;

/// How many extra rows each "load more" adds.
pub const LOAD_MORE_STEP: usize = 5;

/// Choose which arrivals to display.
///
/// At the default limit, when more arrivals are available than fit, the
/// first arrival of every distinct mode is picked ahead of pure time order
/// so no active mode is invisible, even if its next departure is far out.
/// Remaining slots fill with the earliest arrivals left over, and the
/// selection is re-sorted by countdown. Once the limit has been raised
/// past the default via load-more, time order alone applies.
pub fn select_for_display(arrivals: &[Arrival], limit: usize) -> Vec<Arrival> {
    if limit != DEFAULT_DEPARTURES_LIMIT || arrivals.len() <= limit {
        return arrivals.iter().take(limit).cloned().collect();
    }

    let mut modes_seen = HashSet::new();
    let mut picked_ids = HashSet::new();
    let mut selected: Vec<&Arrival> = Vec::new();

    for arrival in arrivals {
        if modes_seen.insert(arrival.mode.as_str()) {
            picked_ids.insert(arrival.id.as_str());
            selected.push(arrival);
        }
    }

    let open_slots = limit.saturating_sub(selected.len());
    selected.extend(
        arrivals
            .iter()
            .filter(|a| !picked_ids.contains(a.id.as_str()))
            .take(open_slots),
    );

    let mut selected: Vec<Arrival> = selected.into_iter().cloned().collect();
    selected.sort_by_key(|a| a.time_to_station);
    selected.truncate(limit);
    selected
}

/// Per-mode arrival counts, in first-appearance order.
pub fn mode_counts(arrivals: &[Arrival]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for arrival in arrivals {
        match counts.iter_mut().find(|(mode, _)| mode == &arrival.mode) {
            Some((_, n)) => *n += 1,
            None => counts.push((arrival.mode.clone(), 1)),
        }
    }

    counts
}

/// A rendered countdown: the headline and an optional smaller qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub display: String,
    pub subtext: String,
}

/// Render a countdown the way the board displays it.
pub fn format_countdown(seconds: i64) -> Countdown {
    if seconds <= 30 {
        return Countdown {
            display: "Due".to_string(),
            subtext: format!("{seconds}s"),
        };
    }

    if seconds < 60 {
        return Countdown {
            display: format!("{seconds}s"),
            subtext: String::new(),
        };
    }

    let minutes = seconds / 60;
    let remainder = seconds % 60;

    if minutes == 1 {
        Countdown {
            display: "1 min".to_string(),
            subtext: format!("{remainder}s"),
        }
    } else {
        Countdown {
            display: format!("{minutes} mins"),
            subtext: String::new(),
        }
    }
}

/// "just now" / "3 mins ago" / "2 hours ago" for a last-updated stamp.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let mins = secs / 60;
    if mins == 1 {
        return "1 min ago".to_string();
    }
    if mins < 60 {
        return format!("{mins} mins ago");
    }

    let hours = mins / 60;
    if hours == 1 {
        "1 hour ago".to_string()
    } else {
        format!("{hours} hours ago")
    }
}

/// Uppercase the first letter of each word, lowercasing the rest.
pub fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrival(id: &str, seconds: i64, mode: &str) -> Arrival {
        Arrival {
            id: id.to_string(),
            station_name: String::new(),
            line_id: String::new(),
            line_name: String::new(),
            platform_name: String::new(),
            direction: String::new(),
            destination_id: String::new(),
            destination_name: format!("dest-{id}"),
            timestamp: String::new(),
            time_to_station: seconds,
            current_location: String::new(),
            towards: String::new(),
            expected_arrival: String::new(),
            mode: mode.to_string(),
        }
    }

    #[test]
    fn default_view_shows_every_mode_then_fills_with_soonest() {
        // Sorted input: tube dominates the head, national rail trails far
        // behind
        let arrivals = vec![
            arrival("t1", 60, "tube"),
            arrival("t2", 120, "tube"),
            arrival("t3", 180, "tube"),
            arrival("t4", 240, "tube"),
            arrival("o1", 300, "overground"),
            arrival("t5", 360, "tube"),
            arrival("t6", 420, "tube"),
            arrival("n1", 1800, "national-rail"),
            arrival("n2", 2400, "national-rail"),
            arrival("t7", 2500, "tube"),
        ];

        let shown = select_for_display(&arrivals, DEFAULT_DEPARTURES_LIMIT);
        assert_eq!(shown.len(), 5);

        // One per represented mode is guaranteed a slot
        let modes: HashSet<&str> = shown.iter().map(|a| a.mode.as_str()).collect();
        assert!(modes.contains("tube"));
        assert!(modes.contains("overground"));
        assert!(modes.contains("national-rail"));

        // The rest are the soonest remaining arrivals
        let ids: Vec<&str> = shown.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3", "o1", "n1"]);

        // And the final order is chronological
        let countdowns: Vec<i64> = shown.iter().map(|a| a.time_to_station).collect();
        let mut sorted = countdowns.clone();
        sorted.sort();
        assert_eq!(countdowns, sorted);
    }

    #[test]
    fn raised_limit_takes_the_head_of_the_list() {
        let arrivals: Vec<Arrival> = (0..12)
            .map(|i| arrival(&format!("a{i}"), i * 60, if i == 11 { "tram" } else { "tube" }))
            .collect();

        // Load-more has been pressed: no mode balancing, first N wins
        let shown = select_for_display(&arrivals, DEFAULT_DEPARTURES_LIMIT + LOAD_MORE_STEP);
        assert_eq!(shown.len(), 10);
        let ids: Vec<&str> = shown.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids[0], "a0");
        assert_eq!(ids[9], "a9");
        // The tram at the tail stays hidden until the next load-more
        assert!(!ids.contains(&"a11"));
    }

    #[test]
    fn short_lists_are_returned_whole() {
        let arrivals = vec![
            arrival("a", 60, "tube"),
            arrival("b", 120, "national-rail"),
        ];

        let shown = select_for_display(&arrivals, DEFAULT_DEPARTURES_LIMIT);
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn single_mode_default_view_is_just_the_soonest_five() {
        let arrivals: Vec<Arrival> =
            (0..8).map(|i| arrival(&format!("a{i}"), i * 30, "tube")).collect();

        let shown = select_for_display(&arrivals, DEFAULT_DEPARTURES_LIMIT);
        let ids: Vec<&str> = shown.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a0", "a1", "a2", "a3", "a4"]);
    }

    #[test]
    fn mode_counts_keep_first_appearance_order() {
        let arrivals = vec![
            arrival("a", 60, "tube"),
            arrival("b", 90, "national-rail"),
            arrival("c", 120, "tube"),
            arrival("d", 150, "tube"),
        ];

        assert_eq!(
            mode_counts(&arrivals),
            vec![("tube".to_string(), 3), ("national-rail".to_string(), 1)]
        );
    }

    #[test]
    fn countdown_rendering() {
        assert_eq!(format_countdown(-10).display, "Due");
        assert_eq!(format_countdown(0).display, "Due");
        assert_eq!(format_countdown(30).display, "Due");
        assert_eq!(format_countdown(30).subtext, "30s");

        assert_eq!(format_countdown(45).display, "45s");
        assert_eq!(format_countdown(45).subtext, "");

        assert_eq!(format_countdown(90).display, "1 min");
        assert_eq!(format_countdown(90).subtext, "30s");

        assert_eq!(format_countdown(240).display, "4 mins");
        assert_eq!(format_countdown(3600).display, "60 mins");
    }

    #[test]
    fn relative_time_rendering() {
        let now = "2026-08-05T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let at = |s: &str| s.parse::<DateTime<Utc>>().unwrap();

        assert_eq!(relative_time(at("2026-08-05T11:59:30Z"), now), "just now");
        assert_eq!(relative_time(at("2026-08-05T11:58:59Z"), now), "1 min ago");
        assert_eq!(relative_time(at("2026-08-05T11:45:00Z"), now), "15 mins ago");
        assert_eq!(relative_time(at("2026-08-05T11:00:00Z"), now), "1 hour ago");
        assert_eq!(relative_time(at("2026-08-05T09:00:00Z"), now), "3 hours ago");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("LONDON WATERLOO"), "London Waterloo");
        assert_eq!(title_case("via bank"), "Via Bank");
        assert_eq!(title_case(""), "");
    }
}
