//! The unified departure board.
//!
//! Merges the TfL arrivals feed with national rail departures, drops
//! duplicates that represent the same physical departure, and orders the
//! result by countdown. Each refresh builds the board from scratch on
//! freshly fetched lists; nothing is shared between cycles.

use std::collections::HashSet;

use crate::domain::{Arrival, Station};
use crate::huxley::{self, HuxleyClient};
use crate::tfl::{TflClient, TflError};

/// Records whose destinations match and whose countdowns land in the same
/// bucket of this many seconds count as one physical departure.
const DEDUP_BUCKET_SECONDS: i64 = 30;

/// Fetch the merged, deduplicated, time-ordered arrival list for a station.
///
/// The TfL feed is mandatory; its failure fails the whole board and is the
/// caller's to surface. The national rail feed runs only for stations that
/// serve it, concurrently with the TfL fetch, and can never fail the board
/// (it degrades to empty inside the adapter).
pub async fn unified_board(
    tfl: &TflClient,
    huxley: &HuxleyClient,
    station: &Station,
) -> Result<Vec<Arrival>, TflError> {
    if station.serves_national_rail() {
        let (primary, secondary) = futures::join!(
            tfl.arrivals(&station.id),
            huxley::national_rail_departures(huxley, &station.id, &station.name),
        );
        Ok(merge_boards(primary?, secondary))
    } else {
        Ok(merge_boards(tfl.arrivals(&station.id).await?, Vec::new()))
    }
}

/// Concatenate primary-then-secondary, deduplicate, and stable-sort by
/// countdown. Concatenation order matters: dedup keeps the first-seen
/// record, so a primary record always outlives its secondary double.
pub fn merge_boards(primary: Vec<Arrival>, secondary: Vec<Arrival>) -> Vec<Arrival> {
    let mut merged = primary;
    merged.extend(secondary);

    let mut merged = dedup_arrivals(merged);
    merged.sort_by_key(|a| a.time_to_station);
    merged
}

/// Keep the first-seen record for each (destination, time bucket) key.
///
/// A deterministic fold over the list with an explicit seen-keys set;
/// earlier entries always win.
pub fn dedup_arrivals(arrivals: Vec<Arrival>) -> Vec<Arrival> {
    let mut seen = HashSet::new();
    arrivals
        .into_iter()
        .filter(|a| seen.insert(dedup_key(a)))
        .collect()
}

/// Bucketed identity of a physical departure. Floor division keeps
/// negative countdowns in their own buckets rather than sharing bucket
/// zero.
fn dedup_key(arrival: &Arrival) -> (String, i64) {
    (
        arrival.destination_name.clone(),
        arrival.time_to_station.div_euclid(DEDUP_BUCKET_SECONDS),
    )
}

#[cfg(test)]
fn test_arrival(id: &str, destination: &str, seconds: i64, mode: &str) -> Arrival {
    Arrival {
        id: id.to_string(),
        station_name: "Clapham Junction".to_string(),
        line_id: String::new(),
        line_name: String::new(),
        platform_name: String::new(),
        direction: String::new(),
        destination_id: String::new(),
        destination_name: destination.to_string(),
        timestamp: "2026-08-05T09:00:00+00:00".to_string(),
        time_to_station: seconds,
        current_location: String::new(),
        towards: destination.to_string(),
        expected_arrival: String::new(),
        mode: mode.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_arrival as arrival;

    #[test]
    fn output_is_sorted_by_countdown() {
        let merged = merge_boards(
            vec![
                arrival("a", "Epsom", 900, "overground"),
                arrival("b", "Victoria", 120, "overground"),
            ],
            vec![arrival("nr-1-CLJ", "Brighton", 420, "national-rail")],
        );

        let countdowns: Vec<i64> = merged.iter().map(|a| a.time_to_station).collect();
        assert_eq!(countdowns, vec![120, 420, 900]);
    }

    #[test]
    fn same_destination_same_bucket_keeps_the_first_seen() {
        let merged = merge_boards(
            vec![arrival("tfl-1", "Stratford", 95, "elizabeth-line")],
            vec![arrival("nr-1-CLJ", "Stratford", 100, "national-rail")],
        );

        // 95 and 100 share bucket 3; the primary record wins
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "tfl-1");
    }

    #[test]
    fn same_destination_different_bucket_keeps_both() {
        let merged = merge_boards(
            vec![arrival("tfl-1", "Stratford", 95, "elizabeth-line")],
            vec![arrival("nr-1-CLJ", "Stratford", 125, "national-rail")],
        );

        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn different_destinations_never_collide() {
        let merged = merge_boards(
            vec![arrival("a", "Epsom", 100, "overground")],
            vec![arrival("b", "Victoria", 100, "national-rail")],
        );

        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn dedup_is_idempotent() {
        let arrivals = vec![
            arrival("a", "Epsom", 0, "tube"),
            arrival("b", "Epsom", 10, "tube"),
            arrival("c", "Victoria", 45, "tube"),
        ];

        let once = dedup_arrivals(arrivals);
        let twice = dedup_arrivals(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn negative_countdowns_bucket_below_zero() {
        // Floor division: -1s and -30s both land in bucket -1, away from
        // the 0..29 bucket
        let deduped = dedup_arrivals(vec![
            arrival("a", "Epsom", -1, "tube"),
            arrival("b", "Epsom", -30, "tube"),
            arrival("c", "Epsom", 0, "tube"),
        ]);

        let ids: Vec<&str> = deduped.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn ties_keep_fetch_order() {
        let merged = merge_boards(
            vec![
                arrival("a", "Epsom", 120, "tube"),
                arrival("b", "Victoria", 120, "tube"),
            ],
            vec![arrival("c", "Brighton", 120, "national-rail")],
        );

        let ids: Vec<&str> = merged.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
