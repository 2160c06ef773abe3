//! The unified arrival schema.

use serde::Serialize;

/// A single upcoming departure, normalized from either upstream feed.
///
/// Arrivals are ephemeral: recomputed in full on every refresh, never
/// persisted, and never mutated after construction. Every transformation
/// (filtering, dedup, sort) produces a new list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
    /// Unique within one aggregated result set. Secondary-source ids are
    /// namespaced (`nr-{serviceId}-{crs}`) so they cannot collide with
    /// primary ids.
    pub id: String,

    /// Name (or CRS code, for the secondary source) of the station the
    /// record was fetched for.
    pub station_name: String,

    /// Line identifier (primary) or operator code (secondary).
    pub line_id: String,

    /// Line or operator display name.
    pub line_name: String,

    /// "Platform 3" style label; empty when unknown.
    pub platform_name: String,

    /// Direction token, e.g. "inbound".
    pub direction: String,

    /// Destination stop identifier; empty for the secondary source.
    pub destination_id: String,

    /// Destination display name.
    pub destination_name: String,

    /// ISO-8601 instant this record was observed.
    pub timestamp: String,

    /// Signed seconds until the vehicle reaches the station. Drives all
    /// ordering. Negative values are "just departed" inside the grace
    /// window.
    pub time_to_station: i64,

    /// Current vehicle location description; may be empty.
    pub current_location: String,

    /// "Towards" display string.
    pub towards: String,

    /// Expected arrival as ISO-8601; may be empty.
    pub expected_arrival: String,

    /// Mode token, e.g. "tube" or "national-rail".
    pub mode: String,
}
