//! Normalization of raw TfL records into the unified schema.

use crate::domain::Arrival;

use super::types::RawArrival;

/// Normalize one raw record, substituting safe defaults for anything the
/// feed left out: empty strings, zero seconds, the observation timestamp.
///
/// The record id falls back to the synthetic `{vehicleId}-{naptanId}`
/// composite when the feed sends none, matching the feed's own uniqueness
/// guarantees. `observed_at` is the ISO-8601 instant of this fetch and
/// doubles as the default for a missing upstream timestamp.
pub(crate) fn raw_to_arrival(raw: RawArrival, observed_at: &str) -> Arrival {
    let id = match raw.id {
        Some(id) if !id.is_empty() => id,
        _ => format!(
            "{}-{}",
            raw.vehicle_id.as_deref().unwrap_or_default(),
            raw.naptan_id.as_deref().unwrap_or_default()
        ),
    };

    let towards = raw.towards.unwrap_or_default();
    let destination_name = match raw.destination_name {
        Some(name) if !name.is_empty() => name,
        _ => towards.clone(),
    };

    Arrival {
        id,
        station_name: raw.station_name.unwrap_or_default(),
        line_id: raw.line_id.unwrap_or_default(),
        line_name: raw.line_name.unwrap_or_default(),
        platform_name: raw.platform_name.unwrap_or_default(),
        direction: raw.direction.unwrap_or_default(),
        destination_id: raw.destination_naptan_id.unwrap_or_default(),
        destination_name,
        timestamp: raw.timestamp.unwrap_or_else(|| observed_at.to_string()),
        time_to_station: raw.time_to_station.unwrap_or(0),
        current_location: raw.current_location.unwrap_or_default(),
        towards,
        expected_arrival: raw.expected_arrival.unwrap_or_default(),
        mode: raw.mode_name.unwrap_or_default(),
    }
}
