//! National rail departures as relative countdowns.
//!
//! The board gives scheduled and estimated clock times; this module turns
//! them into signed seconds relative to now, rolling past-midnight times
//! forward a day, and drops services the primary feed already covers.

use chrono::{Duration, Local, NaiveDateTime, NaiveTime, Utc};
use tracing::{debug, warn};

use crate::domain::{Arrival, Crs, Mode};

use super::client::HuxleyClient;
use super::error::HuxleyError;
use super::resolve::resolve_crs;
use super::types::TrainService;

/// Operators whose services already appear in the TfL arrivals feed.
/// Matching either the operator name or the operator code, case
/// insensitively, drops the service so the same physical departure is not
/// reported twice.
const TFL_OPERATORS: &[&str] = &[
    "elizabeth line",
    "tfl rail",
    "london overground",
    "lo",
    "xr",
    "dlr",
    "docklands light railway",
    "london underground",
    "lu",
];

/// Countdown window, exclusive on both ends: up to a minute past the
/// departure time (grace for clock skew and processing delay) through two
/// hours ahead.
const MIN_SECONDS: i64 = -60;
const MAX_SECONDS: i64 = 7200;

/// Fetch national rail departures for a station, as unified arrivals.
///
/// Infallible by contract: code resolution failure, fetch errors, and
/// parse errors all degrade to an empty list, logged and absorbed. The
/// secondary feed is an enhancement, never a blocking dependency.
pub async fn national_rail_departures(
    client: &HuxleyClient,
    station_id: &str,
    station_name: &str,
) -> Vec<Arrival> {
    let Some(crs) = resolve_crs(client, station_id, station_name).await else {
        debug!(station_id, station_name, "no CRS code available");
        return Vec::new();
    };

    match fetch_departures(client, &crs).await {
        Ok(departures) => departures,
        Err(e) => {
            warn!(crs = %crs, error = %e, "national rail departures unavailable");
            Vec::new()
        }
    }
}

async fn fetch_departures(
    client: &HuxleyClient,
    crs: &Crs,
) -> Result<Vec<Arrival>, HuxleyError> {
    let board = client.departure_board(crs).await?;
    let services = board.train_services.unwrap_or_default();

    Ok(board_to_arrivals(
        &services,
        crs,
        Local::now().naive_local(),
        &Utc::now().to_rfc3339(),
    ))
}

/// Convert a board's services into unified arrivals, sorted by countdown.
///
/// The sort is adapter-local hygiene; the aggregator re-sorts after the
/// merge regardless, and the stable sort keeps equal countdowns in board
/// order.
pub(crate) fn board_to_arrivals(
    services: &[TrainService],
    crs: &Crs,
    now: NaiveDateTime,
    observed_at: &str,
) -> Vec<Arrival> {
    let mut departures: Vec<Arrival> = services
        .iter()
        .filter_map(|service| service_to_arrival(service, crs, now, observed_at))
        .collect();

    departures.sort_by_key(|a| a.time_to_station);
    departures
}

/// Convert one board service into a unified arrival.
///
/// Returns `None` for services that should not appear: TfL-operated
/// brands, cancelled or unscheduled services, and anything outside the
/// countdown window.
pub(crate) fn service_to_arrival(
    service: &TrainService,
    crs: &Crs,
    now: NaiveDateTime,
    observed_at: &str,
) -> Option<Arrival> {
    if is_tfl_operated(service) {
        return None;
    }

    let std = service.std.as_deref()?;
    let etd = service.etd.as_deref().unwrap_or("");
    if etd == "Cancelled" {
        return None;
    }

    let departure = departure_instant(std, etd, now)?;
    let seconds = (departure - now).num_milliseconds().div_euclid(1000);
    if !within_window(seconds) {
        return None;
    }

    let destination = service
        .destination
        .as_ref()
        .and_then(|d| d.first())
        .map(|loc| loc.location_name.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let current_location = service
        .current_origins
        .as_ref()
        .and_then(|o| o.first())
        .map(|loc| loc.location_name.clone())
        .unwrap_or_default();

    Some(Arrival {
        id: format!(
            "nr-{}-{}",
            service.service_id.as_deref().unwrap_or_default(),
            crs
        ),
        station_name: crs.to_string(),
        line_id: service
            .operator_code
            .clone()
            .unwrap_or_else(|| Mode::NationalRail.token().to_string()),
        line_name: service
            .operator
            .clone()
            .unwrap_or_else(|| "National Rail".to_string()),
        platform_name: match service.platform.as_deref() {
            Some(p) if !p.is_empty() => format!("Platform {p}"),
            _ => String::new(),
        },
        direction: "outbound".to_string(),
        destination_id: String::new(),
        destination_name: destination.clone(),
        timestamp: observed_at.to_string(),
        time_to_station: seconds,
        current_location,
        towards: destination,
        expected_arrival: departure.format("%Y-%m-%dT%H:%M:%S").to_string(),
        mode: Mode::NationalRail.token().to_string(),
    })
}

fn is_tfl_operated(service: &TrainService) -> bool {
    let name = service.operator.as_deref().unwrap_or("");
    let code = service.operator_code.as_deref().unwrap_or("");

    TFL_OPERATORS
        .iter()
        .any(|op| op.eq_ignore_ascii_case(name) || op.eq_ignore_ascii_case(code))
}

fn within_window(seconds: i64) -> bool {
    seconds > MIN_SECONDS && seconds < MAX_SECONDS
}

/// Resolve the absolute wall-clock departure instant.
///
/// The scheduled HH:MM is read against today's date, rolling forward one
/// day if already past (the around-midnight case). An estimated clock time
/// then replaces the time of day on the date just resolved, with the same
/// forward roll. An estimate belonging to the previous day (scheduled
/// already rolled over) therefore lands a day late and falls out of the
/// window; known limitation.
fn departure_instant(std: &str, etd: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let scheduled = parse_clock(std)?;
    let mut departure = now.date().and_time(scheduled);
    if departure < now {
        departure += Duration::days(1);
    }

    if is_estimate_clock(etd) {
        let estimated = parse_clock(etd)?;
        departure = departure.date().and_time(estimated);
        if departure < now {
            departure += Duration::days(1);
        }
    }

    Some(departure)
}

/// Whether an etd value is a concrete clock time rather than a status word.
fn is_estimate_clock(etd: &str) -> bool {
    etd != "On time" && etd != "Delayed" && etd.contains(':')
}

/// Strict "HH:MM" parse.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }

    let hour = two_digits(bytes[0], bytes[1])?;
    let minute = two_digits(bytes[3], bytes[4])?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn two_digits(tens: u8, units: u8) -> Option<u32> {
    let tens = (tens as char).to_digit(10)?;
    let units = (units as char).to_digit(10)?;
    Some(tens * 10 + units)
}
