//! Station code resolution.
//!
//! Derives the 3-letter CRS code the departure board is keyed by: first
//! from the station identifier itself, then by fuzzy name lookup against
//! the proxy's station index.

use crate::domain::Crs;

use super::client::HuxleyClient;
use super::types::CrsCandidate;

/// Hub StopPoint identifiers start with this prefix and carry the rail
/// code at the tail, e.g. `HUBCLJ` or `HUB910GTW`.
const HUB_PREFIX: &str = "HUB";

/// Suffix words stripped from station names before lookup.
const NAME_SUFFIXES: &[&str] = &[
    "Rail",
    "Railway",
    "Train",
    "Station",
    "Underground",
    "DLR",
    "International",
    "Tram",
    "Stop",
];

/// Resolve a station's CRS code.
///
/// A pure function of `(station_id, station_name)` plus at most one lookup
/// call: hub identifiers resolve without touching the network. Returns
/// `None` when no code is available; national rail coverage is
/// best-effort, so callers treat that as "no departures", not an error.
pub async fn resolve_crs(
    client: &HuxleyClient,
    station_id: &str,
    station_name: &str,
) -> Option<Crs> {
    if let Some(crs) = embedded_crs(station_id) {
        return Some(crs);
    }

    let cleaned = normalize_station_name(station_name);
    let candidates = client.lookup_code(&cleaned).await.ok()?;
    best_match(&candidates, &cleaned)
}

/// Extract the rail code embedded in a hub identifier, if any.
fn embedded_crs(station_id: &str) -> Option<Crs> {
    if !station_id.starts_with(HUB_PREFIX) || station_id.len() < 6 {
        return None;
    }

    let tail = station_id.get(station_id.len() - 3..)?;
    Crs::parse(&tail.to_uppercase()).ok()
}

/// Normalize a display name for lookup.
///
/// Iteratively strips a trailing parenthetical qualifier and trailing
/// railway suffix words, case-insensitively, until the name stops
/// changing. Compound suffixes ("Rail Station") take one word per pass.
pub(crate) fn normalize_station_name(name: &str) -> String {
    let mut cleaned = name.trim().to_string();

    loop {
        let before = cleaned.clone();

        if cleaned.ends_with(')')
            && let Some(open) = cleaned.find('(')
        {
            cleaned.truncate(open);
            let trimmed = cleaned.trim_end().len();
            cleaned.truncate(trimmed);
        }

        if let Some((head, last)) = cleaned.rsplit_once(char::is_whitespace) {
            if NAME_SUFFIXES.iter().any(|s| s.eq_ignore_ascii_case(last)) {
                cleaned = head.trim_end().to_string();
            }
        } else if NAME_SUFFIXES.iter().any(|s| s.eq_ignore_ascii_case(&cleaned)) {
            cleaned.clear();
        }

        if cleaned == before {
            return cleaned;
        }
    }
}

/// Pick the best candidate for a normalized name: exact match, then prefix
/// match, then substring match, then the first hit as a last resort. All
/// comparisons are case-insensitive.
fn best_match(candidates: &[CrsCandidate], cleaned: &str) -> Option<Crs> {
    let needle = cleaned.to_lowercase();

    let chosen = candidates
        .iter()
        .find(|c| c.station_name.to_lowercase() == needle)
        .or_else(|| {
            candidates
                .iter()
                .find(|c| c.station_name.to_lowercase().starts_with(&needle))
        })
        .or_else(|| {
            candidates
                .iter()
                .find(|c| c.station_name.to_lowercase().contains(&needle))
        })
        .or_else(|| candidates.first())?;

    Crs::parse(&chosen.crs_code.to_uppercase()).ok()
}
