//! TfL API response DTOs.
//!
//! These map directly to the StopPoint JSON responses. Every field the feed
//! may omit is an `Option`; substitution of defaults happens in `convert`,
//! not here.

use serde::Deserialize;

/// Response from `StopPoint/Search/{query}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointSearchResponse {
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

/// A single search hit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub modes: Vec<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A raw record from `StopPoint/{id}/Arrivals`.
///
/// Nothing here is trusted to be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArrival {
    pub id: Option<String>,
    pub vehicle_id: Option<String>,
    pub naptan_id: Option<String>,
    pub station_name: Option<String>,
    pub line_id: Option<String>,
    pub line_name: Option<String>,
    pub platform_name: Option<String>,
    pub direction: Option<String>,
    pub destination_naptan_id: Option<String>,
    pub destination_name: Option<String>,
    pub timestamp: Option<String>,
    pub time_to_station: Option<i64>,
    pub current_location: Option<String>,
    pub towards: Option<String>,
    pub expected_arrival: Option<String>,
    pub mode_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_search_response() {
        let json = r#"{
            "query": "clapham junction",
            "total": 1,
            "matches": [
                {
                    "id": "HUBCLJ",
                    "name": "Clapham Junction",
                    "modes": ["overground", "national-rail", "bus"],
                    "lat": 51.464,
                    "lon": -0.17
                }
            ]
        }"#;

        let response: StopPointSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.matches.len(), 1);

        let hit = &response.matches[0];
        assert_eq!(hit.id, "HUBCLJ");
        assert_eq!(hit.name, "Clapham Junction");
        assert_eq!(hit.modes, vec!["overground", "national-rail", "bus"]);
        assert_eq!(hit.lat, Some(51.464));
    }

    #[test]
    fn deserialize_search_response_without_matches() {
        let response: StopPointSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn deserialize_arrival() {
        let json = r#"{
            "id": "1836802446",
            "vehicleId": "233",
            "naptanId": "940GZZLUOVL",
            "stationName": "Oval Underground Station",
            "lineId": "northern",
            "lineName": "Northern",
            "platformName": "Northbound - Platform 1",
            "direction": "inbound",
            "destinationNaptanId": "940GZZLUEGW",
            "destinationName": "Edgware Underground Station",
            "timestamp": "2026-08-05T09:15:02Z",
            "timeToStation": 241,
            "currentLocation": "Between Morden and South Wimbledon",
            "towards": "Edgware via Bank",
            "expectedArrival": "2026-08-05T09:19:03Z",
            "modeName": "tube"
        }"#;

        let raw: RawArrival = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id.as_deref(), Some("1836802446"));
        assert_eq!(raw.line_id.as_deref(), Some("northern"));
        assert_eq!(raw.time_to_station, Some(241));
        assert_eq!(raw.mode_name.as_deref(), Some("tube"));
    }

    #[test]
    fn deserialize_sparse_arrival() {
        // The feed omits fields freely; everything must tolerate absence
        let raw: RawArrival = serde_json::from_str(r#"{"vehicleId": "LX58CFV"}"#).unwrap();
        assert!(raw.id.is_none());
        assert_eq!(raw.vehicle_id.as_deref(), Some("LX58CFV"));
        assert!(raw.time_to_station.is_none());
    }
}
