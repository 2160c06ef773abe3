//! Station records.

use serde::{Deserialize, Serialize};

use super::Mode;

/// A transit station, as returned by search and saved to favorites.
///
/// Immutable once added: created by picking a search result, destroyed by
/// explicit removal, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Opaque StopPoint identifier. Hub identifiers carry an embedded rail
    /// code that the resolver can extract without a lookup.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Mode tokens served by this station.
    #[serde(default)]
    pub modes: Vec<String>,

    /// Latitude, when the search result carried coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude, when the search result carried coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl Station {
    /// Whether the national rail departure board applies to this station.
    ///
    /// This gates the secondary feed: the aggregator only consults the
    /// national rail adapter when it returns true.
    pub fn serves_national_rail(&self) -> bool {
        self.modes.iter().any(|m| m == Mode::NationalRail.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(modes: &[&str]) -> Station {
        Station {
            id: "940GZZLUKSX".to_string(),
            name: "King's Cross St. Pancras".to_string(),
            modes: modes.iter().map(|m| m.to_string()).collect(),
            lat: Some(51.530),
            lon: Some(-0.123),
        }
    }

    #[test]
    fn national_rail_gate() {
        assert!(station(&["tube", "national-rail"]).serves_national_rail());
        assert!(!station(&["tube", "dlr"]).serves_national_rail());
        assert!(!station(&[]).serves_national_rail());
    }

    #[test]
    fn json_roundtrip() {
        let original = station(&["tube", "national-rail"]);
        let json = serde_json::to_string(&original).unwrap();
        let back: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn missing_fields_default() {
        let station: Station =
            serde_json::from_str(r#"{"id": "HUBGTW", "name": "Gatwick Airport"}"#).unwrap();
        assert!(station.modes.is_empty());
        assert!(station.lat.is_none());
        assert!(station.lon.is_none());
    }
}
