//! Huxley2 API response DTOs.
//!
//! The proxy mirrors the National Rail Darwin feed: times are "HH:MM"
//! strings and the estimated field mixes clock times with status words.
//! `Option` everywhere, because fields are omitted rather than sent null.

use serde::Deserialize;

/// A hit from the `crs/{name}` station code lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrsCandidate {
    pub station_name: String,
    pub crs_code: String,
}

/// Response from `departures/{crs}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureBoard {
    pub train_services: Option<Vec<TrainService>>,
}

/// A service on the departure board.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainService {
    /// Ephemeral id, only stable while the service is on the board.
    #[serde(rename = "serviceID")]
    pub service_id: Option<String>,

    /// Scheduled departure, "HH:MM".
    pub std: Option<String>,

    /// Estimated departure: "On time", "Delayed", "Cancelled", or "HH:MM".
    pub etd: Option<String>,

    /// Platform number/letter.
    pub platform: Option<String>,

    /// Train operating company name.
    pub operator: Option<String>,

    /// Train operating company code.
    pub operator_code: Option<String>,

    /// Destination station(s).
    pub destination: Option<Vec<ServiceLocation>>,

    /// Where the service started.
    pub current_origins: Option<Vec<ServiceLocation>>,
}

/// Origin or destination of a service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    pub location_name: String,
}
