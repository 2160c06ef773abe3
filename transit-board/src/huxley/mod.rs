//! Huxley2 National Rail client (the secondary feed).
//!
//! National rail coverage is strictly additive: every failure in this
//! module (code resolution, fetch, parse) degrades to an empty list and
//! never blocks the primary result.

mod client;
mod departures;
mod error;
mod resolve;
mod types;

pub use client::{HuxleyClient, HuxleyConfig};
pub use departures::national_rail_departures;
pub use error::HuxleyError;
pub use resolve::resolve_crs;

#[cfg(test)]
pub(crate) use departures::board_to_arrivals;
#[cfg(test)]
pub(crate) use types::{ServiceLocation, TrainService};
