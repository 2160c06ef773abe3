//! TfL StopPoint API client (the primary feed).
//!
//! Station search, live arrivals, and the credential probe used at
//! onboarding. Raw arrival records are normalized field-by-field into the
//! unified [`Arrival`](crate::domain::Arrival) schema; the upstream shape
//! is not trusted.

mod client;
mod convert;
mod error;
mod types;

pub use client::{TflClient, TflConfig};
pub use error::TflError;
