//! Live departure board aggregation for London transit stations.
//!
//! Combines the TfL arrivals feed with the Huxley2 national rail proxy,
//! reconciles their schemas into one arrival record, drops the services
//! both report, and produces a time-ordered board ready to render.

pub mod board;
pub mod display;
pub mod domain;
pub mod huxley;
pub mod store;
pub mod tfl;
