//! Domain types for the departure board.
//!
//! Validated records shared by both feed adapters and the aggregation
//! pipeline. Types here enforce their invariants at construction time, so
//! downstream code can trust any value it receives.

mod arrival;
mod crs;
mod mode;
mod station;

pub use arrival::Arrival;
pub use crs::{Crs, InvalidCrs};
pub use mode::{Mode, mode_label};
pub use station::Station;
