//! Standalone bridge simulation module
//!
//! Contains the synchronization monitor for the single-lane bridge plus the
//! harness that drives it: arrival generators, traffic entities, and the
//! configuration they consume. Everything here runs headless.

mod bridge;
mod config;
mod entity;
mod generator;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use bridge::{BridgeMonitor, BridgeSnapshot};
#[allow(unused_imports)]
pub use config::{
    SimConfig, DEFAULT_CARS_PER_DIRECTION, DEFAULT_CAR_ARRIVAL_MEAN, DEFAULT_CAR_DWELL,
    DEFAULT_PEDESTRIANS, DEFAULT_PED_ARRIVAL_MEAN, DEFAULT_PED_DWELL,
};
#[allow(unused_imports)]
pub use entity::DwellTime;
#[allow(unused_imports)]
pub use types::{CarId, Direction, PedestrianId};
pub use world::{SimReport, SimWorld};
