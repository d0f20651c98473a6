//! Simulation configuration
//!
//! Population sizes, arrival timings, and dwell-time distributions for the
//! three traffic groups. The monitor itself takes no configuration; all of
//! this is consumed by the harness.

use anyhow::{bail, Result};

use super::entity::DwellTime;

/// Cars spawned in each direction
pub const DEFAULT_CARS_PER_DIRECTION: u32 = 4;
/// Pedestrians spawned
pub const DEFAULT_PEDESTRIANS: u32 = 2;
/// Mean seconds between car arrivals (per direction)
pub const DEFAULT_CAR_ARRIVAL_MEAN: f64 = 0.5;
/// Mean seconds between pedestrian arrivals
pub const DEFAULT_PED_ARRIVAL_MEAN: f64 = 5.0;
/// Car time on the bridge: normal(1.0s, 0.5s)
pub const DEFAULT_CAR_DWELL: DwellTime = DwellTime {
    mean: 1.0,
    std_dev: 0.5,
};
/// Pedestrian time on the bridge: normal(2.0s, 3.0s)
pub const DEFAULT_PED_DWELL: DwellTime = DwellTime {
    mean: 2.0,
    std_dev: 3.0,
};

/// Full configuration for one simulation run
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of cars spawned in each direction
    pub cars_per_direction: u32,

    /// Number of pedestrians spawned
    pub pedestrians: u32,

    /// Mean seconds between consecutive car arrivals, per direction
    pub car_arrival_mean: f64,

    /// Mean seconds between consecutive pedestrian arrivals
    pub ped_arrival_mean: f64,

    /// Dwell-time distribution for cars
    pub car_dwell: DwellTime,

    /// Dwell-time distribution for pedestrians
    pub ped_dwell: DwellTime,

    /// Optional seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cars_per_direction: DEFAULT_CARS_PER_DIRECTION,
            pedestrians: DEFAULT_PEDESTRIANS,
            car_arrival_mean: DEFAULT_CAR_ARRIVAL_MEAN,
            ped_arrival_mean: DEFAULT_PED_ARRIVAL_MEAN,
            car_dwell: DEFAULT_CAR_DWELL,
            ped_dwell: DEFAULT_PED_DWELL,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Check that every timing parameter can back a valid distribution.
    pub fn validate(&self) -> Result<()> {
        for (name, mean) in [
            ("car arrival", self.car_arrival_mean),
            ("pedestrian arrival", self.ped_arrival_mean),
        ] {
            if !mean.is_finite() || mean <= 0.0 {
                bail!("{name} mean must be positive and finite, got {mean}");
            }
        }
        for (name, dwell) in [("car", self.car_dwell), ("pedestrian", self.ped_dwell)] {
            if !dwell.mean.is_finite() || !dwell.std_dev.is_finite() || dwell.std_dev < 0.0 {
                bail!(
                    "{name} dwell must have finite mean and non-negative std dev, \
                     got mean {} std dev {}",
                    dwell.mean,
                    dwell.std_dev
                );
            }
        }
        Ok(())
    }
}
