//! Traffic entities: cars and pedestrians
//!
//! An entity asks the monitor for entry, occupies the bridge for a sampled
//! dwell time, then leaves. All synchronization lives in the monitor; this
//! module only drives the enter/dwell/leave sequence and logs it.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::bridge::BridgeMonitor;
use super::types::{CarId, Direction, PedestrianId};

/// Parameters of the normal distribution an entity's time on the bridge is
/// drawn from. Samples are clamped to zero seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DwellTime {
    pub mean: f64,
    pub std_dev: f64,
}

impl DwellTime {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    pub(crate) fn build(&self) -> Result<Normal<f64>> {
        Normal::new(self.mean, self.std_dev).with_context(|| {
            format!(
                "invalid dwell distribution (mean {}, std dev {})",
                self.mean, self.std_dev
            )
        })
    }
}

fn sample_dwell(dwell: &Normal<f64>, rng: &mut impl Rng) -> Duration {
    Duration::from_secs_f64(dwell.sample(rng).max(0.0))
}

/// Run one car across the bridge: enter, dwell, leave.
pub(crate) fn drive_car(
    id: CarId,
    direction: Direction,
    monitor: &BridgeMonitor,
    dwell: Normal<f64>,
    rng: &mut impl Rng,
) {
    info!(
        "car {} heading {} wants to enter. {}",
        id.0,
        direction,
        monitor.snapshot()
    );
    match direction {
        Direction::North => monitor.enter_north_car(),
        Direction::South => monitor.enter_south_car(),
    }
    info!(
        "car {} heading {} enters the bridge. {}",
        id.0,
        direction,
        monitor.snapshot()
    );
    thread::sleep(sample_dwell(&dwell, rng));
    info!(
        "car {} heading {} leaving the bridge. {}",
        id.0,
        direction,
        monitor.snapshot()
    );
    match direction {
        Direction::North => monitor.leave_north_car(),
        Direction::South => monitor.leave_south_car(),
    }
    info!(
        "car {} heading {} out of the bridge. {}",
        id.0,
        direction,
        monitor.snapshot()
    );
}

/// Run one pedestrian across the bridge: enter, dwell, leave.
pub(crate) fn walk_pedestrian(
    id: PedestrianId,
    monitor: &BridgeMonitor,
    dwell: Normal<f64>,
    rng: &mut impl Rng,
) {
    info!("pedestrian {} wants to enter. {}", id.0, monitor.snapshot());
    monitor.enter_pedestrian();
    info!("pedestrian {} enters the bridge. {}", id.0, monitor.snapshot());
    thread::sleep(sample_dwell(&dwell, rng));
    info!("pedestrian {} leaving the bridge. {}", id.0, monitor.snapshot());
    monitor.leave_pedestrian();
    info!("pedestrian {} out of the bridge. {}", id.0, monitor.snapshot());
}
