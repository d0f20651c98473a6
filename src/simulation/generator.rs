//! Arrival generators
//!
//! One generator per traffic group. Each spawns its population of entity
//! threads with exponentially distributed gaps between arrivals, then joins
//! them all. Generators contain no synchronization logic of their own.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp, Normal};

use super::bridge::BridgeMonitor;
use super::entity;
use super::types::{CarId, Direction, PedestrianId};

/// Everything a generator thread needs to spawn its group.
pub(crate) struct GeneratorPlan {
    pub population: u32,
    pub arrivals: Exp<f64>,
    pub dwell: Normal<f64>,
    pub seed: Option<u64>,
}

impl GeneratorPlan {
    /// RNG for arrival gaps and for deriving per-entity seeds.
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

fn arrival_gap(arrivals: &Exp<f64>, rng: &mut StdRng) -> Duration {
    Duration::from_secs_f64(arrivals.sample(rng))
}

/// Spawn and join this direction's cars. Returns how many completed their
/// crossing.
pub(crate) fn generate_cars(
    direction: Direction,
    plan: GeneratorPlan,
    monitor: Arc<BridgeMonitor>,
) -> u32 {
    let mut rng = plan.rng();
    let mut handles = Vec::with_capacity(plan.population as usize);
    for id in 1..=plan.population {
        let monitor = Arc::clone(&monitor);
        let dwell = plan.dwell;
        let entity_seed: u64 = rng.random();
        let spawned = thread::Builder::new()
            .name(format!("car-{direction}-{id}"))
            .spawn(move || {
                let mut rng = StdRng::seed_from_u64(entity_seed);
                entity::drive_car(CarId(id), direction, &monitor, dwell, &mut rng);
            });
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => warn!("failed to spawn car {id} heading {direction}: {e}"),
        }
        thread::sleep(arrival_gap(&plan.arrivals, &mut rng));
    }
    join_all(handles)
}

/// Spawn and join the pedestrians. Returns how many completed their crossing.
pub(crate) fn generate_pedestrians(plan: GeneratorPlan, monitor: Arc<BridgeMonitor>) -> u32 {
    let mut rng = plan.rng();
    let mut handles = Vec::with_capacity(plan.population as usize);
    for id in 1..=plan.population {
        let monitor = Arc::clone(&monitor);
        let dwell = plan.dwell;
        let entity_seed: u64 = rng.random();
        let spawned = thread::Builder::new()
            .name(format!("pedestrian-{id}"))
            .spawn(move || {
                let mut rng = StdRng::seed_from_u64(entity_seed);
                entity::walk_pedestrian(PedestrianId(id), &monitor, dwell, &mut rng);
            });
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => warn!("failed to spawn pedestrian {id}: {e}"),
        }
        thread::sleep(arrival_gap(&plan.arrivals, &mut rng));
    }
    join_all(handles)
}

fn join_all(handles: Vec<thread::JoinHandle<()>>) -> u32 {
    let mut completed = 0;
    for handle in handles {
        match handle.join() {
            Ok(()) => completed += 1,
            Err(_) => warn!("entity thread panicked before finishing its crossing"),
        }
    }
    completed
}
