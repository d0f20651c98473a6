//! Main simulation world that ties everything together
//!
//! Owns the monitor and the configuration, spawns the three arrival
//! generators, and reports the outcome of a run.

use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, Context, Result};
use rand_distr::Exp;

use super::bridge::{BridgeMonitor, BridgeSnapshot};
use super::config::SimConfig;
use super::generator::{self, GeneratorPlan};
use super::types::Direction;

/// Outcome of one simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimReport {
    /// North-bound cars that completed their crossing
    pub cars_north_crossed: u32,
    /// South-bound cars that completed their crossing
    pub cars_south_crossed: u32,
    /// Pedestrians that completed their crossing
    pub pedestrians_crossed: u32,
    /// Monitor counters after all generators finished
    pub final_state: BridgeSnapshot,
}

impl SimReport {
    pub fn total_crossings(&self) -> u32 {
        self.cars_north_crossed + self.cars_south_crossed + self.pedestrians_crossed
    }

    pub fn print_summary(&self) {
        println!("=== Bridge Simulation Summary ===");
        println!("North-bound cars crossed: {}", self.cars_north_crossed);
        println!("South-bound cars crossed: {}", self.cars_south_crossed);
        println!("Pedestrians crossed: {}", self.pedestrians_crossed);
        println!("Total crossings: {}", self.total_crossings());
        println!("Monitor requests served: {}", self.final_state.requests);
        println!(
            "Final occupancy: north={} south={} pedestrians={}",
            self.final_state.cars_north, self.final_state.cars_south, self.final_state.pedestrians
        );
    }
}

/// The main simulation world
pub struct SimWorld {
    monitor: Arc<BridgeMonitor>,
    config: SimConfig,
}

impl SimWorld {
    /// Create a world with an empty bridge. Fails if the configuration's
    /// timing parameters cannot back valid distributions.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            monitor: Arc::new(BridgeMonitor::new()),
            config,
        })
    }

    /// Shared handle to the monitor, for observers.
    pub fn monitor(&self) -> Arc<BridgeMonitor> {
        Arc::clone(&self.monitor)
    }

    /// Run the three generators to completion and report the outcome.
    pub fn run(&self) -> Result<SimReport> {
        let car_dwell = self.config.car_dwell.build().context("car dwell time")?;
        let ped_dwell = self
            .config
            .ped_dwell
            .build()
            .context("pedestrian dwell time")?;
        let car_arrivals =
            Exp::new(1.0 / self.config.car_arrival_mean).context("car arrival rate")?;
        let ped_arrivals =
            Exp::new(1.0 / self.config.ped_arrival_mean).context("pedestrian arrival rate")?;

        // Distinct RNG streams per generator when a seed is given.
        let seed_for = |stream: u64| self.config.seed.map(|s| s.wrapping_add(stream));

        let north = {
            let monitor = self.monitor();
            let plan = GeneratorPlan {
                population: self.config.cars_per_direction,
                arrivals: car_arrivals,
                dwell: car_dwell,
                seed: seed_for(1),
            };
            thread::Builder::new()
                .name("gen-cars-north".into())
                .spawn(move || generator::generate_cars(Direction::North, plan, monitor))
                .context("spawn north-bound generator")?
        };
        let south = {
            let monitor = self.monitor();
            let plan = GeneratorPlan {
                population: self.config.cars_per_direction,
                arrivals: car_arrivals,
                dwell: car_dwell,
                seed: seed_for(2),
            };
            thread::Builder::new()
                .name("gen-cars-south".into())
                .spawn(move || generator::generate_cars(Direction::South, plan, monitor))
                .context("spawn south-bound generator")?
        };
        let pedestrians = {
            let monitor = self.monitor();
            let plan = GeneratorPlan {
                population: self.config.pedestrians,
                arrivals: ped_arrivals,
                dwell: ped_dwell,
                seed: seed_for(3),
            };
            thread::Builder::new()
                .name("gen-pedestrians".into())
                .spawn(move || generator::generate_pedestrians(plan, monitor))
                .context("spawn pedestrian generator")?
        };

        let cars_north_crossed = north
            .join()
            .map_err(|_| anyhow!("north-bound generator panicked"))?;
        let cars_south_crossed = south
            .join()
            .map_err(|_| anyhow!("south-bound generator panicked"))?;
        let pedestrians_crossed = pedestrians
            .join()
            .map_err(|_| anyhow!("pedestrian generator panicked"))?;

        Ok(SimReport {
            cars_north_crossed,
            cars_south_crossed,
            pedestrians_crossed,
            final_state: self.monitor.snapshot(),
        })
    }
}
