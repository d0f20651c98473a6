//! The bridge admission monitor
//!
//! One mutex guards the occupancy counters; one condition variable per
//! traffic group parks entities whose admission predicate is false. Entities
//! of the same group share the bridge, while any occupant of one group keeps
//! both conflicting groups out.

use std::fmt;
use std::sync::{Condvar, Mutex, MutexGuard};

/// Occupancy counters for the bridge.
///
/// Pure data; only mutated by [`BridgeMonitor`] while its lock is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BridgeState {
    cars_north: u32,
    cars_south: u32,
    pedestrians: u32,
    /// Total operations served. Diagnostic only, never consulted for admission.
    requests: u64,
}

impl BridgeState {
    fn north_car_may_enter(&self) -> bool {
        self.pedestrians == 0 && self.cars_south == 0
    }

    fn south_car_may_enter(&self) -> bool {
        self.pedestrians == 0 && self.cars_north == 0
    }

    fn pedestrian_may_enter(&self) -> bool {
        self.cars_north == 0 && self.cars_south == 0
    }
}

/// A point-in-time copy of the monitor's counters, for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeSnapshot {
    pub cars_north: u32,
    pub cars_south: u32,
    pub pedestrians: u32,
    pub requests: u64,
}

impl fmt::Display for BridgeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "monitor: requests={} north={} south={} pedestrians={}",
            self.requests, self.cars_north, self.cars_south, self.pedestrians
        )
    }
}

/// Synchronization monitor for the single-lane bridge.
///
/// All six operations are infallible. The three `enter_*` calls block the
/// calling thread until the group's admission predicate holds; the `leave_*`
/// calls never block. Callers must pair every successful enter with exactly
/// one matching leave.
pub struct BridgeMonitor {
    state: Mutex<BridgeState>,
    /// Waiters for `enter_north_car`
    north_clear: Condvar,
    /// Waiters for `enter_south_car`
    south_clear: Condvar,
    /// Waiters for `enter_pedestrian`
    walkway_clear: Condvar,
}

impl Default for BridgeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeMonitor {
    /// Create a monitor with an empty bridge.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BridgeState::default()),
            north_clear: Condvar::new(),
            south_clear: Condvar::new(),
            walkway_clear: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BridgeState> {
        self.state.lock().expect("bridge lock poisoned")
    }

    /// Block until no pedestrian and no south-bound car is on the bridge,
    /// then take a north-bound slot.
    pub fn enter_north_car(&self) {
        let mut state = self.lock();
        state.requests += 1;
        state = self
            .north_clear
            .wait_while(state, |s| !s.north_car_may_enter())
            .expect("bridge lock poisoned");
        state.cars_north += 1;
    }

    /// Block until no pedestrian and no north-bound car is on the bridge,
    /// then take a south-bound slot.
    pub fn enter_south_car(&self) {
        let mut state = self.lock();
        state.requests += 1;
        state = self
            .south_clear
            .wait_while(state, |s| !s.south_car_may_enter())
            .expect("bridge lock poisoned");
        state.cars_south += 1;
    }

    /// Block until no car (either direction) is on the bridge, then take a
    /// pedestrian slot.
    pub fn enter_pedestrian(&self) {
        let mut state = self.lock();
        state.requests += 1;
        state = self
            .walkway_clear
            .wait_while(state, |s| !s.pedestrian_may_enter())
            .expect("bridge lock poisoned");
        state.pedestrians += 1;
    }

    /// Release a north-bound slot and wake the groups this car was blocking.
    pub fn leave_north_car(&self) {
        let mut state = self.lock();
        state.requests += 1;
        debug_assert!(state.cars_north > 0, "leave_north_car without matching enter");
        state.cars_north -= 1;
        self.walkway_clear.notify_all();
        self.south_clear.notify_all();
    }

    /// Release a south-bound slot and wake the groups this car was blocking.
    pub fn leave_south_car(&self) {
        let mut state = self.lock();
        state.requests += 1;
        debug_assert!(state.cars_south > 0, "leave_south_car without matching enter");
        state.cars_south -= 1;
        self.walkway_clear.notify_all();
        self.north_clear.notify_all();
    }

    /// Release a pedestrian slot. Cars stay blocked while any pedestrian
    /// remains, so waiters are only woken when the last pedestrian steps off.
    pub fn leave_pedestrian(&self) {
        let mut state = self.lock();
        state.requests += 1;
        debug_assert!(state.pedestrians > 0, "leave_pedestrian without matching enter");
        state.pedestrians -= 1;
        if state.pedestrians == 0 {
            self.north_clear.notify_all();
            self.south_clear.notify_all();
        }
    }

    /// Copy the current counters. Purely observational; does not count as a
    /// request.
    pub fn snapshot(&self) -> BridgeSnapshot {
        let state = self.lock();
        BridgeSnapshot {
            cars_north: state.cars_north,
            cars_south: state.cars_south,
            pedestrians: state.pedestrians,
            requests: state.requests,
        }
    }
}
