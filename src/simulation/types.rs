//! Core types for the bridge simulation
//!
//! These are standalone types shared by the monitor and the harness.

use std::fmt;

/// Which way a car is crossing the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
}

impl Direction {
    /// The opposing car direction
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
        }
    }
}

/// A wrapper type for car IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarId(pub u32);

/// A wrapper type for pedestrian IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PedestrianId(pub u32);
