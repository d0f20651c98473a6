//! Bridge Crossing Simulation Library
//!
//! Simulates shared access to a single-lane bidirectional bridge crossed by
//! north-bound cars, south-bound cars, and pedestrians. Entities of the same
//! group share the bridge concurrently; conflicting groups exclude each other.

pub mod simulation;
