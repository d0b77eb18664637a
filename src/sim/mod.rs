//! Implements the simulation driver and progress reporting

mod progress;
mod simulation;
pub use crate::sim::progress::*;
pub use crate::sim::simulation::*;
