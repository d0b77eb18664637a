//! Makes available common structures needed to run a simulation
//!
//! You may write `use wallsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{AirFlow, ConductivityBound, Config, Geometry, Linearization, Material, Region, Variant};
pub use crate::base::{Loads, MeshSpace, MeshTime, Parameters, Results, Samples, Structure, Table, TimeParams};
pub use crate::base::{DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::fem::{operating_temperatures, OperatingTemperatures, SolverTransient};
pub use crate::post::{Layer, RegionSplit, StressEvolution, Summary};
pub use crate::sim::{Progress, ProgressConsole, ProgressSilent, Simulation, Stage};
pub use crate::StrError;
