//! Implements the base structures of the simulation: input data, meshes, loads, and results

mod config;
mod constants;
mod enums;
mod loads;
mod mesh_space;
mod mesh_time;
mod parameters;
mod results;
mod samples;
mod structure;
mod table;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::loads::*;
pub use crate::base::mesh_space::*;
pub use crate::base::mesh_time::*;
pub use crate::base::parameters::*;
pub use crate::base::results::*;
pub use crate::base::samples::*;
pub use crate::base::structure::*;
pub use crate::base::table::*;
