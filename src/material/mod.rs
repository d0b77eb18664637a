//! Implements the material properties of steel, concrete, and air, and the surface heat transfer

mod air;
mod conductivity;
mod heat_capacity;
mod surface;
pub use crate::material::air::*;
pub use crate::material::conductivity::*;
pub use crate::material::heat_capacity::*;
pub use crate::material::surface::*;
