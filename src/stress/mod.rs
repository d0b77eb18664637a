//! Derives the stresses through the wall thickness from the temperature history and the mechanical actions

mod pressure;
mod prestressing;
mod thermal;
mod total;
pub use crate::stress::pressure::*;
pub use crate::stress::prestressing::*;
pub use crate::stress::thermal::*;
pub use crate::stress::total::*;
