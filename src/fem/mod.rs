//! Implements the finite element method for the transient heat conduction

mod boundary_flux;
mod control_convergence;
mod element_heat;
mod linear_system;
mod solver_steady;
mod solver_transient;
pub use crate::fem::boundary_flux::*;
pub use crate::fem::control_convergence::*;
pub use crate::fem::element_heat::*;
pub use crate::fem::linear_system::*;
pub use crate::fem::solver_steady::*;
pub use crate::fem::solver_transient::*;
