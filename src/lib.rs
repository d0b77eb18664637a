//! Wallsim -- transient thermal and stress simulator for prestressed composite cylindrical walls
//!
//! The wall is made of an inner steel liner, a concrete body, and an optional outer steel liner.
//! A Loss-Of-Coolant Accident (LOCA) heats the wall from inside; this crate computes the
//! temperature history through the thickness (nonlinear transient FEM with Newton-Raphson)
//! and derives the thermal, internal-pressure, prestressing, and total stresses.
//!
//! You may write `use wallsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod fem;
pub mod material;
pub mod post;
pub mod prelude;
pub mod sim;
pub mod stress;
