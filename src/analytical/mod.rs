//! This module contains closed-form solutions used by the stress analysis

mod lame_cylinder;
mod prestress_cylinder;

pub use lame_cylinder::*;
pub use prestress_cylinder::*;
