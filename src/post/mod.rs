//! Implements the post-processing of the stresses and temperatures

mod extremes;
mod region_split;
mod summary;
pub use crate::post::extremes::*;
pub use crate::post::region_split::*;
pub use crate::post::summary::*;
