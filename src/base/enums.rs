use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the material of a node or element
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Material {
    /// Steel liner (inner or outer)
    Steel,

    /// Concrete body
    Concrete,
}

/// Defines the regions of the wall thickness
///
/// Note: The order (inner to outer) is used when concatenating regions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Region {
    /// Inner steel liner
    SteelIn,

    /// Concrete body
    Concrete,

    /// Outer steel liner
    SteelOut,
}

/// Defines the structural idealizations of the wall section
///
/// Each variant restrains axial extension and bending differently,
/// thus yielding a different real stress from the same thermal eigenstrain.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Variant {
    /// Extension and rotation are prevented
    Fixed,

    /// Extension is allowed, rotation is prevented (clamped-guided)
    Clamped,

    /// Extension and rotation are allowed
    Free,
}

/// Selects the formula for the conductivity of concrete
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ConductivityBound {
    /// Lower limit curve
    Lower,

    /// Upper limit curve
    Upper,
}

/// Selects the natural-convection correlation of the air
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum AirFlow {
    /// Laminar flow only
    Laminar,

    /// Laminar and turbulent flow
    LaminarTurbulent,
}

/// Selects the coordinates for heat conduction
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Geometry {
    /// Classic 1D conduction through a plane wall
    Planar,

    /// Polar coordinates (element matrices are scaled by the radius)
    Radial,
}

/// Selects how the conductivity and capacity matrices are treated within one time step
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Linearization {
    /// The matrices are computed once per time step from the known (current) temperatures
    FrozenCoefficients,

    /// The matrices are re-assembled from the trial (future) temperatures at every iteration
    Reassembled,
}

impl Region {
    /// Returns all regions ordered from the inner to the outer face
    pub const ALL: [Region; 3] = [Region::SteelIn, Region::Concrete, Region::SteelOut];

    /// Returns a short lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::SteelIn => "steel_inner",
            Region::Concrete => "concrete",
            Region::SteelOut => "steel_outer",
        }
    }
}

impl Variant {
    /// Returns all variants
    pub const ALL: [Variant; 3] = [Variant::Fixed, Variant::Clamped, Variant::Free];

    /// Returns a short lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Fixed => "fixed",
            Variant::Clamped => "clamped",
            Variant::Free => "free",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
