use super::{AirFlow, ConductivityBound, Geometry, Linearization, PHASE_ENDS_MAX};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds global configuration options of a run
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Formula for the conductivity of concrete
    pub conductivity_bound: ConductivityBound,

    /// Natural-convection correlation of the air
    pub air_flow: AirFlow,

    /// Planar or radial (polar) heat conduction
    pub geometry: Geometry,

    /// Treatment of the conductivity and capacity matrices within a time step
    ///
    /// The frozen-coefficient option reproduces the classic algorithm in which K and C are
    /// evaluated with the known temperatures. Changing it changes the numerical results.
    pub linearization: Linearization,

    /// Takes radiation into account at the inner surface
    pub radiation_in: bool,

    /// Takes radiation into account at the outer surface
    pub radiation_out: bool,

    /// Maximum end times of the first four phases of the time mesh (s)
    pub phase_ends: [f64; 4],

    /// Absolute tolerance for the max-norm of the residual (transient solver)
    pub tol_rr_abs: f64,

    /// Max number of Newton-Raphson corrections per time step
    pub n_max_iterations: usize,

    /// Tolerance for the change of surface temperatures in the steady-state solver (°C)
    pub tol_steady: f64,

    /// Max number of fixed-point iterations in the steady-state solver
    pub n_max_iterations_steady: usize,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            conductivity_bound: ConductivityBound::Upper,
            air_flow: AirFlow::LaminarTurbulent,
            geometry: Geometry::Radial,
            linearization: Linearization::FrozenCoefficients,
            radiation_in: true,
            radiation_out: true,
            phase_ends: PHASE_ENDS_MAX,
            tol_rr_abs: 1e-3,
            n_max_iterations: 50,
            tol_steady: 0.01,
            n_max_iterations_steady: 1000,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.tol_rr_abs <= 0.0 {
            return Some(format!("tol_rr_abs = {:?} is incorrect; it must be > 0.0", self.tol_rr_abs));
        }
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        if self.tol_steady <= 0.0 {
            return Some(format!("tol_steady = {:?} is incorrect; it must be > 0.0", self.tol_steady));
        }
        if self.n_max_iterations_steady < 1 {
            return Some(format!(
                "n_max_iterations_steady = {} is incorrect; it must be ≥ 1",
                self.n_max_iterations_steady
            ));
        }
        if self.phase_ends[0] <= 0.0 {
            return Some(format!(
                "phase_ends[0] = {:?} is incorrect; it must be > 0.0",
                self.phase_ends[0]
            ));
        }
        for i in 1..4 {
            if self.phase_ends[i] < self.phase_ends[i - 1] {
                return Some(format!(
                    "phase_ends[{}] = {:?} is incorrect; it must be ≥ phase_ends[{}] = {:?}",
                    i,
                    self.phase_ends[i],
                    i - 1,
                    self.phase_ends[i - 1]
                ));
            }
        }
        None // all good
    }

    /// Sets the formula for the conductivity of concrete
    pub fn set_conductivity_bound(&mut self, value: ConductivityBound) -> &mut Self {
        self.conductivity_bound = value;
        self
    }

    /// Sets the natural-convection correlation of the air
    pub fn set_air_flow(&mut self, value: AirFlow) -> &mut Self {
        self.air_flow = value;
        self
    }

    /// Sets planar or radial heat conduction
    pub fn set_geometry(&mut self, value: Geometry) -> &mut Self {
        self.geometry = value;
        self
    }

    /// Sets the treatment of the conductivity and capacity matrices within a time step
    pub fn set_linearization(&mut self, value: Linearization) -> &mut Self {
        self.linearization = value;
        self
    }

    /// Enables or disables radiation at the inner and outer surfaces
    pub fn set_radiation(&mut self, inner: bool, outer: bool) -> &mut Self {
        self.radiation_in = inner;
        self.radiation_out = outer;
        self
    }

    /// Sets the maximum end times of the first four phases of the time mesh
    pub fn set_phase_ends(&mut self, values: [f64; 4]) -> Result<&mut Self, StrError> {
        if values[0] <= 0.0 {
            return Err("phase end times must be > 0.0");
        }
        for i in 1..4 {
            if values[i] < values[i - 1] {
                return Err("phase end times must be non-decreasing");
            }
        }
        self.phase_ends = values;
        Ok(self)
    }

    /// Sets the absolute tolerance for the residual of the transient solver
    pub fn set_tol_rr_abs(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("tol_rr_abs must be > 0.0");
        }
        self.tol_rr_abs = value;
        Ok(self)
    }

    /// Sets the max number of Newton-Raphson corrections per time step
    pub fn set_n_max_iterations(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_iterations must be ≥ 1");
        }
        self.n_max_iterations = value;
        Ok(self)
    }

    /// Sets the tolerance of the steady-state solver
    pub fn set_tol_steady(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("tol_steady must be > 0.0");
        }
        self.tol_steady = value;
        Ok(self)
    }

    /// Sets the max number of iterations of the steady-state solver
    pub fn set_n_max_iterations_steady(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_iterations_steady must be ≥ 1");
        }
        self.n_max_iterations_steady = value;
        Ok(self)
    }

    /// Reads a JSON file containing the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let config = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(config)
    }

    /// Returns the scaling factor of the conduction matrices at a given radius
    #[inline]
    pub fn radial_factor(&self, radius: f64) -> f64 {
        match self.geometry {
            Geometry::Planar => 1.0,
            Geometry::Radial => radius,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "conductivity_bound = {:?}\n", self.conductivity_bound)?;
        write!(f, "air_flow = {:?}\n", self.air_flow)?;
        write!(f, "geometry = {:?}\n", self.geometry)?;
        write!(f, "linearization = {:?}\n", self.linearization)?;
        write!(f, "radiation_in = {:?}\n", self.radiation_in)?;
        write!(f, "radiation_out = {:?}\n", self.radiation_out)?;
        write!(f, "phase_ends = {:?}\n", self.phase_ends)?;
        write!(f, "\nTolerances\n")?;
        write!(f, "==========\n")?;
        write!(f, "tol_rr_abs = {:?}\n", self.tol_rr_abs)?;
        write!(f, "n_max_iterations = {:?}\n", self.n_max_iterations)?;
        write!(f, "tol_steady = {:?}\n", self.tol_steady)?;
        write!(f, "n_max_iterations_steady = {:?}\n", self.n_max_iterations_steady)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
