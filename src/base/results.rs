use super::{MeshSpace, MeshTime, Variant};
use crate::StrError;
use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds all temperature, stress, and strain histories
///
/// Matrices are (n_time × n_node); i.e., each row corresponds to one time of the time axis.
/// All arrays are allocated (zero-filled) once and never resized.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Results {
    /// Times of the analysis (n_time)
    pub time: Vector,

    /// Temperature (°C)
    pub temperature: Matrix,

    /// Operating (steady-state) temperature profile; equals the first row of `temperature` (n_node)
    pub temperature_init: Vector,

    /// Internal air/gas temperature at each time (n_time)
    pub temp_air_int: Vector,

    /// Internal gas pressure at each time, as used by the stress analysis (n_time)
    pub pressure_air_int: Vector,

    /// Heat transfer coefficient at the inner surface (n_time)
    pub htc_in: Vector,

    /// Heat transfer coefficient at the outer surface (n_time)
    pub htc_out: Vector,

    /// Thermal stress with extension and rotation prevented
    pub stress_thermal_fixed: Matrix,

    /// Thermal stress with extension allowed and rotation prevented
    pub stress_thermal_clamped: Matrix,

    /// Thermal stress with extension and rotation allowed
    pub stress_thermal_free: Matrix,

    /// Free (unrestrained) thermal strain
    pub strain_thermal_free: Matrix,

    /// Real strain of the clamped section
    pub strain_real_clamped: Matrix,

    /// Real strain of the free section
    pub strain_real_free: Matrix,

    /// Hoop stress due to the internal and external pressures
    pub stress_pressure: Matrix,

    /// Hoop strain due to the internal and external pressures
    pub strain_pressure: Matrix,

    /// Stress due to prestressing (n_node; constant in time)
    pub stress_prestressing: Vector,

    /// Strain due to prestressing (n_node; constant in time)
    pub strain_prestressing: Vector,

    /// Total stress with the fixed thermal stress
    pub stress_total_fixed: Matrix,

    /// Total stress with the clamped thermal stress
    pub stress_total_clamped: Matrix,

    /// Total stress with the free thermal stress
    pub stress_total_free: Matrix,
}

impl Results {
    /// Allocates a new instance with zeroed arrays
    pub fn new(mesh_space: &MeshSpace, mesh_time: &MeshTime) -> Self {
        let nt = mesh_time.times_count();
        let nn = mesh_space.node_count;
        Results {
            time: mesh_time.time_axis.clone(),
            temperature: Matrix::new(nt, nn),
            temperature_init: Vector::new(nn),
            temp_air_int: Vector::new(nt),
            pressure_air_int: Vector::new(nt),
            htc_in: Vector::new(nt),
            htc_out: Vector::new(nt),
            stress_thermal_fixed: Matrix::new(nt, nn),
            stress_thermal_clamped: Matrix::new(nt, nn),
            stress_thermal_free: Matrix::new(nt, nn),
            strain_thermal_free: Matrix::new(nt, nn),
            strain_real_clamped: Matrix::new(nt, nn),
            strain_real_free: Matrix::new(nt, nn),
            stress_pressure: Matrix::new(nt, nn),
            strain_pressure: Matrix::new(nt, nn),
            stress_prestressing: Vector::new(nn),
            strain_prestressing: Vector::new(nn),
            stress_total_fixed: Matrix::new(nt, nn),
            stress_total_clamped: Matrix::new(nt, nn),
            stress_total_free: Matrix::new(nt, nn),
        }
    }

    /// Returns the number of times
    pub fn n_time(&self) -> usize {
        self.temperature.nrow()
    }

    /// Returns the number of nodes
    pub fn n_node(&self) -> usize {
        self.temperature.ncol()
    }

    /// Returns the thermal stress of a structural variant
    pub fn stress_thermal(&self, variant: Variant) -> &Matrix {
        match variant {
            Variant::Fixed => &self.stress_thermal_fixed,
            Variant::Clamped => &self.stress_thermal_clamped,
            Variant::Free => &self.stress_thermal_free,
        }
    }

    /// Returns the total stress of a structural variant
    pub fn stress_total(&self, variant: Variant) -> &Matrix {
        match variant {
            Variant::Fixed => &self.stress_total_fixed,
            Variant::Clamped => &self.stress_total_clamped,
            Variant::Free => &self.stress_total_free,
        }
    }

    /// Returns the access to the total stress of a structural variant
    pub fn stress_total_mut(&mut self, variant: Variant) -> &mut Matrix {
        match variant {
            Variant::Fixed => &mut self.stress_total_fixed,
            Variant::Clamped => &mut self.stress_total_clamped,
            Variant::Free => &mut self.stress_total_free,
        }
    }

    /// Reads a JSON file containing the results
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
        let results = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
