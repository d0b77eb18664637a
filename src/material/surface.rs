use super::{air_conductivity, air_density, air_dyn_viscosity, air_heat_capacity};
use crate::base::{celsius_to_kelvin, AirFlow, Config, Structure, GRAVITY, STEFAN_BOLTZMANN};

/// Calculates the natural-convection coefficient of a vertical surface (W/m²K)
///
/// Uses the Churchill-Chu correlations with the air properties evaluated at the air temperature:
///
/// ```text
/// Ra = g β |Ts - Ta| L³ / (ν α)      Pr = ν / α
///
/// laminar:             h = (k/L) (0.68 + 0.67 Ra^(1/4) / [1 + (0.492/Pr)^(9/16)]^(4/9))
/// laminar + turbulent: h = (k/L) (0.825 + 0.387 Ra^(1/6) / [1 + (0.492/Pr)^(9/16)]^(8/27))²
/// ```
///
/// # Input
///
/// * `char_len` -- characteristic length L (m)
/// * `temp_surf_k` -- surface temperature (K)
/// * `temp_air_k` -- air temperature (K)
/// * `air_flow` -- selects the correlation
pub fn convective_coefficient(char_len: f64, temp_surf_k: f64, temp_air_k: f64, air_flow: AirFlow) -> f64 {
    let k = air_conductivity(temp_air_k);
    let rho = air_density(temp_air_k);
    let nu = air_dyn_viscosity(temp_air_k) / rho;
    let alpha = k / (rho * air_heat_capacity(temp_air_k));
    let beta = 1.0 / temp_air_k;
    let ra = (GRAVITY * beta / (nu * alpha)) * f64::abs(temp_surf_k - temp_air_k) * char_len * char_len * char_len;
    let pr = nu / alpha;
    let den = 1.0 + f64::powf(0.492 / pr, 9.0 / 16.0);
    match air_flow {
        AirFlow::Laminar => (k / char_len) * (0.68 + 0.67 * f64::powf(ra, 0.25) / f64::powf(den, 4.0 / 9.0)),
        AirFlow::LaminarTurbulent => {
            let a = 0.825 + 0.387 * f64::powf(ra, 1.0 / 6.0) / f64::powf(den, 8.0 / 27.0);
            (k / char_len) * a * a
        }
    }
}

/// Calculates the linearized radiative coefficient (W/m²K)
///
/// ```text
/// h = ε σ (Ts + Ta) (Ts² + Ta²)
/// ```
pub fn radiative_coefficient(emissivity: f64, temp_surf_k: f64, temp_air_k: f64) -> f64 {
    emissivity
        * STEFAN_BOLTZMANN
        * (temp_surf_k + temp_air_k)
        * (temp_surf_k * temp_surf_k + temp_air_k * temp_air_k)
}

/// Implements the heat transfer between a surface of the wall and the surrounding air
#[derive(Clone, Copy, Debug)]
pub struct SurfaceModel {
    /// Characteristic length (m)
    pub char_len: f64,

    /// Emissivity of the surface
    pub emissivity: f64,

    /// Convection correlation
    pub air_flow: AirFlow,

    /// Includes the radiative term
    pub radiation: bool,
}

impl SurfaceModel {
    /// Allocates the model of the inner surface (facing the gas)
    pub fn inner(structure: &Structure, config: &Config) -> Self {
        SurfaceModel {
            char_len: structure.char_len,
            emissivity: structure.emissivity,
            air_flow: config.air_flow,
            radiation: config.radiation_in,
        }
    }

    /// Allocates the model of the outer surface (facing the external air)
    pub fn outer(structure: &Structure, config: &Config) -> Self {
        SurfaceModel {
            char_len: structure.char_len,
            emissivity: structure.emissivity,
            air_flow: config.air_flow,
            radiation: config.radiation_out,
        }
    }

    /// Calculates the surface heat transfer coefficient (W/m²K)
    ///
    /// # Input
    ///
    /// * `temp_surf` -- surface temperature (°C)
    /// * `temp_air` -- air temperature (°C)
    pub fn coefficient(&self, temp_surf: f64, temp_air: f64) -> f64 {
        let ts = celsius_to_kelvin(temp_surf);
        let ta = celsius_to_kelvin(temp_air);
        let conv = convective_coefficient(self.char_len, ts, ta, self.air_flow);
        if self.radiation {
            conv + radiative_coefficient(self.emissivity, ts, ta)
        } else {
            conv
        }
    }

    /// Calculates the surface resistance (m²K/W)
    pub fn resistance(&self, temp_surf: f64, temp_air: f64) -> f64 {
        1.0 / self.coefficient(temp_surf, temp_air)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
