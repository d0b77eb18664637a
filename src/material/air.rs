use crate::base::ZERO_CELSIUS;

/// Calculates the thermal conductivity of air (W/mK)
///
/// # Input
///
/// * `temp_k` -- temperature in K
pub fn air_conductivity(temp_k: f64) -> f64 {
    let t = temp_k - ZERO_CELSIUS;
    418.4 * 5.75 * (1.0 + 0.00317 * t - 0.0000021 * t * t) / 1e5
}

/// Calculates the dynamic viscosity of air (Ns/m²) with Sutherland's law
///
/// # Input
///
/// * `temp_k` -- temperature in K
pub fn air_dyn_viscosity(temp_k: f64) -> f64 {
    1.716 * f64::powf(temp_k / 273.11, 1.5) * ((273.11 + 110.56) / (temp_k + 110.56)) / 1e5
}

/// Calculates the density of air (kg/m³) at the standard atmospheric pressure
///
/// # Input
///
/// * `temp_k` -- temperature in K
pub fn air_density(temp_k: f64) -> f64 {
    101325.0 / (287.058 * temp_k)
}

/// Calculates the specific heat of air (J/kgK)
///
/// # Input
///
/// * `temp_k` -- temperature in K
pub fn air_heat_capacity(temp_k: f64) -> f64 {
    let d = temp_k - 300.0;
    717.8 + 0.07075 * d + 0.00026125 * d * d
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
