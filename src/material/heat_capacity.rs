use crate::base::{Material, Structure, STEEL_DENSITY};

/// Calculates the specific heat of steel (J/kgK)
///
/// ```text
/// cp = 425 + 0.773 T - 1.69e-3 T² + 2.22e-6 T³   if T < 600 °C
/// cp = 666 + 13002 / (738 - T)                    if 600 ≤ T < 735 °C
/// cp = 545 + 17820 / (T - 731)                    if 735 ≤ T < 900 °C
/// cp = 650                                        otherwise
/// ```
pub fn steel_specific_heat(temp: f64) -> f64 {
    if temp < 600.0 {
        425.0 + 0.773 * temp - 1.69e-3 * temp * temp + 2.22e-6 * temp * temp * temp
    } else if temp < 735.0 {
        666.0 + 13002.0 / (738.0 - temp)
    } else if temp < 900.0 {
        545.0 + 17820.0 / (temp - 731.0)
    } else {
        650.0
    }
}

/// Returns the peak specific heat of concrete (J/kgK) due to the evaporation of water
///
/// Interpolates (0 %, 900), (1.5 %, 1470), and (3 %, 2020); extrapolates the last segment above 3 %.
///
/// # Input
///
/// * `water_content` -- percentage of the concrete weight
pub fn concrete_peak_specific_heat(water_content: f64) -> f64 {
    if water_content <= 1.5 {
        900.0 + (1470.0 - 900.0) * water_content / 1.5
    } else {
        1470.0 + (2020.0 - 1470.0) * (water_content - 1.5) / 1.5
    }
}

/// Calculates the specific heat of concrete (J/kgK)
///
/// ```text
/// cp = 900                                  if T ≤ 100 °C
/// cp = peak                                 if 100 < T ≤ 115 °C
/// cp = peak - (peak - 1000) (T - 115) / 85  if 115 < T ≤ 200 °C
/// cp = 1000 + (T - 200) / 2                 if 200 < T ≤ 400 °C
/// cp = 1100                                 otherwise
/// ```
pub fn concrete_specific_heat(temp: f64, water_content: f64) -> f64 {
    if temp <= 100.0 {
        900.0
    } else if temp <= 115.0 {
        concrete_peak_specific_heat(water_content)
    } else if temp <= 200.0 {
        let peak = concrete_peak_specific_heat(water_content);
        peak - (peak - 1000.0) * (temp - 115.0) / 85.0
    } else if temp <= 400.0 {
        1000.0 + (temp - 200.0) / 2.0
    } else {
        1100.0
    }
}

/// Calculates the density of concrete (kg/m³) reduced by the loss of water
///
/// # Input
///
/// * `temp` -- temperature in °C
/// * `density` -- density at 20 °C
pub fn concrete_density(temp: f64, density: f64) -> f64 {
    if temp <= 115.0 {
        density
    } else if temp <= 200.0 {
        density * (1.0 - 0.02 * (temp - 115.0) / 85.0)
    } else if temp <= 400.0 {
        density * (0.98 - 0.03 * (temp - 200.0) / 200.0)
    } else {
        density * (0.95 - 0.07 * (temp - 400.0) / 800.0)
    }
}

/// Calculates the volumetric heat capacity of steel (J/m³K)
pub fn steel_volumetric_heat_capacity(temp: f64) -> f64 {
    STEEL_DENSITY * steel_specific_heat(temp)
}

/// Calculates the volumetric heat capacity of concrete (J/m³K)
pub fn concrete_volumetric_heat_capacity(temp: f64, density: f64, water_content: f64) -> f64 {
    concrete_density(temp, density) * concrete_specific_heat(temp, water_content)
}

/// Calculates the volumetric heat capacity of a material of the wall (J/m³K)
#[inline]
pub fn volumetric_heat_capacity(material: Material, temp: f64, structure: &Structure) -> f64 {
    match material {
        Material::Steel => steel_volumetric_heat_capacity(temp),
        Material::Concrete => concrete_volumetric_heat_capacity(temp, structure.density, structure.water_content),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
