use crate::base::{ConductivityBound, Material};

/// Calculates the thermal conductivity of steel (W/mK)
///
/// ```text
/// k = 54 - 3.33 T / 100   if T ≤ 800 °C
/// k = 27.3                otherwise
/// ```
///
/// # Input
///
/// * `temp` -- temperature in °C
pub fn steel_conductivity(temp: f64) -> f64 {
    if temp <= 800.0 {
        54.0 - 3.33 * temp / 100.0
    } else {
        27.3
    }
}

/// Calculates the thermal conductivity of concrete (W/mK)
///
/// ```text
/// upper: k = 2 - 0.2451 (T/100) + 0.0107 (T/100)²
/// lower: k = 1.36 - 0.136 (T/100) + 0.0057 (T/100)²
/// ```
///
/// # Input
///
/// * `temp` -- temperature in °C
/// * `bound` -- selects the lower or upper limit curve
pub fn concrete_conductivity(temp: f64, bound: ConductivityBound) -> f64 {
    let t = temp / 100.0;
    match bound {
        ConductivityBound::Upper => 2.0 - 0.2451 * t + 0.0107 * t * t,
        ConductivityBound::Lower => 1.36 - 0.136 * t + 0.0057 * t * t,
    }
}

/// Calculates the thermal conductivity of a material (W/mK)
#[inline]
pub fn conductivity(material: Material, temp: f64, bound: ConductivityBound) -> f64 {
    match material {
        Material::Steel => steel_conductivity(temp),
        Material::Concrete => concrete_conductivity(temp, bound),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{concrete_conductivity, conductivity, steel_conductivity};
    use crate::base::{ConductivityBound, Material};
    use russell_lab::approx_eq;

    #[test]
    fn steel_conductivity_works() {
        approx_eq(steel_conductivity(0.0), 54.0, 1e-15);
        approx_eq(steel_conductivity(100.0), 50.67, 1e-13);
        approx_eq(steel_conductivity(800.0), 27.36, 1e-13);
        approx_eq(steel_conductivity(800.1), 27.3, 1e-15);
        approx_eq(steel_conductivity(1200.0), 27.3, 1e-15);
    }

    #[test]
    fn concrete_conductivity_works() {
        approx_eq(concrete_conductivity(0.0, ConductivityBound::Upper), 2.0, 1e-15);
        approx_eq(concrete_conductivity(100.0, ConductivityBound::Upper), 1.7656, 1e-14);
        approx_eq(concrete_conductivity(0.0, ConductivityBound::Lower), 1.36, 1e-15);
        approx_eq(concrete_conductivity(100.0, ConductivityBound::Lower), 1.2297, 1e-14);
        for temp in [20.0, 200.0, 600.0, 1000.0] {
            assert!(
                concrete_conductivity(temp, ConductivityBound::Lower)
                    < concrete_conductivity(temp, ConductivityBound::Upper)
            );
        }
    }

    #[test]
    fn conductivity_works() {
        let bound = ConductivityBound::Upper;
        assert_eq!(conductivity(Material::Steel, 50.0, bound), steel_conductivity(50.0));
        assert_eq!(
            conductivity(Material::Concrete, 50.0, bound),
            concrete_conductivity(50.0, bound)
        );
    }
}
