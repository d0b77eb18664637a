use super::Material;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the physical and geometric parameters of the composite wall
///
/// Units: lengths in m, moduli and stresses in MPa, temperatures in °C.
///
/// ```text
///  axis        inner face                                outer face
///   |            |                                           |
///   |<-radius_in->|steel_in|        concrete        |steel_out|
///   |            |        |                        |         |
///  gas (LOCA)  ->                                            <- outer air
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Structure {
    /// Thickness of the inner steel liner (may be zero)
    pub steel_thick_in: f64,

    /// Thickness of the concrete body (> 0)
    pub concrete_thick: f64,

    /// Thickness of the outer steel liner (may be zero)
    pub steel_thick_out: f64,

    /// Inner radius of the wall (measured from the axis to the inner face)
    pub radius_in: f64,

    /// Young's modulus of concrete (MPa)
    pub modulus_concrete: f64,

    /// Young's modulus of steel (MPa)
    pub modulus_steel: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    /// Coefficient of thermal expansion (1/K)
    pub therm_expan_coeff: f64,

    /// Density of concrete at 20 °C (kg/m³)
    pub density: f64,

    /// Water content of concrete (% of weight)
    pub water_content: f64,

    /// Emissivity of the surfaces
    pub emissivity: f64,

    /// Characteristic length for natural convection (m)
    pub char_len: f64,

    /// Stress in the prestressing tendons (MPa)
    pub tendons_stress: f64,

    /// Area of the prestressing tendons per unit height of the wall (m²/m)
    pub tendons_area: f64,

    /// Multiplier of the prestressing stresses
    pub prestressing_coeff: f64,

    /// Multiplier of the internal gas pressure (applied after the operating state)
    pub pressure_coeff: f64,

    /// Internal air temperature during normal operation (°C)
    pub temp_air_int: f64,

    /// External air temperature (°C)
    pub temp_air_ext: f64,

    /// External pressure (MPa)
    pub pressure_ext: f64,

    /// Length of the finite elements (m)
    pub element_length: f64,

    /// Width of the analysed strip (m)
    pub width: f64,
}

impl Structure {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        let positive = [
            ("concrete_thick", self.concrete_thick),
            ("radius_in", self.radius_in),
            ("modulus_concrete", self.modulus_concrete),
            ("modulus_steel", self.modulus_steel),
            ("density", self.density),
            ("char_len", self.char_len),
            ("element_length", self.element_length),
            ("width", self.width),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Some(format!("{} = {:?} is incorrect; it must be > 0.0", name, value));
            }
        }
        let non_negative = [
            ("steel_thick_in", self.steel_thick_in),
            ("steel_thick_out", self.steel_thick_out),
            ("therm_expan_coeff", self.therm_expan_coeff),
            ("water_content", self.water_content),
            ("emissivity", self.emissivity),
            ("tendons_stress", self.tendons_stress),
            ("tendons_area", self.tendons_area),
            ("prestressing_coeff", self.prestressing_coeff),
            ("pressure_coeff", self.pressure_coeff),
            ("pressure_ext", self.pressure_ext),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Some(format!("{} = {:?} is incorrect; it must be ≥ 0.0", name, value));
            }
        }
        if !(self.poisson >= 0.0 && self.poisson < 0.5) {
            return Some(format!(
                "poisson = {:?} is incorrect; it must be in [0.0, 0.5)",
                self.poisson
            ));
        }
        if self.emissivity > 1.0 {
            return Some(format!(
                "emissivity = {:?} is incorrect; it must be ≤ 1.0",
                self.emissivity
            ));
        }
        if self.element_length > self.length() {
            return Some(format!(
                "element_length = {:?} is incorrect; it must be ≤ the wall thickness",
                self.element_length
            ));
        }
        None // all good
    }

    /// Returns the total thickness of the wall
    pub fn length(&self) -> f64 {
        self.steel_thick_in + self.concrete_thick + self.steel_thick_out
    }

    /// Returns the outer radius of the wall
    pub fn radius_out(&self) -> f64 {
        self.radius_in + self.length()
    }

    /// Returns the radius of the prestressing tendons (mid-depth of the concrete body)
    pub fn radius_tendons(&self) -> f64 {
        self.radius_in + self.steel_thick_in + self.concrete_thick / 2.0
    }

    /// Returns true if the inner steel liner exists
    pub fn has_inner_steel(&self) -> bool {
        self.steel_thick_in > 0.0
    }

    /// Returns true if the outer steel liner exists
    pub fn has_outer_steel(&self) -> bool {
        self.steel_thick_out > 0.0
    }

    /// Returns the ratio between the steel and concrete moduli
    pub fn modulus_ratio(&self) -> f64 {
        self.modulus_steel / self.modulus_concrete
    }

    /// Returns the thickness-weighted average modulus of the composite wall
    pub fn modulus_total(&self) -> f64 {
        (self.modulus_concrete * self.concrete_thick
            + self.modulus_steel * (self.steel_thick_in + self.steel_thick_out))
            / self.length()
    }

    /// Returns the Young's modulus of a material
    #[inline]
    pub fn modulus(&self, material: Material) -> f64 {
        match material {
            Material::Steel => self.modulus_steel,
            Material::Concrete => self.modulus_concrete,
        }
    }

    /// Returns the centroid (from the inner face), the second moment of area, and the area of the transformed section
    ///
    /// The steel layers are transformed into concrete by widening them with the modulus ratio.
    pub fn section_characteristics(&self) -> (f64, f64, f64) {
        let n = self.modulus_ratio();
        let (b1, b2, b3) = (self.width * n, self.width, self.width * n);
        let (h1, h2, h3) = (self.steel_thick_in, self.concrete_thick, self.steel_thick_out);
        let (a1, a2, a3) = (b1 * h1, b2 * h2, b3 * h3);
        let (c1, c2, c3) = (h1 / 2.0, h1 + h2 / 2.0, h1 + h2 + h3 / 2.0);
        let area = a1 + a2 + a3;
        let center = (a1 * c1 + a2 * c2 + a3 * c3) / area;
        let own = (b1 * h1 * h1 * h1 + b2 * h2 * h2 * h2 + b3 * h3 * h3 * h3) / 12.0;
        let steiner = a1 * (center - c1) * (center - c1)
            + a2 * (center - c2) * (center - c2)
            + a3 * (center - c3) * (center - c3);
        (center, own + steiner, area)
    }

    /// Returns the centroid of the transformed section (measured from the inner face)
    pub fn center_of_section(&self) -> f64 {
        self.section_characteristics().0
    }

    /// Returns the second moment of area of the transformed section
    pub fn inertia_of_section(&self) -> f64 {
        self.section_characteristics().1
    }

    /// Returns the area of the transformed section
    pub fn area_of_section(&self) -> f64 {
        self.section_characteristics().2
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
