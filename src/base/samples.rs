use super::{Loads, Structure, Table, TimeParams};

/// Holds some sample structures, time parameters, and loads
pub struct Samples;

impl Samples {
    /// Returns a small wall with inner and outer steel liners (10 elements with dx = 0.1 m)
    ///
    /// ```text
    /// |steel 0.1|      concrete 0.8      |steel 0.1|
    /// ```
    pub fn structure_small() -> Structure {
        Structure {
            steel_thick_in: 0.1,
            concrete_thick: 0.8,
            steel_thick_out: 0.1,
            radius_in: 10.0,
            modulus_concrete: 30_000.0, // MPa
            modulus_steel: 200_000.0,   // MPa
            poisson: 0.2,
            therm_expan_coeff: 1e-5,
            density: 2400.0,
            water_content: 1.5,
            emissivity: 0.8,
            char_len: 1.0,
            tendons_stress: 1000.0, // MPa
            tendons_area: 0.002,    // m²/m
            prestressing_coeff: 1.0,
            pressure_coeff: 1.0,
            temp_air_int: 20.0,
            temp_air_ext: 10.0,
            pressure_ext: 0.1, // MPa
            element_length: 0.1,
            width: 1.0,
        }
    }

    /// Returns a containment wall with an 8 mm inner steel liner and 1.2 m of concrete
    pub fn structure_loca() -> Structure {
        Structure {
            steel_thick_in: 0.008,
            concrete_thick: 1.2,
            steel_thick_out: 0.0,
            radius_in: 21.0,
            modulus_concrete: 34_000.0,
            modulus_steel: 210_000.0,
            poisson: 0.2,
            therm_expan_coeff: 1.2e-5,
            density: 2400.0,
            water_content: 3.0,
            emissivity: 0.9,
            char_len: 3.0,
            tendons_stress: 1100.0,
            tendons_area: 0.0025,
            prestressing_coeff: 1.0,
            pressure_coeff: 1.0,
            temp_air_int: 40.0,
            temp_air_ext: 15.0,
            pressure_ext: 0.1,
            element_length: 0.004,
            width: 1.0,
        }
    }

    /// Returns a short analysis with five steps of 2 s
    pub fn time_params_short() -> TimeParams {
        TimeParams {
            duration: 10.0,
            step_time_1: 2.0,
            step_time_2: 2.0,
            step_time_3: 2.0,
            step_time_4: 2.0,
            step_time_5: 2.0,
        }
    }

    /// Returns one hour of LOCA with increasing time steps
    pub fn time_params_loca() -> TimeParams {
        TimeParams {
            duration: 3600.0,
            step_time_1: 1.0,
            step_time_2: 5.0,
            step_time_3: 20.0,
            step_time_4: 60.0,
            step_time_5: 300.0,
        }
    }

    /// Returns loads with the gas temperature equal to the operating temperature and constant gas pressure
    pub fn loads_constant(structure: &Structure, duration: f64, pressure_gas: f64) -> Loads {
        Loads {
            temp_air_int: structure.temp_air_int,
            temp_air_ext: structure.temp_air_ext,
            pressure_ext: structure.pressure_ext,
            gas_temperature: Table {
                time: vec![0.0, duration],
                value: vec![structure.temp_air_int, structure.temp_air_int],
            },
            gas_pressure: Table {
                time: vec![0.0, duration],
                value: vec![pressure_gas, pressure_gas],
            },
        }
    }

    /// Returns loads with a gas temperature jump to `temp_peak` at t = 0⁺ and a linear pressure ramp
    pub fn loads_shock(structure: &Structure, duration: f64, temp_peak: f64, pressure_peak: f64) -> Loads {
        let t_jump = f64::min(1e-3, duration / 2.0);
        Loads {
            temp_air_int: structure.temp_air_int,
            temp_air_ext: structure.temp_air_ext,
            pressure_ext: structure.pressure_ext,
            gas_temperature: Table {
                time: vec![0.0, t_jump, duration],
                value: vec![structure.temp_air_int, temp_peak, temp_peak],
            },
            gas_pressure: Table {
                time: vec![0.0, duration],
                value: vec![structure.pressure_ext, pressure_peak],
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
