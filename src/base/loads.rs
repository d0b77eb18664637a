use super::{Structure, Table};
use crate::StrError;

/// Holds the thermal and mechanical actions on the wall
///
/// The loads are immutable after construction. The tables must cover the whole analysis.
#[derive(Clone, Debug)]
pub struct Loads {
    /// Internal air temperature during normal operation (°C)
    pub temp_air_int: f64,

    /// External air temperature (°C)
    pub temp_air_ext: f64,

    /// External pressure (MPa)
    pub pressure_ext: f64,

    /// Internal gas temperature (°C) as a function of time (s)
    pub gas_temperature: Table,

    /// Internal gas pressure (MPa) as a function of time (s)
    pub gas_pressure: Table,
}

impl Loads {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `structure` -- gives the operating and external conditions
    /// * `gas_temperature` -- tabulated internal gas temperature (°C)
    /// * `gas_pressure` -- tabulated internal gas pressure (MPa)
    /// * `duration` -- duration of the analysis; the tables must cover `[0, duration]`
    pub fn new(structure: &Structure, gas_temperature: Table, gas_pressure: Table, duration: f64) -> Result<Self, StrError> {
        if !gas_temperature.covers(0.0, duration) {
            return Err("the gas temperature table must cover the whole analysis");
        }
        if !gas_pressure.covers(0.0, duration) {
            return Err("the gas pressure table must cover the whole analysis");
        }
        Ok(Loads {
            temp_air_int: structure.temp_air_int,
            temp_air_ext: structure.temp_air_ext,
            pressure_ext: structure.pressure_ext,
            gas_temperature,
            gas_pressure,
        })
    }

    /// Returns the internal gas temperature at time t
    pub fn temp_gas(&self, t: f64) -> Result<f64, StrError> {
        self.gas_temperature.eval(t)
    }

    /// Returns the internal gas pressure at time t
    pub fn pressure_gas(&self, t: f64) -> Result<f64, StrError> {
        self.gas_pressure.eval(t)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Loads;
    use crate::base::{Samples, Table};
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        let structure = Samples::structure_small();
        let short = Table::new(&[0.0, 10.0], &[20.0, 150.0]).unwrap();
        let long = Table::new(&[0.0, 100.0], &[0.1, 0.4]).unwrap();
        assert_eq!(
            Loads::new(&structure, short.clone(), long.clone(), 50.0).err(),
            Some("the gas temperature table must cover the whole analysis")
        );
        assert_eq!(
            Loads::new(&structure, long.clone(), short.clone(), 50.0).err(),
            Some("the gas pressure table must cover the whole analysis")
        );
        let late = Table::new(&[1.0, 100.0], &[0.1, 0.4]).unwrap();
        assert_eq!(
            Loads::new(&structure, late, long, 50.0).err(),
            Some("the gas temperature table must cover the whole analysis")
        );
    }

    #[test]
    fn new_works() {
        let structure = Samples::structure_small();
        let temperature = Table::new(&[0.0, 100.0], &[20.0, 150.0]).unwrap();
        let pressure = Table::new(&[0.0, 100.0], &[0.1, 0.4]).unwrap();
        let loads = Loads::new(&structure, temperature, pressure, 100.0).unwrap();
        assert_eq!(loads.temp_air_int, structure.temp_air_int);
        assert_eq!(loads.temp_air_ext, structure.temp_air_ext);
        assert_eq!(loads.pressure_ext, structure.pressure_ext);
        approx_eq(loads.temp_gas(50.0).unwrap(), 85.0, 1e-14);
        approx_eq(loads.pressure_gas(50.0).unwrap(), 0.25, 1e-15);
        assert_eq!(loads.temp_gas(101.0).err(), Some("time is outside the table domain"));
    }
}
