/// Defines the directory where the simulation result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/wallsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/wallsim/test";

/// Stefan-Boltzmann constant (W/(m² K⁴))
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Offset between Celsius and Kelvin scales
pub const ZERO_CELSIUS: f64 = 273.15;

/// Gravity acceleration used in the natural-convection correlation (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Density of the steel liners (kg/m³)
pub const STEEL_DENSITY: f64 = 7850.0;

/// Maximum end times of the first four LOCA phases (s)
///
/// The fifth phase lasts until the end of the analysis.
pub const PHASE_ENDS_MAX: [f64; 4] = [300.0, 1800.0, 7200.0, 86400.0];

/// Converts a temperature from Celsius to Kelvin
#[inline]
pub fn celsius_to_kelvin(temp: f64) -> f64 {
    temp + ZERO_CELSIUS
}
