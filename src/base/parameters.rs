use super::Structure;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the duration of the analysis and the time steps of the five LOCA phases (s)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct TimeParams {
    /// Duration of the analysis
    pub duration: f64,

    /// Time step during the first phase
    pub step_time_1: f64,

    /// Time step during the second phase
    pub step_time_2: f64,

    /// Time step during the third phase
    pub step_time_3: f64,

    /// Time step during the fourth phase
    pub step_time_4: f64,

    /// Time step during the fifth (last) phase
    pub step_time_5: f64,
}

/// Holds the flat set of input parameters of an analysis
///
/// Every key is required; a missing key is reported when reading the input.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Parameters {
    /// Physical and geometric parameters
    #[serde(flatten)]
    pub structure: Structure,

    /// Time parameters
    #[serde(flatten)]
    pub time: TimeParams,
}

impl TimeParams {
    /// Returns the time steps of the five phases
    pub fn steps(&self) -> [f64; 5] {
        [
            self.step_time_1,
            self.step_time_2,
            self.step_time_3,
            self.step_time_4,
            self.step_time_5,
        ]
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.duration > 0.0) {
            return Some(format!("duration = {:?} is incorrect; it must be > 0.0", self.duration));
        }
        for (i, step) in self.steps().iter().enumerate() {
            if !(*step > 0.0) {
                return Some(format!("step_time_{} = {:?} is incorrect; it must be > 0.0", i + 1, step));
            }
        }
        None // all good
    }
}

impl Parameters {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if let Some(msg) = self.structure.validate() {
            return Some(msg);
        }
        self.time.validate()
    }

    /// Reads a JSON file containing the parameters
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
        let params = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(params)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
