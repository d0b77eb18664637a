use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds a tabulated series `(time, value)` with piecewise-linear interpolation
///
/// JSON format: `{"time": [t0, t1, ...], "value": [v0, v1, ...]}`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Table {
    /// Strictly increasing times
    pub time: Vec<f64>,

    /// Values at each time
    pub value: Vec<f64>,
}

impl Table {
    /// Allocates a new instance
    pub fn new(time: &[f64], value: &[f64]) -> Result<Self, StrError> {
        let table = Table {
            time: time.to_vec(),
            value: value.to_vec(),
        };
        table.check()?;
        Ok(table)
    }

    /// Reads a JSON file containing the table
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
        let table: Table = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        table.check()?;
        Ok(table)
    }

    /// Checks the consistency of the data
    fn check(&self) -> Result<(), StrError> {
        if self.time.len() != self.value.len() {
            return Err("table time and value arrays must have the same length");
        }
        if self.time.len() < 2 {
            return Err("table must have at least two points");
        }
        if self.time.iter().chain(self.value.iter()).any(|x| !x.is_finite()) {
            return Err("table contains NaN or Inf");
        }
        for i in 1..self.time.len() {
            if self.time[i] <= self.time[i - 1] {
                return Err("table times must be strictly increasing");
            }
        }
        Ok(())
    }

    /// Returns the first tabulated time
    pub fn t_min(&self) -> f64 {
        self.time[0]
    }

    /// Returns the last tabulated time
    pub fn t_max(&self) -> f64 {
        self.time[self.time.len() - 1]
    }

    /// Returns true if the table is consistent and covers the interval `[t_start, t_end]`
    pub fn covers(&self, t_start: f64, t_end: f64) -> bool {
        self.check().is_ok() && self.t_min() <= t_start && t_end <= self.t_max()
    }

    /// Calculates the value at a given time
    ///
    /// Returns an error if `t` is outside the tabulated domain.
    pub fn eval(&self, t: f64) -> Result<f64, StrError> {
        self.check()?;
        if !(t >= self.t_min() && t <= self.t_max()) {
            return Err("time is outside the table domain");
        }
        // index of the first time that is greater than t
        let k = self.time.partition_point(|ti| *ti <= t);
        if k >= self.time.len() {
            return Ok(self.value[self.value.len() - 1]);
        }
        let (t0, t1) = (self.time[k - 1], self.time[k]);
        let (v0, v1) = (self.value[k - 1], self.value[k]);
        Ok(v0 + (v1 - v0) * (t - t0) / (t1 - t0))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Table;
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            Table::new(&[0.0, 1.0], &[1.0]).err(),
            Some("table time and value arrays must have the same length")
        );
        assert_eq!(
            Table::new(&[0.0], &[1.0]).err(),
            Some("table must have at least two points")
        );
        assert_eq!(
            Table::new(&[0.0, 1.0], &[1.0, f64::NAN]).err(),
            Some("table contains NaN or Inf")
        );
        assert_eq!(
            Table::new(&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).err(),
            Some("table times must be strictly increasing")
        );
    }

    #[test]
    fn eval_works() {
        let table = Table::new(&[0.0, 10.0, 30.0], &[20.0, 120.0, 100.0]).unwrap();
        assert_eq!(table.t_min(), 0.0);
        assert_eq!(table.t_max(), 30.0);
        assert!(table.covers(0.0, 30.0));
        assert!(!table.covers(0.0, 30.1));
        approx_eq(table.eval(0.0).unwrap(), 20.0, 1e-15);
        approx_eq(table.eval(5.0).unwrap(), 70.0, 1e-15);
        approx_eq(table.eval(10.0).unwrap(), 120.0, 1e-15);
        approx_eq(table.eval(20.0).unwrap(), 110.0, 1e-15);
        approx_eq(table.eval(30.0).unwrap(), 100.0, 1e-15);
        assert_eq!(table.eval(-1.0).err(), Some("time is outside the table domain"));
        assert_eq!(table.eval(31.0).err(), Some("time is outside the table domain"));
        assert_eq!(table.eval(f64::NAN).err(), Some("time is outside the table domain"));
    }

    #[test]
    fn struct_literal_tables_are_checked() {
        let empty = Table {
            time: Vec::new(),
            value: Vec::new(),
        };
        assert!(!empty.covers(0.0, 1.0));
        assert_eq!(empty.eval(0.0).err(), Some("table must have at least two points"));
        let decreasing = Table {
            time: vec![0.0, 10.0, 5.0],
            value: vec![1.0, 2.0, 3.0],
        };
        assert!(!decreasing.covers(0.0, 5.0));
        assert_eq!(decreasing.eval(1.0).err(), Some("table times must be strictly increasing"));
    }

    #[test]
    fn read_json_works() {
        let table = Table::read_json("data/tables/gas_temperature.json").unwrap();
        assert_eq!(table.t_min(), 0.0);
        assert!(table.t_max() >= 3600.0);
        assert_eq!(
            Table::read_json("/tmp/wallsim/__not_found__.json").err(),
            Some("cannot open file")
        );
    }
}
