use super::{index_of_max, merge_tensile_and_compressive, row_maxima, row_minima, row_with_max_value, row_with_min_value};
use super::{Layer, RegionSplit};
use crate::base::{MeshSpace, Region, Results, Variant};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the evolution of the extreme stresses in a region for one structural variant
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StressEvolution {
    /// Region of the wall
    pub region: Region,

    /// Structural variant
    pub variant: Variant,

    /// Maximum stress at each time (tension)
    pub tension: Vec<f64>,

    /// Minimum stress at each time (compression)
    pub compression: Vec<f64>,

    /// Tension if positive; otherwise, compression
    pub merged: Vec<f64>,
}

/// Holds the post-processed results
///
/// The extreme steps are the indices of the times at which the following values are reached:
///
/// * `max_internal_pressure` and `max_temp_air` -- internal gas pressure and temperature
/// * `max_temp_<region>` -- temperature in a region
/// * `max_stress_<variant>_<region>` and `min_stress_<variant>_<region>` -- total stress
///
/// Absent regions have no entries.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Summary {
    /// Temperatures split by region
    pub temperature: RegionSplit,

    /// Total stresses (fixed variant) split by region
    pub stress_fixed: RegionSplit,

    /// Total stresses (clamped variant) split by region
    pub stress_clamped: RegionSplit,

    /// Total stresses (free variant) split by region
    pub stress_free: RegionSplit,

    /// Indices of the times with extreme values
    pub extreme_steps: BTreeMap<String, usize>,

    /// Evolutions of the extreme stresses for each present region and variant
    pub evolutions: Vec<StressEvolution>,
}

impl Summary {
    /// Allocates a new instance
    pub fn new(mesh: &MeshSpace, results: &Results) -> Result<Self, StrError> {
        let temperature = RegionSplit::new(&results.temperature, mesh)?;
        let stress_fixed = RegionSplit::new(results.stress_total(Variant::Fixed), mesh)?;
        let stress_clamped = RegionSplit::new(results.stress_total(Variant::Clamped), mesh)?;
        let stress_free = RegionSplit::new(results.stress_total(Variant::Free), mesh)?;

        let mut extreme_steps = BTreeMap::new();
        extreme_steps.insert(
            "max_internal_pressure".to_string(),
            index_of_max(results.pressure_air_int.as_data())?,
        );
        extreme_steps.insert("max_temp_air".to_string(), index_of_max(results.temp_air_int.as_data())?);
        for region in Region::ALL {
            if let Layer::Present(temp) = temperature.get(region) {
                extreme_steps.insert(format!("max_temp_{}", region), row_with_max_value(temp)?);
            }
        }

        let mut evolutions = Vec::new();
        for (variant, split) in [
            (Variant::Fixed, &stress_fixed),
            (Variant::Clamped, &stress_clamped),
            (Variant::Free, &stress_free),
        ] {
            for region in Region::ALL {
                if let Layer::Present(stress) = split.get(region) {
                    extreme_steps.insert(format!("max_stress_{}_{}", variant, region), row_with_max_value(stress)?);
                    extreme_steps.insert(format!("min_stress_{}_{}", variant, region), row_with_min_value(stress)?);
                    let tension = row_maxima(stress);
                    let compression = row_minima(stress);
                    let merged = merge_tensile_and_compressive(&tension, &compression)?;
                    evolutions.push(StressEvolution {
                        region,
                        variant,
                        tension,
                        compression,
                        merged,
                    });
                }
            }
        }

        Ok(Summary {
            temperature,
            stress_fixed,
            stress_clamped,
            stress_free,
            extreme_steps,
            evolutions,
        })
    }

    /// Returns the split total stresses of a structural variant
    pub fn stress(&self, variant: Variant) -> &RegionSplit {
        match variant {
            Variant::Fixed => &self.stress_fixed,
            Variant::Clamped => &self.stress_clamped,
            Variant::Free => &self.stress_free,
        }
    }

    /// Returns the stress evolution of a region and variant (None if the region is absent)
    pub fn evolution(&self, region: Region, variant: Variant) -> Option<&StressEvolution> {
        self.evolutions
            .iter()
            .find(|e| e.region == region && e.variant == variant)
    }

    /// Reads a JSON file containing the summary
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
        let summary = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(summary)
    }

    /// Writes a JSON file with the summary
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Summary;
    use crate::base::{Config, MeshSpace, MeshTime, Region, Results, Samples, Variant, DEFAULT_TEST_DIR};

    fn sample_results(mesh: &MeshSpace) -> Results {
        let mesh_time = MeshTime::new(&Samples::time_params_short(), &Config::new()).unwrap();
        let mut results = Results::new(mesh, &mesh_time);
        let nt = results.n_time();
        for i in 0..nt {
            results.temp_air_int[i] = if i == 2 { 80.0 } else { 20.0 };
            results.pressure_air_int[i] = 0.1 * (i as f64);
            for j in 0..mesh.node_count {
                results.temperature.set(i, j, 100.0 - (j as f64) + (i as f64));
                // compression growing in time at the inner steel; tension at step 1 elsewhere
                let fixed = if j < 3 { -(i as f64) } else if i == 1 { 1.0 } else { -0.5 };
                results.stress_total_fixed.set(i, j, fixed);
                results.stress_total_clamped.set(i, j, 2.0 * fixed);
                results.stress_total_free.set(i, j, 3.0 * fixed);
            }
        }
        results
    }

    #[test]
    fn summary_works() {
        let structure = Samples::structure_small();
        let mesh = MeshSpace::new(&structure).unwrap();
        let results = sample_results(&mesh);
        let summary = Summary::new(&mesh, &results).unwrap();
        let last = results.n_time() - 1;

        // 3 regions × 3 variants, 2 entries each, plus 2 air entries and 3 temperatures
        assert_eq!(summary.extreme_steps.len(), 23);
        assert_eq!(summary.extreme_steps["max_internal_pressure"], last);
        assert_eq!(summary.extreme_steps["max_temp_air"], 2);
        assert_eq!(summary.extreme_steps["max_temp_steel_inner"], last);
        assert_eq!(summary.extreme_steps["max_temp_concrete"], last);
        assert_eq!(summary.extreme_steps["min_stress_fixed_steel_inner"], last);
        assert_eq!(summary.extreme_steps["max_stress_fixed_steel_inner"], 0);
        assert_eq!(summary.extreme_steps["max_stress_free_concrete"], 1);
        assert_eq!(summary.extreme_steps["min_stress_clamped_concrete"], 0);

        assert_eq!(summary.evolutions.len(), 9);
        let evolution = summary.evolution(Region::Concrete, Variant::Clamped).unwrap();
        assert_eq!(evolution.tension, &[-1.0, 2.0, -1.0, -1.0, -1.0, -1.0]);
        assert_eq!(evolution.compression, &[-1.0, 2.0, -1.0, -1.0, -1.0, -1.0]);
        assert_eq!(evolution.merged, &[-1.0, 2.0, -1.0, -1.0, -1.0, -1.0]);
        let evolution = summary.evolution(Region::SteelIn, Variant::Fixed).unwrap();
        assert_eq!(evolution.tension, &[-0.0, -1.0, -2.0, -3.0, -4.0, -5.0]);
        assert_eq!(evolution.merged, &[-0.0, -1.0, -2.0, -3.0, -4.0, -5.0]);
    }

    #[test]
    fn absent_regions_are_skipped() {
        let mut structure = Samples::structure_small();
        structure.steel_thick_out = 0.0;
        structure.concrete_thick = 0.9;
        let mesh = MeshSpace::new(&structure).unwrap();
        let results = sample_results(&mesh);
        let summary = Summary::new(&mesh, &results).unwrap();
        assert!(!summary.stress_free.steel_out.is_present());
        assert!(summary.evolution(Region::SteelOut, Variant::Free).is_none());
        assert!(summary.extreme_steps.get("max_temp_steel_outer").is_none());
        assert!(summary.extreme_steps.get("max_stress_fixed_steel_outer").is_none());
        assert_eq!(summary.extreme_steps.len(), 16);
        assert_eq!(summary.evolutions.len(), 6);
    }

    #[test]
    fn write_and_read_json_work() {
        let structure = Samples::structure_small();
        let mesh = MeshSpace::new(&structure).unwrap();
        let results = sample_results(&mesh);
        let summary = Summary::new(&mesh, &results).unwrap();
        let path = format!("{}/summary_write_and_read.json", DEFAULT_TEST_DIR);
        summary.write_json(&path).unwrap();
        let read = Summary::read_json(&path).unwrap();
        assert_eq!(read.extreme_steps, summary.extreme_steps);
        assert_eq!(read.evolutions.len(), 9);
        assert_eq!(read.temperature.concatenate().as_data(), results.temperature.as_data());
    }
}
