use super::{Progress, Stage};
use crate::base::{Config, Loads, MeshSpace, MeshTime, Results, Structure, TimeParams};
use crate::fem::{operating_temperatures, SolverTransient};
use crate::post::Summary;
use crate::stress::{calc_pressure_stresses, calc_prestressing_stresses, calc_thermal_stresses, sum_all_stresses};
use crate::StrError;

/// Runs the thermal and stress analysis of the wall
///
/// The stages are executed in sequence and the first failure stops the run:
///
/// 1. operating (steady-state) temperatures, which become the initial temperatures
/// 2. transient heat conduction
/// 3. thermal, pressure, and prestressing stresses
/// 4. total stresses
/// 5. post-processing
pub struct Simulation {
    /// Holds the wall parameters
    pub structure: Structure,

    /// Holds the thermal and mechanical actions
    pub loads: Loads,

    /// Holds configuration parameters
    pub config: Config,

    /// Holds the spatial mesh
    pub mesh_space: MeshSpace,

    /// Holds the time axis
    pub mesh_time: MeshTime,
}

impl Simulation {
    /// Allocates a new instance
    pub fn new(structure: Structure, time: &TimeParams, loads: Loads, config: Config) -> Result<Self, StrError> {
        if let Some(_) = config.validate() {
            return Err("cannot run simulation because config.validate() failed");
        }
        if let Some(_) = structure.validate() {
            return Err("cannot run simulation because structure.validate() failed");
        }
        if let Some(_) = time.validate() {
            return Err("cannot run simulation because time.validate() failed");
        }
        if !loads.gas_temperature.covers(0.0, time.duration) || !loads.gas_pressure.covers(0.0, time.duration) {
            return Err("the loads must cover the whole analysis");
        }
        let mesh_space = MeshSpace::new(&structure)?;
        let mesh_time = MeshTime::new(time, &config)?;
        Ok(Simulation {
            structure,
            loads,
            config,
            mesh_space,
            mesh_time,
        })
    }

    /// Runs all stages
    pub fn run(&self, progress: &mut dyn Progress) -> Result<(Results, Summary), StrError> {
        let mut results = Results::new(&self.mesh_space, &self.mesh_time);

        // initial temperatures
        progress.stage_started(Stage::OperatingTemperatures);
        let operating = operating_temperatures(&self.structure, &self.mesh_space, &self.config)?;
        for j in 0..self.mesh_space.node_count {
            results.temperature_init[j] = operating.profile[j];
            results.temperature.set(0, j, operating.profile[j]);
        }
        results.temp_air_int[0] = self.loads.temp_air_int;
        results.htc_in[0] = operating.htc_in;
        results.htc_out[0] = operating.htc_out;
        progress.stage_finished(Stage::OperatingTemperatures);

        // temperature history
        let mut solver = SolverTransient::new(
            &self.structure,
            &self.config,
            &self.mesh_space,
            &self.mesh_time,
            &self.loads,
        )?;
        solver.solve(&mut results, progress)?;

        // stresses
        self.stage(progress, Stage::ThermalStresses, &mut results, |results| {
            calc_thermal_stresses(&self.structure, &self.mesh_space, results)
        })?;
        self.stage(progress, Stage::PressureStresses, &mut results, |results| {
            calc_pressure_stresses(&self.structure, &self.mesh_space, &self.loads, results)
        })?;
        self.stage(progress, Stage::PrestressingStresses, &mut results, |results| {
            calc_prestressing_stresses(&self.structure, &self.mesh_space, results)
        })?;
        self.stage(progress, Stage::TotalStresses, &mut results, |results| {
            sum_all_stresses(results);
            Ok(())
        })?;

        // post-processing
        if progress.should_abort() {
            return Err("simulation aborted");
        }
        progress.stage_started(Stage::PostProcessing);
        let summary = Summary::new(&self.mesh_space, &results)?;
        progress.stage_finished(Stage::PostProcessing);
        Ok((results, summary))
    }

    /// Runs a stage that updates the results
    fn stage<F>(&self, progress: &mut dyn Progress, stage: Stage, results: &mut Results, f: F) -> Result<(), StrError>
    where
        F: FnOnce(&mut Results) -> Result<(), StrError>,
    {
        if progress.should_abort() {
            return Err("simulation aborted");
        }
        progress.stage_started(stage);
        f(results)?;
        progress.stage_finished(stage);
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
