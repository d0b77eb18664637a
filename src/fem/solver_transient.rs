use super::{BoundaryFlux, ControlConvergence, Elements, LinearSystem};
use crate::base::{Config, Linearization, Loads, MeshSpace, MeshTime, Results, Structure};
use crate::sim::{Progress, Stage};
use crate::StrError;
use russell_lab::Vector;

/// Implements the implicit (backward Euler) solver of the nonlinear transient heat conduction
///
/// For each time step, the Newton-Raphson method solves:
///
/// ```text
/// R(Tf) = C (Tf - Tc) / Δt + K Tf + F(Tf) = 0
///
/// J = C / Δt + K + diag(f h)
/// ```
///
/// where `Tc` holds the known temperatures and `Tf` the future ones.
pub struct SolverTransient<'a> {
    /// Holds configuration parameters
    pub config: &'a Config,

    /// Holds the time axis
    pub mesh_time: &'a MeshTime,

    /// Holds the thermal actions
    pub loads: &'a Loads,

    /// Holds a collection of elements
    pub elements: Elements<'a>,

    /// Holds the surface fluxes
    pub boundary: BoundaryFlux,

    /// Holds variables to solve the global linear system
    pub linear_system: LinearSystem<'a>,
}

impl<'a> SolverTransient<'a> {
    /// Allocates a new instance
    pub fn new(
        structure: &'a Structure,
        config: &'a Config,
        mesh_space: &MeshSpace,
        mesh_time: &'a MeshTime,
        loads: &'a Loads,
    ) -> Result<Self, StrError> {
        if let Some(_) = config.validate() {
            return Err("cannot allocate solver because config.validate() failed");
        }
        Ok(SolverTransient {
            config,
            mesh_time,
            loads,
            elements: Elements::new(mesh_space, structure, config),
            boundary: BoundaryFlux::new(mesh_space, structure, config),
            linear_system: LinearSystem::new(mesh_space)?,
        })
    }

    /// Solves the transient problem
    ///
    /// The first row of `results.temperature` must hold the initial (operating) temperatures.
    /// Every other row is filled step by step together with the internal gas temperature
    /// and the surface heat transfer coefficients.
    pub fn solve(&mut self, results: &mut Results, progress: &mut dyn Progress) -> Result<(), StrError> {
        let n_node = self.linear_system.n_equation;
        if results.n_node() != n_node || results.n_time() != self.mesh_time.times_count() {
            return Err("results are incompatible with the meshes");
        }

        // accessors
        let config = self.config;
        let rr = &mut self.linear_system.rr;
        let kk = &mut self.linear_system.kk;
        let mdu = &mut self.linear_system.mdu;
        let temp_ext = self.loads.temp_air_ext;

        // current (known) and future (trial) temperatures
        let mut tc = Vector::new(n_node);
        let mut tf = Vector::new(n_node);
        for j in 0..n_node {
            tc[j] = results.temperature.get(0, j);
        }

        // allocate convergence control
        let mut control = ControlConvergence::new(config);

        // time loop
        let n_steps = self.mesh_time.time_steps_count();
        progress.stage_started(Stage::Transient);
        for step in 0..n_steps {
            if progress.should_abort() {
                return Err("simulation aborted");
            }

            // time and actions at the end of the step
            let dt = self.mesh_time.dt(step);
            let t_next = self.mesh_time.time(step + 1);
            let temp_gas = self.loads.temp_gas(t_next)?;
            progress.time_step(step, n_steps, t_next, dt);

            // warm start
            for j in 0..n_node {
                tf[j] = tc[j];
            }

            // frozen coefficients use the known temperatures
            self.elements.update(&tc);

            // iterations
            control.reset();
            let mut coefficients = (0.0, 0.0);
            // the last pass only checks the residual after n_max_iterations corrections
            for iteration in 0..=config.n_max_iterations {
                if config.linearization == Linearization::Reassembled && iteration > 0 {
                    self.elements.update(&tf);
                }

                // residual vector
                rr.fill(0.0);
                self.elements.assemble_residual(rr, &tf, &tc, dt);
                coefficients = self.boundary.add_to_residual(rr, &tf, temp_gas, temp_ext);

                // check convergence
                control.analyze_rr(iteration, rr)?;
                progress.iteration(iteration, control.norm_rr(), control.converged(), control.diverging());
                if control.converged() {
                    break;
                }
                if iteration == config.n_max_iterations {
                    return Err("Newton-Raphson did not converge");
                }

                // Jacobian matrix
                kk.reset()?;
                self.elements.assemble_jacobian(kk, dt)?;
                self.boundary.add_to_jacobian(kk, coefficients.0, coefficients.1)?;

                // solve linear system
                self.linear_system.solver.actual.factorize(kk, None)?;
                self.linear_system.solver.actual.solve(mdu, rr, false)?;

                // update
                for j in 0..n_node {
                    tf[j] -= mdu[j];
                }
            }

            // commit
            for j in 0..n_node {
                results.temperature.set(step + 1, j, tf[j]);
                tc[j] = tf[j];
            }
            results.temp_air_int[step + 1] = temp_gas;
            results.htc_in[step + 1] = coefficients.0;
            results.htc_out[step + 1] = coefficients.1;
        }
        progress.stage_finished(Stage::Transient);
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
