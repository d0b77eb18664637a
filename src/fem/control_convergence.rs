use crate::base::Config;
use crate::StrError;
use russell_lab::{vec_norm, Norm, Vector};

/// Controls the convergence of the Newton-Raphson iterations
///
/// The iterations converge when the max-norm of the residual vector falls below `config.tol_rr_abs`.
pub struct ControlConvergence<'a> {
    config: &'a Config,
    iteration: usize,
    norm_rr_prev: f64,
    norm_rr: f64,
    converged_on_norm_rr: bool,
    diverging_on_norm_rr: bool,
    n_iterations_total: usize,
}

impl<'a> ControlConvergence<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config) -> Self {
        ControlConvergence {
            config,
            iteration: 0,
            norm_rr_prev: 0.0,
            norm_rr: 0.0,
            converged_on_norm_rr: false,
            diverging_on_norm_rr: false,
            n_iterations_total: 0,
        }
    }

    /// Resets the flags for a new time step
    pub fn reset(&mut self) {
        self.iteration = 0;
        self.norm_rr_prev = 0.0;
        self.norm_rr = 0.0;
        self.converged_on_norm_rr = false;
        self.diverging_on_norm_rr = false;
    }

    /// Analyzes the residual vector
    ///
    /// Returns an error if the residual contains NaN or Inf.
    pub fn analyze_rr(&mut self, iteration: usize, rr: &Vector) -> Result<(), StrError> {
        self.iteration = iteration;
        self.n_iterations_total += 1;
        self.norm_rr = vec_norm(rr, Norm::Max);
        let found_nan_or_inf = !self.norm_rr.is_finite() || rr.as_data().iter().any(|x| !x.is_finite());
        self.converged_on_norm_rr = if found_nan_or_inf {
            false
        } else {
            self.norm_rr < self.config.tol_rr_abs
        };
        self.diverging_on_norm_rr = if found_nan_or_inf || iteration == 0 {
            false
        } else {
            self.norm_rr > self.norm_rr_prev
        };
        self.norm_rr_prev = self.norm_rr;
        if found_nan_or_inf {
            Err("Found NaN or Inf")
        } else {
            Ok(())
        }
    }

    /// Returns true if the residual is small enough
    pub fn converged(&self) -> bool {
        self.converged_on_norm_rr
    }

    /// Returns true if the residual has increased with respect to the previous iteration
    pub fn diverging(&self) -> bool {
        self.diverging_on_norm_rr
    }

    /// Returns the max-norm of the residual
    pub fn norm_rr(&self) -> f64 {
        self.norm_rr
    }

    /// Returns the current iteration
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns the total number of analyzed iterations
    pub fn n_iterations_total(&self) -> usize {
        self.n_iterations_total
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
