use std::fmt;

/// Defines the stages of a simulation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Steady-state temperatures during normal operation
    OperatingTemperatures,

    /// Transient heat conduction
    Transient,

    /// Thermal stresses of the three structural variants
    ThermalStresses,

    /// Stresses due to the internal and external pressures
    PressureStresses,

    /// Stresses due to prestressing
    PrestressingStresses,

    /// Sum of all stresses
    TotalStresses,

    /// Region split, extreme steps, and evolutions
    PostProcessing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::OperatingTemperatures => "operating temperatures",
            Stage::Transient => "transient heat conduction",
            Stage::ThermalStresses => "thermal stresses",
            Stage::PressureStresses => "pressure stresses",
            Stage::PrestressingStresses => "prestressing stresses",
            Stage::TotalStresses => "total stresses",
            Stage::PostProcessing => "post-processing",
        };
        write!(f, "{}", name)
    }
}

/// Receives progress notifications from long-running stages
///
/// The caller may request the computation to stop via `should_abort`;
/// the request is honoured between time steps and between stages.
pub trait Progress {
    /// Notifies the beginning of a stage
    fn stage_started(&mut self, stage: Stage);

    /// Notifies the beginning of a time step (`step` goes from 0 to `n_steps - 1`)
    fn time_step(&mut self, step: usize, n_steps: usize, t: f64, dt: f64);

    /// Notifies the end of a Newton-Raphson iteration
    fn iteration(&mut self, iteration: usize, norm_rr: f64, converged: bool, diverging: bool);

    /// Notifies the end of a stage
    fn stage_finished(&mut self, stage: Stage);

    /// Returns true if the computation should stop
    fn should_abort(&self) -> bool {
        false
    }
}

/// Ignores all notifications
pub struct ProgressSilent;

impl Progress for ProgressSilent {
    fn stage_started(&mut self, _stage: Stage) {}
    fn time_step(&mut self, _step: usize, _n_steps: usize, _t: f64, _dt: f64) {}
    fn iteration(&mut self, _iteration: usize, _norm_rr: f64, _converged: bool, _diverging: bool) {}
    fn stage_finished(&mut self, _stage: Stage) {}
}

/// Prints the time stepping and convergence statistics to the terminal
pub struct ProgressConsole {
    /// Prints the time steps
    pub verbose_timesteps: bool,

    /// Prints the Newton-Raphson iterations
    pub verbose_iterations: bool,

    /// Prints a time step only when the completed fraction advances by this percentage
    pub log_percentage: f64,

    /// Percentage of the last printed time step
    last_percentage: Option<f64>,

    /// Indicates that the current time step has been printed
    printing_step: bool,
}

impl ProgressConsole {
    /// Allocates a new instance
    pub fn new() -> Self {
        ProgressConsole {
            verbose_timesteps: true,
            verbose_iterations: false,
            log_percentage: 1.0,
            last_percentage: None,
            printing_step: false,
        }
    }

    /// Returns true if a time step must be printed
    fn must_print(&mut self, step: usize, n_steps: usize) -> bool {
        let percentage = if n_steps == 0 {
            100.0
        } else {
            100.0 * ((step + 1) as f64) / (n_steps as f64)
        };
        let print = match self.last_percentage {
            None => true,
            Some(last) => step + 1 == n_steps || percentage - last >= self.log_percentage,
        };
        if print {
            self.last_percentage = Some(percentage);
        }
        print
    }
}

impl Default for ProgressConsole {
    fn default() -> Self {
        ProgressConsole::new()
    }
}

impl Progress for ProgressConsole {
    fn stage_started(&mut self, stage: Stage) {
        println!("\n{} started", stage);
        if stage == Stage::Transient && (self.verbose_timesteps || self.verbose_iterations) {
            self.last_percentage = None;
            println!("{}", "─".repeat(62));
            println!(
                "{:>8} {:>6} {:>13} {:>11} {:>5} {:>11}",
                "timestep", "%", "t", "Δt", "iter", "‖R‖∞"
            );
            println!("{}", "─".repeat(62));
        }
    }

    fn time_step(&mut self, step: usize, n_steps: usize, t: f64, dt: f64) {
        self.printing_step = false;
        if self.verbose_timesteps && self.must_print(step, n_steps) {
            let percentage = self.last_percentage.unwrap_or(0.0);
            println!("{:>8} {:>6.1} {:>13.6e} {:>11.4e}", step + 1, percentage, t, dt);
            self.printing_step = true;
        }
    }

    fn iteration(&mut self, iteration: usize, norm_rr: f64, converged: bool, diverging: bool) {
        if self.verbose_iterations && (self.printing_step || !self.verbose_timesteps) {
            let icon = if converged {
                "converged"
            } else if diverging {
                "diverging"
            } else {
                ""
            };
            println!(
                "{:>8} {:>6} {:>13} {:>11} {:>5} {:>11.2e} {}",
                "·", "·", "·", "·", iteration, norm_rr, icon
            );
        }
    }

    fn stage_finished(&mut self, stage: Stage) {
        if stage == Stage::Transient && (self.verbose_timesteps || self.verbose_iterations) {
            println!("{}", "─".repeat(62));
        }
        println!("{} finished", stage);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Progress, ProgressConsole, ProgressSilent, Stage};

    #[test]
    fn stage_display_works() {
        assert_eq!(format!("{}", Stage::Transient), "transient heat conduction");
        assert_eq!(format!("{}", Stage::PostProcessing), "post-processing");
    }

    #[test]
    fn progress_silent_never_aborts() {
        let mut progress = ProgressSilent;
        progress.stage_started(Stage::Transient);
        progress.time_step(0, 10, 1.0, 1.0);
        progress.iteration(0, 1.0, false, false);
        progress.stage_finished(Stage::Transient);
        assert!(!progress.should_abort());
    }

    #[test]
    fn progress_console_throttles_time_steps() {
        let mut progress = ProgressConsole::new();
        progress.log_percentage = 10.0;
        let printed: Vec<_> = (0..100).filter(|step| progress.must_print(*step, 100)).collect();
        // first step, then every 10 %, and the last step
        assert_eq!(printed, &[0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 99]);
    }
}
