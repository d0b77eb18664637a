use super::{Config, TimeParams};
use crate::StrError;
use russell_lab::Vector;

/// Holds the (non-uniform) time axis of the analysis
///
/// The analysis is split into five phases. The first four end at `config.phase_ends`
/// (or at the duration, whichever comes first) and the fifth lasts until the end.
/// Each phase has its own time step. The last time is clamped to the duration.
#[derive(Clone, Debug)]
pub struct MeshTime {
    /// Holds all times, starting at zero and ending at the duration
    pub time_axis: Vector,
}

impl MeshTime {
    /// Allocates a new instance
    pub fn new(time: &TimeParams, config: &Config) -> Result<Self, StrError> {
        if time.validate().is_some() {
            return Err("duration and time steps must be > 0.0");
        }
        let duration = time.duration;
        let steps = time.steps();
        let ends: Vec<_> = config.phase_ends.iter().map(|end| f64::min(*end, duration)).collect();
        let mut values = Vec::new();
        let mut t = 0.0;
        while t < duration {
            values.push(t);
            let dt = if t < ends[0] {
                steps[0]
            } else if t < ends[1] {
                steps[1]
            } else if t < ends[2] {
                steps[2]
            } else if t < ends[3] {
                steps[3]
            } else {
                steps[4]
            };
            t += dt;
        }
        // the accumulated time may miss the duration by round-off; this avoids a tiny last step
        let tol = 1e-9 * f64::max(1.0, duration);
        if values.len() > 1 {
            let last = values[values.len() - 1];
            if duration - last < tol {
                values.pop();
            }
        }
        values.push(duration);
        Ok(MeshTime {
            time_axis: Vector::from(&values),
        })
    }

    /// Returns the number of time steps (number of times minus one)
    pub fn time_steps_count(&self) -> usize {
        self.time_axis.dim() - 1
    }

    /// Returns the number of times (including the initial time)
    pub fn times_count(&self) -> usize {
        self.time_axis.dim()
    }

    /// Returns the time at a given index
    #[inline]
    pub fn time(&self, index: usize) -> f64 {
        self.time_axis[index]
    }

    /// Returns the increment of time from `step` to `step + 1`
    #[inline]
    pub fn dt(&self, step: usize) -> f64 {
        self.time_axis[step + 1] - self.time_axis[step]
    }

    /// Returns the last time (the duration)
    pub fn duration(&self) -> f64 {
        self.time_axis[self.time_axis.dim() - 1]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
