use crate::StrError;

/// Implements Lamé's solution of a thick-walled cylinder under internal and external pressures
///
/// Stresses are positive in tension; the pressures are given as magnitudes.
///
/// ```text
/// σr(r) =  A / r² + B
/// σθ(r) = -A / r² + B
///
/// A = r1² r2² (p2 - p1) / (r2² - r1²)
/// B = (r1² p1 - r2² p2) / (r2² - r1²)
/// ```
///
/// # Reference
///
/// 1. Sadd MH (2005) Elasticity: Theory, Applications and Numerics, Elsevier, 474p
pub struct LameCylinder {
    aa: f64,
    bb: f64,
}

impl LameCylinder {
    /// Allocates a new instance
    ///
    /// * `r1` -- inner radius
    /// * `r2` -- outer radius
    /// * `p1` -- inner pressure (magnitude)
    /// * `p2` -- outer pressure (magnitude)
    pub fn new(r1: f64, r2: f64, p1: f64, p2: f64) -> Result<Self, StrError> {
        if r1 <= 1e-10 {
            return Err("r1 must be > 1e-10");
        }
        if r2 <= r1 {
            return Err("r2 must be > r1");
        }
        if p1 < 0.0 {
            return Err("the magnitude of the pressure p1 must be positive");
        }
        if p2 < 0.0 {
            return Err("the magnitude of the pressure p2 must be positive");
        }
        let rr1 = r1 * r1;
        let rr2 = r2 * r2;
        let drr = rr2 - rr1;
        Ok(LameCylinder {
            aa: rr1 * rr2 * (p2 - p1) / drr,
            bb: (rr1 * p1 - rr2 * p2) / drr,
        })
    }

    /// Calculates the radial stress
    pub fn sr(&self, r: f64) -> f64 {
        self.aa / (r * r) + self.bb
    }

    /// Calculates the hoop (circumferential) stress
    pub fn sh(&self, r: f64) -> f64 {
        -self.aa / (r * r) + self.bb
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
