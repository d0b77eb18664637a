use crate::StrError;

/// Implements the hoop stress of a cylinder prestressed by circumferential tendons
///
/// The tendon force per unit height is replaced by the equivalent radial pressure
/// `pe = σt At / rt` acting at the tendon radius `rt`. The share of `pe` carried by the
/// part outside the tendons is given by the distribution factor of Acharya and Menon:
///
/// ```text
/// df = (re² - rt²) / (2 (re² - ri²) (1 - ν)) · ((1 - 2ν) + ri² / rt²)
///
/// σθ(r) = -(1 - df) pe rt² / (rt² - ri²) (1 + ri² / r²)    if r < rt
/// σθ(r) = -df pe rt² / (re² - rt²) (1 + re² / r²)          if r > rt
/// ```
///
/// At the tendon radius the average of both expressions is used.
///
/// # Reference
///
/// 1. Acharya S, Menon D (2003) Prediction of radial stresses due to prestressing in PSC wall
///    of nuclear containment structures, Nuclear Engineering and Design 225:109-125
pub struct PrestressCylinder {
    ri: f64,
    re: f64,
    rt: f64,
    pe: f64,
    df: f64,
    tol: f64,
}

impl PrestressCylinder {
    /// Allocates a new instance
    ///
    /// * `ri` -- inner radius
    /// * `re` -- outer radius
    /// * `rt` -- radius of the tendons
    /// * `tendons_stress` -- stress in the tendons
    /// * `tendons_area` -- area of the tendons per unit height
    /// * `poisson` -- Poisson's coefficient
    pub fn new(ri: f64, re: f64, rt: f64, tendons_stress: f64, tendons_area: f64, poisson: f64) -> Result<Self, StrError> {
        if ri <= 1e-10 {
            return Err("ri must be > 1e-10");
        }
        if !(rt > ri && rt < re) {
            return Err("the tendon radius must be between ri and re");
        }
        if poisson < 0.0 || poisson >= 0.5 {
            return Err("the Poisson coefficient must be in [0, 0.5)");
        }
        let (ri2, re2, rt2) = (ri * ri, re * re, rt * rt);
        let df = ((re2 - rt2) / (2.0 * (re2 - ri2) * (1.0 - poisson))) * ((1.0 - 2.0 * poisson) + ri2 / rt2);
        Ok(PrestressCylinder {
            ri,
            re,
            rt,
            pe: tendons_stress * tendons_area / rt,
            df,
            tol: 1e-9 * re,
        })
    }

    /// Returns the distribution factor
    pub fn distribution_factor(&self) -> f64 {
        self.df
    }

    /// Returns the equivalent radial pressure at the tendon radius
    pub fn equivalent_pressure(&self) -> f64 {
        self.pe
    }

    /// Calculates the hoop stress inside the tendon radius
    fn sh_inner(&self, r: f64) -> f64 {
        let (ri2, rt2) = (self.ri * self.ri, self.rt * self.rt);
        -(1.0 - self.df) * self.pe * rt2 / (rt2 - ri2) * (1.0 + ri2 / (r * r))
    }

    /// Calculates the hoop stress outside the tendon radius
    fn sh_outer(&self, r: f64) -> f64 {
        let (re2, rt2) = (self.re * self.re, self.rt * self.rt);
        -self.df * self.pe * rt2 / (re2 - rt2) * (1.0 + re2 / (r * r))
    }

    /// Calculates the hoop (circumferential) stress
    pub fn sh(&self, r: f64) -> f64 {
        if f64::abs(r - self.rt) <= self.tol {
            (self.sh_inner(r) + self.sh_outer(r)) / 2.0
        } else if r < self.rt {
            self.sh_inner(r)
        } else {
            self.sh_outer(r)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
