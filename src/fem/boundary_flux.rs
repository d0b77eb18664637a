use crate::base::{Config, MeshSpace, Structure};
use crate::material::SurfaceModel;
use crate::StrError;
use russell_lab::Vector;
use russell_sparse::SparseMatrix;

/// Implements the convective and radiative heat flux at the inner and outer surfaces
///
/// ```text
/// F[0]     = f_in  h_in  (T[0] - T_gas)
/// F[n - 1] = f_out h_out (T[n - 1] - T_ext)
/// ```
///
/// The coefficients are evaluated at the future (trial) surface temperatures; their
/// derivatives are neglected in the Jacobian matrix.
pub struct BoundaryFlux {
    /// Model of the inner surface
    pub inner: SurfaceModel,

    /// Model of the outer surface
    pub outer: SurfaceModel,

    /// Scaling factor of the inner flux (radius of the first element center or one)
    pub factor_in: f64,

    /// Scaling factor of the outer flux (radius of the last element center or one)
    pub factor_out: f64,

    /// Index of the last node
    last: usize,
}

impl BoundaryFlux {
    /// Allocates a new instance
    pub fn new(mesh: &MeshSpace, structure: &Structure, config: &Config) -> Self {
        let ne = mesh.element_count;
        BoundaryFlux {
            inner: SurfaceModel::inner(structure, config),
            outer: SurfaceModel::outer(structure, config),
            factor_in: config.radial_factor(mesh.element_radii[0]),
            factor_out: config.radial_factor(mesh.element_radii[ne - 1]),
            last: mesh.node_count - 1,
        }
    }

    /// Calculates the heat transfer coefficients at the inner and outer surfaces
    pub fn coefficients(&self, tf: &Vector, temp_gas: f64, temp_ext: f64) -> (f64, f64) {
        let h_in = self.inner.coefficient(tf[0], temp_gas);
        let h_out = self.outer.coefficient(tf[self.last], temp_ext);
        (h_in, h_out)
    }

    /// Adds the boundary fluxes to the global residual vector
    ///
    /// Returns the coefficients `(h_in, h_out)`.
    pub fn add_to_residual(&self, rr: &mut Vector, tf: &Vector, temp_gas: f64, temp_ext: f64) -> (f64, f64) {
        let (h_in, h_out) = self.coefficients(tf, temp_gas, temp_ext);
        rr[0] += self.factor_in * h_in * (tf[0] - temp_gas);
        rr[self.last] += self.factor_out * h_out * (tf[self.last] - temp_ext);
        (h_in, h_out)
    }

    /// Puts the boundary terms into the global (COO) Jacobian matrix
    pub fn add_to_jacobian(&self, kk: &mut SparseMatrix, h_in: f64, h_out: f64) -> Result<(), StrError> {
        kk.put(0, 0, self.factor_in * h_in)?;
        kk.put(self.last, self.last, self.factor_out * h_out)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
