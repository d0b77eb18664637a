use crate::base::{Config, Material, MeshSpace, Structure};
use crate::material::{conductivity, volumetric_heat_capacity};
use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_sparse::SparseMatrix;

/// Implements a linear two-node element for one-dimensional heat conduction
///
/// ```text
///        k f  ┌  1 -1 ┐              ┌ 1/3 1/6 ┐
/// Ke  =  ———  │       │    Ce = c f Δx│         │
///         Δx  └ -1  1 ┘              └ 1/6 1/3 ┘
/// ```
///
/// where `f` is the radius of the element center (radial geometry) or one (planar geometry).
/// The conductivity `k` and volumetric heat capacity `c` are evaluated at the mean temperature.
pub struct ElementHeat {
    /// Material of the element
    pub material: Material,

    /// Length of the element
    pub length: f64,

    /// Scaling factor of the matrices
    pub factor: f64,

    /// Conductivity matrix (2 × 2)
    pub kk: Matrix,

    /// Capacity matrix (2 × 2)
    pub cc: Matrix,
}

/// Holds the collection of heat conduction elements
pub struct Elements<'a> {
    /// Holds the wall parameters
    pub structure: &'a Structure,

    /// Holds configuration parameters
    pub config: &'a Config,

    /// All elements (element e connects nodes e and e + 1)
    pub all: Vec<ElementHeat>,
}

impl ElementHeat {
    /// Allocates a new instance
    pub fn new(material: Material, length: f64, factor: f64) -> Self {
        ElementHeat {
            material,
            length,
            factor,
            kk: Matrix::new(2, 2),
            cc: Matrix::new(2, 2),
        }
    }

    /// Updates the conductivity and capacity matrices
    pub fn update(&mut self, temp_mean: f64, structure: &Structure, config: &Config) {
        let k = conductivity(self.material, temp_mean, config.conductivity_bound);
        let c = volumetric_heat_capacity(self.material, temp_mean, structure);
        let a = self.factor * k / self.length;
        let b = self.factor * c * self.length;
        self.kk.set(0, 0, a);
        self.kk.set(0, 1, -a);
        self.kk.set(1, 0, -a);
        self.kk.set(1, 1, a);
        self.cc.set(0, 0, b / 3.0);
        self.cc.set(0, 1, b / 6.0);
        self.cc.set(1, 0, b / 6.0);
        self.cc.set(1, 1, b / 3.0);
    }

    /// Calculates the local residual vector
    ///
    /// ```text
    /// re = Ce (Tf - Tc) / Δt + Ke Tf
    /// ```
    ///
    /// * `tf` -- future (trial) nodal temperatures
    /// * `tc` -- current (converged) nodal temperatures
    pub fn residual(&self, tf: (f64, f64), tc: (f64, f64), dt: f64) -> (f64, f64) {
        let (d0, d1) = ((tf.0 - tc.0) / dt, (tf.1 - tc.1) / dt);
        let r0 = self.cc.get(0, 0) * d0 + self.cc.get(0, 1) * d1 + self.kk.get(0, 0) * tf.0 + self.kk.get(0, 1) * tf.1;
        let r1 = self.cc.get(1, 0) * d0 + self.cc.get(1, 1) * d1 + self.kk.get(1, 0) * tf.0 + self.kk.get(1, 1) * tf.1;
        (r0, r1)
    }

    /// Returns the local Jacobian matrix entry (i, j) = Ce / Δt + Ke
    #[inline]
    pub fn jacobian(&self, i: usize, j: usize, dt: f64) -> f64 {
        self.cc.get(i, j) / dt + self.kk.get(i, j)
    }
}

impl<'a> Elements<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &MeshSpace, structure: &'a Structure, config: &'a Config) -> Self {
        let all = (0..mesh.element_count)
            .map(|e| {
                let factor = config.radial_factor(mesh.element_radii[e]);
                ElementHeat::new(mesh.element_materials[e], mesh.element_length, factor)
            })
            .collect();
        Elements { structure, config, all }
    }

    /// Updates the element matrices using the mean temperature of each element
    pub fn update(&mut self, temperature: &Vector) {
        for (e, element) in self.all.iter_mut().enumerate() {
            let temp_mean = (temperature[e] + temperature[e + 1]) / 2.0;
            element.update(temp_mean, self.structure, self.config);
        }
    }

    /// Adds the element residuals to the global residual vector
    pub fn assemble_residual(&self, rr: &mut Vector, tf: &Vector, tc: &Vector, dt: f64) {
        for (e, element) in self.all.iter().enumerate() {
            let (r0, r1) = element.residual((tf[e], tf[e + 1]), (tc[e], tc[e + 1]), dt);
            rr[e] += r0;
            rr[e + 1] += r1;
        }
    }

    /// Puts the element Jacobians into the global (COO) Jacobian matrix
    pub fn assemble_jacobian(&self, kk: &mut SparseMatrix, dt: f64) -> Result<(), StrError> {
        for (e, element) in self.all.iter().enumerate() {
            for i in 0..2 {
                for j in 0..2 {
                    kk.put(e + i, e + j, element.jacobian(i, j, dt))?;
                }
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ElementHeat, Elements};
    use crate::base::{Config, Geometry, Material, MeshSpace, Samples};
    use crate::material::{steel_conductivity, steel_volumetric_heat_capacity};
    use russell_lab::{approx_eq, Vector};

    #[test]
    fn element_matrices_work() {
        let structure = Samples::structure_small();
        let config = Config::new();
        let mut element = ElementHeat::new(Material::Steel, 0.1, 2.0);
        element.update(100.0, &structure, &config);
        let k = steel_conductivity(100.0);
        let c = steel_volumetric_heat_capacity(100.0);
        approx_eq(element.kk.get(0, 0), 2.0 * k / 0.1, 1e-12);
        approx_eq(element.kk.get(0, 1), -2.0 * k / 0.1, 1e-12);
        approx_eq(element.cc.get(0, 0), 2.0 * c * 0.1 / 3.0, 1e-8);
        approx_eq(element.cc.get(1, 0), 2.0 * c * 0.1 / 6.0, 1e-8);
    }

    #[test]
    fn residual_vanishes_for_uniform_constant_temperature() {
        let structure = Samples::structure_small();
        let config = Config::new();
        let mut element = ElementHeat::new(Material::Concrete, 0.1, 10.05);
        element.update(30.0, &structure, &config);
        let (r0, r1) = element.residual((30.0, 30.0), (30.0, 30.0), 1.0);
        approx_eq(r0, 0.0, 1e-12);
        approx_eq(r1, 0.0, 1e-12);
        // the conductivity part is antisymmetric: r0 + r1 = capacity part only
        let (r0, r1) = element.residual((40.0, 20.0), (40.0, 20.0), 1.0);
        approx_eq(r0 + r1, 0.0, 1e-10);
        assert!(r0 > 0.0);
    }

    #[test]
    fn elements_use_mesh_data() {
        let structure = Samples::structure_small();
        let mesh = MeshSpace::new(&structure).unwrap();
        let mut config = Config::new();
        let elements = Elements::new(&mesh, &structure, &config);
        assert_eq!(elements.all.len(), 10);
        approx_eq(elements.all[0].factor, 10.05, 1e-13);
        approx_eq(elements.all[9].factor, 10.95, 1e-13);
        assert_eq!(elements.all[0].material, Material::Steel);
        assert_eq!(elements.all[5].material, Material::Concrete);

        config.set_geometry(Geometry::Planar);
        let mut elements = Elements::new(&mesh, &structure, &config);
        assert_eq!(elements.all[3].factor, 1.0);

        // a uniform temperature gives zero steady residual
        let temp = Vector::filled(mesh.node_count, 25.0);
        elements.update(&temp);
        let mut rr = Vector::new(mesh.node_count);
        elements.assemble_residual(&mut rr, &temp, &temp, 1.0);
        for i in 0..mesh.node_count {
            approx_eq(rr[i], 0.0, 1e-10);
        }
    }
}
