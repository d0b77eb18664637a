use crate::base::{MeshSpace, Results, Structure};
use crate::StrError;
use russell_lab::Vector;

/// Calculates the thermal stresses of the three structural variants
///
/// For each time step, the free thermal strain `ε0 = α (T - T_init)` gives the stress of the
/// fully restrained (fixed) section `σ_fixed = -E ε0`. The resultants of `σ_fixed` about the
/// centroid of the transformed section yield the uniform strain and the curvature:
///
/// ```text
/// N = Σ ½ (σ_fixed[e] + σ_fixed[e+1]) Δx b
/// M = Σ ½ (σ_fixed[e] + σ_fixed[e+1]) Δx b (c - x_e)
///
/// ε = -N / (Ec A)        κ = -M / (Ec I)
///
/// ε_clamped = ε          ε_free = ε + κ (c - x)
///
/// σ = E (ε_real - ε0) / (1 - ν)
/// ```
///
/// The concrete modulus is used for the stiffness of the composite section (A and I already
/// account for the steel through the modulus ratio). The node modulus `E` follows
/// `mesh.node_materials`.
///
/// Requires `results.temperature` and `results.temperature_init`.
pub fn calc_thermal_stresses(structure: &Structure, mesh: &MeshSpace, results: &mut Results) -> Result<(), StrError> {
    let nn = mesh.node_count;
    if results.n_node() != nn {
        return Err("results are incompatible with the mesh");
    }
    let alpha = structure.therm_expan_coeff;
    let plane = 1.0 / (1.0 - structure.poisson);
    let (center, inertia, area) = structure.section_characteristics();
    let ec = structure.modulus_concrete;
    let dx = mesh.element_length;
    let modulus = Vector::initialized(nn, |j| structure.modulus(mesh.node_materials[j]));

    let mut free = Vector::new(nn);
    let mut fixed = Vector::new(nn);
    for i in 0..results.n_time() {
        // eigenstrain and stress of the restrained section
        for j in 0..nn {
            free[j] = alpha * (results.temperature.get(i, j) - results.temperature_init[j]);
            fixed[j] = -modulus[j] * free[j];
        }

        // resultants
        let mut normal_force = 0.0;
        let mut bending_moment = 0.0;
        for e in 0..mesh.element_count {
            let force = (fixed[e] + fixed[e + 1]) / 2.0 * dx * structure.width;
            normal_force += force;
            bending_moment += force * (center - mesh.element_centers[e]);
        }
        let strain = -normal_force / (ec * area);
        let curvature = -bending_moment / (ec * inertia);

        // real strains and stresses
        for j in 0..nn {
            let strain_free = strain + curvature * (center - mesh.positions[j]);
            results.strain_thermal_free.set(i, j, free[j]);
            results.strain_real_clamped.set(i, j, strain);
            results.strain_real_free.set(i, j, strain_free);
            results.stress_thermal_fixed.set(i, j, plane * fixed[j]);
            results.stress_thermal_clamped.set(i, j, plane * modulus[j] * (strain - free[j]));
            results.stress_thermal_free.set(i, j, plane * modulus[j] * (strain_free - free[j]));
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::calc_thermal_stresses;
    use crate::base::{Config, MeshSpace, MeshTime, Results, Samples, Structure};
    use russell_lab::approx_eq;

    fn homogeneous_wall() -> Structure {
        let mut structure = Samples::structure_small();
        structure.steel_thick_in = 0.0;
        structure.steel_thick_out = 0.0;
        structure
    }

    fn allocate(structure: &Structure) -> (MeshSpace, Results) {
        let mesh = MeshSpace::new(structure).unwrap();
        let mesh_time = MeshTime::new(&Samples::time_params_short(), &Config::new()).unwrap();
        let results = Results::new(&mesh, &mesh_time);
        (mesh, results)
    }

    #[test]
    fn captures_errors() {
        let structure = Samples::structure_small();
        let (_, mut results) = allocate(&structure);
        let mesh = MeshSpace::new(&homogeneous_wall()).unwrap();
        assert_eq!(
            calc_thermal_stresses(&structure, &mesh, &mut results).err(),
            Some("results are incompatible with the mesh")
        );
    }

    #[test]
    fn no_temperature_change_gives_zero_stress() {
        let structure = Samples::structure_small();
        let (mesh, mut results) = allocate(&structure);
        for j in 0..mesh.node_count {
            let temp = 20.0 - (j as f64);
            results.temperature_init[j] = temp;
            for i in 0..results.n_time() {
                results.temperature.set(i, j, temp);
            }
        }
        calc_thermal_stresses(&structure, &mesh, &mut results).unwrap();
        for i in 0..results.n_time() {
            for j in 0..mesh.node_count {
                assert_eq!(results.stress_thermal_fixed.get(i, j), 0.0);
                assert_eq!(results.stress_thermal_clamped.get(i, j), 0.0);
                assert_eq!(results.stress_thermal_free.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn uniform_heating_is_released_by_extension() {
        let structure = homogeneous_wall();
        let (mesh, mut results) = allocate(&structure);
        for j in 0..mesh.node_count {
            results.temperature.set(1, j, 10.0);
        }
        calc_thermal_stresses(&structure, &mesh, &mut results).unwrap();
        // σ_fixed = -E α ΔT / (1 - ν) = -30000 · 1e-5 · 10 / 0.8
        for j in 0..mesh.node_count {
            approx_eq(results.stress_thermal_fixed.get(1, j), -3.75, 1e-12);
            approx_eq(results.strain_thermal_free.get(1, j), 1e-4, 1e-15);
            approx_eq(results.strain_real_clamped.get(1, j), 1e-4, 1e-15);
            approx_eq(results.stress_thermal_clamped.get(1, j), 0.0, 1e-10);
            approx_eq(results.stress_thermal_free.get(1, j), 0.0, 1e-10);
        }
    }

    #[test]
    fn linear_gradient_is_mostly_released_by_bending() {
        let structure = homogeneous_wall();
        let (mesh, mut results) = allocate(&structure);
        // ΔT = 40 - 50 x (from 40 °C at the inner face to 0 °C at the outer face)
        for j in 0..mesh.node_count {
            results.temperature.set(1, j, 40.0 - 50.0 * mesh.positions[j]);
        }
        calc_thermal_stresses(&structure, &mesh, &mut results).unwrap();

        // the clamped section extends by the mean eigenstrain: zero stress at the centroid
        let mid = 4;
        approx_eq(mesh.positions[mid], 0.4, 1e-15);
        approx_eq(results.strain_real_clamped.get(1, mid), 1e-5 * 20.0, 1e-15);
        approx_eq(results.stress_thermal_clamped.get(1, mid), 0.0, 1e-10);
        approx_eq(results.stress_thermal_free.get(1, mid), 0.0, 1e-10);

        // inner face in compression, outer face in tension: σ = ∓ E α 20 / (1 - ν)
        approx_eq(results.stress_thermal_clamped.get(1, 0), -7.5, 1e-10);
        approx_eq(results.stress_thermal_clamped.get(1, 8), 7.5, 1e-10);

        // bending releases the linear eigenstrain up to the integration error (Δx² / L²)
        for j in 0..mesh.node_count {
            let clamped = results.stress_thermal_clamped.get(1, j);
            let free = results.stress_thermal_free.get(1, j);
            assert!(f64::abs(free) <= f64::abs(clamped) / 50.0 + 1e-10);
        }
    }

    #[test]
    fn steel_nodes_use_the_steel_modulus() {
        let structure = Samples::structure_small();
        let (mesh, mut results) = allocate(&structure);
        for j in 0..mesh.node_count {
            results.temperature.set(2, j, 5.0);
        }
        calc_thermal_stresses(&structure, &mesh, &mut results).unwrap();
        // -E α ΔT / (1 - ν)
        let steel = -200000.0 * 1e-5 * 5.0 / 0.8;
        let concrete = -30000.0 * 1e-5 * 5.0 / 0.8;
        approx_eq(results.stress_thermal_fixed.get(2, 0), steel, 1e-12);
        approx_eq(results.stress_thermal_fixed.get(2, 1), steel, 1e-12);
        approx_eq(results.stress_thermal_fixed.get(2, 2), steel, 1e-12);
        approx_eq(results.stress_thermal_fixed.get(2, 3), concrete, 1e-12);
        approx_eq(results.stress_thermal_fixed.get(2, 8), concrete, 1e-12);
        approx_eq(results.stress_thermal_fixed.get(2, 9), steel, 1e-12);
        approx_eq(results.stress_thermal_fixed.get(2, 10), steel, 1e-12);
        // untouched steps
        assert_eq!(results.stress_thermal_fixed.get(1, 0), 0.0);
    }
}
