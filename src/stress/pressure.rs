use crate::analytical::LameCylinder;
use crate::base::{Loads, MeshSpace, Results, Structure};
use crate::StrError;

/// Calculates the hoop stresses due to the internal gas pressure and the external pressure
///
/// The hoop stress of Lamé's thick-walled cylinder is converted into the equivalent strain of
/// the homogenized wall (`ε = σθ / E_total`) and then into the node stress (`σ = E ε`).
///
/// The gas pressure of the first time (normal operation) is used as given; the subsequent
/// pressures are multiplied by `structure.pressure_coeff`. The used pressures are saved in
/// `results.pressure_air_int`.
pub fn calc_pressure_stresses(
    structure: &Structure,
    mesh: &MeshSpace,
    loads: &Loads,
    results: &mut Results,
) -> Result<(), StrError> {
    let nn = mesh.node_count;
    if results.n_node() != nn {
        return Err("results are incompatible with the mesh");
    }
    let modulus_total = structure.modulus_total();
    for i in 0..results.n_time() {
        let pressure_gas = if i == 0 {
            loads.pressure_gas(results.time[i])?
        } else {
            structure.pressure_coeff * loads.pressure_gas(results.time[i])?
        };
        results.pressure_air_int[i] = pressure_gas;
        let lame = LameCylinder::new(structure.radius_in, structure.radius_out(), pressure_gas, loads.pressure_ext)?;
        for j in 0..nn {
            let strain = lame.sh(mesh.radii[j]) / modulus_total;
            results.strain_pressure.set(i, j, strain);
            results.stress_pressure.set(i, j, strain * structure.modulus(mesh.node_materials[j]));
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::calc_pressure_stresses;
    use crate::analytical::LameCylinder;
    use crate::base::{Config, MeshSpace, MeshTime, Results, Samples};
    use russell_lab::approx_eq;

    #[test]
    fn equal_pressures_give_uniform_stress() {
        let mut structure = Samples::structure_small();
        structure.steel_thick_in = 0.0;
        structure.steel_thick_out = 0.0;
        let mesh = MeshSpace::new(&structure).unwrap();
        let time = Samples::time_params_short();
        let mesh_time = MeshTime::new(&time, &Config::new()).unwrap();
        let loads = Samples::loads_constant(&structure, time.duration, structure.pressure_ext);
        let mut results = Results::new(&mesh, &mesh_time);
        calc_pressure_stresses(&structure, &mesh, &loads, &mut results).unwrap();
        for i in 0..results.n_time() {
            assert_eq!(results.pressure_air_int[i], 0.1);
            for j in 0..mesh.node_count {
                approx_eq(results.stress_pressure.get(i, j), -0.1, 1e-12);
            }
        }
    }

    #[test]
    fn pressure_coefficient_is_skipped_at_the_first_time() {
        let mut structure = Samples::structure_small();
        structure.pressure_coeff = 1.5;
        let mesh = MeshSpace::new(&structure).unwrap();
        let time = Samples::time_params_short();
        let mesh_time = MeshTime::new(&time, &Config::new()).unwrap();
        let loads = Samples::loads_constant(&structure, time.duration, 0.4);
        let mut results = Results::new(&mesh, &mesh_time);
        calc_pressure_stresses(&structure, &mesh, &loads, &mut results).unwrap();
        assert_eq!(results.pressure_air_int[0], 0.4);
        for i in 1..results.n_time() {
            approx_eq(results.pressure_air_int[i], 0.6, 1e-15);
        }

        // overpressure: tension everywhere, larger at the inner face
        let last = results.n_time() - 1;
        let lame = LameCylinder::new(10.0, 11.0, 0.6, 0.1).unwrap();
        let e_total = structure.modulus_total();
        for j in 0..mesh.node_count {
            assert!(results.stress_pressure.get(last, j) > 0.0);
            approx_eq(results.strain_pressure.get(last, j), lame.sh(mesh.radii[j]) / e_total, 1e-15);
        }
        approx_eq(
            results.stress_pressure.get(last, 0),
            200000.0 * lame.sh(10.0) / e_total,
            1e-10,
        );
        approx_eq(
            results.stress_pressure.get(last, 5),
            30000.0 * lame.sh(10.5) / e_total,
            1e-10,
        );
        assert!(results.strain_pressure.get(last, 0) > results.strain_pressure.get(last, 10));
    }

    #[test]
    fn captures_table_errors() {
        let structure = Samples::structure_small();
        let mesh = MeshSpace::new(&structure).unwrap();
        let time = Samples::time_params_short();
        let mesh_time = MeshTime::new(&time, &Config::new()).unwrap();
        let loads = Samples::loads_constant(&structure, 5.0, 0.4);
        let mut results = Results::new(&mesh, &mesh_time);
        assert_eq!(
            calc_pressure_stresses(&structure, &mesh, &loads, &mut results).err(),
            Some("time is outside the table domain")
        );
    }
}
