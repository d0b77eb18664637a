use crate::analytical::PrestressCylinder;
use crate::base::{MeshSpace, Results, Structure};
use crate::StrError;

/// Calculates the (time-invariant) hoop stresses due to prestressing
///
/// The hoop stress of the prestressed cylinder (tendons at mid-depth of the concrete body)
/// is multiplied by `structure.prestressing_coeff`, converted into the equivalent strain of
/// the homogenized wall and then into the node stress, as done for the pressure stresses.
pub fn calc_prestressing_stresses(structure: &Structure, mesh: &MeshSpace, results: &mut Results) -> Result<(), StrError> {
    let nn = mesh.node_count;
    if results.n_node() != nn {
        return Err("results are incompatible with the mesh");
    }
    let model = PrestressCylinder::new(
        structure.radius_in,
        structure.radius_out(),
        structure.radius_tendons(),
        structure.tendons_stress,
        structure.tendons_area,
        structure.poisson,
    )?;
    let modulus_total = structure.modulus_total();
    for j in 0..nn {
        let strain = structure.prestressing_coeff * model.sh(mesh.radii[j]) / modulus_total;
        results.strain_prestressing[j] = strain;
        results.stress_prestressing[j] = strain * structure.modulus(mesh.node_materials[j]);
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
