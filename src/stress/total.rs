use crate::base::{Results, Variant};

/// Sums the thermal, pressure, and prestressing stresses of each structural variant
///
/// The prestressing stress is the same at every time step.
pub fn sum_all_stresses(results: &mut Results) {
    for variant in Variant::ALL {
        for i in 0..results.n_time() {
            for j in 0..results.n_node() {
                let value = results.stress_thermal(variant).get(i, j)
                    + results.stress_pressure.get(i, j)
                    + results.stress_prestressing[j];
                results.stress_total_mut(variant).set(i, j, value);
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
