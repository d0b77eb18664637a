use crate::base::{Config, MeshSpace, Structure};
use crate::material::{concrete_conductivity, steel_conductivity, SurfaceModel};
use crate::StrError;
use russell_lab::{solve_lin_sys, Matrix, Vector};
use std::ops::Range;

/// Holds the steady-state temperatures during normal operation
#[derive(Clone, Debug)]
pub struct OperatingTemperatures {
    /// Temperature at each node (°C)
    pub profile: Vector,

    /// Temperature of the inner surface (°C)
    pub temp_surf_in: f64,

    /// Temperature at the inner face of the concrete (°C)
    pub temp_concrete_in: f64,

    /// Temperature at the outer face of the concrete (°C)
    pub temp_concrete_out: f64,

    /// Temperature of the outer surface (°C)
    pub temp_surf_out: f64,

    /// Heat flux through the inner surface; positive from inside to outside (W/m²)
    pub flux: f64,

    /// Heat transfer coefficient at the inner surface (W/m²K)
    pub htc_in: f64,

    /// Heat transfer coefficient at the outer surface (W/m²K)
    pub htc_out: f64,

    /// Number of fixed-point iterations
    pub iterations: usize,
}

/// Calculates the operating (steady-state) temperatures across the wall
///
/// Each layer is a thermal resistance in series with the two surface resistances. The
/// conductivities and surface coefficients depend on the unknown temperatures; thus the
/// linear system below is solved repeatedly until the surface temperatures change by less
/// than `config.tol_steady`:
///
/// ```text
/// ┌                       ┐ ┌      ┐   ┌      ┐
/// │ -R_ai -1  0  0  0     │ │ Q    │   │ -Tai │
/// │ -R_si  1 -1  0  0     │ │ T_si │   │  0   │
/// │ -R_c   0  1 -1  0     │ │ T_ci │ = │  0   │
/// │ -R_so  0  0  1 -1     │ │ T_ce │   │  0   │
/// │ -R_ao  0  0  0  1     │ │ T_se │   │  Tae │
/// └                       ┘ └      ┘   └      ┘
/// ```
///
/// The resistances follow the discretization of the transient solver, with the radial
/// factor `f` of each element (the element-center radius, or one for a plane wall):
///
/// ```text
/// R_layer = Σ Δx / (f_e k_layer)    R_ai = 1 / (f_first h_in)    R_ao = 1 / (f_last h_out)
/// ```
///
/// Thus `Q = f q` is the same for every element and the resulting profile does not drift
/// under constant loads. The steel conductivities are evaluated at the surface temperatures
/// and the concrete conductivity at the mean of the two surface temperatures.
pub fn operating_temperatures(
    structure: &Structure,
    mesh: &MeshSpace,
    config: &Config,
) -> Result<OperatingTemperatures, StrError> {
    let (tai, tae) = (structure.temp_air_int, structure.temp_air_ext);
    let inner = SurfaceModel::inner(structure, config);
    let outer = SurfaceModel::outer(structure, config);

    // geometric part of the resistances
    let ne = mesh.element_count;
    let dx = mesh.element_length;
    let factor = |e: usize| config.radial_factor(mesh.element_radii[e]);
    let sum = |elements: Range<usize>| elements.map(|e| dx / factor(e)).sum::<f64>();
    let g_si = sum(0..mesh.interface_in);
    let g_c = sum(mesh.interface_in..mesh.interface_out);
    let g_so = sum(mesh.interface_out..ne);
    let (f_first, f_last) = (factor(0), factor(ne - 1));

    // initial guess: surfaces at the air temperatures
    let (mut t_si, mut t_ci, mut t_ce, mut t_se) = (tai, tai, tae, tae);
    let (mut k_si, mut k_c, mut k_so) = (1.0, 1.0, 1.0);
    let mut qq = 0.0;
    let mut aa = Matrix::new(5, 5);
    let mut x = Vector::new(5);
    let mut converged = false;
    let mut iterations = 0;
    for _ in 0..config.n_max_iterations_steady {
        iterations += 1;

        // conductivities and resistances
        k_si = steel_conductivity(t_si);
        k_c = concrete_conductivity((t_si + t_se) / 2.0, config.conductivity_bound);
        k_so = steel_conductivity(t_se);
        let r_ai = inner.resistance(t_si, tai) / f_first;
        let r_si = g_si / k_si;
        let r_c = g_c / k_c;
        let r_so = g_so / k_so;
        let r_ao = outer.resistance(t_se, tae) / f_last;

        // assemble
        aa.fill(0.0);
        let rows = [
            (-r_ai, -1.0, 0.0, 0.0, 0.0),
            (-r_si, 1.0, -1.0, 0.0, 0.0),
            (-r_c, 0.0, 1.0, -1.0, 0.0),
            (-r_so, 0.0, 0.0, 1.0, -1.0),
            (-r_ao, 0.0, 0.0, 0.0, 1.0),
        ];
        for (i, row) in rows.iter().enumerate() {
            aa.set(i, 0, row.0);
            aa.set(i, 1, row.1);
            aa.set(i, 2, row.2);
            aa.set(i, 3, row.3);
            aa.set(i, 4, row.4);
        }
        x[0] = -tai;
        x[1] = 0.0;
        x[2] = 0.0;
        x[3] = 0.0;
        x[4] = tae;

        // solve
        solve_lin_sys(&mut x, &mut aa)?;
        if x.as_data().iter().any(|v| !v.is_finite()) {
            return Err("Found NaN or Inf");
        }

        // check convergence on the surface temperatures
        let change = f64::max(f64::abs(x[1] - t_si), f64::abs(x[4] - t_se));
        qq = x[0];
        t_si = x[1];
        t_ci = x[2];
        t_ce = x[3];
        t_se = x[4];
        if change < config.tol_steady {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err("operating temperatures did not converge");
    }

    // profile: the same Q crosses every element
    let mut profile = Vector::new(mesh.node_count);
    profile[0] = t_si;
    for e in 0..ne {
        let k = if e < mesh.interface_in {
            k_si
        } else if e < mesh.interface_out {
            k_c
        } else {
            k_so
        };
        profile[e + 1] = profile[e] - qq * dx / (factor(e) * k);
    }
    profile[mesh.interface_in] = t_ci;
    profile[mesh.interface_out] = t_ce;
    profile[ne] = t_se;

    Ok(OperatingTemperatures {
        profile,
        temp_surf_in: t_si,
        temp_concrete_in: t_ci,
        temp_concrete_out: t_ce,
        temp_surf_out: t_se,
        flux: qq / f_first,
        htc_in: inner.coefficient(t_si, tai),
        htc_out: outer.coefficient(t_se, tae),
        iterations,
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
