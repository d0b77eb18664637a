use crate::base::MeshSpace;
use crate::StrError;
use russell_lab::Vector;
use russell_sparse::{Genie, LinSolver, SparseMatrix, Sym};

/// Holds variables to solve the global linear system of the Newton-Raphson iterations
pub struct LinearSystem<'a> {
    /// Total number of global equations (number of nodes)
    pub n_equation: usize,

    /// Holds the supremum of the number of nonzero values (nnz) in the global matrix
    ///
    /// Each element contributes a 2 × 2 matrix and each surface contributes one diagonal
    /// entry; hence `nnz_sup = 4 n_element + 2`. The repeated entries are summed up by the solver.
    pub nnz_sup: usize,

    /// Holds the residual vector R
    pub rr: Vector,

    /// Holds the global Jacobian matrix K
    pub kk: SparseMatrix,

    /// Holds the linear solver
    pub solver: LinSolver<'a>,

    /// Holds the "minus-delta-T" vector (the solution of the linear system)
    pub mdu: Vector,
}

impl<'a> LinearSystem<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &MeshSpace) -> Result<Self, StrError> {
        let n_equation = mesh.node_count;
        let nnz_sup = 4 * mesh.element_count + 2;
        Ok(LinearSystem {
            n_equation,
            nnz_sup,
            rr: Vector::new(n_equation),
            kk: SparseMatrix::new_coo(n_equation, n_equation, nnz_sup, Sym::No)?,
            solver: LinSolver::new(Genie::Umfpack)?,
            mdu: Vector::new(n_equation),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LinearSystem;
    use crate::base::{MeshSpace, Samples};

    #[test]
    fn new_works() {
        let structure = Samples::structure_small();
        let mesh = MeshSpace::new(&structure).unwrap();
        let ls = LinearSystem::new(&mesh).unwrap();
        assert_eq!(ls.n_equation, 11);
        assert_eq!(ls.nnz_sup, 42);
        assert_eq!(ls.rr.dim(), 11);
        assert_eq!(ls.mdu.dim(), 11);
    }
}
