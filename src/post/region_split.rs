use crate::base::{MeshSpace, Region};
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Holds the data of a region that may be missing from the wall
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum Layer<T> {
    /// The region exists
    Present(T),

    /// The region does not exist (zero thickness)
    Absent,
}

impl<T> Layer<T> {
    /// Returns true if the region exists
    pub fn is_present(&self) -> bool {
        match self {
            Layer::Present(_) => true,
            Layer::Absent => false,
        }
    }

    /// Returns the data if the region exists
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Layer::Present(data) => Some(data),
            Layer::Absent => None,
        }
    }
}

/// Splits a (time × node) matrix into the regions of the wall
///
/// The columns of the steel-in, concrete, and steel-out matrices follow the node ranges of
/// the mesh. Thus, concatenating the present matrices from the inner to the outer face
/// reproduces the original matrix.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RegionSplit {
    /// Columns of the inner steel liner
    pub steel_in: Layer<Matrix>,

    /// Columns of the concrete body
    pub concrete: Layer<Matrix>,

    /// Columns of the outer steel liner
    pub steel_out: Layer<Matrix>,
}

/// Copies a range of columns
fn columns(matrix: &Matrix, range: Range<usize>) -> Layer<Matrix> {
    if range.is_empty() {
        return Layer::Absent;
    }
    let nrow = matrix.nrow();
    let mut sub = Matrix::new(nrow, range.len());
    for i in 0..nrow {
        for (k, j) in range.clone().enumerate() {
            sub.set(i, k, matrix.get(i, j));
        }
    }
    Layer::Present(sub)
}

impl RegionSplit {
    /// Allocates a new instance
    pub fn new(matrix: &Matrix, mesh: &MeshSpace) -> Result<Self, StrError> {
        if matrix.ncol() != mesh.node_count {
            return Err("the number of columns must equal the number of nodes");
        }
        Ok(RegionSplit {
            steel_in: columns(matrix, mesh.region(Region::SteelIn)),
            concrete: columns(matrix, mesh.region(Region::Concrete)),
            steel_out: columns(matrix, mesh.region(Region::SteelOut)),
        })
    }

    /// Returns the data of a region
    pub fn get(&self, region: Region) -> &Layer<Matrix> {
        match region {
            Region::SteelIn => &self.steel_in,
            Region::Concrete => &self.concrete,
            Region::SteelOut => &self.steel_out,
        }
    }

    /// Concatenates the present regions (from the inner to the outer face)
    pub fn concatenate(&self) -> Matrix {
        let present: Vec<&Matrix> = Region::ALL.iter().filter_map(|r| self.get(*r).as_option()).collect();
        let nrow = present.first().map_or(0, |m| m.nrow());
        let ncol = present.iter().map(|m| m.ncol()).sum();
        let mut matrix = Matrix::new(nrow, ncol);
        let mut offset = 0;
        for sub in present {
            for i in 0..nrow {
                for k in 0..sub.ncol() {
                    matrix.set(i, offset + k, sub.get(i, k));
                }
            }
            offset += sub.ncol();
        }
        matrix
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
