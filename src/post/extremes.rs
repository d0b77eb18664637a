use crate::StrError;
use russell_lab::Matrix;

/// Returns the maximum value of each row
pub fn row_maxima(matrix: &Matrix) -> Vec<f64> {
    (0..matrix.nrow())
        .map(|i| (0..matrix.ncol()).fold(f64::NEG_INFINITY, |acc, j| f64::max(acc, matrix.get(i, j))))
        .collect()
}

/// Returns the minimum value of each row
pub fn row_minima(matrix: &Matrix) -> Vec<f64> {
    (0..matrix.nrow())
        .map(|i| (0..matrix.ncol()).fold(f64::INFINITY, |acc, j| f64::min(acc, matrix.get(i, j))))
        .collect()
}

/// Returns the index of the (first) largest value
pub fn index_of_max(values: &[f64]) -> Result<usize, StrError> {
    if values.is_empty() {
        return Err("the array must not be empty");
    }
    let mut index = 0;
    for i in 1..values.len() {
        if values[i] > values[index] {
            index = i;
        }
    }
    Ok(index)
}

/// Returns the index of the (first) smallest value
pub fn index_of_min(values: &[f64]) -> Result<usize, StrError> {
    if values.is_empty() {
        return Err("the array must not be empty");
    }
    let mut index = 0;
    for i in 1..values.len() {
        if values[i] < values[index] {
            index = i;
        }
    }
    Ok(index)
}

/// Returns the row (time step) containing the largest value of the matrix
pub fn row_with_max_value(matrix: &Matrix) -> Result<usize, StrError> {
    if matrix.ncol() == 0 {
        return Err("the matrix must have at least one column");
    }
    index_of_max(&row_maxima(matrix))
}

/// Returns the row (time step) containing the smallest value of the matrix
pub fn row_with_min_value(matrix: &Matrix) -> Result<usize, StrError> {
    if matrix.ncol() == 0 {
        return Err("the matrix must have at least one column");
    }
    index_of_min(&row_minima(matrix))
}

/// Merges the evolutions of the maximum (tension) and minimum (compression) stresses
///
/// The tensile value is taken unless it is non-positive; then the compressive value is taken.
pub fn merge_tensile_and_compressive(tension: &[f64], compression: &[f64]) -> Result<Vec<f64>, StrError> {
    if tension.len() != compression.len() {
        return Err("the tension and compression arrays must have the same length");
    }
    Ok(tension
        .iter()
        .zip(compression)
        .map(|(t, c)| if *t > 0.0 { *t } else { *c })
        .collect())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
