//! In-place solver for augmented `N x (N + 1)` systems.
//!
//! [gaussian_elimination] brings the matrix to row echelon form using partial pivoting,
//! [back_substitution] then leaves the solution in the last column, row `i` holding unknown `i`.

use log::{debug, trace};
use nalgebra::DMatrix;

use crate::error::SplineError;

/// Forward elimination with partial pivoting.
///
/// Columns whose largest candidate pivot is exactly zero are skipped; the zero pivot is left
/// for [back_substitution] to classify as free or inconsistent.
pub fn gaussian_elimination(matrix: &mut DMatrix<f64>) {
    let size = matrix.nrows();
    let columns = matrix.ncols();

    for k in 0..size {
        let (pivot_row, pivot_magnitude) = find_pivot(matrix, k);

        if pivot_magnitude == 0.0 {
            continue;
        }

        if pivot_row != k {
            trace!("swapping rows {} and {}", k, pivot_row);
            matrix.swap_rows(k, pivot_row);
        }

        let pivot = matrix[(k, k)];
        for i in k + 1..size {
            let multiplier = -matrix[(i, k)] / pivot;

            // entries left of k are already zero in the pivot row
            for j in k..columns {
                let pivot_row_value = matrix[(k, j)];
                matrix[(i, j)] += multiplier * pivot_row_value;
            }
        }
    }
}

/// Back-substitution over a matrix in row echelon form.
///
/// An unknown with a zero pivot and a zero reduced right hand side can take any value, zero is
/// assigned. A zero pivot with non-zero right hand side means there is no solution; processing
/// stops and the right hand side column must not be used.
pub fn back_substitution(matrix: &mut DMatrix<f64>) -> Result<(), SplineError> {
    let size = matrix.nrows();
    let rhs = size;

    for i in (0..size).rev() {
        for j in (i + 1..size).rev() {
            let solved = matrix[(j, rhs)];
            let coefficient = matrix[(i, j)];
            matrix[(i, rhs)] -= solved * coefficient;
            matrix[(i, j)] = 0.0;
        }

        let diagonal = matrix[(i, i)];
        if diagonal == 0.0 {
            if matrix[(i, rhs)] == 0.0 {
                debug!("unknown {} is under-determined, assuming 0", i);
                matrix[(i, rhs)] = 0.0;
            } else {
                return Err(SplineError::Inconsistent { row: i });
            }
        } else {
            matrix[(i, rhs)] /= diagonal;
            matrix[(i, i)] = 1.0;
        }
    }
    Ok(())
}

/// Convenience for both phases.
pub fn solve_in_place(matrix: &mut DMatrix<f64>) -> Result<(), SplineError> {
    gaussian_elimination(matrix);
    back_substitution(matrix)
}

fn find_pivot(matrix: &DMatrix<f64>, k: usize) -> (usize, f64) {
    let mut max_row = k;
    let mut max_magnitude = matrix[(k, k)].abs();

    for i in k + 1..matrix.nrows() {
        let magnitude = matrix[(i, k)].abs();
        if magnitude > max_magnitude {
            max_magnitude = magnitude;
            max_row = i;
        }
    }
    (max_row, max_magnitude)
}
