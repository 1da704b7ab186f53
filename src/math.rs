//! Dense matrix utilities for the load-test solver

use nalgebra::{DMatrix, DVector};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// Invert a square matrix in place by full Gauss-Jordan elimination.
///
/// Returns `false` if any pivot magnitude falls below `pivot_tolerance`,
/// leaving the matrix in a partially eliminated state. For a restrained
/// stiffness matrix in kN/m, healthy pivots are orders of magnitude above
/// one, so the tolerance doubles as an ill-conditioning detector.
pub fn gauss_jordan_invert(m: &mut Mat, pivot_tolerance: f64) -> bool {
    let n = m.nrows();
    debug_assert_eq!(n, m.ncols());

    for ie in 0..n {
        let pivot = m[(ie, ie)];
        if pivot.abs() < pivot_tolerance {
            return false;
        }
        let pivr = 1.0 / pivot;

        for j in 0..n {
            m[(ie, j)] *= pivr;
        }

        for i in 0..n {
            if i == ie {
                continue;
            }
            let factor = m[(i, ie)];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                m[(i, j)] -= factor * m[(ie, j)];
            }
            m[(i, ie)] = -factor * pivr;
        }

        m[(ie, ie)] = pivr;
    }

    true
}
