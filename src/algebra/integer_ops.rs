//! Exact Elementary Operations over Integer Matrices
//!
//! Row and column operations that preserve the lattice spanned by a
//! matrix: swaps, negations and adding an integer multiple of one line
//! to another. Together with the pivot search below they are the only
//! primitives the Smith Normal Form engine uses, so every transformation
//! it applies is unimodular.
//!
//! The element type is any signed Euclidean integer. Use
//! [`num_bigint::BigInt`] when entries can grow; machine integers are
//! fine for small inputs.

use ndarray::Array2;
use num_integer::Integer;
use num_traits::Signed;

use crate::error::{LocalHomologyError, Result};

/// Position of the non-zero entry with the smallest absolute value in the
/// trailing submatrix `matrix[k.., k..]`.
///
/// The scan is row-major and a tie replaces the current candidate, so the
/// last minimal entry wins.
pub fn locate_pivot<T>(matrix: &Array2<T>, k: usize) -> Result<(usize, usize)>
where
    T: Integer + Signed + Clone,
{
    let (rows, cols) = matrix.dim();
    let mut best: Option<(usize, usize, T)> = None;

    for i in k..rows {
        for j in k..cols {
            let entry = &matrix[[i, j]];
            if entry.is_zero() {
                continue;
            }
            let magnitude = entry.abs();
            let better = match &best {
                Some((_, _, current)) => magnitude <= *current,
                None => true,
            };
            if better {
                best = Some((i, j, magnitude));
            }
        }
    }

    best.map(|(i, j, _)| (i, j))
        .ok_or(LocalHomologyError::NoNonZeroEntry { offset: k })
}

/// Swap rows `a` and `b`.
pub fn swap_rows<T>(matrix: &mut Array2<T>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for j in 0..matrix.ncols() {
        matrix.swap([a, j], [b, j]);
    }
}

/// Swap columns `a` and `b`.
pub fn swap_cols<T>(matrix: &mut Array2<T>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for i in 0..matrix.nrows() {
        matrix.swap([i, a], [i, b]);
    }
}

/// `row[dst] += factor * row[src]`
pub fn add_row_multiple<T>(matrix: &mut Array2<T>, src: usize, dst: usize, factor: &T)
where
    T: Integer + Clone,
{
    if factor.is_zero() || src == dst {
        return;
    }
    for j in 0..matrix.ncols() {
        let delta = factor.clone() * matrix[[src, j]].clone();
        let updated = matrix[[dst, j]].clone() + delta;
        matrix[[dst, j]] = updated;
    }
}

/// `col[dst] += factor * col[src]`
pub fn add_col_multiple<T>(matrix: &mut Array2<T>, src: usize, dst: usize, factor: &T)
where
    T: Integer + Clone,
{
    if factor.is_zero() || src == dst {
        return;
    }
    for i in 0..matrix.nrows() {
        let delta = factor.clone() * matrix[[i, src]].clone();
        let updated = matrix[[i, dst]].clone() + delta;
        matrix[[i, dst]] = updated;
    }
}

/// Multiply row `r` by -1.
pub fn negate_row<T>(matrix: &mut Array2<T>, r: usize)
where
    T: Signed + Clone,
{
    for j in 0..matrix.ncols() {
        let negated = -matrix[[r, j]].clone();
        matrix[[r, j]] = negated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use num_bigint::BigInt;

    #[test]
    fn test_pivot_prefers_last_minimum() {
        let matrix = array![
            [5_i64, 0, 0, 0, 0],
            [0, 60, 0, 0, 0],
            [0, 0, -18900, -3780, -16380],
            [0, 0, -10500, -3780, -7140],
            [0, 0, -12180, -4620, -7980]
        ];

        assert_eq!(locate_pivot(&matrix, 2), Ok((3, 3)));
    }

    #[test]
    fn test_pivot_ignores_leading_block() {
        // The 1 at (0, 0) is outside the trailing submatrix
        let matrix = array![[1_i64, 0, 0], [0, 0, 7], [0, -4, 9]];

        assert_eq!(locate_pivot(&matrix, 1), Ok((2, 1)));
        assert_eq!(locate_pivot(&matrix, 0), Ok((0, 0)));
    }

    #[test]
    fn test_pivot_on_zero_submatrix() {
        let matrix = array![[3_i64, 0], [0, 0]];

        assert_eq!(
            locate_pivot(&matrix, 1),
            Err(LocalHomologyError::NoNonZeroEntry { offset: 1 })
        );
        // Offsets past the end behave like an empty submatrix
        assert!(locate_pivot(&matrix, 5).is_err());
    }

    #[test]
    fn test_line_operations() {
        let mut matrix = array![[1_i64, 2, 3], [4, 5, 6]];

        add_row_multiple(&mut matrix, 0, 1, &-4);
        assert_eq!(matrix, array![[1, 2, 3], [0, -3, -6]]);

        add_col_multiple(&mut matrix, 0, 2, &-3);
        assert_eq!(matrix, array![[1, 2, 0], [0, -3, -6]]);

        swap_cols(&mut matrix, 1, 2);
        swap_rows(&mut matrix, 0, 1);
        assert_eq!(matrix, array![[0, -6, -3], [1, 0, 2]]);

        negate_row(&mut matrix, 0);
        assert_eq!(matrix, array![[0, 6, 3], [1, 0, 2]]);
    }

    #[test]
    fn test_bigint_operations_are_exact() {
        let big = BigInt::from(i64::MAX);
        let mut matrix = Array2::from_shape_vec(
            (2, 1),
            vec![big.clone(), big.clone()],
        )
        .unwrap();

        add_row_multiple(&mut matrix, 0, 1, &BigInt::from(3));

        assert_eq!(matrix[[1, 0]], big * BigInt::from(4));
    }
}
