//! Smith Normal Form over the Integers
//!
//! Every integer matrix A is equivalent, under unimodular row and column
//! operations, to a unique diagonal matrix
//!
//!   D = diag(d₁, d₂, …, dᵣ, 0, …, 0),   dᵢ > 0,   d₁ | d₂ | … | dᵣ
//!
//! where r is the rank of A over ℚ. The dᵢ are the invariant factors.
//!
//! ## Algorithm
//!
//! 1. Stage k: move the smallest non-zero entry (in absolute value) of the
//!    trailing submatrix A[k.., k..] to (k, k).
//! 2. Subtract integer multiples of row/column k from the other rows and
//!    columns. Each remainder is strictly smaller than the pivot, so
//!    whenever one survives the pivot is re-selected and the stage repeats.
//! 3. The stage ends once row k and column k are zero outside (k, k); the
//!    pivot is made positive by negating its row.
//! 4. A repair pass replaces any adjacent pair (dᵢ, dᵢ₊₁) that violates
//!    divisibility with (gcd, lcm) until the chain holds.
//!
//! Picking the smallest pivot keeps coefficients close to the size of the
//! input entries; [`smith_normal_form_exact`] works over `BigInt` and
//! cannot overflow.

use ndarray::{Array2, ArrayView2};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;
use tracing::{debug, trace};

use super::integer_ops::{
    add_col_multiple, add_row_multiple, locate_pivot, negate_row, swap_cols, swap_rows,
};

/// Result of [`smith_normal_form`].
#[derive(Debug, Clone, PartialEq)]
pub struct SmithNormalForm<T> {
    /// Diagonal matrix with the same shape as the input
    pub diagonal: Array2<T>,
    /// d₁, …, dᵣ (all positive, each dividing the next)
    pub invariant_factors: Vec<T>,
    /// Rank over ℚ
    pub rank: usize,
}

impl<T> SmithNormalForm<T>
where
    T: Integer + Signed + Clone,
{
    /// Parity of every entry. For a 0/1 input this is its reduced form over GF(2).
    pub fn mod2(&self) -> Array2<u8> {
        self.diagonal.map(|entry| u8::from(entry.is_odd()))
    }

    /// Number of invariant factors that are odd, i.e. the rank over GF(2).
    pub fn rank_mod2(&self) -> usize {
        self.invariant_factors.iter().filter(|d| d.is_odd()).count()
    }

    /// Does d₁ | d₂ | … | dᵣ hold?
    pub fn is_divisibility_chain(&self) -> bool {
        self.invariant_factors
            .windows(2)
            .all(|pair| pair[1].is_multiple_of(&pair[0]))
    }
}

/// Reduce `matrix` to its Smith Normal Form in place and return its rank.
///
/// The caller keeps ownership; the matrix is borrowed exclusively for the
/// duration of the call and holds D afterwards.
pub fn reduce_in_place<T>(matrix: &mut Array2<T>) -> usize
where
    T: Integer + Signed + Clone,
{
    let (rows, cols) = matrix.dim();
    debug!(rows, cols, "start smith normal form");

    let mut rank = 0;
    for k in 0..rows.min(cols) {
        if !reduce_stage(matrix, k) {
            break;
        }
        rank += 1;
    }

    repair_divisibility(matrix, rank);

    debug!(rank, "smith normal form done");
    rank
}

/// Compute the Smith Normal Form without touching the caller's matrix.
pub fn smith_normal_form<T>(matrix: ArrayView2<T>) -> SmithNormalForm<T>
where
    T: Integer + Signed + Clone,
{
    let mut diagonal = matrix.to_owned();
    let rank = reduce_in_place(&mut diagonal);
    let invariant_factors = (0..rank).map(|i| diagonal[[i, i]].clone()).collect();

    SmithNormalForm {
        diagonal,
        invariant_factors,
        rank,
    }
}

/// Smith Normal Form over [`BigInt`], for any input that widens losslessly.
///
/// Intermediate entries and the invariant factors can exceed the range of
/// the input type; this entry point never overflows.
pub fn smith_normal_form_exact<T>(matrix: ArrayView2<T>) -> SmithNormalForm<BigInt>
where
    T: Clone + Into<BigInt>,
{
    smith_normal_form(matrix.mapv(Into::<BigInt>::into).view())
}

/// Run stage `k`. Returns false when the trailing submatrix is already zero.
fn reduce_stage<T>(matrix: &mut Array2<T>, k: usize) -> bool
where
    T: Integer + Signed + Clone,
{
    let (rows, cols) = matrix.dim();

    loop {
        // An all-zero trailing block ends the elimination
        let Ok((pi, pj)) = locate_pivot(matrix, k) else {
            return false;
        };
        swap_rows(matrix, k, pi);
        swap_cols(matrix, k, pj);

        let pivot = matrix[[k, k]].clone();
        let mut cleared = true;

        for i in k + 1..rows {
            if matrix[[i, k]].is_zero() {
                continue;
            }
            let quotient = matrix[[i, k]].div_floor(&pivot);
            add_row_multiple(matrix, k, i, &-quotient);
            cleared &= matrix[[i, k]].is_zero();
        }

        for j in k + 1..cols {
            if matrix[[k, j]].is_zero() {
                continue;
            }
            let quotient = matrix[[k, j]].div_floor(&pivot);
            add_col_multiple(matrix, k, j, &-quotient);
            cleared &= matrix[[k, j]].is_zero();
        }

        if cleared {
            if matrix[[k, k]].is_negative() {
                negate_row(matrix, k);
            }
            return true;
        }
    }
}

/// Enforce d₁ | d₂ | … | dᵣ on the leading diagonal.
fn repair_divisibility<T>(matrix: &mut Array2<T>, rank: usize)
where
    T: Integer + Signed + Clone,
{
    let mut changed = true;
    while changed {
        changed = false;
        for i in 1..rank {
            let (a, b) = (&matrix[[i - 1, i - 1]], &matrix[[i, i]]);
            if b.is_multiple_of(a) {
                continue;
            }
            let (gcd, lcm) = (a.gcd(b), a.lcm(b));
            trace!(position = i - 1, "replacing adjacent invariant factors with gcd/lcm");
            matrix[[i - 1, i - 1]] = gcd;
            matrix[[i, i]] = lcm;
            changed = true;
        }
    }
}
