//! Matrix Reduction over GF(2)
//!
//! Over the two-element field every non-zero entry is a unit, so the
//! Smith Normal Form collapses to `diag(1, …, 1, 0, …, 0)` with exactly
//! `rank` ones. Reducing a 0/1 matrix here gives the same result as taking
//! its integer Smith Normal Form and reading every entry mod 2.
//!
//! ## Elimination rule
//!
//! At pivot index x the active submatrix is M[x.., x..]:
//!
//! 1. Pivot = first 1 in a row-major scan of the active submatrix.
//! 2. Swap it to (x, x).
//! 3. XOR row x into every lower row with a 1 in column x, then XOR
//!    column x into every later column with a 1 in row x.
//!
//! [`reduce_recursive`] and [`reduce_iterative`] only differ in how they
//! drive that rule (call stack vs loop); both go through the same `Elimination` state,
//! so they produce identical matrices, ranks and transforms.

use ndarray::Array2;

use super::integer_ops::{swap_cols, swap_rows};

/// How the elimination rule is driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EliminationStrategy {
    /// Recurse on the trailing submatrix after each pivot
    Recursive,
    /// Loop over pivot indices
    #[default]
    Iterative,
}

/// Output of a GF(2) reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gf2Reduction {
    /// Diagonal 0/1 matrix with `rank` leading ones
    pub matrix: Array2<u8>,
    /// Number of pivots used
    pub rank: usize,
    /// Dimension of the kernel: `cols - rank`
    pub nullity: usize,
    /// Accumulated row operations
    pub left: Array2<u8>,
    /// Accumulated column operations
    pub right: Array2<u8>,
}

/// Reduce with the given strategy.
pub fn reduce(matrix: Array2<u8>, strategy: EliminationStrategy) -> Gf2Reduction {
    match strategy {
        EliminationStrategy::Recursive => reduce_recursive(matrix),
        EliminationStrategy::Iterative => reduce_iterative(matrix),
    }
}

/// Rank over GF(2).
///
/// Runs the same elimination as [`reduce`] without accumulating the
/// row and column transforms.
pub fn rank(matrix: Array2<u8>, strategy: EliminationStrategy) -> usize {
    let mut state = Elimination::new(matrix, false);
    match strategy {
        EliminationStrategy::Recursive => descend(&mut state, 0),
        EliminationStrategy::Iterative => sweep(&mut state),
    }
}

/// Recursive driver: one pivot, then the strictly smaller trailing block.
pub fn reduce_recursive(matrix: Array2<u8>) -> Gf2Reduction {
    let mut state = Elimination::new(matrix, true);
    let rank = descend(&mut state, 0);
    state.finish(rank)
}

/// Iterative driver: the same rule as an explicit loop.
pub fn reduce_iterative(matrix: Array2<u8>) -> Gf2Reduction {
    let mut state = Elimination::new(matrix, true);
    let rank = sweep(&mut state);
    state.finish(rank)
}

fn descend(state: &mut Elimination, x: usize) -> usize {
    match state.find_pivot(x) {
        Some(pivot) => {
            state.eliminate(x, pivot);
            descend(state, x + 1)
        }
        None => x,
    }
}

fn sweep(state: &mut Elimination) -> usize {
    let mut x = 0;
    while let Some(pivot) = state.find_pivot(x) {
        state.eliminate(x, pivot);
        x += 1;
    }
    x
}

/// Working state shared by both drivers.
///
/// Invariant when tracking: `left · input · right ≡ matrix (mod 2)`.
/// Without tracking `left` and `right` stay empty.
struct Elimination {
    matrix: Array2<u8>,
    left: Array2<u8>,
    right: Array2<u8>,
    track_transforms: bool,
}

impl Elimination {
    fn new(mut matrix: Array2<u8>, track_transforms: bool) -> Self {
        matrix.mapv_inplace(|entry| entry & 1);
        let (rows, cols) = matrix.dim();
        let (left, right) = if track_transforms {
            (Array2::eye(rows), Array2::eye(cols))
        } else {
            (Array2::zeros((0, 0)), Array2::zeros((0, 0)))
        };
        Self {
            matrix,
            left,
            right,
            track_transforms,
        }
    }

    fn find_pivot(&self, x: usize) -> Option<(usize, usize)> {
        let (rows, cols) = self.matrix.dim();
        (x..rows)
            .flat_map(|i| (x..cols).map(move |j| (i, j)))
            .find(|&(i, j)| self.matrix[[i, j]] == 1)
    }

    fn eliminate(&mut self, x: usize, (pi, pj): (usize, usize)) {
        let (rows, cols) = self.matrix.dim();
        let track = self.track_transforms;

        swap_rows(&mut self.matrix, x, pi);
        swap_cols(&mut self.matrix, x, pj);
        if track {
            swap_rows(&mut self.left, x, pi);
            swap_cols(&mut self.right, x, pj);
        }

        for i in x + 1..rows {
            if self.matrix[[i, x]] == 1 {
                xor_row(&mut self.matrix, x, i);
                if track {
                    xor_row(&mut self.left, x, i);
                }
            }
        }
        for j in x + 1..cols {
            if self.matrix[[x, j]] == 1 {
                xor_col(&mut self.matrix, x, j);
                if track {
                    xor_col(&mut self.right, x, j);
                }
            }
        }
    }

    fn finish(self, rank: usize) -> Gf2Reduction {
        let nullity = self.matrix.ncols() - rank;
        Gf2Reduction {
            matrix: self.matrix,
            rank,
            nullity,
            left: self.left,
            right: self.right,
        }
    }
}

/// row[dst] ^= row[src]
fn xor_row(matrix: &mut Array2<u8>, src: usize, dst: usize) {
    for j in 0..matrix.ncols() {
        let bit = matrix[[src, j]];
        matrix[[dst, j]] ^= bit;
    }
}

/// col[dst] ^= col[src]
fn xor_col(matrix: &mut Array2<u8>, src: usize, dst: usize) {
    for i in 0..matrix.nrows() {
        let bit = matrix[[i, src]];
        matrix[[i, dst]] ^= bit;
    }
}
