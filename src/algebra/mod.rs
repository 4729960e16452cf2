//! Algebra Module: Exact Matrix Reduction
//!
//! Two reductions of the same shape:
//! - `smith.rs`: Smith Normal Form over ℤ, built on the unimodular
//!   primitives in `integer_ops.rs`. Exact for `BigInt` entries.
//! - `gf2.rs`: the GF(2) specialization used for boundary matrices,
//!   with a recursive and an iterative driver that agree bit for bit.
//!
//! For a 0/1 matrix M, `smith_normal_form(M).mod2()` equals the GF(2)
//! reduced form of M: reduction and parity commute.

pub mod integer_ops;
mod smith;
mod gf2;

pub use integer_ops::locate_pivot;
pub use smith::{SmithNormalForm, reduce_in_place, smith_normal_form, smith_normal_form_exact};
pub use gf2::{
    EliminationStrategy,
    Gf2Reduction,
    rank as gf2_rank,
    reduce as gf2_reduce,
    reduce_iterative,
    reduce_recursive,
};
