//! Tour evaluation.
//!
//! - [`tour_length`] — Total length of a closed cyclic tour, O(n)
//! - [`is_permutation`] — Checks the permutation invariant on a tour

mod length;

pub use length::{is_permutation, tour_length};
