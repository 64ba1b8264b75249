//! Local search operators for improving tours.
//!
//! - [`two_opt`] — 2-opt segment reversal, swept to a local optimum
//! - [`three_opt`] — 3-opt edge reconnection, one exhaustive pass
//!
//! Both operators are pure with respect to the caller: they take a tour
//! by reference and return a new owned tour, so pipeline stages never
//! share mutable state.

mod three_opt;
mod two_opt;

pub use three_opt::three_opt_improve;
pub use two_opt::{reverse_segment, two_opt_improve};

/// Minimum decrease for a move to count as a strict improvement. Keeps
/// floating-point noise from stalling the convergence loop.
pub(crate) const IMPROVEMENT_EPSILON: f64 = 1e-10;
