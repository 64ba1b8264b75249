//! Multi-start solver.
//!
//! - [`multi_start`] — Construct → 3-opt → 2-opt from every start, with
//!   an injected random source ordering the starts
//! - [`solve`] — Seeded convenience entry point

mod multi_start;

pub use multi_start::{multi_start, solve};
