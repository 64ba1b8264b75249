//! Domain model types for the traveling salesman problem.
//!
//! Provides the two core abstractions: points in the Euclidean plane,
//! identified by their position in the input slice, and solutions pairing
//! a closed tour with its length.

mod point;
mod solution;

pub use point::Point;
pub use solution::Solution;
