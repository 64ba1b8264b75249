//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix built once per solve and
//! shared read-only by every search run.

mod matrix;

pub use matrix::DistanceMatrix;
