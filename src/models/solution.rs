//! Solution type.

use serde::{Deserialize, Serialize};

/// A solution to a TSP instance: a closed tour and its total length.
///
/// The tour is a permutation of `0..n` interpreted cyclically (the
/// successor of the last index is the first). An empty instance yields
/// an empty tour with length `0.0`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Solution;
///
/// let sol = Solution::new(vec![0, 2, 1], 12.0);
/// assert_eq!(sol.tour(), &[0, 2, 1]);
/// assert_eq!(sol.length(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    tour: Vec<usize>,
    length: f64,
}

impl Solution {
    /// Creates a solution from a tour and its length.
    pub fn new(tour: Vec<usize>, length: f64) -> Self {
        Self { tour, length }
    }

    /// Creates the empty solution (no points, zero length).
    pub fn empty() -> Self {
        Self {
            tour: Vec::new(),
            length: 0.0,
        }
    }

    /// The visiting order as point indices.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Total cyclic tour length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns `true` if the tour visits no points.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// Consumes the solution, returning `(tour, length)`.
    pub fn into_parts(self) -> (Vec<usize>, f64) {
        (self.tour, self.length)
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::empty()
    }
}
