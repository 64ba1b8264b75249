//! Multi-start search driver.
//!
//! Runs the construct → 3-opt → 2-opt pipeline once from every point,
//! in an order drawn from an injected random source, and keeps the
//! shortest tour found. Each run owns its tour; the distance matrix is
//! built once and shared read-only.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::local_search::{three_opt_improve, two_opt_improve};
use crate::models::{Point, Solution};

/// Runs the full pipeline from every start point and returns the best
/// solution found.
///
/// The start order is a uniform shuffle of `0..n` drawn from `rng`;
/// every point is tried exactly once, so the result is deterministic
/// for a given random source state. Different seeds may land in
/// different (possibly equal-length) local optima, since 2-opt and
/// 3-opt only guarantee local optimality.
///
/// An empty point set yields the empty solution with length `0.0`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp::models::Point;
/// use u_tsp::solver::multi_start;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(3.0, 4.0),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
/// let solution = multi_start(&points, &mut rng);
/// assert!((solution.length() - 12.0).abs() < 1e-10);
/// ```
pub fn multi_start<R: Rng>(points: &[Point], rng: &mut R) -> Solution {
    let n = points.len();
    if n == 0 {
        return Solution::empty();
    }

    let distances = DistanceMatrix::from_points(points);

    let mut starts: Vec<usize> = (0..n).collect();
    starts.shuffle(rng);

    let mut best: Option<Solution> = None;
    for &start in &starts {
        let tour = nearest_neighbor(start, &distances);
        let (tour, _) = three_opt_improve(&tour, &distances);
        let (tour, length) = two_opt_improve(&tour, &distances);

        let is_better = match &best {
            None => true,
            Some(current) => length < current.length(),
        };
        if is_better {
            best = Some(Solution::new(tour, length));
        }
    }

    best.expect("at least one start was attempted")
}

/// Solves a TSP instance with a fixed seed for the start ordering.
///
/// Deterministic for a given `(points, seed)` pair. See [`multi_start`]
/// for the underlying search.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::solver::solve;
///
/// let solution = solve(&[Point::new(5.0, 5.0)], 0);
/// assert_eq!(solution.tour(), &[0]);
/// assert_eq!(solution.length(), 0.0);
/// ```
pub fn solve(points: &[Point], seed: u64) -> Solution {
    let mut rng = StdRng::seed_from_u64(seed);
    multi_start(points, &mut rng)
}
