//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a chosen point, always visit the
//! nearest unvisited point next.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Solution quality is
//! typically 15-25% above optimal; it provides a fast baseline for the
//! local search operators to improve on.

use crate::distance::DistanceMatrix;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Starting from `start`, greedily appends the unvisited point with the
/// minimum distance to the current tour end. Candidates are scanned in
/// ascending index order and accepted only on strict improvement, so
/// distance ties always resolve to the lowest index and construction is
/// fully deterministic.
///
/// Returns a permutation of `0..n` beginning with `start`.
///
/// # Panics
///
/// Panics if `start >= distances.size()`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(nearest_neighbor(0, &dm), vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor(start: usize, distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    assert!(start < n, "start index {start} out of bounds for {n} points");

    let mut visited = vec![false; n];
    visited[start] = true;

    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut current = start;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            let d = distances.get(current, i);
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((i, d));
            }
        }

        let (next, _) = best.expect("unvisited point must exist");
        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn line_points() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ])
    }

    #[test]
    fn test_nn_visits_in_order_on_line() {
        let dm = line_points();
        assert_eq!(nearest_neighbor(0, &dm), vec![0, 1, 2, 3]);
        assert_eq!(nearest_neighbor(3, &dm), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_nn_from_interior_start() {
        let dm = line_points();
        // From 1, nearest is 0 or 2 (both at distance 1); lowest index wins.
        assert_eq!(nearest_neighbor(1, &dm), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_nn_is_permutation() {
        let dm = line_points();
        for start in 0..4 {
            let tour = nearest_neighbor(start, &dm);
            let mut sorted = tour.clone();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
            assert_eq!(tour[0], start);
        }
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0), // far
            Point::new(1.0, 0.0),  // near
        ]);
        assert_eq!(nearest_neighbor(0, &dm), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_tie_break_lowest_index() {
        // Points 1 and 2 are equidistant from 0.
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ]);
        assert_eq!(nearest_neighbor(0, &dm), vec![0, 1, 2]);
    }

    #[test]
    fn test_nn_single_point() {
        let dm = DistanceMatrix::from_points(&[Point::new(5.0, 5.0)]);
        assert_eq!(nearest_neighbor(0, &dm), vec![0]);
    }

    #[test]
    fn test_nn_coincident_points() {
        let dm = DistanceMatrix::from_points(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)]);
        assert_eq!(nearest_neighbor(0, &dm), vec![0, 1]);
    }

    #[test]
    #[should_panic]
    fn test_nn_start_out_of_bounds() {
        let dm = line_points();
        nearest_neighbor(4, &dm);
    }
}
