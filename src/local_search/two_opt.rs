//! 2-opt improvement.
//!
//! # Algorithm
//!
//! A 2-opt move replaces two edges of the tour by reversing the segment
//! between them. The sweep scans all position pairs (i, j) with i < j,
//! evaluates the full length of the tour that would result from
//! reversing `[i..=j]`, and commits the first strictly improving
//! reversal found for each `i`. Full passes repeat until one commits no
//! improvement (first-improvement strategy, run to a local optimum).
//!
//! Each candidate is scored by recomputing the whole tour length rather
//! than an edge delta; at O(n) per candidate this is the slower but
//! simpler scheme, and acceptance decisions are exact.
//!
//! # Complexity
//!
//! O(n³) per pass, O(n⁴) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::IMPROVEMENT_EPSILON;
use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;

/// Returns a copy of `tour` with the inclusive range `[i..=j]` reversed.
///
/// Exactly the two edges bordering the segment change; the permutation
/// property is preserved. Applying the same reversal twice returns the
/// original tour.
///
/// # Panics
///
/// Panics if `i > j` or `j >= tour.len()`.
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::reverse_segment;
///
/// assert_eq!(reverse_segment(&[0, 1, 2, 3, 4], 1, 3), vec![0, 3, 2, 1, 4]);
/// ```
pub fn reverse_segment(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    assert!(i <= j && j < tour.len(), "invalid segment [{i}, {j}]");
    let mut new_tour = Vec::with_capacity(tour.len());
    new_tour.extend_from_slice(&tour[..i]);
    new_tour.extend(tour[i..=j].iter().rev());
    new_tour.extend_from_slice(&tour[j + 1..]);
    new_tour
}

/// Applies 2-opt improvement to a closed tour.
///
/// Sweeps all segment reversals, committing the first one per outer
/// index that strictly shortens the tour, and repeats full sweeps until
/// none improves. Returns the improved tour and its total length.
///
/// Tours with fewer than three points admit no length-changing reversal
/// and are returned unchanged.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ]);
/// // 0→2→1→3 crosses itself; 2-opt untangles it to the square.
/// let (tour, length) = two_opt_improve(&[0, 2, 1, 3], &dm);
/// assert!((length - 4.0).abs() < 1e-10);
/// assert_eq!(tour.len(), 4);
/// ```
pub fn two_opt_improve(tour: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    if tour.len() < 3 {
        return (tour.to_vec(), tour_length(tour, distances));
    }

    let mut best = tour.to_vec();
    let mut best_length = tour_length(&best, distances);
    let n = best.len();
    let mut improved = true;

    while improved {
        improved = false;
        for i in 0..n - 1 {
            for j in i + 1..n {
                let candidate = reverse_segment(&best, i, j);
                let length = tour_length(&candidate, distances);
                if length < best_length - IMPROVEMENT_EPSILON {
                    best = candidate;
                    best_length = length;
                    improved = true;
                    // First improvement for this i; move on to the next.
                    break;
                }
            }
        }
    }

    (best, best_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_reverse_segment_inner() {
        assert_eq!(reverse_segment(&[0, 1, 2, 3, 4], 1, 3), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_reverse_segment_full_and_trivial() {
        assert_eq!(reverse_segment(&[0, 1, 2], 0, 2), vec![2, 1, 0]);
        assert_eq!(reverse_segment(&[0, 1, 2], 1, 1), vec![0, 1, 2]);
    }

    #[test]
    fn test_reverse_segment_is_involution() {
        let tour = vec![4, 2, 0, 3, 1];
        let twice = reverse_segment(&reverse_segment(&tour, 1, 3), 1, 3);
        assert_eq!(twice, tour);
    }

    #[test]
    #[should_panic]
    fn test_reverse_segment_out_of_bounds() {
        reverse_segment(&[0, 1, 2], 1, 3);
    }

    #[test]
    fn test_2opt_untangles_square() {
        let dm = unit_square();
        // Both diagonal orders must converge to the perimeter, length 4.
        let (tour, length) = two_opt_improve(&[0, 2, 1, 3], &dm);
        assert!((length - 4.0).abs() < 1e-10);
        let mut sorted = tour.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3]);

        let (_, length) = two_opt_improve(&[1, 3, 0, 2], &dm);
        assert!((length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = unit_square();
        let (tour, length) = two_opt_improve(&[0, 1, 2, 3], &dm);
        assert_eq!(tour, vec![0, 1, 2, 3]);
        assert!((length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 1.0),
            Point::new(2.0, 4.0),
            Point::new(7.0, 3.0),
            Point::new(1.0, 6.0),
            Point::new(6.0, 6.0),
        ]);
        let initial = vec![0, 3, 1, 4, 2, 5];
        let initial_length = tour_length(&initial, &dm);
        let (_, improved_length) = two_opt_improve(&initial, &dm);
        assert!(improved_length <= initial_length + 1e-10);
    }

    #[test]
    fn test_2opt_small_tours_passthrough() {
        let dm = unit_square();
        let (tour, length) = two_opt_improve(&[], &dm);
        assert!(tour.is_empty());
        assert_eq!(length, 0.0);

        let (tour, length) = two_opt_improve(&[2], &dm);
        assert_eq!(tour, vec![2]);
        assert_eq!(length, 0.0);

        // Two points: the single reversal flips direction only.
        let (tour, length) = two_opt_improve(&[0, 1], &dm);
        assert_eq!(tour, vec![0, 1]);
        assert!((length - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_preserves_permutation() {
        let dm = DistanceMatrix::from_points(&[
            Point::new(2.0, 3.0),
            Point::new(4.0, 1.0),
            Point::new(6.0, 4.0),
            Point::new(3.0, 5.0),
            Point::new(1.0, 4.0),
        ]);
        let (tour, _) = two_opt_improve(&[3, 1, 4, 0, 2], &dm);
        let mut sorted = tour;
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }
}
