//! Cyclic tour length and permutation validation.

use crate::distance::DistanceMatrix;

/// Computes the total length of a closed tour: the sum of consecutive
/// edge distances plus the wrap-around edge from the last point back to
/// the first.
///
/// The length is invariant under rotating the tour's starting point and
/// under reversing the whole tour, since either way it sums the same
/// multiset of edges. Tours with fewer than two points have length `0.0`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::tour_length;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(3.0, 4.0),
/// ]);
/// assert!((tour_length(&[0, 1, 2], &dm) - 12.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..tour.len() - 1 {
        total += distances.get(tour[i], tour[i + 1]);
    }
    total += distances.get(tour[tour.len() - 1], tour[0]);
    total
}

/// Returns `true` if `tour` is a permutation of `0..n` — every index
/// present exactly once, none duplicated or dropped.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in tour {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
