//! 3-opt improvement.
//!
//! # Algorithm
//!
//! Enumerates ordered cut triples (i, j, k) over the closed tour, where
//! the three edges under consideration are bounded by the positions
//! `(tour[i-1], tour[i])`, `(tour[j-1], tour[j])` and
//! `(tour[k-1], tour[k mod n])`, with `i == 0` and `k == n` wrapping
//! cyclically. For each triple, four reconnections are costed against
//! the current configuration and the first strictly improving one, in
//! fixed priority order, is applied in place:
//!
//! 1. reverse the tail segment `[j..k)`
//! 2. reverse the middle segment `[i..j)`
//! 3. reverse the combined span `[i..k)`
//! 4. swap the middle and tail segments without reversal
//!
//! Later triples observe earlier mutations. This is a single exhaustive
//! pass, not iterated to convergence; the convergent cleanup is left to
//! the 2-opt sweep that follows it in the solver pipeline.
//!
//! # Complexity
//!
//! O(n³) candidate triples, O(n) worst-case segment work each.
//!
//! # Reference
//!
//! Lin, S. (1965). "Computer Solutions of the Traveling Salesman
//! Problem", *Bell System Technical Journal* 44(10), 2245-2269.

use super::IMPROVEMENT_EPSILON;
use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;

/// Applies one exhaustive 3-opt pass to a closed tour.
///
/// Returns the reconnected tour and its total length. Tours with fewer
/// than three points admit no cut triple and are returned unchanged.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::tour_length;
/// use u_tsp::local_search::three_opt_improve;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ]);
/// let initial = [0, 2, 1, 3];
/// let (improved, length) = three_opt_improve(&initial, &dm);
/// assert!(length <= tour_length(&initial, &dm) + 1e-10);
/// assert_eq!(improved.len(), 4);
/// ```
pub fn three_opt_improve(tour: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let n = tour.len();
    if n < 3 {
        return (tour.to_vec(), tour_length(tour, distances));
    }

    let mut current = tour.to_vec();
    for i in 0..n {
        for j in i + 1..n {
            // k == n (the wrap-around cut) is only distinct when i > 0.
            let k_end = if i > 0 { n + 1 } else { n };
            for k in j + 1..k_end {
                reconnect(&mut current, distances, i, j, k);
            }
        }
    }

    let length = tour_length(&current, distances);
    (current, length)
}

/// Costs the four reconnections of the cut triple (i, j, k) and applies
/// the first strictly improving one to `tour` in place.
fn reconnect(tour: &mut [usize], distances: &DistanceMatrix, i: usize, j: usize, k: usize) {
    let n = tour.len();

    // Six positions bounding the three cut edges.
    let a = tour[(i + n - 1) % n];
    let b = tour[i];
    let c = tour[j - 1];
    let d = tour[j];
    let e = tour[k - 1];
    let f = tour[k % n];

    // Only the three cut edges differ between candidates, so comparing
    // 3-edge sums is equivalent to comparing full tour lengths.
    let original = distances.get(a, b) + distances.get(c, d) + distances.get(e, f);
    let middle_reversed = distances.get(a, c) + distances.get(b, d) + distances.get(e, f);
    let tail_reversed = distances.get(a, b) + distances.get(c, e) + distances.get(d, f);
    let segments_swapped = distances.get(a, d) + distances.get(e, b) + distances.get(c, f);
    let span_reversed = distances.get(f, b) + distances.get(c, d) + distances.get(e, a);

    if original - tail_reversed > IMPROVEMENT_EPSILON {
        tour[j..k].reverse();
    } else if original - middle_reversed > IMPROVEMENT_EPSILON {
        tour[i..j].reverse();
    } else if original - span_reversed > IMPROVEMENT_EPSILON {
        tour[i..k].reverse();
    } else if original - segments_swapped > IMPROVEMENT_EPSILON {
        let swapped: Vec<usize> = tour[j..k]
            .iter()
            .chain(tour[i..j].iter())
            .copied()
            .collect();
        tour[i..k].copy_from_slice(&swapped);
    }
}
