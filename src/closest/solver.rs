use super::point::{Pair, Point};
use super::strip;
use std::cmp::Ordering;

// Closest pair by divide and conquer (Shamos & Hoey):
//
// closestPair(P sorted by x)
//    if |P| <= 3 compare all pairs directly
//    m = |P| / 2, split line at x(P[m])
//    dL = closestPair(P[0..m]), dR = closestPair(P[m..])
//    d = min(dL, dR)
//    scan the slab |x - x(P[m])| < d for a closer cross pair
//
// Every range keeps its x order when a call returns, so the parent can
// build its own slab from it.

/// Counters collected while solving, mostly for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolveStats {
    /// Number of strip merges performed
    pub merges: usize,
    /// Total number of points that landed in a slab over all merges
    pub slab_points: usize,
    /// Largest slab (both halves together) seen in a single merge
    pub max_slab: usize,
    /// Number of cross-boundary candidate pairs tested during merges
    pub comparisons: usize,
}

/// Orders two point indices on dimension `dim`, breaking ties by the other dimension
pub fn order_by(points: &[Point], dim: usize, a: usize, b: usize) -> Ordering {
    let a_val = points[a].0[dim];
    let b_val = points[b].0[dim];
    if a_val == b_val {
        points[a].0[1 - dim]
            .partial_cmp(&points[b].0[1 - dim])
            .unwrap_or(Ordering::Equal)
    } else {
        a_val.partial_cmp(&b_val).unwrap_or(Ordering::Equal)
    }
}

/// Returns point indices sorted ascending by x (then by y)
pub fn pre_sort(points: &[Point]) -> Vec<usize> {
    let mut ids: Vec<usize> = (0..points.len()).collect();
    ids.sort_by(|&a, &b| order_by(points, 0, a, b));
    ids
}

/// Finds the closest pair of points
///
/// # Panics
///
/// Panics if `points` holds fewer than two points
#[cfg(test)]
pub fn closest_pair(points: &[Point]) -> Pair {
    closest_pair_with_stats(points).0
}

/// Finds the closest pair of points and reports merge counters
///
/// # Panics
///
/// Panics if `points` holds fewer than two points
pub fn closest_pair_with_stats(points: &[Point]) -> (Pair, SolveStats) {
    assert!(
        points.len() >= 2,
        "closest pair needs at least 2 points, got {}",
        points.len()
    );

    let mut ids = pre_sort(points);
    let mut stats = SolveStats::default();
    let pair = solve(points, &mut ids, &mut stats);

    (pair, stats)
}

/// Recursive step over an x-sorted range of point indices
///
/// `ids` is left in x order on return.
pub fn solve(points: &[Point], ids: &mut [usize], stats: &mut SolveStats) -> Pair {
    match ids.len() {
        0 | 1 => panic!("closest pair needs at least 2 points, got {}", ids.len()),
        2 => Pair::of(points, ids[0], ids[1]),
        3 => closest_of_three(points, ids[0], ids[1], ids[2]),
        n => {
            let median = n / 2;
            let median_x = points[ids[median]].x();

            // Median point goes to the right half
            let (left, right) = ids.split_at_mut(median);
            let left_best = solve(points, left, stats);
            let right_best = solve(points, right, stats);

            let best = if left_best.sq_dist <= right_best.sq_dist {
                left_best
            } else {
                right_best
            };

            strip::merge(points, left, right, median_x, best, stats)
        }
    }
}

/// Base case for three points
///
/// Pairs are tried in the order (p1, p2), (p2, p3), (p3, p1); an earlier
/// pair wins only when strictly closer than both later ones.
fn closest_of_three(points: &[Point], p1: usize, p2: usize, p3: usize) -> Pair {
    let d1 = Pair::of(points, p1, p2);
    let d2 = Pair::of(points, p2, p3);
    let d3 = Pair::of(points, p3, p1);

    if d1.sq_dist < d2.sq_dist && d1.sq_dist < d3.sq_dist {
        d1
    } else if d2.sq_dist < d3.sq_dist {
        d2
    } else {
        d3
    }
}
