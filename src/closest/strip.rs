//! Merge step: looks for a cross-boundary pair inside the central slab

use super::point::{Pair, Point};
use super::solver::{SolveStats, order_by};
use std::ops::Deref;

/// A range of point indices temporarily sorted by y
///
/// The range is put back into x order when the guard is dropped, so the
/// caller's x-sorted sequence is intact however the scan ends.
pub struct YOrdered<'a> {
    points: &'a [Point],
    ids: &'a mut [usize],
}

impl<'a> YOrdered<'a> {
    pub fn new(points: &'a [Point], ids: &'a mut [usize]) -> Self {
        ids.sort_by(|&a, &b| order_by(points, 1, a, b));
        YOrdered { points, ids }
    }
}

impl Deref for YOrdered<'_> {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        self.ids
    }
}

impl Drop for YOrdered<'_> {
    fn drop(&mut self) {
        let points = self.points;
        self.ids.sort_by(|&a, &b| order_by(points, 0, a, b));
    }
}

/// Current best while sweeping the slab
struct Sweep<'a> {
    points: &'a [Point],
    best: Pair,
    delta: f64,
    comparisons: usize,
}

impl Sweep<'_> {
    /// Tests a left/right candidate, keeping it only if strictly closer
    fn test(&mut self, left: usize, right: usize) {
        self.comparisons += 1;

        let points = self.points;
        let (l, r) = (&points[left], &points[right]);
        if (r.x() - l.x()).abs() >= self.delta || (r.y() - l.y()).abs() >= self.delta {
            return;
        }

        let sq_dist = l.sq_dist(r);
        if sq_dist < self.best.sq_dist {
            self.delta = sq_dist.sqrt();
            self.best = Pair::new(left, right, sq_dist);
        }
    }
}

/// Looks for a pair closer than `best` with one point in each half
///
/// # Arguments
///
/// * `left` - Left half, sorted by x; every point has x <= `median_x`
/// * `right` - Right half, sorted by x; starts with the median point
/// * `median_x` - X coordinate of the split line
/// * `best` - Closest pair found inside either half
///
/// Both halves are in x order again when this returns.
pub fn merge(
    points: &[Point],
    left: &mut [usize],
    right: &mut [usize],
    median_x: f64,
    best: Pair,
    stats: &mut SolveStats,
) -> Pair {
    let delta = best.distance();
    let left_bound = median_x - delta;
    let right_bound = median_x + delta;

    // Walk outwards from the split line; both halves are x-sorted
    let in_left = left
        .iter()
        .rev()
        .take_while(|&&i| points[i].x() > left_bound)
        .count();
    let in_right = right
        .iter()
        .take_while(|&&i| points[i].x() < right_bound)
        .count();

    let left_start = left.len() - in_left;
    let left_slab = YOrdered::new(points, &mut left[left_start..]);
    let right_slab = YOrdered::new(points, &mut right[..in_right]);

    let mut sweep = Sweep {
        points,
        best,
        delta,
        comparisons: 0,
    };

    // Merge-like walk in y order. The lower point is tested against the
    // opposite current point and the one right after it.
    let (mut i, mut j) = (0, 0);
    while i < left_slab.len() && j < right_slab.len() {
        let (l, r) = (left_slab[i], right_slab[j]);
        if points[l].y() <= points[r].y() {
            sweep.test(l, r);
            if let Some(&next) = right_slab.get(j + 1) {
                sweep.test(l, next);
            }
            i += 1;
        } else {
            sweep.test(l, r);
            if let Some(&next) = left_slab.get(i + 1) {
                sweep.test(next, r);
            }
            j += 1;
        }
    }

    let slab = left_slab.len() + right_slab.len();
    stats.merges += 1;
    stats.slab_points += slab;
    stats.max_slab = stats.max_slab.max(slab);
    stats.comparisons += sweep.comparisons;

    sweep.best
}
