use super::point::{Pair, Point};

/// Simple O(N^2) way to find the closest pair
///
/// Scans every pair `i < j` in index order, the first strictly closer pair
/// wins. Used as the reference the fast solver is checked against.
///
/// # Panics
///
/// Panics if `points` holds fewer than two points
pub fn brute_force(points: &[Point]) -> Pair {
    assert!(
        points.len() >= 2,
        "closest pair needs at least 2 points, got {}",
        points.len()
    );

    let mut best = Pair::of(points, 0, 1);
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let sq_dist = points[i].sq_dist(&points[j]);
            if sq_dist < best.sq_dist {
                best = Pair::new(i, j, sq_dist);
            }
        }
    }

    best
}
