use super::point::Point;

/// Returns the squared Euclidean distance between two points
///
/// Comparing candidates only needs their relative order, so the solvers work
/// on squared values. Take the square root to get the real distance.
pub fn sq_dist(p1: &Point, p2: &Point) -> f64 {
    let dx = p1.0[0] - p2.0[0];
    let dy = p1.0[1] - p2.0[1];

    dx * dx + dy * dy
}
