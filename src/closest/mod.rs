//! Package closest finds the closest pair of planar points by divide and conquer
pub mod brute;
pub mod distance;
pub mod point;
pub mod solver;
pub mod strip;

#[cfg(test)]
mod distance_test;
#[cfg(test)]
mod point_test;

pub use brute::brute_force;
pub use point::{Pair, Point, PointList};
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use distance::sq_dist;
#[allow(unused_imports)]
pub use solver::{SolveStats, closest_pair_with_stats, pre_sort};

#[cfg(test)]
pub use solver::closest_pair;
