//! Points and the pair result produced by the solvers

/// Point represents a planar coordinate
///
/// The point is stored as [x, y] where:
/// - `[0]` is x
/// - `[1]` is y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub [f64; 2]);

/// PointList is the arena of points for one dataset.
///
/// Solvers never move points inside it, they reorder indices into it.
pub type PointList = Vec<Point>;

/// Pair is the closest pair found so far in some range of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    /// Index of the first point in the owning `PointList`
    pub a: usize,
    /// Index of the second point in the owning `PointList`
    pub b: usize,
    /// Squared distance between `a` and `b`
    pub sq_dist: f64,
}

impl Point {
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Returns squared (without sqrt) distance between two points
    pub fn sq_dist(&self, b: &Point) -> f64 {
        super::distance::sq_dist(self, b)
    }
}

impl Pair {
    pub fn new(a: usize, b: usize, sq_dist: f64) -> Pair {
        Pair { a, b, sq_dist }
    }

    /// Builds a pair of two indices, computing their squared distance
    pub fn of(points: &[Point], a: usize, b: usize) -> Pair {
        Pair {
            a,
            b,
            sq_dist: points[a].sq_dist(&points[b]),
        }
    }

    /// Linear (Euclidean) distance between the two points
    pub fn distance(&self) -> f64 {
        self.sq_dist.sqrt()
    }

    /// Resolves the pair's indices to its two points
    pub fn points(&self, points: &[Point]) -> (Point, Point) {
        (points[self.a], points[self.b])
    }

    /// Checks if this pair joins the same two points as another one, in any order
    pub fn same_points(&self, other: &Pair) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}
