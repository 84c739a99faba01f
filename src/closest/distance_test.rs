#[cfg(test)]
mod tests {
    use crate::closest::distance::sq_dist;
    use crate::closest::{Pair, Point};

    #[test]
    fn test_sq_dist() {
        let p1 = Point([0.0, 0.0]);
        let p2 = Point([3.0, 4.0]);
        assert_eq!(sq_dist(&p1, &p2), 25.0);
        assert_eq!(sq_dist(&p2, &p1), 25.0);
        assert_eq!(sq_dist(&p1, &p1), 0.0);
        assert_eq!(sq_dist(&Point([-1.5, 2.0]), &Point([1.5, -2.0])), 25.0);
    }

    #[test]
    fn test_pair_distance() {
        let points = [Point([0.0, 0.0]), Point([1.0, 1.0])];
        let pair = Pair::of(&points, 0, 1);
        assert_eq!(pair.sq_dist, 2.0);
        assert!((pair.distance() - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(Pair::of(&points, 1, 1).distance(), 0.0);
    }
}
