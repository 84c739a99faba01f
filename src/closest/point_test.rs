#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point([3.5, -1.25]);
        assert_eq!(p.x(), 3.5);
        assert_eq!(p.y(), -1.25);
    }

    #[test]
    fn test_pair_of() {
        let points = vec![Point([0.0, 0.0]), Point([3.0, 4.0]), Point([1.0, 1.0])];
        let pair = Pair::of(&points, 0, 1);
        assert_eq!(pair.sq_dist, 25.0);
        assert_eq!(pair.distance(), 5.0);
        assert_eq!(pair.points(&points), (Point([0.0, 0.0]), Point([3.0, 4.0])));
    }

    #[test]
    fn test_same_points() {
        let p1 = Pair::new(1, 4, 2.0);
        let p2 = Pair::new(4, 1, 2.0);
        let p3 = Pair::new(1, 3, 2.0);
        assert!(p1.same_points(&p2));
        assert!(p2.same_points(&p1));
        assert!(!p1.same_points(&p3));
    }
}
