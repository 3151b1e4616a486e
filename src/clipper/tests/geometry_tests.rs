use crate::geometry::bound_rect::{get_bounds, IntRect};
use crate::geometry::point::{DoublePoint, IntPoint};
use crate::geometry::polygon::{area, orientation, point_in_polygon, reverse_path, reverse_paths, Path};
use crate::utils::round::round_to_i64;

#[cfg(test)]
mod geometry_tests {
    use super::*;

    fn square() -> Path {
        vec![
            IntPoint::new(0, 0),
            IntPoint::new(10, 0),
            IntPoint::new(10, 10),
            IntPoint::new(0, 10),
        ]
    }

    #[test]
    fn test_area_and_orientation() {
        let mut path = square();

        assert_eq!(area(&path), 100.0);
        assert!(orientation(&path));

        reverse_path(&mut path);
        assert_eq!(area(&path), -100.0);
        assert!(!orientation(&path));

        assert_eq!(area(&path[..2]), 0.0);
    }

    #[test]
    fn test_reverse_paths() {
        let mut paths = vec![square(), vec![IntPoint::new(1, 2), IntPoint::new(3, 4)]];

        reverse_paths(&mut paths);

        assert_eq!(area(&paths[0]), -100.0);
        assert_eq!(paths[1], vec![IntPoint::new(3, 4), IntPoint::new(1, 2)]);
    }

    #[test]
    fn test_point_in_polygon() {
        let path = square();

        assert_eq!(point_in_polygon(&IntPoint::new(5, 5), &path), 1);
        assert_eq!(point_in_polygon(&IntPoint::new(15, 5), &path), 0);
        assert_eq!(point_in_polygon(&IntPoint::new(10, 5), &path), -1);
        assert_eq!(point_in_polygon(&IntPoint::new(0, 0), &path), -1);
    }

    #[test]
    fn test_bounds() {
        let paths = vec![square(), vec![IntPoint::new(-5, 3), IntPoint::new(2, 20)]];

        let bounds = get_bounds(&paths);

        assert_eq!(bounds, IntRect::new(-5, 0, 10, 20));
        assert_eq!(get_bounds(&[]), IntRect::default());
    }

    #[test]
    fn test_bounds_frame_is_reversed() {
        let frame = IntRect::new(0, 0, 10, 10).to_path(2);

        assert_eq!(frame[0], IntPoint::new(-2, 12));
        assert_eq!(area(&frame), -196.0);
    }

    #[test]
    fn test_point_helpers() {
        let a = IntPoint::new(0, 0);
        let b = IntPoint::new(5, 0);
        let c = IntPoint::new(10, 0);

        assert!(b.is_between(&a, &c));
        assert!(!a.is_between(&b, &c));
        assert!(!a.is_between(&a, &c));

        assert_eq!(IntPoint::new(5, 3).distance_from_line_sqrd(&a, &c), 9.0);
        assert!(IntPoint::slopes_near_collinear(&a, &IntPoint::new(5, 1), &c, 2.0));
        assert!(!IntPoint::slopes_near_collinear(&a, &IntPoint::new(5, 2), &c, 2.0));

        assert!(a.close_to(&IntPoint::new(1, 1), 2.0));
        assert!(!a.close_to(&IntPoint::new(2, 1), 2.0));
    }

    #[test]
    fn test_unit_normal() {
        let normal = DoublePoint::unit_normal(&IntPoint::new(0, 0), &IntPoint::new(10, 0));

        assert_eq!(normal, DoublePoint::new(0.0, -1.0));
        assert_eq!(
            DoublePoint::unit_normal(&IntPoint::new(3, 3), &IntPoint::new(3, 3)),
            DoublePoint::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_to_i64(2.5), 3);
        assert_eq!(round_to_i64(-2.5), -3);
        assert_eq!(round_to_i64(-2.4), -2);
        assert_eq!(DoublePoint::new(1.5, -0.5).clipper_round(), IntPoint::new(2, -1));
    }
}
