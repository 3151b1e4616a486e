use crate::clipper::constants::{DEFAULT_CLEAN_DISTANCE, HI_RANGE};
use crate::clipper::utils::{
    clean_polygon, clean_polygons, minkowski_diff, minkowski_sum, minkowski_sum_paths,
};
use crate::geometry::point::IntPoint;
use crate::error::ClipperError;
use crate::geometry::polygon::{area, Path, Paths};

#[cfg(test)]
mod utils_tests {
    use super::*;

    fn path(points: &[(i64, i64)]) -> Path {
        points.iter().map(|&(x, y)| IntPoint::new(x, y)).collect()
    }

    fn total_area(paths: &Paths) -> f64 {
        paths.iter().map(|path| area(path)).sum()
    }

    fn unit_pattern() -> Path {
        path(&[(-1, -1), (1, -1), (1, 1), (-1, 1)])
    }

    #[test]
    fn test_clean_removes_collinear_vertex() {
        let input = path(&[(0, 0), (5, 0), (10, 0), (10, 10), (0, 10)]);

        let result = clean_polygon(&input, DEFAULT_CLEAN_DISTANCE).unwrap();

        assert_eq!(result, path(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn test_clean_merges_close_vertices() {
        let input = path(&[(0, 0), (10, 0), (10, 10), (9, 10), (0, 10)]);

        let result = clean_polygon(&input, DEFAULT_CLEAN_DISTANCE).unwrap();

        assert_eq!(result.len(), 4);
        assert!(result.contains(&IntPoint::new(0, 0)));
        assert!(result.contains(&IntPoint::new(0, 10)));
    }

    #[test]
    fn test_clean_collapses_tiny_polygon() {
        assert!(clean_polygon(&path(&[(0, 0), (1, 0), (1, 1)]), DEFAULT_CLEAN_DISTANCE)
            .unwrap()
            .is_empty());
        assert!(clean_polygon(&[], DEFAULT_CLEAN_DISTANCE).unwrap().is_empty());
    }

    #[test]
    fn test_clean_polygons_keeps_slots() {
        let input = vec![
            path(&[(0, 0), (10, 0), (10, 10), (0, 10)]),
            path(&[(0, 0), (1, 0), (1, 1)]),
        ];

        let result = clean_polygons(&input, DEFAULT_CLEAN_DISTANCE).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].len(), 4);
        assert!(result[1].is_empty());
    }

    #[test]
    fn test_minkowski_sum_open_path() {
        let line = path(&[(0, 0), (10, 0)]);

        let result = minkowski_sum(&unit_pattern(), &line, false).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(area(&result[0]), 24.0);
    }

    #[test]
    fn test_minkowski_sum_closed_path_is_a_band() {
        let square = path(&[(0, 0), (10, 0), (10, 10), (0, 10)]);

        let result = minkowski_sum(&unit_pattern(), &square, true).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(total_area(&result), 144.0 - 64.0);
    }

    #[test]
    fn test_minkowski_sum_paths_fills_interior() {
        let square = path(&[(0, 0), (10, 0), (10, 10), (0, 10)]);

        let result = minkowski_sum_paths(&unit_pattern(), &[square], true).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(area(&result[0]), 144.0);
    }

    #[test]
    fn test_minkowski_diff_with_symmetric_pattern() {
        let square = path(&[(0, 0), (10, 0), (10, 10), (0, 10)]);

        let result = minkowski_diff(&unit_pattern(), &square).unwrap();

        assert_eq!(total_area(&result), 80.0);
    }

    #[test]
    fn test_minkowski_rejects_out_of_range_input() {
        let pattern = path(&[(i64::MAX - 1, 0), (i64::MAX - 1, 10), (i64::MAX - 10, 10)]);
        let line = path(&[(5, 0), (6, 0)]);

        assert_eq!(
            minkowski_sum(&pattern, &line, false),
            Err(ClipperError::CoordinateOutOfRange {
                x: i64::MAX - 1,
                y: 0
            })
        );
        assert!(matches!(
            minkowski_diff(&line, &path(&[(0, i64::MIN), (1, 0), (0, 1)])),
            Err(ClipperError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_minkowski_sum_beyond_range_fails() {
        // each input is in range but the translated quads are not
        let pattern = path(&[(HI_RANGE, 0), (HI_RANGE, 10), (HI_RANGE - 10, 10)]);
        let line = path(&[(5, 0), (6, 0)]);

        assert!(matches!(
            minkowski_sum(&pattern, &line, false),
            Err(ClipperError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_clean_rejects_out_of_range_input() {
        let input = path(&[(0, 0), (i64::MAX, 0), (i64::MAX, 10), (0, 10)]);

        assert_eq!(
            clean_polygon(&input, DEFAULT_CLEAN_DISTANCE),
            Err(ClipperError::CoordinateOutOfRange { x: i64::MAX, y: 0 })
        );
        assert!(clean_polygons(&[input], DEFAULT_CLEAN_DISTANCE).is_err());
    }

    #[test]
    fn test_minkowski_empty_input() {
        assert!(minkowski_sum(&[], &unit_pattern(), true).unwrap().is_empty());
    }
}
