use crate::clipper::clipper_offset::ClipperOffset;
use crate::clipper::enums::{EndType, JoinType};
use crate::clipper_config::ClipperConfig;
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::{area, Path, Paths};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::PI;

#[cfg(test)]
mod clipper_offset_tests {
    use super::*;

    fn rect(left: i64, top: i64, right: i64, bottom: i64) -> Path {
        vec![
            IntPoint::new(left, top),
            IntPoint::new(right, top),
            IntPoint::new(right, bottom),
            IntPoint::new(left, bottom),
        ]
    }

    fn total_area(paths: &Paths) -> f64 {
        paths.iter().map(|path| area(path)).sum()
    }

    fn offset(path: &[IntPoint], join_type: JoinType, end_type: EndType, delta: f64) -> Paths {
        let mut offset = ClipperOffset::default();
        offset.add_path(path, join_type, end_type);
        offset.execute(delta).unwrap()
    }

    #[test]
    fn test_round_inflate() {
        // 10x10 square grown by 2, at 100x scale so arcs get enough steps
        let result = offset(&rect(0, 0, 1000, 1000), JoinType::Round, EndType::ClosedPolygon, 200.0);
        let expected = (100.0 + 80.0 + 4.0 * PI) * 10_000.0;

        assert_eq!(result.len(), 1);
        assert_relative_eq!(area(&result[0]), expected, max_relative = 0.001);
    }

    #[test]
    fn test_miter_inflate() {
        let result = offset(&rect(0, 0, 100, 100), JoinType::Miter, EndType::ClosedPolygon, 10.0);

        assert_eq!(result.len(), 1);
        assert_eq!(area(&result[0]), 14_400.0);
    }

    #[test]
    fn test_square_inflate() {
        // each chamfer cuts a right triangle with 6-unit legs off the corner
        let result = offset(&rect(0, 0, 100, 100), JoinType::Square, EndType::ClosedPolygon, 10.0);

        assert_eq!(result.len(), 1);
        assert_abs_diff_eq!(area(&result[0]), 14_400.0 - 4.0 * 18.0, epsilon = 8.0);
    }

    #[test]
    fn test_deflate() {
        let result = offset(&rect(0, 0, 10, 10), JoinType::Round, EndType::ClosedPolygon, -2.0);

        assert_eq!(result.len(), 1);
        assert_eq!(area(&result[0]), 36.0);
    }

    #[test]
    fn test_deflate_to_nothing() {
        let result = offset(&rect(0, 0, 10, 10), JoinType::Miter, EndType::ClosedPolygon, -6.0);

        assert!(result.is_empty());
    }

    #[test]
    fn test_zero_delta_copies_polygons() {
        let mut offset = ClipperOffset::default();
        offset.add_path(&rect(0, 0, 10, 10), JoinType::Miter, EndType::ClosedPolygon);
        offset.add_path(
            &[IntPoint::new(0, 20), IntPoint::new(10, 20)],
            JoinType::Miter,
            EndType::OpenButt,
        );

        let result = offset.execute(0.0).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(area(&result[0]), 100.0);
    }

    #[test]
    fn test_single_point() {
        let point = [IntPoint::new(0, 0)];

        let square = offset(&point, JoinType::Square, EndType::OpenSquare, 10.0);
        assert_eq!(square.len(), 1);
        assert_eq!(area(&square[0]), 400.0);

        let circle = offset(&point, JoinType::Round, EndType::OpenRound, 10.0);
        assert_eq!(circle.len(), 1);
        assert!(circle[0].len() > 8);
        assert_abs_diff_eq!(area(&circle[0]), 100.0 * PI, epsilon = 25.0);
        assert!(circle[0]
            .iter()
            .all(|pt| ((pt.x * pt.x + pt.y * pt.y) as f64).sqrt() <= 11.0));
    }

    #[test]
    fn test_open_line_ends() {
        let line = [IntPoint::new(0, 0), IntPoint::new(100, 0)];

        let butt = offset(&line, JoinType::Square, EndType::OpenButt, 10.0);
        assert_eq!(total_area(&butt), 2_000.0);

        let square = offset(&line, JoinType::Square, EndType::OpenSquare, 10.0);
        assert_eq!(total_area(&square), 2_400.0);

        let round = offset(&line, JoinType::Round, EndType::OpenRound, 10.0);
        assert_abs_diff_eq!(total_area(&round), 2_000.0 + 100.0 * PI, epsilon = 30.0);
    }

    #[test]
    fn test_open_paths_ignore_negative_delta() {
        let line = [IntPoint::new(0, 0), IntPoint::new(100, 0)];

        assert!(offset(&line, JoinType::Square, EndType::OpenButt, -10.0).is_empty());
    }

    #[test]
    fn test_closed_line_makes_ring() {
        let result = offset(&rect(0, 0, 100, 100), JoinType::Miter, EndType::ClosedLine, 10.0);

        assert_eq!(result.len(), 2);
        assert_abs_diff_eq!(total_area(&result), 14_400.0 - 6_400.0, epsilon = 1.0);
    }

    #[test]
    fn test_short_polygons_are_ignored() {
        let mut offset = ClipperOffset::default();
        offset.add_path(
            &[IntPoint::new(0, 0), IntPoint::new(10, 10), IntPoint::new(0, 0)],
            JoinType::Miter,
            EndType::ClosedPolygon,
        );

        assert!(offset.execute(5.0).unwrap().is_empty());
    }

    #[test]
    fn test_tree_keeps_holes() {
        let mut hole = rect(2, 2, 8, 8);
        hole.reverse();

        let mut offset = ClipperOffset::default();
        offset.add_paths(&[rect(0, 0, 10, 10), hole], JoinType::Miter, EndType::ClosedPolygon);

        let tree = offset.execute_tree(1.0).unwrap();

        assert_eq!(tree.total(), 2);
        assert_eq!(tree.child_count(), 1);

        let outer = tree.childs()[0];
        assert_eq!(area(tree.contour(outer)), 144.0);

        let inner = tree.node(outer).childs()[0];
        assert!(tree.is_hole(inner));
        assert_eq!(area(tree.contour(inner)), -16.0);
    }

    #[test]
    fn test_tree_deflate_drops_bounding_frame() {
        let mut offset = ClipperOffset::default();
        offset.add_path(&rect(0, 0, 100, 100), JoinType::Miter, EndType::ClosedPolygon);

        let tree = offset.execute_tree(-10.0).unwrap();

        assert_eq!(tree.total(), 1);
        assert_eq!(area(tree.contour(tree.childs()[0])), 6_400.0);
    }

    #[test]
    fn test_from_config_and_clear() {
        let config = ClipperConfig {
            miter_limit: 3.0,
            arc_tolerance: 0.5,
            ..ClipperConfig::default()
        };
        let mut offset = ClipperOffset::from_config(&config);

        assert_eq!(offset.miter_limit, 3.0);
        assert_eq!(offset.arc_tolerance, 0.5);

        offset.add_path(&rect(0, 0, 10, 10), JoinType::Miter, EndType::ClosedPolygon);
        offset.clear();

        assert!(offset.execute(1.0).unwrap().is_empty());
    }
}
