use crate::clipper::clipper::Clipper;
use crate::clipper::constants::HI_RANGE;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::poly_tree::{open_paths_from_poly_tree, poly_tree_to_paths};
use crate::clipper::utils::{simplify_polygon, simplify_polygons};
use crate::error::ClipperError;
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::{area, Path, Paths};
use approx::assert_relative_eq;

#[cfg(test)]
mod clipper_tests {
    use super::*;

    fn path(points: &[(i64, i64)]) -> Path {
        points.iter().map(|&(x, y)| IntPoint::new(x, y)).collect()
    }

    fn rect(left: i64, top: i64, right: i64, bottom: i64) -> Path {
        path(&[(left, top), (right, top), (right, bottom), (left, bottom)])
    }

    fn total_area(paths: &Paths) -> f64 {
        paths.iter().map(|path| area(path)).sum()
    }

    fn clip(subject: &[Path], clip: &[Path], clip_type: ClipType) -> Paths {
        let mut clipper = Clipper::default();
        clipper.add_paths(subject, PolyType::Subject, true).unwrap();
        clipper.add_paths(clip, PolyType::Clip, true).unwrap();

        clipper
            .execute(clip_type, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap()
            .unwrap()
    }

    fn sorted(mut path: Path) -> Vec<(i64, i64)> {
        path.sort_by_key(|pt| (pt.x, pt.y));
        path.iter().map(|pt| (pt.x, pt.y)).collect()
    }

    #[test]
    fn test_union_of_unit_squares() {
        let result = clip(&[rect(0, 0, 1, 1)], &[rect(1, 0, 2, 1)], ClipType::Union);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 4);
        assert_relative_eq!(area(&result[0]), 2.0);
    }

    #[test]
    fn test_union_merges_contours_from_separate_minima() {
        let result = clip(&[rect(0, 0, 10, 10)], &[rect(5, 5, 15, 15)], ClipType::Union);

        assert_eq!(result.len(), 1);
        assert_eq!(
            sorted(result[0].clone()),
            vec![(0, 0), (0, 10), (5, 10), (5, 15), (10, 0), (10, 5), (15, 5), (15, 15)]
        );
        assert_relative_eq!(area(&result[0]), 175.0);
    }

    #[test]
    fn test_full_range_intersection() {
        // a square of half-width 2^60 clipped by a diamond of radius 3 * 2^59
        let half = 1i64 << 60;
        let radius = 3i64 << 59;
        let square = rect(-half, -half, half, half);
        let diamond = path(&[(radius, 0), (0, radius), (-radius, 0), (0, -radius)]);
        let unit = 2f64.powi(119);

        let intersection = clip(&[square.clone()], &[diamond.clone()], ClipType::Intersection);
        assert_eq!(intersection.len(), 1);
        assert_eq!(intersection[0].len(), 8);
        assert_relative_eq!(area(&intersection[0]), 7.0 * unit, max_relative = 1e-9);

        let union = clip(&[square], &[diamond], ClipType::Union);
        assert_eq!(union.len(), 1);
        assert_relative_eq!(total_area(&union), 10.0 * unit, max_relative = 1e-9);
    }

    #[test]
    fn test_difference_leaves_hole() {
        let result = clip(&[rect(0, 0, 10, 10)], &[rect(2, 2, 8, 8)], ClipType::Difference);

        assert_eq!(result.len(), 2);

        let mut areas: Vec<f64> = result.iter().map(|path| area(path)).collect();
        areas.sort_by(|a, b| a.total_cmp(b));
        assert_relative_eq!(areas[0], -36.0);
        assert_relative_eq!(areas[1], 100.0);
    }

    #[test]
    fn test_difference_tree_nests_hole() {
        let mut clipper = Clipper::default();
        clipper.add_path(&rect(0, 0, 10, 10), PolyType::Subject, true).unwrap();
        clipper.add_path(&rect(2, 2, 8, 8), PolyType::Clip, true).unwrap();

        let tree = clipper
            .execute_tree(ClipType::Difference, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap()
            .unwrap();

        assert_eq!(tree.total(), 2);
        assert_eq!(tree.child_count(), 1);

        let outer = tree.childs()[0];
        assert!(!tree.is_hole(outer));
        assert_relative_eq!(area(tree.contour(outer)), 100.0);

        let hole = tree.node(outer).childs()[0];
        assert!(tree.is_hole(hole));
        assert_relative_eq!(area(tree.contour(hole)), -36.0);
    }

    #[test]
    fn test_disjoint_identities() {
        let a = vec![rect(0, 0, 10, 10)];
        let b = vec![rect(20, 0, 30, 5)];

        assert_relative_eq!(total_area(&clip(&a, &b, ClipType::Union)), 150.0);
        assert!(clip(&a, &b, ClipType::Intersection).is_empty());
        assert_relative_eq!(total_area(&clip(&a, &b, ClipType::Difference)), 100.0);
    }

    #[test]
    fn test_inclusion_exclusion() {
        let a = vec![rect(0, 0, 10, 10)];
        let b = vec![rect(5, 3, 20, 8)];

        let union = total_area(&clip(&a, &b, ClipType::Union));
        let intersection = total_area(&clip(&a, &b, ClipType::Intersection));

        assert_relative_eq!(intersection, 25.0);
        assert_relative_eq!(union + intersection, 100.0 + 75.0);
    }

    #[test]
    fn test_xor() {
        let result = clip(&[rect(0, 0, 10, 10)], &[rect(5, 5, 15, 15)], ClipType::Xor);

        assert_relative_eq!(total_area(&result), 150.0);
    }

    #[test]
    fn test_fill_types() {
        let subject = vec![rect(0, 0, 10, 10), rect(5, 5, 15, 15)];
        let execute = |fill_type: PolyFillType| {
            let mut clipper = Clipper::default();
            clipper.add_paths(&subject, PolyType::Subject, true).unwrap();
            clipper
                .execute(ClipType::Union, fill_type, fill_type)
                .unwrap()
                .unwrap()
        };

        assert_relative_eq!(total_area(&execute(PolyFillType::NonZero)), 175.0);
        assert_relative_eq!(total_area(&execute(PolyFillType::EvenOdd)), 150.0);
        assert_relative_eq!(total_area(&execute(PolyFillType::Positive)), 175.0);
        assert!(execute(PolyFillType::Negative).is_empty());
    }

    #[test]
    fn test_reverse_solution() {
        let mut clipper = Clipper::new(true, false);
        clipper.add_path(&rect(0, 0, 10, 10), PolyType::Subject, true).unwrap();

        let result = clipper
            .execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap()
            .unwrap();

        assert!(clipper.reverse_solution());
        assert_eq!(result.len(), 1);
        assert_relative_eq!(area(&result[0]), -100.0);
    }

    #[test]
    fn test_execute_is_repeatable() {
        let mut clipper = Clipper::default();
        clipper.add_path(&rect(0, 0, 10, 10), PolyType::Subject, true).unwrap();
        clipper.add_path(&rect(5, 5, 15, 15), PolyType::Clip, true).unwrap();

        let first = clipper
            .execute(ClipType::Intersection, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();
        let second = clipper
            .execute(ClipType::Intersection, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();

        assert_eq!(first, second);

        clipper.clear();
        let cleared = clipper
            .execute(ClipType::Intersection, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();
        assert_eq!(cleared, Some(Vec::new()));
    }

    #[test]
    fn test_open_path_clipped_into_segments() {
        let mut clipper = Clipper::default();
        let v_shape = path(&[(2, -10), (5, 20), (8, -10)]);

        clipper.add_path(&v_shape, PolyType::Subject, false).unwrap();
        clipper.add_path(&rect(0, 0, 10, 10), PolyType::Clip, true).unwrap();

        let tree = clipper
            .execute_tree(ClipType::Intersection, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap()
            .unwrap();

        let mut segments: Vec<Vec<(i64, i64)>> = open_paths_from_poly_tree(&tree)
            .into_iter()
            .map(sorted)
            .collect();
        segments.sort();

        assert_eq!(
            segments,
            vec![vec![(3, 0), (4, 10)], vec![(6, 10), (7, 0)]]
        );
        assert_eq!(poly_tree_to_paths(&tree).len(), 2);
    }

    #[test]
    fn test_open_paths_need_tree() {
        let mut clipper = Clipper::default();
        clipper.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Subject, false).unwrap();

        let result = clipper.execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero);

        assert_eq!(result, Err(ClipperError::OpenPathsNeedTree));
    }

    #[test]
    fn test_add_path_errors() {
        let mut clipper = Clipper::default();

        assert_eq!(
            clipper.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Clip, false),
            Err(ClipperError::OpenClipPath)
        );
        assert!(matches!(
            clipper.add_path(&rect(0, 0, HI_RANGE + 1, 10), PolyType::Subject, true),
            Err(ClipperError::CoordinateOutOfRange { .. })
        ));
        assert_eq!(
            clipper.add_path(&path(&[(0, 0), (5, 0), (10, 0)]), PolyType::Subject, true),
            Ok(false)
        );
    }

    #[test]
    fn test_strictly_simple_splits_touching_lobes() {
        let figure_eight = path(&[
            (0, 0),
            (10, 0),
            (10, 10),
            (20, 10),
            (20, 20),
            (10, 20),
            (10, 10),
            (0, 10),
        ]);
        let mut clipper = Clipper::new(false, true);
        clipper.add_path(&figure_eight, PolyType::Subject, true).unwrap();

        let result = clipper
            .execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap()
            .unwrap();

        assert_eq!(result.len(), 2);
        for path in &result {
            assert_relative_eq!(area(path), 100.0);
        }
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let bow_tie = path(&[(0, 0), (10, 10), (10, 0), (0, 10)]);

        let once = simplify_polygon(&bow_tie, PolyFillType::EvenOdd).unwrap();
        let twice = simplify_polygons(&once, PolyFillType::EvenOdd).unwrap();

        assert_eq!(once.len(), 2);
        assert_eq!(twice.len(), once.len());
        assert_relative_eq!(total_area(&twice), total_area(&once));
        assert_relative_eq!(total_area(&once), 50.0);
    }
}
