use crate::clipper::clipper_base::ClipperBase;
use crate::clipper::constants::{HI_RANGE, LO_RANGE};
use crate::clipper::enums::PolyType;
use crate::error::ClipperError;
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::Path;

#[cfg(test)]
mod clipper_base_tests {
    use super::*;

    fn path(points: &[(i64, i64)]) -> Path {
        points.iter().map(|&(x, y)| IntPoint::new(x, y)).collect()
    }

    fn diamond(cx: i64, cy: i64, r: i64) -> Path {
        path(&[(cx, cy - r), (cx + r, cy), (cx, cy + r), (cx - r, cy)])
    }

    #[test]
    fn test_add_closed_path() {
        let mut base = ClipperBase::new();

        assert_eq!(base.add_path(&diamond(5, 5, 5), PolyType::Subject, true), Ok(true));
        assert_eq!(base.t_edge.len(), 4);
        assert_eq!(base.local_minima.len(), 1);
        assert!(!base.has_open_paths);

        let minimum = *base.local_minima.iter().next().unwrap();
        assert_eq!(minimum.y, 10);
        assert!(minimum.has_left_bound());
        assert!(minimum.has_right_bound());
    }

    #[test]
    fn test_degenerate_paths_are_rejected() {
        let mut base = ClipperBase::new();

        assert_eq!(base.add_path(&[], PolyType::Subject, true), Ok(false));
        assert_eq!(
            base.add_path(&path(&[(1, 1), (1, 1), (1, 1)]), PolyType::Subject, true),
            Ok(false)
        );
        assert_eq!(
            base.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Subject, true),
            Ok(false)
        );
        assert_eq!(
            base.add_path(&path(&[(0, 0), (5, 5), (10, 10)]), PolyType::Clip, true),
            Ok(false)
        );
        assert!(base.t_edge.is_empty());
        assert!(base.local_minima.is_empty());
    }

    #[test]
    fn test_closing_duplicate_is_ignored() {
        let mut base = ClipperBase::new();
        let mut closed = diamond(5, 5, 5);
        closed.push(closed[0]);

        assert_eq!(base.add_path(&closed, PolyType::Subject, true), Ok(true));
        assert_eq!(base.t_edge.len(), 4);
    }

    #[test]
    fn test_open_paths() {
        let mut base = ClipperBase::new();

        assert_eq!(
            base.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Subject, false),
            Ok(true)
        );
        assert!(base.has_open_paths);

        assert_eq!(
            base.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Clip, false),
            Err(ClipperError::OpenClipPath)
        );
    }

    #[test]
    fn test_range_escalation() {
        let mut base = ClipperBase::new();
        let big = LO_RANGE + 1;

        assert_eq!(
            base.add_path(&diamond(big, big, 10), PolyType::Subject, true),
            Ok(true)
        );
        assert!(base.use_full_range);

        let result = base.add_path(&diamond(0, 0, HI_RANGE + 1), PolyType::Subject, true);
        assert!(matches!(result, Err(ClipperError::CoordinateOutOfRange { .. })));
    }

    #[test]
    fn test_add_paths() {
        let mut base = ClipperBase::new();
        let paths = vec![diamond(5, 5, 5), path(&[(0, 0), (1, 1)]), diamond(50, 50, 5)];

        assert_eq!(base.add_paths(&paths, PolyType::Subject, true), Ok(true));
        assert_eq!(base.local_minima.len(), 2);
    }

    #[test]
    fn test_reset_seeds_scanbeam() {
        let mut base = ClipperBase::new();
        base.add_path(&diamond(5, 5, 5), PolyType::Subject, true).unwrap();
        base.add_path(&diamond(5, 25, 5), PolyType::Clip, true).unwrap();

        base.reset();

        assert_eq!(base.scanbeam.pop(), Some(30));
        assert_eq!(base.scanbeam.pop(), Some(10));
        assert_eq!(base.scanbeam.pop(), None);
    }

    #[test]
    fn test_clear() {
        let mut base = ClipperBase::new();
        base.add_path(&diamond(5, 5, 5), PolyType::Subject, true).unwrap();
        base.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Subject, false).unwrap();

        base.clear();

        assert!(base.t_edge.is_empty());
        assert!(base.local_minima.is_empty());
        assert!(!base.has_open_paths);
        assert!(!base.use_full_range);
    }
}
