use crate::clipper::join::Join;
use crate::geometry::point::IntPoint;

#[cfg(test)]
mod join_tests {
    use super::*;

    #[test]
    fn test_add_get_update() {
        let mut joins = Join::new();

        joins.add(3, 7, IntPoint::new(1, 2));
        assert_eq!(joins.len(), 1);

        let join = joins.get(0);
        assert_eq!((join.out_pt1, join.out_pt2), (3, 7));
        assert_eq!(join.off_pt, IntPoint::new(1, 2));

        joins.update(0, 4, 8);
        let join = joins.get(0);
        assert_eq!((join.out_pt1, join.out_pt2), (4, 8));
    }

    #[test]
    fn test_ghosts_are_separate() {
        let mut joins = Join::new();

        joins.add_ghost(0, IntPoint::new(10, 0));
        joins.add_ghost(1, IntPoint::new(30, 0));

        assert!(joins.is_empty());
        assert_eq!(joins.ghost_count(), 2);

        joins.clear_ghosts();
        assert_eq!(joins.ghost_count(), 0);
    }

    #[test]
    fn test_overlapping_ghosts() {
        let mut joins = Join::new();
        let xs = [0, 20];

        // ghost runs [0, 10] and [20, 30]
        joins.add_ghost(0, IntPoint::new(10, 0));
        joins.add_ghost(1, IntPoint::new(30, 0));

        let found = joins.overlapping_ghosts(|op| xs[op], 5, 15);
        assert_eq!(found, vec![(0, IntPoint::new(10, 0))]);

        // touching at an end point is not an overlap
        let found = joins.overlapping_ghosts(|op| xs[op], 10, 20);
        assert!(found.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut joins = Join::new();

        joins.add(0, 1, IntPoint::new(0, 0));
        joins.add_ghost(2, IntPoint::new(0, 0));
        joins.clear();

        assert!(joins.is_empty());
        assert_eq!(joins.ghost_count(), 0);
    }
}
