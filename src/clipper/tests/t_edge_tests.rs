use crate::clipper::constants::{HORIZONTAL, UNASSIGNED};
use crate::clipper::enums::{Direction, PolyType};
use crate::clipper::t_edge::{Edge, TEdge};
use crate::error::ClipperError;
use crate::geometry::point::IntPoint;

#[cfg(test)]
mod t_edge_tests {
    use super::*;

    fn make_edge(from: IntPoint, to: IntPoint) -> Edge {
        let mut edge = Edge::new(from, UNASSIGNED, UNASSIGNED);
        edge.init(to, PolyType::Subject);
        edge.curr = edge.bot;
        edge
    }

    fn ael_order(edges: &TEdge) -> Vec<usize> {
        let mut result = Vec::new();
        let mut index = edges.active;

        while index != UNASSIGNED {
            result.push(index);
            index = edges[index].next_in_ael;
        }

        result
    }

    #[test]
    fn test_init_orients_bottom_up() {
        let edge = make_edge(IntPoint::new(10, 0), IntPoint::new(0, 10));

        assert_eq!(edge.bot, IntPoint::new(0, 10));
        assert_eq!(edge.top, IntPoint::new(10, 0));
        assert_eq!(edge.delta, IntPoint::new(10, -10));
        assert_eq!(edge.dx, -1.0);
        assert!(!edge.is_horizontal());
        assert!(!edge.is_assigned());
    }

    #[test]
    fn test_horizontal_edge() {
        let mut edge = make_edge(IntPoint::new(0, 5), IntPoint::new(10, 5));

        assert!(edge.is_horizontal());
        assert_eq!(edge.dx, HORIZONTAL);

        edge.reverse_horizontal();
        assert_eq!(edge.bot.x, 10);
        assert_eq!(edge.top.x, 0);
    }

    #[test]
    fn test_top_x() {
        let edge = make_edge(IntPoint::new(0, 10), IntPoint::new(10, 0));

        assert_eq!(edge.top_x(10), 0);
        assert_eq!(edge.top_x(5), 5);
        assert_eq!(edge.top_x(0), 10);
    }

    #[test]
    fn test_intersect_point() {
        let mut edges = TEdge::new();
        let e1 = edges.push(make_edge(IntPoint::new(0, 10), IntPoint::new(10, 0)));
        let e2 = edges.push(make_edge(IntPoint::new(10, 10), IntPoint::new(0, 0)));

        assert_eq!(edges.intersect_point(e1, e2), IntPoint::new(5, 5));
    }

    #[test]
    fn test_insert_into_ael_sorted_by_x() {
        let mut edges = TEdge::new();
        let right = edges.push(make_edge(IntPoint::new(10, 10), IntPoint::new(10, 0)));
        let left = edges.push(make_edge(IntPoint::new(0, 10), IntPoint::new(0, 0)));
        let middle = edges.push(make_edge(IntPoint::new(5, 10), IntPoint::new(5, 0)));

        edges.insert_into_ael(right, UNASSIGNED);
        edges.insert_into_ael(left, UNASSIGNED);
        edges.insert_into_ael(middle, UNASSIGNED);

        assert_eq!(ael_order(&edges), vec![left, middle, right]);

        edges.swap_positions_in_ael(left, middle);
        assert_eq!(ael_order(&edges), vec![middle, left, right]);

        edges.delete_from_ael(left);
        assert_eq!(ael_order(&edges), vec![middle, right]);
    }

    #[test]
    fn test_sel_is_lifo() {
        let mut edges = TEdge::new();
        let first = edges.push(make_edge(IntPoint::new(0, 10), IntPoint::new(0, 0)));
        let second = edges.push(make_edge(IntPoint::new(5, 10), IntPoint::new(5, 0)));

        edges.add_to_sel(first);
        edges.add_to_sel(second);

        assert_eq!(edges.pop_from_sel(), Some(second));
        assert_eq!(edges.pop_from_sel(), Some(first));
        assert_eq!(edges.pop_from_sel(), None);
    }

    #[test]
    fn test_update_edge_into_ael() {
        let mut edges = TEdge::new();
        let lower = edges.push(make_edge(IntPoint::new(0, 10), IntPoint::new(5, 5)));
        let upper = edges.push(make_edge(IntPoint::new(5, 5), IntPoint::new(5, 0)));

        edges[lower].next_in_lml = upper;
        edges[lower].wind_delta = 1;
        edges[lower].side = Direction::Right;
        edges.insert_into_ael(lower, UNASSIGNED);

        let promoted = edges.update_edge_into_ael(lower).unwrap();

        assert_eq!(promoted, upper);
        assert_eq!(edges.active, upper);
        assert_eq!(edges[upper].wind_delta, 1);
        assert_eq!(edges[upper].side, Direction::Right);
        assert_eq!(edges[upper].curr, IntPoint::new(5, 5));

        assert!(matches!(
            edges.update_edge_into_ael(upper),
            Err(ClipperError::InvalidEdgePromotion)
        ));
    }

    #[test]
    fn test_horz_direction() {
        let mut edges = TEdge::new();
        let rightward = edges.push(make_edge(IntPoint::new(0, 5), IntPoint::new(10, 5)));
        let leftward = edges.push(make_edge(IntPoint::new(10, 5), IntPoint::new(0, 5)));

        assert_eq!(edges.horz_direction(rightward), (Direction::Right, 0, 10));
        assert_eq!(edges.horz_direction(leftward), (Direction::Left, 0, 10));
    }
}
