use crate::clipper::constants::UNASSIGNED;
use crate::clipper::local_minima::LocalMinima;

#[cfg(test)]
mod local_minima_tests {
    use super::*;

    #[test]
    fn test_reset_sorts_descending() {
        let mut minima = LocalMinima::new();

        minima.push(10, 0, 1);
        minima.push(30, 2, 3);
        minima.push(20, 4, 5);
        minima.reset();

        let ys: Vec<i64> = minima.iter().map(|minimum| minimum.y).collect();
        assert_eq!(ys, vec![30, 20, 10]);
    }

    #[test]
    fn test_reset_keeps_insertion_order_for_equal_y() {
        let mut minima = LocalMinima::new();

        minima.push(10, 0, 1);
        minima.push(10, 2, 3);
        minima.reset();

        let bounds: Vec<usize> = minima.iter().map(|minimum| minimum.left_bound).collect();
        assert_eq!(bounds, vec![0, 2]);
    }

    #[test]
    fn test_pop_only_matching_y() {
        let mut minima = LocalMinima::new();

        minima.push(5, 0, 1);
        minima.push(5, 2, 3);
        minima.push(1, 4, 5);
        minima.reset();

        assert!(minima.pop(1).is_none());
        assert_eq!(minima.pop(5).map(|minimum| minimum.left_bound), Some(0));
        assert_eq!(minima.pop(5).map(|minimum| minimum.left_bound), Some(2));
        assert!(minima.pop(5).is_none());
        assert_eq!(minima.pop(1).map(|minimum| minimum.right_bound), Some(5));
        assert!(minima.pop(1).is_none());
    }

    #[test]
    fn test_missing_bounds() {
        let mut minima = LocalMinima::new();

        minima.push(0, UNASSIGNED, 3);
        minima.reset();

        let minimum = minima.pop(0).unwrap();
        assert!(!minimum.has_left_bound());
        assert!(minimum.has_right_bound());
    }

    #[test]
    fn test_clear() {
        let mut minima = LocalMinima::new();

        minima.push(0, 0, 1);
        minima.clear();

        assert!(minima.is_empty());
        assert_eq!(minima.len(), 0);
        assert!(minima.pop(0).is_none());
    }
}
