use crate::utils::number::Number;
use crate::utils::round::round_to_i64;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point<T: Number> {
    pub x: T,
    pub y: T,
}

pub type IntPoint = Point<i64>;

pub type DoublePoint = Point<f64>;

impl<T: Number> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline(always)]
    pub fn reverse(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[inline(always)]
    pub fn len2(&self, other: &Self) -> f64 {
        let dx = self.x.as_f64() - other.x.as_f64();
        let dy = self.y.as_f64() - other.y.as_f64();
        dx * dx + dy * dy
    }

    #[inline(always)]
    pub fn close_to(&self, other: &Self, dist_sqrd: f64) -> bool {
        self.len2(other) <= dist_sqrd
    }
}

impl IntPoint {
    #[inline(always)]
    pub fn to_double(&self) -> DoublePoint {
        DoublePoint::new(self.x as f64, self.y as f64)
    }

    /// Slope dx/dy of the segment to `other`, or `horizontal` when both share a Y.
    #[inline(always)]
    pub fn dx(&self, other: &Self, horizontal: f64) -> f64 {
        if self.y == other.y {
            horizontal
        } else {
            (other.x - self.x) as f64 / (other.y - self.y) as f64
        }
    }

    /// True when `self` lies strictly between `pt1` and `pt3` on their shared line.
    pub fn is_between(&self, pt1: &Self, pt3: &Self) -> bool {
        if pt1 == pt3 || pt1 == self || pt3 == self {
            false
        } else if pt1.x != pt3.x {
            (self.x > pt1.x) == (self.x < pt3.x)
        } else {
            (self.y > pt1.y) == (self.y < pt3.y)
        }
    }

    pub fn distance_from_line_sqrd(&self, ln1: &Self, ln2: &Self) -> f64 {
        let a = (ln1.y - ln2.y) as f64;
        let b = (ln2.x - ln1.x) as f64;
        let c = a * ln1.x as f64 + b * ln1.y as f64;
        let c = a * self.x as f64 + b * self.y as f64 - c;

        (c * c) / (a * a + b * b)
    }

    pub fn slopes_near_collinear(pt1: &Self, pt2: &Self, pt3: &Self, dist_sqrd: f64) -> bool {
        // the middle point along the dominant axis is measured against the other two
        if (pt1.x - pt2.x).abs() > (pt1.y - pt2.y).abs() {
            if (pt1.x > pt2.x) == (pt1.x < pt3.x) {
                pt1.distance_from_line_sqrd(pt2, pt3) < dist_sqrd
            } else if (pt2.x > pt1.x) == (pt2.x < pt3.x) {
                pt2.distance_from_line_sqrd(pt1, pt3) < dist_sqrd
            } else {
                pt3.distance_from_line_sqrd(pt1, pt2) < dist_sqrd
            }
        } else if (pt1.y > pt2.y) == (pt1.y < pt3.y) {
            pt1.distance_from_line_sqrd(pt2, pt3) < dist_sqrd
        } else if (pt2.y > pt1.y) == (pt2.y < pt3.y) {
            pt2.distance_from_line_sqrd(pt1, pt3) < dist_sqrd
        } else {
            pt3.distance_from_line_sqrd(pt1, pt2) < dist_sqrd
        }
    }
}

impl DoublePoint {
    /// Left-hand unit normal of the segment `pt1 -> pt2`; zero for a degenerate segment.
    pub fn unit_normal(pt1: &IntPoint, pt2: &IntPoint) -> Self {
        if pt1 == pt2 {
            return Self::new(0.0, 0.0);
        }

        let dx = (pt2.x - pt1.x) as f64;
        let dy = (pt2.y - pt1.y) as f64;
        let f = 1.0 / (dx * dx + dy * dy).sqrt();

        Self::new(dy * f, -dx * f)
    }

    #[inline(always)]
    pub fn clipper_round(&self) -> IntPoint {
        IntPoint::new(round_to_i64(self.x), round_to_i64(self.y))
    }
}
