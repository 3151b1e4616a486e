use crate::geometry::point::IntPoint;

/// Axis-aligned integer rectangle; `top` holds the smaller Y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl IntRect {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle grown by `margin` on every side, listed as a closed path.
    pub fn to_path(&self, margin: i64) -> Vec<IntPoint> {
        vec![
            IntPoint::new(self.left - margin, self.bottom + margin),
            IntPoint::new(self.right + margin, self.bottom + margin),
            IntPoint::new(self.right + margin, self.top - margin),
            IntPoint::new(self.left - margin, self.top - margin),
        ]
    }
}

pub fn get_bounds(paths: &[Vec<IntPoint>]) -> IntRect {
    let mut points = paths.iter().flatten();

    let Some(first) = points.next() else {
        return IntRect::default();
    };

    points.fold(
        IntRect::new(first.x, first.y, first.x, first.y),
        |rect, pt| IntRect {
            left: rect.left.min(pt.x),
            top: rect.top.min(pt.y),
            right: rect.right.max(pt.x),
            bottom: rect.bottom.max(pt.y),
        },
    )
}
