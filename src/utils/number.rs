use num_traits::{Num, Signed, ToPrimitive};
use std::fmt::Debug;

/// Scalar usable as a point coordinate: `i64` on the clipping grid, `f64` for normals.
pub trait Number: Num + Copy + PartialOrd + Debug + ToPrimitive + Signed {
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}

impl Number for f64 {
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Number for i64 {
    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
