/// Rounds half away from zero, matching how offset and intersection points snap to the grid.
pub trait ClipperRound {
    fn clipper_rounded(self) -> Self;
}

impl ClipperRound for f64 {
    fn clipper_rounded(self) -> Self {
        if self < 0.0 {
            (self - 0.5).ceil()
        } else {
            (self + 0.5).floor()
        }
    }
}

#[inline(always)]
pub fn round_to_i64(value: f64) -> i64 {
    value.clipper_rounded() as i64
}
