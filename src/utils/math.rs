use crate::geometry::point::IntPoint;

#[inline(always)]
pub fn cycle_index(index: usize, size: usize, offset: isize) -> usize {
    ((index as isize + offset).rem_euclid(size as isize)) as usize
}

/// Compares `dy1 * dx2` with `dx1 * dy2`, widening to 128 bits once coordinates leave the low range.
#[inline(always)]
pub fn slopes_equal(dy1: i64, dx2: i64, dx1: i64, dy2: i64, use_full_range: bool) -> bool {
    if use_full_range {
        (dy1 as i128) * (dx2 as i128) == (dx1 as i128) * (dy2 as i128)
    } else {
        dy1 * dx2 == dx1 * dy2
    }
}

/// True when `pt1`, `pt2` and `pt3` are collinear.
#[inline(always)]
pub fn points_collinear(pt1: &IntPoint, pt2: &IntPoint, pt3: &IntPoint, use_full_range: bool) -> bool {
    slopes_equal(
        pt1.y - pt2.y,
        pt2.x - pt3.x,
        pt1.x - pt2.x,
        pt2.y - pt3.y,
        use_full_range,
    )
}

/// True when segment `pt1 -> pt2` is parallel to segment `pt3 -> pt4`.
#[inline(always)]
pub fn segments_parallel(
    pt1: &IntPoint,
    pt2: &IntPoint,
    pt3: &IntPoint,
    pt4: &IntPoint,
    use_full_range: bool,
) -> bool {
    slopes_equal(
        pt1.y - pt2.y,
        pt3.x - pt4.x,
        pt1.x - pt2.x,
        pt3.y - pt4.y,
        use_full_range,
    )
}

#[inline(always)]
pub fn horz_segments_overlap(seg1a: i64, seg1b: i64, seg2a: i64, seg2b: i64) -> bool {
    let (seg1a, seg1b) = if seg1a > seg1b { (seg1b, seg1a) } else { (seg1a, seg1b) };
    let (seg2a, seg2b) = if seg2a > seg2b { (seg2b, seg2a) } else { (seg2a, seg2b) };

    seg1a < seg2b && seg2a < seg1b
}

/// Overlapping interval of `[a1, a2]` and `[b1, b2]` (either orientation), if it is non-empty.
#[inline(always)]
pub fn get_overlap(a1: i64, a2: i64, b1: i64, b2: i64) -> Option<(i64, i64)> {
    let (left, right) = if a1 < a2 {
        if b1 < b2 {
            (a1.max(b1), a2.min(b2))
        } else {
            (a1.max(b2), a2.min(b1))
        }
    } else if b1 < b2 {
        (a2.max(b1), a1.min(b2))
    } else {
        (a2.max(b2), a1.min(b1))
    };

    if left < right {
        Some((left, right))
    } else {
        None
    }
}
