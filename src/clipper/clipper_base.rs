use crate::clipper::constants::{HI_RANGE, LO_RANGE, SKIP, UNASSIGNED};
use crate::clipper::enums::{Direction, PolyType};
use crate::clipper::local_minima::LocalMinima;
use crate::clipper::scanbeam::Scanbeam;
use crate::clipper::t_edge::{Edge, TEdge};
use crate::error::{ClipperError, Result};
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::Path;
use crate::utils::math::points_collinear;

/// Input side of the engine: turns paths into edge bounds grouped by local minima.
#[derive(Debug)]
pub struct ClipperBase {
    pub t_edge: TEdge,
    pub local_minima: LocalMinima,
    pub scanbeam: Scanbeam,
    pub use_full_range: bool,
    pub has_open_paths: bool,
    pub preserve_collinear: bool,
}

/// Fails on the first point outside the full coordinate range.
pub fn check_full_range(path: &[IntPoint]) -> Result<()> {
    let range = -HI_RANGE..=HI_RANGE;

    match path
        .iter()
        .find(|pt| !range.contains(&pt.x) || !range.contains(&pt.y))
    {
        Some(pt) => Err(ClipperError::CoordinateOutOfRange { x: pt.x, y: pt.y }),
        None => Ok(()),
    }
}

impl ClipperBase {
    pub fn new() -> Self {
        Self {
            t_edge: TEdge::new(),
            local_minima: LocalMinima::new(),
            scanbeam: Scanbeam::new(),
            use_full_range: false,
            has_open_paths: false,
            preserve_collinear: false,
        }
    }

    fn range_test(&mut self, pt: &IntPoint) -> Result<()> {
        let limit = if self.use_full_range { HI_RANGE } else { LO_RANGE };

        if pt.x > limit || pt.y > limit || pt.x < -limit || pt.y < -limit {
            if self.use_full_range {
                return Err(ClipperError::CoordinateOutOfRange { x: pt.x, y: pt.y });
            }

            self.use_full_range = true;
            return self.range_test(pt);
        }

        Ok(())
    }

    /// Adds one path. Returns `Ok(false)` when the path degenerates to nothing.
    pub fn add_path(&mut self, path: &[IntPoint], poly_type: PolyType, closed: bool) -> Result<bool> {
        if !closed && poly_type == PolyType::Clip {
            return Err(ClipperError::OpenClipPath);
        }

        if path.is_empty() {
            return Ok(false);
        }

        let mut high = path.len() - 1;
        if closed {
            while high > 0 && path[high] == path[0] {
                high -= 1;
            }
        }
        while high > 0 && path[high] == path[high - 1] {
            high -= 1;
        }

        if (closed && high < 2) || (!closed && high < 1) {
            return Ok(false);
        }

        for pt in &path[..=high] {
            self.range_test(pt)?;
        }

        let base = self.t_edge.len();
        let count = high + 1;
        for (i, pt) in path[..count].iter().enumerate() {
            self.t_edge.push(Edge::new(
                *pt,
                base + (i + 1) % count,
                base + (i + high) % count,
            ));
        }

        let Some(mut e) = self.remove_redundant_edges(base, closed) else {
            self.t_edge.truncate(base);
            return Ok(false);
        };
        let e_start = e;

        if !closed {
            self.has_open_paths = true;
            let prev = self.t_edge[e_start].prev;
            self.t_edge[prev].out_idx = SKIP;
        }

        let mut is_flat = true;
        loop {
            let next = self.t_edge[e].next;
            let next_curr = self.t_edge[next].curr;
            self.t_edge[e].init(next_curr, poly_type);
            e = next;

            if is_flat && self.t_edge[e].curr.y != self.t_edge[e_start].curr.y {
                is_flat = false;
            }
            if e == e_start {
                break;
            }
        }

        if is_flat {
            if closed {
                self.t_edge.truncate(base);
                return Ok(false);
            }

            self.add_flat_open_path(e);
            return Ok(true);
        }

        self.add_bounds(e, closed);

        Ok(true)
    }

    pub fn add_paths(&mut self, paths: &[Path], poly_type: PolyType, closed: bool) -> Result<bool> {
        let mut result = false;

        for path in paths {
            if self.add_path(path, poly_type, closed)? {
                result = true;
            }
        }

        Ok(result)
    }

    /// Drops duplicate vertices and, for closed paths, collinear ones.
    /// Returns the start edge, or `None` when too few edges remain.
    fn remove_redundant_edges(&mut self, base: usize, closed: bool) -> Option<usize> {
        let mut e_start = base;
        let mut e = e_start;
        let mut e_loop_stop = e_start;

        loop {
            let next = self.t_edge[e].next;

            // open paths may start and end on the same point
            if self.t_edge[e].curr == self.t_edge[next].curr && (closed || next != e_start) {
                if e == next {
                    break;
                }
                if e == e_start {
                    e_start = next;
                }
                e = self.t_edge.remove(e);
                e_loop_stop = e;
                continue;
            }

            let prev = self.t_edge[e].prev;
            if prev == next {
                break;
            }

            let (pt_prev, pt, pt_next) = (
                self.t_edge[prev].curr,
                self.t_edge[e].curr,
                self.t_edge[next].curr,
            );

            if closed
                && points_collinear(&pt_prev, &pt, &pt_next, self.use_full_range)
                && (!self.preserve_collinear || !pt.is_between(&pt_prev, &pt_next))
            {
                if e == e_start {
                    e_start = next;
                }
                e = self.t_edge.remove(e);
                e = self.t_edge[e].prev;
                e_loop_stop = e;
                continue;
            }

            e = next;
            if e == e_loop_stop || (!closed && self.t_edge[e].next == e_start) {
                break;
            }
        }

        let degenerate = if closed {
            self.t_edge[e].prev == self.t_edge[e].next
        } else {
            e == self.t_edge[e].next
        };

        (!degenerate).then_some(e_start)
    }

    /// A horizontal polyline becomes a single minimum with only a right bound.
    fn add_flat_open_path(&mut self, mut e: usize) {
        let prev = self.t_edge[e].prev;
        self.t_edge[prev].out_idx = SKIP;

        let y = self.t_edge[e].bot.y;
        let right_bound = e;
        self.t_edge[e].side = Direction::Right;
        self.t_edge[e].wind_delta = 0;

        loop {
            let prev_top_x = self.t_edge[self.t_edge[e].prev].top.x;
            if self.t_edge[e].bot.x != prev_top_x {
                self.t_edge[e].reverse_horizontal();
            }

            let next = self.t_edge[e].next;
            if self.t_edge[next].out_idx == SKIP {
                break;
            }

            self.t_edge[e].next_in_lml = next;
            e = next;
        }

        self.local_minima.push(y, UNASSIGNED, right_bound);
    }

    fn add_bounds(&mut self, mut e: usize, closed: bool) {
        // open paths with matching ends would otherwise loop forever
        let prev = self.t_edge[e].prev;
        if self.t_edge[prev].bot == self.t_edge[prev].top {
            e = self.t_edge[e].next;
        }

        let mut e_min = UNASSIGNED;

        loop {
            e = self.t_edge.find_next_loc_min(e);
            if e == e_min {
                break;
            }
            if e_min == UNASSIGNED {
                e_min = e;
            }

            // e and e.prev share the minimum, the steeper one starts the left bound
            let y = self.t_edge[e].bot.y;
            let prev = self.t_edge[e].prev;
            let (mut left_bound, mut right_bound, left_is_forward) =
                if self.t_edge[e].dx < self.t_edge[prev].dx {
                    (prev, e, false)
                } else {
                    (e, prev, true)
                };

            let wind_delta = if !closed {
                0
            } else if self.t_edge[left_bound].next == right_bound {
                -1
            } else {
                1
            };
            self.t_edge[left_bound].wind_delta = wind_delta;
            self.t_edge[right_bound].wind_delta = -wind_delta;

            e = self.process_bound(left_bound, left_is_forward);
            if self.t_edge[e].out_idx == SKIP {
                e = self.process_bound(e, left_is_forward);
            }

            let mut e2 = self.process_bound(right_bound, !left_is_forward);
            if self.t_edge[e2].out_idx == SKIP {
                e2 = self.process_bound(e2, !left_is_forward);
            }

            if self.t_edge[left_bound].out_idx == SKIP {
                left_bound = UNASSIGNED;
            } else if self.t_edge[right_bound].out_idx == SKIP {
                right_bound = UNASSIGNED;
            }

            self.local_minima.push(y, left_bound, right_bound);

            if !left_is_forward {
                e = e2;
            }
        }
    }

    #[inline(always)]
    fn step(&self, index: usize, forward: bool) -> usize {
        if forward {
            self.t_edge[index].next
        } else {
            self.t_edge[index].prev
        }
    }

    /// Links the bound starting at `e` through `next_in_lml` and returns the first edge past it.
    fn process_bound(&mut self, mut e: usize, forward: bool) -> usize {
        let mut result = e;

        if self.t_edge[e].out_idx == SKIP {
            // edges beyond a skip edge start another minimum
            while self.t_edge[e].top.y == self.t_edge[self.step(e, forward)].bot.y {
                e = self.step(e, forward);
            }
            // top horizontals belong to the opposite bound
            while e != result && self.t_edge[e].is_horizontal() {
                e = self.step(e, !forward);
            }

            if e == result {
                return self.step(e, forward);
            }

            e = self.step(result, forward);
            let y = self.t_edge[e].bot.y;
            self.t_edge[e].wind_delta = 0;
            result = self.process_bound(e, forward);
            self.local_minima.push(y, UNASSIGNED, e);

            return result;
        }

        if self.t_edge[e].is_horizontal() {
            // e may follow a skip edge, or consecutive horizontals may change direction
            let e_start = self.step(e, !forward);

            if self.t_edge[e_start].is_horizontal() {
                if self.t_edge[e_start].bot.x != self.t_edge[e].bot.x
                    && self.t_edge[e_start].top.x != self.t_edge[e].bot.x
                {
                    self.t_edge[e].reverse_horizontal();
                }
            } else if self.t_edge[e_start].bot.x != self.t_edge[e].bot.x {
                self.t_edge[e].reverse_horizontal();
            }
        }

        let e_start = e;

        loop {
            let next = self.step(result, forward);
            if self.t_edge[result].top.y != self.t_edge[next].bot.y
                || self.t_edge[next].out_idx == SKIP
            {
                break;
            }
            result = next;
        }

        let beyond = self.step(result, forward);
        if self.t_edge[result].is_horizontal() && self.t_edge[beyond].out_idx != SKIP {
            // a top horizontal joins this bound only if the preceding edge meets its left end
            let mut horz = result;
            while self.t_edge[self.step(horz, !forward)].is_horizontal() {
                horz = self.step(horz, !forward);
            }

            let before = self.step(horz, !forward);
            let before_x = self.t_edge[before].top.x;
            let beyond_x = self.t_edge[beyond].top.x;

            if before_x > beyond_x || (!forward && before_x == beyond_x) {
                result = before;
            }
        }

        while e != result {
            self.t_edge[e].next_in_lml = self.step(e, forward);
            self.align_bound_horizontal(e, e_start, forward);
            e = self.step(e, forward);
        }
        self.align_bound_horizontal(e, e_start, forward);

        self.step(result, forward)
    }

    fn align_bound_horizontal(&mut self, e: usize, e_start: usize, forward: bool) {
        let before = self.step(e, !forward);

        if self.t_edge[e].is_horizontal()
            && e != e_start
            && self.t_edge[e].bot.x != self.t_edge[before].top.x
        {
            self.t_edge[e].reverse_horizontal();
        }
    }

    /// Rewinds the minima and scanbeam so the added paths can be swept again.
    pub fn reset(&mut self) {
        self.local_minima.reset();
        self.scanbeam.clean();

        let minima: Vec<_> = self.local_minima.iter().copied().collect();
        for minimum in minima {
            self.scanbeam.insert(minimum.y);

            if minimum.has_left_bound() {
                self.t_edge[minimum.left_bound].reset(Direction::Left);
            }
            if minimum.has_right_bound() {
                self.t_edge[minimum.right_bound].reset(Direction::Right);
            }
        }

        self.t_edge.active = UNASSIGNED;
        self.t_edge.sorted = UNASSIGNED;
    }

    pub fn clear(&mut self) {
        self.t_edge.clear();
        self.local_minima.clear();
        self.scanbeam.clean();
        self.use_full_range = false;
        self.has_open_paths = false;
    }
}
