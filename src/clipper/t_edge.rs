use crate::clipper::constants::{HORIZONTAL, SKIP, UNASSIGNED};
use crate::clipper::enums::{Direction, PolyType};
use crate::error::{ClipperError, Result};
use crate::geometry::point::IntPoint;
use crate::utils::math::slopes_equal;
use crate::utils::round::round_to_i64;
use std::ops::{Index, IndexMut};

/// One directed boundary segment. Links are indices into the owning [`TEdge`] arena.
#[derive(Debug, Clone)]
pub struct Edge {
    pub bot: IntPoint,
    pub curr: IntPoint,
    pub top: IntPoint,
    pub delta: IntPoint,
    pub dx: f64,
    pub poly_typ: PolyType,
    pub side: Direction,
    pub wind_delta: i32,
    pub wind_cnt: i32,
    pub wind_cnt2: i32,
    pub out_idx: usize,
    pub next: usize,
    pub prev: usize,
    pub next_in_lml: usize,
    pub next_in_ael: usize,
    pub prev_in_ael: usize,
    pub next_in_sel: usize,
    pub prev_in_sel: usize,
}

impl Edge {
    pub fn new(curr: IntPoint, next: usize, prev: usize) -> Self {
        Self {
            bot: IntPoint::default(),
            curr,
            top: IntPoint::default(),
            delta: IntPoint::default(),
            dx: 0.0,
            poly_typ: PolyType::Subject,
            side: Direction::Left,
            wind_delta: 0,
            wind_cnt: 0,
            wind_cnt2: 0,
            out_idx: UNASSIGNED,
            next,
            prev,
            next_in_lml: UNASSIGNED,
            next_in_ael: UNASSIGNED,
            prev_in_ael: UNASSIGNED,
            next_in_sel: UNASSIGNED,
            prev_in_sel: UNASSIGNED,
        }
    }

    /// Orients the edge bottom-up from its current point and the next ring vertex.
    pub fn init(&mut self, next_curr: IntPoint, poly_typ: PolyType) {
        if self.curr.y >= next_curr.y {
            self.bot = self.curr;
            self.top = next_curr;
        } else {
            self.top = self.curr;
            self.bot = next_curr;
        }

        self.set_dx();
        self.poly_typ = poly_typ;
    }

    pub fn set_dx(&mut self) {
        self.delta = self.top.sub(&self.bot);
        self.dx = if self.delta.y == 0 {
            HORIZONTAL
        } else {
            self.delta.x as f64 / self.delta.y as f64
        };
    }

    #[inline(always)]
    pub fn is_horizontal(&self) -> bool {
        self.delta.y == 0
    }

    /// Swaps the X ends of a horizontal so its bottom meets the adjoining bound edge.
    pub fn reverse_horizontal(&mut self) {
        std::mem::swap(&mut self.top.x, &mut self.bot.x);
    }

    #[inline(always)]
    pub fn is_assigned(&self) -> bool {
        self.out_idx < SKIP
    }

    #[inline(always)]
    pub fn is_open(&self) -> bool {
        self.wind_delta == 0
    }

    pub fn top_x(&self, y: i64) -> i64 {
        if y == self.top.y {
            self.top.x
        } else {
            self.bot.x + round_to_i64(self.dx * (y - self.bot.y) as f64)
        }
    }

    pub fn reset(&mut self, side: Direction) {
        self.curr = self.bot;
        self.side = side;
        self.out_idx = UNASSIGNED;
    }
}

#[derive(Debug)]
pub struct TEdge {
    edges: Vec<Edge>,
    pub active: usize,
    pub sorted: usize,
}

impl Index<usize> for TEdge {
    type Output = Edge;

    fn index(&self, index: usize) -> &Self::Output {
        &self.edges[index]
    }
}

impl IndexMut<usize> for TEdge {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.edges[index]
    }
}

impl TEdge {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            active: UNASSIGNED,
            sorted: UNASSIGNED,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn push(&mut self, edge: Edge) -> usize {
        self.edges.push(edge);
        self.edges.len() - 1
    }

    pub fn truncate(&mut self, len: usize) {
        self.edges.truncate(len);
    }

    pub fn clear(&mut self) {
        self.edges.clear();
        self.active = UNASSIGNED;
        self.sorted = UNASSIGNED;
    }

    /// Unlinks `index` from its boundary ring and returns the following edge.
    pub fn remove(&mut self, index: usize) -> usize {
        let next = self.edges[index].next;
        let prev = self.edges[index].prev;

        self.edges[prev].next = next;
        self.edges[next].prev = prev;
        self.edges[index].prev = UNASSIGNED;

        next
    }

    pub fn find_next_loc_min(&self, index: usize) -> usize {
        let mut result = index;

        loop {
            while self.edges[result].bot != self.edges[self.edges[result].prev].bot
                || self.edges[result].curr == self.edges[result].top
            {
                result = self.edges[result].next;
            }

            if !self.edges[result].is_horizontal()
                && !self.edges[self.edges[result].prev].is_horizontal()
            {
                break;
            }

            while self.edges[self.edges[result].prev].is_horizontal() {
                result = self.edges[result].prev;
            }

            let horz_start = result;

            while self.edges[result].is_horizontal() {
                result = self.edges[result].next;
            }

            // an intermediate horizontal, not a minima
            if self.edges[result].top.y == self.edges[self.edges[result].prev].bot.y {
                continue;
            }

            if self.edges[self.edges[horz_start].prev].bot.x < self.edges[result].bot.x {
                result = horz_start;
            }

            break;
        }

        result
    }

    pub fn slopes_equal(&self, index1: usize, index2: usize, use_full_range: bool) -> bool {
        let e1 = &self.edges[index1];
        let e2 = &self.edges[index2];

        slopes_equal(e1.delta.y, e2.delta.x, e1.delta.x, e2.delta.y, use_full_range)
    }

    /// Crossing point of two edges, clamped into the current scanbeam.
    pub fn intersect_point(&self, index1: usize, index2: usize) -> IntPoint {
        let e1 = &self.edges[index1];
        let e2 = &self.edges[index2];
        let mut result = IntPoint::default();

        if e1.dx == e2.dx {
            result.y = e1.curr.y;
            result.x = e1.top_x(result.y);
            return result;
        }

        if e1.delta.x == 0 {
            result.x = e1.bot.x;
            result.y = if e2.is_horizontal() {
                e2.bot.y
            } else {
                let b2 = e2.bot.y as f64 - e2.bot.x as f64 / e2.dx;
                round_to_i64(result.x as f64 / e2.dx + b2)
            };
        } else if e2.delta.x == 0 {
            result.x = e2.bot.x;
            result.y = if e1.is_horizontal() {
                e1.bot.y
            } else {
                let b1 = e1.bot.y as f64 - e1.bot.x as f64 / e1.dx;
                round_to_i64(result.x as f64 / e1.dx + b1)
            };
        } else {
            let b1 = e1.bot.x as f64 - e1.bot.y as f64 * e1.dx;
            let b2 = e2.bot.x as f64 - e2.bot.y as f64 * e2.dx;
            let q = (b2 - b1) / (e1.dx - e2.dx);

            result.y = round_to_i64(q);
            result.x = if e1.dx.abs() < e2.dx.abs() {
                round_to_i64(e1.dx * q + b1)
            } else {
                round_to_i64(e2.dx * q + b2)
            };
        }

        if result.y < e1.top.y || result.y < e2.top.y {
            result.y = e1.top.y.max(e2.top.y);
            result.x = if e1.dx.abs() < e2.dx.abs() {
                e1.top_x(result.y)
            } else {
                e2.top_x(result.y)
            };
        }

        // never below the bottom of the scanbeam
        if result.y > e1.curr.y {
            result.y = e1.curr.y;
            result.x = if e1.dx.abs() > e2.dx.abs() {
                e2.top_x(result.y)
            } else {
                e1.top_x(result.y)
            };
        }

        result
    }

    fn e2_inserts_before_e1(&self, index1: usize, index2: usize) -> bool {
        let e1 = &self.edges[index1];
        let e2 = &self.edges[index2];

        if e2.curr.x == e1.curr.x {
            if e2.top.y > e1.top.y {
                e2.top.x < e1.top_x(e2.top.y)
            } else {
                e1.top.x > e2.top_x(e1.top.y)
            }
        } else {
            e2.curr.x < e1.curr.x
        }
    }

    pub fn insert_into_ael(&mut self, index: usize, start_index: usize) {
        if self.active == UNASSIGNED {
            self.edges[index].prev_in_ael = UNASSIGNED;
            self.edges[index].next_in_ael = UNASSIGNED;
            self.active = index;
            return;
        }

        if start_index == UNASSIGNED && self.e2_inserts_before_e1(self.active, index) {
            self.edges[index].prev_in_ael = UNASSIGNED;
            self.edges[index].next_in_ael = self.active;
            self.edges[self.active].prev_in_ael = index;
            self.active = index;
            return;
        }

        let mut start = if start_index == UNASSIGNED {
            self.active
        } else {
            start_index
        };

        while self.edges[start].next_in_ael != UNASSIGNED
            && !self.e2_inserts_before_e1(self.edges[start].next_in_ael, index)
        {
            start = self.edges[start].next_in_ael;
        }

        let next = self.edges[start].next_in_ael;
        self.edges[index].next_in_ael = next;
        if next != UNASSIGNED {
            self.edges[next].prev_in_ael = index;
        }
        self.edges[index].prev_in_ael = start;
        self.edges[start].next_in_ael = index;
    }

    pub fn delete_from_ael(&mut self, index: usize) {
        let prev = self.edges[index].prev_in_ael;
        let next = self.edges[index].next_in_ael;

        if prev == UNASSIGNED && next == UNASSIGNED && index != self.active {
            return;
        }

        if prev != UNASSIGNED {
            self.edges[prev].next_in_ael = next;
        } else {
            self.active = next;
        }

        if next != UNASSIGNED {
            self.edges[next].prev_in_ael = prev;
        }

        self.edges[index].next_in_ael = UNASSIGNED;
        self.edges[index].prev_in_ael = UNASSIGNED;
    }

    pub fn add_to_sel(&mut self, index: usize) {
        self.edges[index].prev_in_sel = UNASSIGNED;
        self.edges[index].next_in_sel = self.sorted;
        if self.sorted != UNASSIGNED {
            self.edges[self.sorted].prev_in_sel = index;
        }
        self.sorted = index;
    }

    pub fn pop_from_sel(&mut self) -> Option<usize> {
        if self.sorted == UNASSIGNED {
            return None;
        }

        let result = self.sorted;
        self.delete_from_sel(result);

        Some(result)
    }

    pub fn delete_from_sel(&mut self, index: usize) {
        let prev = self.edges[index].prev_in_sel;
        let next = self.edges[index].next_in_sel;

        if prev == UNASSIGNED && next == UNASSIGNED && index != self.sorted {
            return;
        }

        if prev != UNASSIGNED {
            self.edges[prev].next_in_sel = next;
        } else {
            self.sorted = next;
        }

        if next != UNASSIGNED {
            self.edges[next].prev_in_sel = prev;
        }

        self.edges[index].next_in_sel = UNASSIGNED;
        self.edges[index].prev_in_sel = UNASSIGNED;
    }

    pub fn copy_ael_to_sel(&mut self) {
        let mut index = self.active;
        self.sorted = index;

        while index != UNASSIGNED {
            self.edges[index].prev_in_sel = self.edges[index].prev_in_ael;
            self.edges[index].next_in_sel = self.edges[index].next_in_ael;
            index = self.edges[index].next_in_ael;
        }
    }

    /// Same as [`copy_ael_to_sel`](Self::copy_ael_to_sel), also moving every `curr.x` to `top_y`.
    pub fn copy_ael_to_sel_at(&mut self, top_y: i64) {
        let mut index = self.active;
        self.sorted = index;

        while index != UNASSIGNED {
            let edge = &mut self.edges[index];
            edge.prev_in_sel = edge.prev_in_ael;
            edge.next_in_sel = edge.next_in_ael;
            edge.curr.x = edge.top_x(top_y);
            index = edge.next_in_ael;
        }
    }

    pub fn swap_positions_in_ael(&mut self, index1: usize, index2: usize) {
        // either edge may already have left the AEL
        if self.edges[index1].next_in_ael == self.edges[index1].prev_in_ael
            || self.edges[index2].next_in_ael == self.edges[index2].prev_in_ael
        {
            return;
        }

        if self.edges[index1].next_in_ael == index2 {
            let next = self.edges[index2].next_in_ael;
            if next != UNASSIGNED {
                self.edges[next].prev_in_ael = index1;
            }
            let prev = self.edges[index1].prev_in_ael;
            if prev != UNASSIGNED {
                self.edges[prev].next_in_ael = index2;
            }
            self.edges[index2].prev_in_ael = prev;
            self.edges[index2].next_in_ael = index1;
            self.edges[index1].prev_in_ael = index2;
            self.edges[index1].next_in_ael = next;
        } else if self.edges[index2].next_in_ael == index1 {
            let next = self.edges[index1].next_in_ael;
            if next != UNASSIGNED {
                self.edges[next].prev_in_ael = index2;
            }
            let prev = self.edges[index2].prev_in_ael;
            if prev != UNASSIGNED {
                self.edges[prev].next_in_ael = index1;
            }
            self.edges[index1].prev_in_ael = prev;
            self.edges[index1].next_in_ael = index2;
            self.edges[index2].prev_in_ael = index1;
            self.edges[index2].next_in_ael = next;
        } else {
            let next = self.edges[index1].next_in_ael;
            let prev = self.edges[index1].prev_in_ael;

            self.edges[index1].next_in_ael = self.edges[index2].next_in_ael;
            let n1 = self.edges[index1].next_in_ael;
            if n1 != UNASSIGNED {
                self.edges[n1].prev_in_ael = index1;
            }
            self.edges[index1].prev_in_ael = self.edges[index2].prev_in_ael;
            let p1 = self.edges[index1].prev_in_ael;
            if p1 != UNASSIGNED {
                self.edges[p1].next_in_ael = index1;
            }
            self.edges[index2].next_in_ael = next;
            if next != UNASSIGNED {
                self.edges[next].prev_in_ael = index2;
            }
            self.edges[index2].prev_in_ael = prev;
            if prev != UNASSIGNED {
                self.edges[prev].next_in_ael = index2;
            }
        }

        if self.edges[index1].prev_in_ael == UNASSIGNED {
            self.active = index1;
        } else if self.edges[index2].prev_in_ael == UNASSIGNED {
            self.active = index2;
        }
    }

    pub fn swap_positions_in_sel(&mut self, index1: usize, index2: usize) {
        if self.edges[index1].next_in_sel == UNASSIGNED
            && self.edges[index1].prev_in_sel == UNASSIGNED
        {
            return;
        }
        if self.edges[index2].next_in_sel == UNASSIGNED
            && self.edges[index2].prev_in_sel == UNASSIGNED
        {
            return;
        }

        if self.edges[index1].next_in_sel == index2 {
            let next = self.edges[index2].next_in_sel;
            if next != UNASSIGNED {
                self.edges[next].prev_in_sel = index1;
            }
            let prev = self.edges[index1].prev_in_sel;
            if prev != UNASSIGNED {
                self.edges[prev].next_in_sel = index2;
            }
            self.edges[index2].prev_in_sel = prev;
            self.edges[index2].next_in_sel = index1;
            self.edges[index1].prev_in_sel = index2;
            self.edges[index1].next_in_sel = next;
        } else if self.edges[index2].next_in_sel == index1 {
            let next = self.edges[index1].next_in_sel;
            if next != UNASSIGNED {
                self.edges[next].prev_in_sel = index2;
            }
            let prev = self.edges[index2].prev_in_sel;
            if prev != UNASSIGNED {
                self.edges[prev].next_in_sel = index1;
            }
            self.edges[index1].prev_in_sel = prev;
            self.edges[index1].next_in_sel = index2;
            self.edges[index2].prev_in_sel = index1;
            self.edges[index2].next_in_sel = next;
        } else {
            let next = self.edges[index1].next_in_sel;
            let prev = self.edges[index1].prev_in_sel;

            self.edges[index1].next_in_sel = self.edges[index2].next_in_sel;
            let n1 = self.edges[index1].next_in_sel;
            if n1 != UNASSIGNED {
                self.edges[n1].prev_in_sel = index1;
            }
            self.edges[index1].prev_in_sel = self.edges[index2].prev_in_sel;
            let p1 = self.edges[index1].prev_in_sel;
            if p1 != UNASSIGNED {
                self.edges[p1].next_in_sel = index1;
            }
            self.edges[index2].next_in_sel = next;
            if next != UNASSIGNED {
                self.edges[next].prev_in_sel = index2;
            }
            self.edges[index2].prev_in_sel = prev;
            if prev != UNASSIGNED {
                self.edges[prev].next_in_sel = index2;
            }
        }

        if self.edges[index1].prev_in_sel == UNASSIGNED {
            self.sorted = index1;
        } else if self.edges[index2].prev_in_sel == UNASSIGNED {
            self.sorted = index2;
        }
    }

    /// Replaces `index` in the AEL with the next edge of its bound and returns that edge.
    pub fn update_edge_into_ael(&mut self, index: usize) -> Result<usize> {
        let next_index = self.edges[index].next_in_lml;
        if next_index == UNASSIGNED {
            return Err(ClipperError::InvalidEdgePromotion);
        }

        let prev = self.edges[index].prev_in_ael;
        let next = self.edges[index].next_in_ael;

        if prev != UNASSIGNED {
            self.edges[prev].next_in_ael = next_index;
        } else {
            self.active = next_index;
        }
        if next != UNASSIGNED {
            self.edges[next].prev_in_ael = next_index;
        }

        let (out_idx, side, wind_delta, wind_cnt, wind_cnt2) = {
            let edge = &self.edges[index];
            (
                edge.out_idx,
                edge.side,
                edge.wind_delta,
                edge.wind_cnt,
                edge.wind_cnt2,
            )
        };

        let edge = &mut self.edges[next_index];
        edge.out_idx = out_idx;
        edge.side = side;
        edge.wind_delta = wind_delta;
        edge.wind_cnt = wind_cnt;
        edge.wind_cnt2 = wind_cnt2;
        edge.curr = edge.bot;
        edge.prev_in_ael = prev;
        edge.next_in_ael = next;

        Ok(next_index)
    }

    #[inline(always)]
    pub fn is_maxima(&self, index: usize, y: i64) -> bool {
        index != UNASSIGNED
            && self.edges[index].top.y == y
            && self.edges[index].next_in_lml == UNASSIGNED
    }

    #[inline(always)]
    pub fn is_intermediate(&self, index: usize, y: i64) -> bool {
        self.edges[index].top.y == y && self.edges[index].next_in_lml != UNASSIGNED
    }

    pub fn get_maxima_pair(&self, index: usize) -> usize {
        let edge = &self.edges[index];
        let next = &self.edges[edge.next];
        let prev = &self.edges[edge.prev];

        if next.top == edge.top && next.next_in_lml == UNASSIGNED {
            edge.next
        } else if prev.top == edge.top && prev.next_in_lml == UNASSIGNED {
            edge.prev
        } else {
            UNASSIGNED
        }
    }

    /// Like [`get_maxima_pair`](Self::get_maxima_pair) but ignores a pair that is not in the AEL.
    pub fn get_maxima_pair_ex(&self, index: usize) -> usize {
        let result = self.get_maxima_pair(index);
        if result == UNASSIGNED {
            return result;
        }

        let pair = &self.edges[result];
        if pair.out_idx == SKIP
            || (pair.next_in_ael == pair.prev_in_ael && !pair.is_horizontal())
        {
            return UNASSIGNED;
        }

        result
    }

    #[inline(always)]
    pub fn get_next_in_ael(&self, index: usize, direction: Direction) -> usize {
        if direction == Direction::Right {
            self.edges[index].next_in_ael
        } else {
            self.edges[index].prev_in_ael
        }
    }

    /// Direction of travel of a horizontal plus its left and right X limits.
    pub fn horz_direction(&self, index: usize) -> (Direction, i64, i64) {
        let edge = &self.edges[index];

        if edge.bot.x < edge.top.x {
            (Direction::Right, edge.bot.x, edge.top.x)
        } else {
            (Direction::Left, edge.top.x, edge.bot.x)
        }
    }

    pub fn swap_sides(&mut self, index1: usize, index2: usize) {
        let side = self.edges[index1].side;
        self.edges[index1].side = self.edges[index2].side;
        self.edges[index2].side = side;
    }

    pub fn swap_poly_indexes(&mut self, index1: usize, index2: usize) {
        let out_idx = self.edges[index1].out_idx;
        self.edges[index1].out_idx = self.edges[index2].out_idx;
        self.edges[index2].out_idx = out_idx;
    }
}
