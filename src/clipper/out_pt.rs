use crate::clipper::constants::{HORIZONTAL, UNASSIGNED};
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::{crossing_state, Crossing, Path};
use std::ops::{Index, IndexMut};

/// Vertex of an output contour. `idx` points back at the owning out record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutPoint {
    pub idx: usize,
    pub pt: IntPoint,
    pub next: usize,
    pub prev: usize,
}

/// Arena of circular vertex rings. Unlinked vertices stay in place until the arena is cleared.
#[derive(Debug, Default)]
pub struct OutPt {
    points: Vec<OutPoint>,
}

impl Index<usize> for OutPt {
    type Output = OutPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IndexMut<usize> for OutPt {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.points[index]
    }
}

impl OutPt {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Starts a new single-vertex ring.
    pub fn create(&mut self, idx: usize, pt: IntPoint) -> usize {
        let index = self.points.len();
        self.points.push(OutPoint {
            idx,
            pt,
            next: index,
            prev: index,
        });

        index
    }

    /// Inserts a new vertex between `index.prev` and `index`.
    pub fn insert_before(&mut self, index: usize, pt: IntPoint) -> usize {
        let prev = self.points[index].prev;
        let result = self.points.len();

        self.points.push(OutPoint {
            idx: self.points[index].idx,
            pt,
            next: index,
            prev,
        });
        self.points[prev].next = result;
        self.points[index].prev = result;

        result
    }

    /// Copies `index` next to itself, keeping its owner.
    pub fn dup(&mut self, index: usize, insert_after: bool) -> usize {
        let OutPoint { idx, pt, next, .. } = self.points[index];
        let result = if insert_after {
            self.insert_before(next, pt)
        } else {
            self.insert_before(index, pt)
        };
        self.points[result].idx = idx;

        result
    }

    /// Unlinks `index` from its ring and returns its predecessor.
    pub fn unlink(&mut self, index: usize) -> usize {
        let prev = self.points[index].prev;
        let next = self.points[index].next;

        self.points[prev].next = next;
        self.points[next].prev = prev;

        prev
    }

    pub fn reverse_links(&mut self, index: usize) {
        if index == UNASSIGNED {
            return;
        }

        let mut curr = index;
        loop {
            let next = self.points[curr].next;
            self.points[curr].next = self.points[curr].prev;
            self.points[curr].prev = next;
            curr = next;

            if curr == index {
                break;
            }
        }
    }

    pub fn point_count(&self, index: usize) -> usize {
        if index == UNASSIGNED {
            return 0;
        }

        let mut result = 0;
        let mut curr = index;
        loop {
            result += 1;
            curr = self.points[curr].next;

            if curr == index {
                break;
            }
        }

        result
    }

    /// Signed area of the ring. Matches [`crate::geometry::polygon::area`] of the path
    /// [`to_path`](Self::to_path) emits for it.
    pub fn area(&self, index: usize) -> f64 {
        if index == UNASSIGNED {
            return 0.0;
        }

        let mut result = 0.0;
        let mut curr = index;
        loop {
            let prev = &self.points[self.points[curr].prev].pt;
            let pt = &self.points[curr].pt;
            result += (prev.x as f64 + pt.x as f64) * (prev.y as f64 - pt.y as f64);
            curr = self.points[curr].next;

            if curr == index {
                break;
            }
        }

        result * 0.5
    }

    /// Lowest (largest Y, then smallest X) vertex of the ring.
    pub fn get_bottom_pt(&self, index: usize) -> usize {
        let mut result = index;
        let mut dups = UNASSIGNED;
        let mut curr = self.points[index].next;

        while curr != result {
            let pt = self.points[curr].pt;
            let best = self.points[result].pt;

            if pt.y > best.y {
                result = curr;
                dups = UNASSIGNED;
            } else if pt.y == best.y && pt.x <= best.x {
                if pt.x < best.x {
                    dups = UNASSIGNED;
                    result = curr;
                } else if self.points[curr].next != result && self.points[curr].prev != result {
                    dups = curr;
                }
            }

            curr = self.points[curr].next;
        }

        if dups != UNASSIGNED {
            // several vertices share the bottom point
            while dups != curr {
                if !self.first_is_bottom_pt(curr, dups) {
                    result = dups;
                }

                dups = self.points[dups].next;
                while self.points[dups].pt != self.points[result].pt {
                    dups = self.points[dups].next;
                }
            }
        }

        result
    }

    fn neighbour_dx(&self, index: usize, forward: bool) -> f64 {
        let pt = self.points[index].pt;
        let mut curr = self.step(index, forward);

        while self.points[curr].pt == pt && curr != index {
            curr = self.step(curr, forward);
        }

        pt.dx(&self.points[curr].pt, HORIZONTAL).abs()
    }

    #[inline(always)]
    fn step(&self, index: usize, forward: bool) -> usize {
        if forward {
            self.points[index].next
        } else {
            self.points[index].prev
        }
    }

    pub fn first_is_bottom_pt(&self, index1: usize, index2: usize) -> bool {
        let dx1p = self.neighbour_dx(index1, false);
        let dx1n = self.neighbour_dx(index1, true);
        let dx2p = self.neighbour_dx(index2, false);
        let dx2n = self.neighbour_dx(index2, true);

        if dx1p.max(dx1n) == dx2p.max(dx2n) && dx1p.min(dx1n) == dx2p.min(dx2n) {
            self.area(index1) > 0.0
        } else {
            (dx1p >= dx2p && dx1p >= dx2n) || (dx1n >= dx2p && dx1n >= dx2n)
        }
    }

    /// Returns 0 when `pt` is outside the ring, 1 when inside and -1 when on its boundary.
    pub fn point_in_polygon(&self, pt: &IntPoint, index: usize) -> i32 {
        let mut result = 0;
        let mut curr = index;

        loop {
            let next = self.points[curr].next;

            match crossing_state(pt, &self.points[curr].pt, &self.points[next].pt) {
                Crossing::OnEdge => return -1,
                Crossing::Toggle => result = 1 - result,
                Crossing::None => {}
            }

            curr = next;
            if curr == index {
                break;
            }
        }

        result
    }

    /// True when ring `outer` contains ring `inner`, judged by the first vertex not on `outer`.
    pub fn poly2_contains_poly1(&self, inner: usize, outer: usize) -> bool {
        let mut curr = inner;

        loop {
            let res = self.point_in_polygon(&self.points[curr].pt, outer);
            if res >= 0 {
                return res > 0;
            }

            curr = self.points[curr].next;
            if curr == inner {
                break;
            }
        }

        true
    }

    pub fn update_idx(&mut self, index: usize, idx: usize) {
        let mut curr = index;

        loop {
            self.points[curr].idx = idx;
            curr = self.points[curr].prev;

            if curr == index {
                break;
            }
        }
    }

    /// Ring contents starting from `index.prev` and walking backwards.
    pub fn to_path(&self, index: usize) -> Path {
        let count = self.point_count(index);
        let mut result = Vec::with_capacity(count);

        if count == 0 {
            return result;
        }

        let mut curr = self.points[index].prev;
        for _ in 0..count {
            result.push(self.points[curr].pt);
            curr = self.points[curr].prev;
        }

        result
    }
}
