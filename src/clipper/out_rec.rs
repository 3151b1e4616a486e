use crate::clipper::constants::UNASSIGNED;
use crate::clipper::enums::Direction;
use crate::clipper::join::Join;
use crate::clipper::out_pt::OutPt;
use crate::clipper::poly_tree::PolyTree;
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::Paths;
use crate::utils::math::{get_overlap, points_collinear};
use std::ops::{Index, IndexMut};
use tracing::trace;

/// One output contour under construction.
///
/// `idx` is rewritten when the record is merged into another one, [`OutRec::get_out_rec`]
/// follows that chain to the surviving record.
#[derive(Debug, Clone, PartialEq)]
pub struct OutRecord {
    pub idx: usize,
    pub is_hole: bool,
    pub is_open: bool,
    pub first_left: usize,
    pub pts: usize,
    pub bottom_pt: usize,
    pub poly_node: usize,
}

impl OutRecord {
    fn new(idx: usize) -> Self {
        Self {
            idx,
            is_hole: false,
            is_open: false,
            first_left: UNASSIGNED,
            pts: UNASSIGNED,
            bottom_pt: UNASSIGNED,
            poly_node: UNASSIGNED,
        }
    }

    #[inline(always)]
    pub fn has_points(&self) -> bool {
        self.pts != UNASSIGNED
    }
}

// Output records of one sweep plus the vertex rings they own
#[derive(Debug)]
pub struct OutRec {
    records: Vec<OutRecord>,
    pub points: OutPt,
    is_reverse_solution: bool,
    is_strictly_simple: bool,
    preserve_collinear: bool,
    use_full_range: bool,
    using_poly_tree: bool,
}

impl Index<usize> for OutRec {
    type Output = OutRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl IndexMut<usize> for OutRec {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.records[index]
    }
}

impl OutRec {
    pub fn new(is_reverse_solution: bool, is_strictly_simple: bool) -> Self {
        Self {
            records: Vec::new(),
            points: OutPt::new(),
            is_reverse_solution,
            is_strictly_simple,
            preserve_collinear: false,
            use_full_range: false,
            using_poly_tree: false,
        }
    }

    pub fn with_options(
        mut self,
        preserve_collinear: bool,
        use_full_range: bool,
        using_poly_tree: bool,
    ) -> Self {
        self.preserve_collinear = preserve_collinear;
        self.use_full_range = use_full_range;
        self.using_poly_tree = using_poly_tree;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn create(&mut self) -> usize {
        let idx = self.records.len();
        self.records.push(OutRecord::new(idx));
        idx
    }

    /// Creates a record whose ring holds the single vertex `pt`.
    pub fn start(&mut self, pt: IntPoint, is_open: bool) -> (usize, usize) {
        let rec = self.create();
        let op = self.points.create(rec, pt);

        self.records[rec].pts = op;
        self.records[rec].is_open = is_open;

        (rec, op)
    }

    /// Adds `pt` at the front (left side) or back (right side) of the ring, skipping duplicates.
    pub fn add_point(&mut self, rec: usize, pt: IntPoint, to_front: bool) -> usize {
        let op = self.records[rec].pts;
        let prev = self.points[op].prev;

        if to_front && pt == self.points[op].pt {
            return op;
        }
        if !to_front && pt == self.points[prev].pt {
            return prev;
        }

        let result = self.points.insert_before(op, pt);
        if to_front {
            self.records[rec].pts = result;
        }

        result
    }

    pub fn last_point(&self, rec: usize, side: Direction) -> usize {
        let op = self.records[rec].pts;

        if side == Direction::Left {
            op
        } else {
            self.points[op].prev
        }
    }

    pub fn get_out_rec(&self, idx: usize) -> usize {
        let mut result = idx;

        while result != self.records[result].idx {
            result = self.records[result].idx;
        }

        result
    }

    /// Skips first-left links to records that no longer own any points.
    pub fn parse_first_left(&self, first_left: usize) -> usize {
        let mut result = first_left;

        while result != UNASSIGNED && !self.records[result].has_points() {
            result = self.records[result].first_left;
        }

        result
    }

    pub fn area(&self, rec: usize) -> f64 {
        self.points.area(self.records[rec].pts)
    }

    pub fn param1_right_of_param2(&self, index1: usize, index2: usize) -> bool {
        let mut curr = index1;

        loop {
            curr = self.records[curr].first_left;
            if curr == index2 {
                return true;
            }
            if curr == UNASSIGNED {
                return false;
            }
        }
    }

    fn ensure_bottom_pt(&mut self, rec: usize) -> usize {
        if self.records[rec].bottom_pt == UNASSIGNED {
            self.records[rec].bottom_pt = self.points.get_bottom_pt(self.records[rec].pts);
        }

        self.records[rec].bottom_pt
    }

    pub fn get_lowermost_rec(&mut self, index1: usize, index2: usize) -> usize {
        let b1 = self.ensure_bottom_pt(index1);
        let b2 = self.ensure_bottom_pt(index2);
        let p1 = self.points[b1].pt;
        let p2 = self.points[b2].pt;

        if p1.y != p2.y {
            return if p1.y > p2.y { index1 } else { index2 };
        }
        if p1.x != p2.x {
            return if p1.x < p2.x { index1 } else { index2 };
        }
        if self.points[b1].next == b1 {
            return index2;
        }
        if self.points[b2].next == b2 {
            return index1;
        }

        if self.points.first_is_bottom_pt(b1, b2) {
            index1
        } else {
            index2
        }
    }

    /// Record whose hole state survives when `index1` and `index2` merge.
    pub fn get_hole_state_rec(&mut self, index1: usize, index2: usize) -> usize {
        if self.param1_right_of_param2(index1, index2) {
            index2
        } else if self.param1_right_of_param2(index2, index1) {
            index1
        } else {
            self.get_lowermost_rec(index1, index2)
        }
    }

    /// Splices the ring of `index2` onto `index1` according to the sides of the two meeting
    /// edges. `index2` is emptied and redirected to `index1`.
    pub fn append(&mut self, index1: usize, index2: usize, side1: Direction, side2: Direction) {
        let hole_state_rec = self.get_hole_state_rec(index1, index2);

        let p1_lft = self.records[index1].pts;
        let p1_rt = self.points[p1_lft].prev;
        let p2_lft = self.records[index2].pts;
        let p2_rt = self.points[p2_lft].prev;

        match (side1, side2) {
            (Direction::Left, Direction::Left) => {
                // z y x a b c
                self.points.reverse_links(p2_lft);
                self.points[p2_lft].next = p1_lft;
                self.points[p1_lft].prev = p2_lft;
                self.points[p1_rt].next = p2_rt;
                self.points[p2_rt].prev = p1_rt;
                self.records[index1].pts = p2_rt;
            }
            (Direction::Left, Direction::Right) => {
                // x y z a b c
                self.points[p2_rt].next = p1_lft;
                self.points[p1_lft].prev = p2_rt;
                self.points[p2_lft].prev = p1_rt;
                self.points[p1_rt].next = p2_lft;
                self.records[index1].pts = p2_lft;
            }
            (Direction::Right, Direction::Right) => {
                // a b c z y x
                self.points.reverse_links(p2_lft);
                self.points[p1_rt].next = p2_rt;
                self.points[p2_rt].prev = p1_rt;
                self.points[p2_lft].next = p1_lft;
                self.points[p1_lft].prev = p2_lft;
            }
            (Direction::Right, Direction::Left) => {
                // a b c x y z
                self.points[p1_rt].next = p2_lft;
                self.points[p2_lft].prev = p1_rt;
                self.points[p1_lft].prev = p2_rt;
                self.points[p2_rt].next = p1_lft;
            }
        }

        self.records[index1].bottom_pt = UNASSIGNED;
        if hole_state_rec == index2 {
            if self.records[index2].first_left != index1 {
                self.records[index1].first_left = self.records[index2].first_left;
            }
            self.records[index1].is_hole = self.records[index2].is_hole;
        }

        let idx1 = self.records[index1].idx;
        let rec2 = &mut self.records[index2];
        rec2.pts = UNASSIGNED;
        rec2.bottom_pt = UNASSIGNED;
        rec2.first_left = index1;
        rec2.idx = idx1;
    }

    /// Gives every closed contour the orientation its hole state calls for.
    pub fn fix_orientations(&mut self) {
        for i in 0..self.records.len() {
            let rec = &self.records[i];
            if !rec.has_points() || rec.is_open {
                continue;
            }

            self.orient(i);
        }
    }

    fn orient(&mut self, rec: usize) {
        if (self.records[rec].is_hole ^ self.is_reverse_solution) == (self.area(rec) > 0.0) {
            self.points.reverse_links(self.records[rec].pts);
        }
    }

    fn update_out_pt_idxs(&mut self, rec: usize) {
        self.points.update_idx(self.records[rec].pts, rec);
    }

    /// Tags the contour split off from `index1` as `index2` with hole state and containment.
    fn classify_split(&mut self, index1: usize, index2: usize, orient: bool) {
        let pts1 = self.records[index1].pts;
        let pts2 = self.records[index2].pts;

        if self.points.poly2_contains_poly1(pts2, pts1) {
            self.records[index2].is_hole = !self.records[index1].is_hole;
            self.records[index2].first_left = index1;
            if self.using_poly_tree {
                self.fixup_first_lefts2(index2, index1);
            }
            if orient {
                self.orient(index2);
            }
        } else if self.points.poly2_contains_poly1(pts1, pts2) {
            self.records[index2].is_hole = self.records[index1].is_hole;
            self.records[index1].is_hole = !self.records[index2].is_hole;
            self.records[index2].first_left = self.records[index1].first_left;
            self.records[index1].first_left = index2;
            if self.using_poly_tree {
                self.fixup_first_lefts2(index1, index2);
            }
            if orient {
                self.orient(index1);
            }
        } else {
            self.records[index2].is_hole = self.records[index1].is_hole;
            self.records[index2].first_left = self.records[index1].first_left;
            if self.using_poly_tree {
                self.fixup_first_lefts1(index1, index2);
            }
        }
    }

    pub fn join_common_edges(&mut self, joins: &mut Join) {
        for i in 0..joins.len() {
            let join = joins.get(i);
            let index1 = self.get_out_rec(self.points[join.out_pt1].idx);
            let mut index2 = self.get_out_rec(self.points[join.out_pt2].idx);

            if !self.records[index1].has_points() || !self.records[index2].has_points() {
                continue;
            }
            if self.records[index1].is_open || self.records[index2].is_open {
                continue;
            }

            let hole_state_rec = if index1 == index2 {
                index1
            } else {
                self.get_hole_state_rec(index1, index2)
            };

            if !self.join_points(joins, i, index1, index2) {
                continue;
            }

            let join = joins.get(i);

            if index1 == index2 {
                // the join split one contour into two
                self.records[index1].pts = join.out_pt1;
                self.records[index1].bottom_pt = UNASSIGNED;
                index2 = self.create();
                self.records[index2].pts = join.out_pt2;
                self.update_out_pt_idxs(index2);
                self.classify_split(index1, index2, true);
                trace!(record = index1, split = index2, "join split record");
            } else {
                // the join merged two contours
                self.records[index2].pts = UNASSIGNED;
                self.records[index2].bottom_pt = UNASSIGNED;
                self.records[index2].idx = self.records[index1].idx;
                self.records[index1].is_hole = self.records[hole_state_rec].is_hole;
                if hole_state_rec == index2 {
                    self.records[index1].first_left = self.records[index2].first_left;
                }
                self.records[index2].first_left = index1;
                if self.using_poly_tree {
                    self.fixup_first_lefts3(index2, index1);
                }
                trace!(record = index1, merged = index2, "join merged records");
            }
        }
    }

    /// Links the two rings at a pair of duplicated vertices so the join edge disappears.
    fn link_at(&mut self, op1: usize, op2: usize, reverse: bool) -> usize {
        if reverse {
            let op1b = self.points.dup(op1, false);
            let op2b = self.points.dup(op2, true);
            self.points[op1].prev = op2;
            self.points[op2].next = op1;
            self.points[op1b].next = op2b;
            self.points[op2b].prev = op1b;
            op1b
        } else {
            let op1b = self.points.dup(op1, true);
            let op2b = self.points.dup(op2, false);
            self.points[op1].next = op2;
            self.points[op2].prev = op1;
            self.points[op1b].prev = op2b;
            self.points[op2b].next = op1b;
            op1b
        }
    }

    fn skip_same_pt(&self, op: usize, pt: IntPoint, forward: bool) -> usize {
        let mut result = if forward {
            self.points[op].next
        } else {
            self.points[op].prev
        };

        while result != op && self.points[result].pt == pt {
            result = if forward {
                self.points[result].next
            } else {
                self.points[result].prev
            };
        }

        result
    }

    fn join_points(&mut self, joins: &mut Join, join_index: usize, index1: usize, index2: usize) -> bool {
        let join = joins.get(join_index);
        let mut op1 = join.out_pt1;
        let mut op2 = join.out_pt2;
        let off_pt = join.off_pt;
        let is_horizontal = self.points[op1].pt.y == off_pt.y;

        if is_horizontal && off_pt == self.points[op1].pt && off_pt == self.points[op2].pt {
            // two contours touching at a single vertex
            if index1 != index2 {
                return false;
            }

            let op1b = self.skip_same_pt(op1, off_pt, true);
            let reverse1 = self.points[op1b].pt.y > off_pt.y;
            let op2b = self.skip_same_pt(op2, off_pt, true);
            let reverse2 = self.points[op2b].pt.y > off_pt.y;

            if reverse1 == reverse2 {
                return false;
            }

            let op1b = self.link_at(op1, op2, reverse1);
            joins.update(join_index, op1, op1b);
            return true;
        }

        if is_horizontal {
            // extend both horizontal runs to their extremities
            let mut op1b = op1;
            while self.points[self.points[op1].prev].pt.y == self.points[op1].pt.y
                && self.points[op1].prev != op1b
                && self.points[op1].prev != op2
            {
                op1 = self.points[op1].prev;
            }
            while self.points[self.points[op1b].next].pt.y == self.points[op1b].pt.y
                && self.points[op1b].next != op1
                && self.points[op1b].next != op2
            {
                op1b = self.points[op1b].next;
            }
            if self.points[op1b].next == op1 || self.points[op1b].next == op2 {
                return false;
            }

            let mut op2b = op2;
            while self.points[self.points[op2].prev].pt.y == self.points[op2].pt.y
                && self.points[op2].prev != op2b
                && self.points[op2].prev != op1b
            {
                op2 = self.points[op2].prev;
            }
            while self.points[self.points[op2b].next].pt.y == self.points[op2b].pt.y
                && self.points[op2b].next != op2
                && self.points[op2b].next != op1
            {
                op2b = self.points[op2b].next;
            }
            if self.points[op2b].next == op2 || self.points[op2b].next == op1 {
                return false;
            }

            let (p1, p1b) = (self.points[op1].pt, self.points[op1b].pt);
            let (p2, p2b) = (self.points[op2].pt, self.points[op2b].pt);

            let Some((left, right)) = get_overlap(p1.x, p1b.x, p2.x, p2b.x) else {
                return false;
            };

            let (pt, discard_left) = if p1.x >= left && p1.x <= right {
                (p1, p1.x > p1b.x)
            } else if p2.x >= left && p2.x <= right {
                (p2, p2.x > p2b.x)
            } else if p1b.x >= left && p1b.x <= right {
                (p1b, p1b.x > p1.x)
            } else {
                (p2b, p2b.x > p2.x)
            };

            joins.update(join_index, op1, op2);
            return self.join_horz(op1, op1b, op2, op2b, pt, discard_left);
        }

        let p1 = self.points[op1].pt;
        let mut op1b = self.skip_same_pt(op1, p1, true);
        let reverse1 = self.points[op1b].pt.y > p1.y
            || !points_collinear(&p1, &self.points[op1b].pt, &off_pt, self.use_full_range);
        if reverse1 {
            op1b = self.skip_same_pt(op1, p1, false);
            if self.points[op1b].pt.y > p1.y
                || !points_collinear(&p1, &self.points[op1b].pt, &off_pt, self.use_full_range)
            {
                return false;
            }
        }

        let p2 = self.points[op2].pt;
        let mut op2b = self.skip_same_pt(op2, p2, true);
        let reverse2 = self.points[op2b].pt.y > p2.y
            || !points_collinear(&p2, &self.points[op2b].pt, &off_pt, self.use_full_range);
        if reverse2 {
            op2b = self.skip_same_pt(op2, p2, false);
            if self.points[op2b].pt.y > p2.y
                || !points_collinear(&p2, &self.points[op2b].pt, &off_pt, self.use_full_range)
            {
                return false;
            }
        }

        if op1b == op1
            || op2b == op2
            || op1b == op2b
            || (index1 == index2 && reverse1 == reverse2)
        {
            return false;
        }

        let op1b = self.link_at(op1, op2, reverse1);
        joins.update(join_index, op1, op1b);

        true
    }

    /// Walks `op` along its horizontal run up to `pt` and returns the vertex pair to relink.
    fn horz_split_point(
        &mut self,
        mut op: usize,
        pt: IntPoint,
        left_to_right: bool,
        discard_left: bool,
    ) -> (usize, usize) {
        let insert_after = if left_to_right {
            loop {
                let next = self.points[self.points[op].next].pt;
                if next.x <= pt.x && next.x >= self.points[op].pt.x && next.y == pt.y {
                    op = self.points[op].next;
                } else {
                    break;
                }
            }
            if discard_left && self.points[op].pt.x != pt.x {
                op = self.points[op].next;
            }
            !discard_left
        } else {
            loop {
                let next = self.points[self.points[op].next].pt;
                if next.x >= pt.x && next.x <= self.points[op].pt.x && next.y == pt.y {
                    op = self.points[op].next;
                } else {
                    break;
                }
            }
            if !discard_left && self.points[op].pt.x != pt.x {
                op = self.points[op].next;
            }
            discard_left
        };

        let mut opb = self.points.dup(op, insert_after);
        if self.points[opb].pt != pt {
            op = opb;
            self.points[op].pt = pt;
            opb = self.points.dup(op, insert_after);
        }

        (op, opb)
    }

    fn join_horz(
        &mut self,
        op1: usize,
        op1b: usize,
        op2: usize,
        op2b: usize,
        pt: IntPoint,
        discard_left: bool,
    ) -> bool {
        let left_to_right1 = self.points[op1].pt.x <= self.points[op1b].pt.x;
        let left_to_right2 = self.points[op2].pt.x <= self.points[op2b].pt.x;

        // overlapping runs heading the same way cannot be joined
        if left_to_right1 == left_to_right2 {
            return false;
        }

        let (op1, op1b) = self.horz_split_point(op1, pt, left_to_right1, discard_left);
        let (op2, op2b) = self.horz_split_point(op2, pt, left_to_right2, discard_left);

        if left_to_right1 == discard_left {
            self.points[op1].prev = op2;
            self.points[op2].next = op1;
            self.points[op1b].next = op2b;
            self.points[op2b].prev = op1b;
        } else {
            self.points[op1].next = op2;
            self.points[op2].prev = op1;
            self.points[op1b].prev = op2b;
            self.points[op2b].next = op1b;
        }

        true
    }

    /// Re-parents contours that sat inside `old_rec` and now sit inside `new_rec`.
    fn fixup_first_lefts1(&mut self, old_rec: usize, new_rec: usize) {
        for i in 0..self.records.len() {
            let first_left = self.parse_first_left(self.records[i].first_left);

            if self.records[i].has_points()
                && first_left == old_rec
                && self.points
                    .poly2_contains_poly1(self.records[i].pts, self.records[new_rec].pts)
            {
                self.records[i].first_left = new_rec;
            }
        }
    }

    /// `inner_rec` was split off inside `outer_rec`; moves affected contours to the right owner.
    fn fixup_first_lefts2(&mut self, inner_rec: usize, outer_rec: usize) {
        let orfl = self.records[outer_rec].first_left;

        for i in 0..self.records.len() {
            if !self.records[i].has_points() || i == outer_rec || i == inner_rec {
                continue;
            }

            let first_left = self.parse_first_left(self.records[i].first_left);
            if first_left != orfl && first_left != inner_rec && first_left != outer_rec {
                continue;
            }

            let pts = self.records[i].pts;
            if self.points.poly2_contains_poly1(pts, self.records[inner_rec].pts) {
                self.records[i].first_left = inner_rec;
            } else if self.points.poly2_contains_poly1(pts, self.records[outer_rec].pts) {
                self.records[i].first_left = outer_rec;
            } else if self.records[i].first_left == inner_rec
                || self.records[i].first_left == outer_rec
            {
                self.records[i].first_left = orfl;
            }
        }
    }

    fn fixup_first_lefts3(&mut self, old_rec: usize, new_rec: usize) {
        for i in 0..self.records.len() {
            let first_left = self.parse_first_left(self.records[i].first_left);

            if self.records[i].has_points() && first_left == old_rec {
                self.records[i].first_left = new_rec;
            }
        }
    }

    /// Removes duplicate consecutive vertices of an open contour.
    fn fixup_out_polyline(&mut self, rec: usize) {
        let mut pp = self.records[rec].pts;
        let mut last_pp = self.points[pp].prev;

        while pp != last_pp {
            pp = self.points[pp].next;

            if self.points[pp].pt == self.points[self.points[pp].prev].pt {
                if pp == last_pp {
                    last_pp = self.points[pp].prev;
                }
                pp = self.points.unlink(pp);
            }
        }

        if pp == self.points[pp].prev {
            self.records[rec].pts = UNASSIGNED;
        }
    }

    /// Removes duplicate vertices and, unless kept, collinear ones from a closed contour.
    fn fixup_out_polygon(&mut self, rec: usize) {
        let preserve_collinear = self.preserve_collinear || self.is_strictly_simple;
        let mut last_ok = UNASSIGNED;
        let mut pp = self.records[rec].pts;

        self.records[rec].bottom_pt = UNASSIGNED;

        loop {
            let prev = self.points[pp].prev;
            let next = self.points[pp].next;

            if prev == pp || prev == next {
                self.records[rec].pts = UNASSIGNED;
                return;
            }

            let (pt_prev, pt, pt_next) = (self.points[prev].pt, self.points[pp].pt, self.points[next].pt);

            if pt == pt_next
                || pt == pt_prev
                || (points_collinear(&pt_prev, &pt, &pt_next, self.use_full_range)
                    && (!preserve_collinear || !pt.is_between(&pt_prev, &pt_next)))
            {
                last_ok = UNASSIGNED;
                pp = self.points.unlink(pp);
            } else if pp == last_ok {
                break;
            } else {
                if last_ok == UNASSIGNED {
                    last_ok = pp;
                }
                pp = next;
            }
        }

        self.records[rec].pts = pp;
    }

    pub fn fixup_contours(&mut self) {
        for i in 0..self.records.len() {
            if !self.records[i].has_points() {
                continue;
            }

            if self.records[i].is_open {
                self.fixup_out_polyline(i);
            } else {
                self.fixup_out_polygon(i);
            }
        }
    }

    /// Splits every closed contour at its self-touching vertices.
    pub fn do_simple_polygons(&mut self) {
        let mut i = 0;

        while i < self.records.len() {
            let rec = i;
            i += 1;

            let start = self.records[rec].pts;
            if start == UNASSIGNED || self.records[rec].is_open {
                continue;
            }

            let mut op = start;
            loop {
                let mut op2 = self.points[op].next;

                while op2 != self.records[rec].pts {
                    if self.points[op].pt == self.points[op2].pt
                        && self.points[op2].next != op
                        && self.points[op2].prev != op
                    {
                        let op3 = self.points[op].prev;
                        let op4 = self.points[op2].prev;

                        self.points[op].prev = op4;
                        self.points[op4].next = op;
                        self.points[op2].prev = op3;
                        self.points[op3].next = op2;

                        self.records[rec].pts = op;
                        let rec2 = self.create();
                        self.records[rec2].pts = op2;
                        self.update_out_pt_idxs(rec2);
                        self.classify_split(rec, rec2, false);
                        trace!(record = rec, split = rec2, "split at touching vertex");

                        op2 = op;
                    }

                    op2 = self.points[op2].next;
                }

                op = self.points[op].next;
                if op == self.records[rec].pts {
                    break;
                }
            }
        }
    }

    pub fn build_result(&self) -> Paths {
        self.records
            .iter()
            .filter(|rec| rec.has_points() && self.points.point_count(rec.pts) >= 2)
            .map(|rec| self.points.to_path(rec.pts))
            .collect()
    }

    fn fix_hole_linkage(&mut self, rec: usize) {
        let first_left = self.records[rec].first_left;
        if first_left == UNASSIGNED
            || (self.records[rec].is_hole != self.records[first_left].is_hole
                && self.records[first_left].has_points())
        {
            return;
        }

        let is_hole = self.records[rec].is_hole;
        let mut orfl = first_left;
        while orfl != UNASSIGNED
            && (self.records[orfl].is_hole == is_hole || !self.records[orfl].has_points())
        {
            orfl = self.records[orfl].first_left;
        }

        self.records[rec].first_left = orfl;
    }

    pub fn build_tree(&mut self) -> PolyTree {
        let mut result = PolyTree::new();

        for i in 0..self.records.len() {
            let count = self.points.point_count(self.records[i].pts);
            let min_count = if self.records[i].is_open { 2 } else { 3 };

            if count < min_count {
                continue;
            }

            self.fix_hole_linkage(i);
            let node = result.add_node(self.points.to_path(self.records[i].pts), self.records[i].is_open);
            self.records[i].poly_node = node;
        }

        for rec in &self.records {
            if rec.poly_node == UNASSIGNED {
                continue;
            }

            let parent = if rec.is_open || rec.first_left == UNASSIGNED {
                UNASSIGNED
            } else {
                self.records[rec.first_left].poly_node
            };

            result.add_child(parent, rec.poly_node);
        }

        result
    }
}
