use crate::{
    clipper::{
        clipper_base::ClipperBase,
        constants::UNASSIGNED,
        enums::{ClipType, Direction, PolyFillType, PolyType},
        intersect_node::IntersectNode,
        join::Join,
        out_rec::OutRec,
        poly_tree::PolyTree,
        t_edge::Edge,
    },
    clipper_config::ClipperConfig,
    error::{ClipperError, Result},
    geometry::{
        point::IntPoint,
        polygon::{Path, Paths},
    },
    utils::math::{horz_segments_overlap, segments_parallel},
};
use tracing::{debug, instrument, trace, warn};

/// Vatti sweep-line clipper over subject and clip path sets.
pub struct Clipper {
    base: ClipperBase,
    intersections: IntersectNode,
    joins: Join,
    out_rec: OutRec,
    maxima: Vec<i64>,
    clip_type: ClipType,
    subj_fill_type: PolyFillType,
    clip_fill_type: PolyFillType,
    reverse_solution: bool,
    strictly_simple: bool,
    using_poly_tree: bool,
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Clipper {
    pub fn new(reverse_solution: bool, strictly_simple: bool) -> Self {
        Self {
            base: ClipperBase::new(),
            intersections: IntersectNode::new(),
            joins: Join::new(),
            out_rec: OutRec::new(reverse_solution, strictly_simple),
            maxima: Vec::new(),
            clip_type: ClipType::Intersection,
            subj_fill_type: PolyFillType::EvenOdd,
            clip_fill_type: PolyFillType::EvenOdd,
            reverse_solution,
            strictly_simple,
            using_poly_tree: false,
        }
    }

    pub fn from_config(config: &ClipperConfig) -> Self {
        let mut result = Self::new(config.reverse_solution, config.strictly_simple);
        result.set_preserve_collinear(config.preserve_collinear);
        result
    }

    pub fn reverse_solution(&self) -> bool {
        self.reverse_solution
    }

    pub fn set_reverse_solution(&mut self, value: bool) {
        self.reverse_solution = value;
    }

    pub fn strictly_simple(&self) -> bool {
        self.strictly_simple
    }

    pub fn set_strictly_simple(&mut self, value: bool) {
        self.strictly_simple = value;
    }

    pub fn preserve_collinear(&self) -> bool {
        self.base.preserve_collinear
    }

    pub fn set_preserve_collinear(&mut self, value: bool) {
        self.base.preserve_collinear = value;
    }

    pub fn add_path(&mut self, path: &[IntPoint], poly_type: PolyType, closed: bool) -> Result<bool> {
        self.base.add_path(path, poly_type, closed)
    }

    pub fn add_paths(&mut self, paths: &[Path], poly_type: PolyType, closed: bool) -> Result<bool> {
        self.base.add_paths(paths, poly_type, closed)
    }

    /// Forgets every added path.
    pub fn clear(&mut self) {
        self.base.clear();
    }

    /// Clips closed paths into a flat list. `Ok(None)` means the sweep could not order
    /// an intersection set and gave up.
    #[instrument(skip_all, fields(clip_type = ?clip_type))]
    pub fn execute(
        &mut self,
        clip_type: ClipType,
        subj_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
    ) -> Result<Option<Paths>> {
        if self.base.has_open_paths {
            return Err(ClipperError::OpenPathsNeedTree);
        }

        self.prepare(clip_type, subj_fill_type, clip_fill_type, false);

        let result = if self.execute_internal()? {
            let paths = self.out_rec.build_result();
            debug!(records = self.out_rec.len(), paths = paths.len(), "clip finished");
            Some(paths)
        } else {
            None
        };

        self.dispose();

        Ok(result)
    }

    /// Clips into a [`PolyTree`]; required when open paths were added.
    #[instrument(skip_all, fields(clip_type = ?clip_type))]
    pub fn execute_tree(
        &mut self,
        clip_type: ClipType,
        subj_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
    ) -> Result<Option<PolyTree>> {
        self.prepare(clip_type, subj_fill_type, clip_fill_type, true);

        let result = if self.execute_internal()? {
            let tree = self.out_rec.build_tree();
            debug!(records = self.out_rec.len(), nodes = tree.total(), "clip finished");
            Some(tree)
        } else {
            None
        };

        self.dispose();

        Ok(result)
    }

    fn prepare(
        &mut self,
        clip_type: ClipType,
        subj_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
        using_poly_tree: bool,
    ) {
        self.clip_type = clip_type;
        self.subj_fill_type = subj_fill_type;
        self.clip_fill_type = clip_fill_type;
        self.using_poly_tree = using_poly_tree;

        debug!(
            ?subj_fill_type,
            ?clip_fill_type,
            minima = self.base.local_minima.len(),
            "clip started"
        );
    }

    fn dispose(&mut self) {
        self.out_rec = OutRec::new(self.reverse_solution, self.strictly_simple);
        self.joins.clear();
        self.intersections.clear();
        self.maxima.clear();
    }

    #[inline(always)]
    fn edge(&self, index: usize) -> &Edge {
        &self.base.t_edge[index]
    }

    #[inline(always)]
    fn edge_mut(&mut self, index: usize) -> &mut Edge {
        &mut self.base.t_edge[index]
    }

    fn execute_internal(&mut self) -> Result<bool> {
        self.base.reset();
        self.out_rec = OutRec::new(self.reverse_solution, self.strictly_simple).with_options(
            self.base.preserve_collinear,
            self.base.use_full_range,
            self.using_poly_tree,
        );
        self.joins.clear();
        self.maxima.clear();

        // nothing to sweep, the result is simply empty
        let Some(bot_y) = self.base.scanbeam.pop() else {
            return Ok(true);
        };
        self.insert_local_minima_into_ael(bot_y)?;

        while let Some(top_y) = self.base.scanbeam.pop() {
            self.process_horizontals()?;
            self.joins.clear_ghosts();

            if !self.process_intersections(top_y) {
                warn!(top_y, "intersections could not be ordered, clipping aborted");
                return Ok(false);
            }

            self.process_edges_at_top_of_scanbeam(top_y)?;
            self.insert_local_minima_into_ael(top_y)?;
        }

        self.out_rec.fix_orientations();

        if !self.joins.is_empty() {
            trace!(joins = self.joins.len(), "joining common edges");
            self.out_rec.join_common_edges(&mut self.joins);
        }

        self.out_rec.fixup_contours();

        if self.strictly_simple {
            self.out_rec.do_simple_polygons();
        }

        Ok(true)
    }

    fn update_edge_into_ael(&mut self, index: usize) -> Result<usize> {
        let result = self.base.t_edge.update_edge_into_ael(index)?;

        if !self.edge(result).is_horizontal() {
            self.base.scanbeam.insert(self.edge(result).top.y);
        }

        Ok(result)
    }

    fn insert_local_minima_into_ael(&mut self, bot_y: i64) -> Result<()> {
        while let Some(minimum) = self.base.local_minima.pop(bot_y) {
            let lb = minimum.left_bound;
            let rb = minimum.right_bound;
            let mut op1 = UNASSIGNED;

            if lb == UNASSIGNED {
                self.base.t_edge.insert_into_ael(rb, UNASSIGNED);
                self.set_winding_count(rb);
                if self.is_contributing(rb) {
                    op1 = self.add_out_pt(rb, self.edge(rb).bot);
                }
            } else if rb == UNASSIGNED {
                self.base.t_edge.insert_into_ael(lb, UNASSIGNED);
                self.set_winding_count(lb);
                if self.is_contributing(lb) {
                    op1 = self.add_out_pt(lb, self.edge(lb).bot);
                }
                self.base.scanbeam.insert(self.edge(lb).top.y);
            } else {
                self.base.t_edge.insert_into_ael(lb, UNASSIGNED);
                self.base.t_edge.insert_into_ael(rb, lb);
                self.set_winding_count(lb);
                let (wind_cnt, wind_cnt2) = (self.edge(lb).wind_cnt, self.edge(lb).wind_cnt2);
                self.edge_mut(rb).wind_cnt = wind_cnt;
                self.edge_mut(rb).wind_cnt2 = wind_cnt2;
                if self.is_contributing(lb) {
                    op1 = self.add_local_min_poly(lb, rb, self.edge(lb).bot);
                }
                self.base.scanbeam.insert(self.edge(lb).top.y);
            }

            if rb != UNASSIGNED {
                if self.edge(rb).is_horizontal() {
                    self.base.t_edge.add_to_sel(rb);
                    let next = self.edge(rb).next_in_lml;
                    if next != UNASSIGNED {
                        self.base.scanbeam.insert(self.edge(next).top.y);
                    }
                } else {
                    self.base.scanbeam.insert(self.edge(rb).top.y);
                }
            }

            if lb == UNASSIGNED || rb == UNASSIGNED {
                continue;
            }

            // output polygons sharing an edge are joined after the sweep
            if op1 != UNASSIGNED
                && self.edge(rb).is_horizontal()
                && self.joins.ghost_count() > 0
                && self.edge(rb).wind_delta != 0
            {
                let points = &self.out_rec.points;
                let ghosts = self.joins.overlapping_ghosts(
                    |op| points[op].pt.x,
                    self.edge(rb).bot.x,
                    self.edge(rb).top.x,
                );

                for (op, off_pt) in ghosts {
                    self.joins.add(op, op1, off_pt);
                }
            }

            let prev = self.edge(lb).prev_in_ael;
            if op1 != UNASSIGNED
                && self.edge(lb).is_assigned()
                && prev != UNASSIGNED
                && self.edge(prev).curr.x == self.edge(lb).bot.x
                && self.edge(prev).is_assigned()
                && segments_parallel(
                    &self.edge(prev).bot,
                    &self.edge(prev).top,
                    &self.edge(lb).curr,
                    &self.edge(lb).top,
                    self.base.use_full_range,
                )
                && self.edge(lb).wind_delta != 0
                && self.edge(prev).wind_delta != 0
            {
                let op2 = self.add_out_pt(prev, self.edge(lb).bot);
                self.joins.add(op1, op2, self.edge(lb).top);
            }

            if self.edge(lb).next_in_ael != rb {
                let prev = self.edge(rb).prev_in_ael;
                if op1 != UNASSIGNED
                    && self.edge(rb).is_assigned()
                    && self.edge(prev).is_assigned()
                    && segments_parallel(
                        &self.edge(prev).curr,
                        &self.edge(prev).top,
                        &self.edge(rb).curr,
                        &self.edge(rb).top,
                        self.base.use_full_range,
                    )
                    && self.edge(rb).wind_delta != 0
                    && self.edge(prev).wind_delta != 0
                {
                    let op2 = self.add_out_pt(prev, self.edge(rb).bot);
                    self.joins.add(op1, op2, self.edge(rb).top);
                }

                // intersect_edges expects its first edge to the right above the crossing
                let pt = self.edge(lb).curr;
                let mut e = self.edge(lb).next_in_ael;
                while e != UNASSIGNED && e != rb {
                    self.intersect_edges(rb, e, pt);
                    e = self.edge(e).next_in_ael;
                }
            }
        }

        Ok(())
    }

    fn fill_types(&self, poly_typ: PolyType) -> (PolyFillType, PolyFillType) {
        if poly_typ == PolyType::Subject {
            (self.subj_fill_type, self.clip_fill_type)
        } else {
            (self.clip_fill_type, self.subj_fill_type)
        }
    }

    fn is_even_odd_fill_type(&self, index: usize) -> bool {
        self.fill_types(self.edge(index).poly_typ).0 == PolyFillType::EvenOdd
    }

    fn is_even_odd_alt_fill_type(&self, index: usize) -> bool {
        self.fill_types(self.edge(index).poly_typ).1 == PolyFillType::EvenOdd
    }

    fn set_winding_count(&mut self, index: usize) {
        let poly_typ = self.edge(index).poly_typ;
        let wind_delta = self.edge(index).wind_delta;

        // nearest preceding closed edge of the same kind
        let mut e = self.edge(index).prev_in_ael;
        while e != UNASSIGNED && (self.edge(e).poly_typ != poly_typ || self.edge(e).is_open()) {
            e = self.edge(e).prev_in_ael;
        }

        let (wind_cnt, mut wind_cnt2, mut e) = if e == UNASSIGNED {
            let wind_cnt = if wind_delta == 0 {
                if self.fill_types(poly_typ).0 == PolyFillType::Negative {
                    -1
                } else {
                    1
                }
            } else {
                wind_delta
            };

            (wind_cnt, 0, self.base.t_edge.active)
        } else if wind_delta == 0 && self.clip_type != ClipType::Union {
            (1, self.edge(e).wind_cnt2, self.edge(e).next_in_ael)
        } else if self.is_even_odd_fill_type(index) {
            let wind_cnt = if wind_delta == 0 {
                // inside a subject polygon when an odd number of edges precede
                let mut inside = true;
                let mut e2 = self.edge(e).prev_in_ael;
                while e2 != UNASSIGNED {
                    if self.edge(e2).poly_typ == self.edge(e).poly_typ && !self.edge(e2).is_open() {
                        inside = !inside;
                    }
                    e2 = self.edge(e2).prev_in_ael;
                }

                if inside {
                    0
                } else {
                    1
                }
            } else {
                wind_delta
            };

            (wind_cnt, self.edge(e).wind_cnt2, self.edge(e).next_in_ael)
        } else {
            let prev = self.edge(e);
            let wind_cnt = if prev.wind_cnt * prev.wind_delta < 0 {
                // prev edge is heading towards zero, so we are outside it
                if prev.wind_cnt.abs() > 1 {
                    if prev.wind_delta * wind_delta < 0 {
                        prev.wind_cnt
                    } else {
                        prev.wind_cnt + wind_delta
                    }
                } else if wind_delta == 0 {
                    1
                } else {
                    wind_delta
                }
            } else if wind_delta == 0 {
                if prev.wind_cnt < 0 {
                    prev.wind_cnt - 1
                } else {
                    prev.wind_cnt + 1
                }
            } else if prev.wind_delta * wind_delta < 0 {
                prev.wind_cnt
            } else {
                prev.wind_cnt + wind_delta
            };

            (wind_cnt, prev.wind_cnt2, prev.next_in_ael)
        };

        if self.is_even_odd_alt_fill_type(index) {
            while e != index {
                if !self.edge(e).is_open() {
                    wind_cnt2 = if wind_cnt2 == 0 { 1 } else { 0 };
                }
                e = self.edge(e).next_in_ael;
            }
        } else {
            while e != index {
                wind_cnt2 += self.edge(e).wind_delta;
                e = self.edge(e).next_in_ael;
            }
        }

        self.edge_mut(index).wind_cnt = wind_cnt;
        self.edge_mut(index).wind_cnt2 = wind_cnt2;
    }

    fn is_contributing(&self, index: usize) -> bool {
        let edge = self.edge(index);
        let (fill_type, fill_type2) = self.fill_types(edge.poly_typ);

        let own_fill = match fill_type {
            PolyFillType::EvenOdd => !(edge.is_open() && edge.wind_cnt != 1),
            PolyFillType::NonZero => edge.wind_cnt.abs() == 1,
            PolyFillType::Positive => edge.wind_cnt == 1,
            PolyFillType::Negative => edge.wind_cnt == -1,
        };

        if !own_fill {
            return false;
        }

        let inside_other = match fill_type2 {
            PolyFillType::EvenOdd | PolyFillType::NonZero => edge.wind_cnt2 != 0,
            PolyFillType::Positive => edge.wind_cnt2 > 0,
            PolyFillType::Negative => edge.wind_cnt2 < 0,
        };

        match self.clip_type {
            ClipType::Intersection => inside_other,
            ClipType::Union => !inside_other,
            ClipType::Difference => {
                if edge.poly_typ == PolyType::Subject {
                    !inside_other
                } else {
                    inside_other
                }
            }
            ClipType::Xor => !edge.is_open() || !inside_other,
        }
    }

    fn set_hole_state(&mut self, index: usize, rec: usize) {
        let mut e2 = self.edge(index).prev_in_ael;
        let mut e_tmp = UNASSIGNED;

        while e2 != UNASSIGNED {
            if self.edge(e2).is_assigned() && !self.edge(e2).is_open() {
                if e_tmp == UNASSIGNED {
                    e_tmp = e2;
                } else if self.edge(e_tmp).out_idx == self.edge(e2).out_idx {
                    e_tmp = UNASSIGNED;
                }
            }
            e2 = self.edge(e2).prev_in_ael;
        }

        if e_tmp == UNASSIGNED {
            self.out_rec[rec].first_left = UNASSIGNED;
            self.out_rec[rec].is_hole = false;
        } else {
            let first_left = self.edge(e_tmp).out_idx;
            self.out_rec[rec].first_left = first_left;
            self.out_rec[rec].is_hole = !self.out_rec[first_left].is_hole;
        }
    }

    fn add_out_pt(&mut self, index: usize, pt: IntPoint) -> usize {
        if !self.edge(index).is_assigned() {
            let (rec, op) = self.out_rec.start(pt, self.edge(index).is_open());
            if !self.out_rec[rec].is_open {
                self.set_hole_state(index, rec);
            }
            self.edge_mut(index).out_idx = rec;

            return op;
        }

        let rec = self.edge(index).out_idx;
        let to_front = self.edge(index).side == Direction::Left;
        self.out_rec.add_point(rec, pt, to_front)
    }

    fn get_last_out_pt(&self, index: usize) -> usize {
        self.out_rec
            .last_point(self.edge(index).out_idx, self.edge(index).side)
    }

    fn add_local_min_poly(&mut self, e1: usize, e2: usize, pt: IntPoint) -> usize {
        let (result, e, prev_e) =
            if self.edge(e2).is_horizontal() || self.edge(e1).dx > self.edge(e2).dx {
                let result = self.add_out_pt(e1, pt);
                self.edge_mut(e2).out_idx = self.edge(e1).out_idx;
                self.edge_mut(e1).side = Direction::Left;
                self.edge_mut(e2).side = Direction::Right;
                let prev_e = if self.edge(e1).prev_in_ael == e2 {
                    self.edge(e2).prev_in_ael
                } else {
                    self.edge(e1).prev_in_ael
                };
                (result, e1, prev_e)
            } else {
                let result = self.add_out_pt(e2, pt);
                self.edge_mut(e1).out_idx = self.edge(e2).out_idx;
                self.edge_mut(e1).side = Direction::Right;
                self.edge_mut(e2).side = Direction::Left;
                let prev_e = if self.edge(e2).prev_in_ael == e1 {
                    self.edge(e1).prev_in_ael
                } else {
                    self.edge(e2).prev_in_ael
                };
                (result, e2, prev_e)
            };

        if prev_e != UNASSIGNED
            && self.edge(prev_e).is_assigned()
            && self.edge(prev_e).top.y < pt.y
            && self.edge(e).top.y < pt.y
        {
            let x_prev = self.edge(prev_e).top_x(pt.y);
            let x_e = self.edge(e).top_x(pt.y);

            if x_prev == x_e
                && !self.edge(e).is_open()
                && !self.edge(prev_e).is_open()
                && segments_parallel(
                    &IntPoint::new(x_prev, pt.y),
                    &self.edge(prev_e).top,
                    &IntPoint::new(x_e, pt.y),
                    &self.edge(e).top,
                    self.base.use_full_range,
                )
            {
                let out_pt = self.add_out_pt(prev_e, pt);
                self.joins.add(result, out_pt, self.edge(e).top);
            }
        }

        result
    }

    fn add_local_max_poly(&mut self, e1: usize, e2: usize, pt: IntPoint) {
        self.add_out_pt(e1, pt);
        if self.edge(e2).is_open() {
            self.add_out_pt(e2, pt);
        }

        let idx1 = self.edge(e1).out_idx;
        let idx2 = self.edge(e2).out_idx;

        if idx1 == idx2 {
            self.edge_mut(e1).out_idx = UNASSIGNED;
            self.edge_mut(e2).out_idx = UNASSIGNED;
        } else if idx1 < idx2 {
            self.append_polygon(e1, e2);
        } else {
            self.append_polygon(e2, e1);
        }
    }

    fn append_polygon(&mut self, e1: usize, e2: usize) {
        let ok_idx = self.edge(e1).out_idx;
        let obsolete_idx = self.edge(e2).out_idx;
        let side = self.edge(e1).side;

        self.out_rec
            .append(ok_idx, obsolete_idx, side, self.edge(e2).side);

        self.edge_mut(e1).out_idx = UNASSIGNED;
        self.edge_mut(e2).out_idx = UNASSIGNED;

        let mut e = self.base.t_edge.active;
        while e != UNASSIGNED {
            if self.edge(e).out_idx == obsolete_idx {
                self.edge_mut(e).out_idx = ok_idx;
                self.edge_mut(e).side = side;
                break;
            }
            e = self.edge(e).next_in_ael;
        }
    }

    fn wind_weight(fill_type: PolyFillType, wind_cnt: i32) -> i32 {
        match fill_type {
            PolyFillType::Positive => wind_cnt,
            PolyFillType::Negative => -wind_cnt,
            _ => wind_cnt.abs(),
        }
    }

    fn swap_sides_and_indexes(&mut self, e1: usize, e2: usize) {
        self.base.t_edge.swap_sides(e1, e2);
        self.base.t_edge.swap_poly_indexes(e1, e2);
    }

    /// An open edge crossing anything toggles its own output on or off.
    fn intersect_open_edges(&mut self, e1: usize, e2: usize, pt: IntPoint) {
        let edge1 = self.edge(e1).clone();
        let edge2 = self.edge(e2).clone();
        let e1_contributing = edge1.is_assigned();
        let e2_contributing = edge2.is_assigned();

        if edge1.is_open() && edge2.is_open() {
            return;
        }

        if edge1.poly_typ == edge2.poly_typ
            && edge1.wind_delta != edge2.wind_delta
            && self.clip_type == ClipType::Union
        {
            if edge1.is_open() {
                if e2_contributing {
                    self.add_out_pt(e1, pt);
                    if e1_contributing {
                        self.edge_mut(e1).out_idx = UNASSIGNED;
                    }
                }
            } else if e1_contributing {
                self.add_out_pt(e2, pt);
                if e2_contributing {
                    self.edge_mut(e2).out_idx = UNASSIGNED;
                }
            }
        } else if edge1.poly_typ != edge2.poly_typ {
            if edge1.is_open()
                && edge2.wind_cnt.abs() == 1
                && (self.clip_type != ClipType::Union || edge2.wind_cnt2 == 0)
            {
                self.add_out_pt(e1, pt);
                if e1_contributing {
                    self.edge_mut(e1).out_idx = UNASSIGNED;
                }
            } else if edge2.is_open()
                && edge1.wind_cnt.abs() == 1
                && (self.clip_type != ClipType::Union || edge1.wind_cnt2 == 0)
            {
                self.add_out_pt(e2, pt);
                if e2_contributing {
                    self.edge_mut(e2).out_idx = UNASSIGNED;
                }
            }
        }
    }

    /// Crossing of `e1` and `e2` at `pt`; `e1` lies right of `e2` above the crossing.
    fn intersect_edges(&mut self, e1: usize, e2: usize, pt: IntPoint) {
        if self.edge(e1).is_open() || self.edge(e2).is_open() {
            self.intersect_open_edges(e1, e2, pt);
            return;
        }

        let e1_contributing = self.edge(e1).is_assigned();
        let e2_contributing = self.edge(e2).is_assigned();

        if self.edge(e1).poly_typ == self.edge(e2).poly_typ {
            if self.is_even_odd_fill_type(e1) {
                let wind_cnt = self.edge(e1).wind_cnt;
                self.edge_mut(e1).wind_cnt = self.edge(e2).wind_cnt;
                self.edge_mut(e2).wind_cnt = wind_cnt;
            } else {
                let (d1, d2) = (self.edge(e1).wind_delta, self.edge(e2).wind_delta);

                let edge1 = self.edge_mut(e1);
                if edge1.wind_cnt + d2 == 0 {
                    edge1.wind_cnt = -edge1.wind_cnt;
                } else {
                    edge1.wind_cnt += d2;
                }

                let edge2 = self.edge_mut(e2);
                if edge2.wind_cnt - d1 == 0 {
                    edge2.wind_cnt = -edge2.wind_cnt;
                } else {
                    edge2.wind_cnt -= d1;
                }
            }
        } else {
            let (d1, d2) = (self.edge(e1).wind_delta, self.edge(e2).wind_delta);

            if !self.is_even_odd_fill_type(e2) {
                self.edge_mut(e1).wind_cnt2 += d2;
            } else {
                let cnt = self.edge(e1).wind_cnt2;
                self.edge_mut(e1).wind_cnt2 = if cnt == 0 { 1 } else { 0 };
            }

            if !self.is_even_odd_fill_type(e1) {
                self.edge_mut(e2).wind_cnt2 -= d1;
            } else {
                let cnt = self.edge(e2).wind_cnt2;
                self.edge_mut(e2).wind_cnt2 = if cnt == 0 { 1 } else { 0 };
            }
        }

        let (e1_fill, e1_fill2) = self.fill_types(self.edge(e1).poly_typ);
        let (e2_fill, e2_fill2) = self.fill_types(self.edge(e2).poly_typ);
        let e1_wc = Self::wind_weight(e1_fill, self.edge(e1).wind_cnt);
        let e2_wc = Self::wind_weight(e2_fill, self.edge(e2).wind_cnt);
        let same_type = self.edge(e1).poly_typ == self.edge(e2).poly_typ;

        if e1_contributing && e2_contributing {
            if (e1_wc != 0 && e1_wc != 1)
                || (e2_wc != 0 && e2_wc != 1)
                || (!same_type && self.clip_type != ClipType::Xor)
            {
                self.add_local_max_poly(e1, e2, pt);
            } else {
                self.add_out_pt(e1, pt);
                self.add_out_pt(e2, pt);
                self.swap_sides_and_indexes(e1, e2);
            }
        } else if e1_contributing {
            if e2_wc == 0 || e2_wc == 1 {
                self.add_out_pt(e1, pt);
                self.swap_sides_and_indexes(e1, e2);
            }
        } else if e2_contributing {
            if e1_wc == 0 || e1_wc == 1 {
                self.add_out_pt(e2, pt);
                self.swap_sides_and_indexes(e1, e2);
            }
        } else if (e1_wc == 0 || e1_wc == 1) && (e2_wc == 0 || e2_wc == 1) {
            // neither edge is contributing yet
            let e1_wc2 = Self::wind_weight(e1_fill2, self.edge(e1).wind_cnt2);
            let e2_wc2 = Self::wind_weight(e2_fill2, self.edge(e2).wind_cnt2);

            if !same_type {
                self.add_local_min_poly(e1, e2, pt);
            } else if e1_wc == 1 && e2_wc == 1 {
                let starts = match self.clip_type {
                    ClipType::Intersection => e1_wc2 > 0 && e2_wc2 > 0,
                    ClipType::Union => e1_wc2 <= 0 && e2_wc2 <= 0,
                    ClipType::Difference => {
                        let is_clip = self.edge(e1).poly_typ == PolyType::Clip;
                        (is_clip && e1_wc2 > 0 && e2_wc2 > 0)
                            || (!is_clip && e1_wc2 <= 0 && e2_wc2 <= 0)
                    }
                    ClipType::Xor => true,
                };

                if starts {
                    self.add_local_min_poly(e1, e2, pt);
                }
            } else {
                self.base.t_edge.swap_sides(e1, e2);
            }
        }
    }

    fn process_horizontals(&mut self) -> Result<()> {
        while let Some(horz_edge) = self.base.t_edge.pop_from_sel() {
            self.process_horizontal(horz_edge)?;
        }

        Ok(())
    }

    /// Joins the last output point of `horz_edge` with every queued horizontal it overlaps.
    fn join_overlapping_horizontals(&mut self, horz_edge: usize, op1: usize) {
        let (bot_x, top_x) = (self.edge(horz_edge).bot.x, self.edge(horz_edge).top.x);
        let mut e_next_horz = self.base.t_edge.sorted;

        while e_next_horz != UNASSIGNED {
            let next = self.edge(e_next_horz);
            if next.is_assigned()
                && horz_segments_overlap(bot_x, top_x, next.bot.x, next.top.x)
            {
                let op2 = self.get_last_out_pt(e_next_horz);
                self.joins.add(op2, op1, self.edge(e_next_horz).top);
            }
            e_next_horz = self.edge(e_next_horz).next_in_sel;
        }
    }

    /// Maxima this horizontal will pass, in its direction of travel.
    fn maxima_ahead(&self, horz_edge: usize, e_last_horz: usize, dir: Direction) -> Vec<i64> {
        let bot_x = self.edge(horz_edge).bot.x;
        let last_top_x = self.edge(e_last_horz).top.x;

        if dir == Direction::Right {
            match self.maxima.iter().position(|&x| x > bot_x) {
                Some(i) if self.maxima[i] < last_top_x => self.maxima[i..].to_vec(),
                _ => Vec::new(),
            }
        } else {
            match self.maxima.iter().rposition(|&x| x <= bot_x) {
                Some(i) if self.maxima[i] > last_top_x => {
                    self.maxima[..=i].iter().rev().copied().collect()
                }
                _ => Vec::new(),
            }
        }
    }

    fn process_horizontal(&mut self, mut horz_edge: usize) -> Result<()> {
        let is_open = self.edge(horz_edge).is_open();
        let (mut dir, mut horz_left, mut horz_right) = self.base.t_edge.horz_direction(horz_edge);

        let mut e_last_horz = horz_edge;
        loop {
            let next = self.edge(e_last_horz).next_in_lml;
            if next == UNASSIGNED || !self.edge(next).is_horizontal() {
                break;
            }
            e_last_horz = next;
        }

        let e_max_pair = if self.edge(e_last_horz).next_in_lml == UNASSIGNED {
            self.base.t_edge.get_maxima_pair(e_last_horz)
        } else {
            UNASSIGNED
        };

        let maxima = self.maxima_ahead(horz_edge, e_last_horz, dir);
        let mut max_pos = 0;
        let mut op1 = UNASSIGNED;

        loop {
            let is_last_horz = horz_edge == e_last_horz;
            let mut e = self.base.t_edge.get_next_in_ael(horz_edge, dir);

            while e != UNASSIGNED {
                // extra vertices where maxima touch the horizontal keep the output simple
                let curr_x = self.edge(e).curr.x;
                while max_pos < maxima.len()
                    && (if dir == Direction::Right {
                        maxima[max_pos] < curr_x
                    } else {
                        maxima[max_pos] > curr_x
                    })
                {
                    if self.edge(horz_edge).is_assigned() && !is_open {
                        let pt = IntPoint::new(maxima[max_pos], self.edge(horz_edge).bot.y);
                        self.add_out_pt(horz_edge, pt);
                    }
                    max_pos += 1;
                }

                if (dir == Direction::Right && curr_x > horz_right)
                    || (dir == Direction::Left && curr_x < horz_left)
                {
                    break;
                }

                // end of an intermediate horizontal; smaller dx lies to the right above it
                let next_in_lml = self.edge(horz_edge).next_in_lml;
                if curr_x == self.edge(horz_edge).top.x
                    && next_in_lml != UNASSIGNED
                    && self.edge(e).dx < self.edge(next_in_lml).dx
                {
                    break;
                }

                if self.edge(horz_edge).is_assigned() && !is_open {
                    op1 = self.add_out_pt(horz_edge, self.edge(e).curr);
                    self.join_overlapping_horizontals(horz_edge, op1);
                    self.joins.add_ghost(op1, self.edge(horz_edge).bot);
                }

                if e == e_max_pair && is_last_horz {
                    if self.edge(horz_edge).is_assigned() {
                        self.add_local_max_poly(horz_edge, e_max_pair, self.edge(horz_edge).top);
                    }
                    self.base.t_edge.delete_from_ael(horz_edge);
                    self.base.t_edge.delete_from_ael(e_max_pair);
                    return Ok(());
                }

                let pt = IntPoint::new(curr_x, self.edge(horz_edge).curr.y);
                if dir == Direction::Right {
                    self.intersect_edges(horz_edge, e, pt);
                } else {
                    self.intersect_edges(e, horz_edge, pt);
                }

                let e_next = self.base.t_edge.get_next_in_ael(e, dir);
                self.base.t_edge.swap_positions_in_ael(horz_edge, e);
                e = e_next;
            }

            let next_in_lml = self.edge(horz_edge).next_in_lml;
            if next_in_lml == UNASSIGNED || !self.edge(next_in_lml).is_horizontal() {
                break;
            }

            horz_edge = self.update_edge_into_ael(horz_edge)?;
            if self.edge(horz_edge).is_assigned() {
                self.add_out_pt(horz_edge, self.edge(horz_edge).bot);
            }
            (dir, horz_left, horz_right) = self.base.t_edge.horz_direction(horz_edge);
        }

        if self.edge(horz_edge).is_assigned() && op1 == UNASSIGNED {
            op1 = self.get_last_out_pt(horz_edge);
            self.join_overlapping_horizontals(horz_edge, op1);
            self.joins.add_ghost(op1, self.edge(horz_edge).top);
        }

        if self.edge(horz_edge).next_in_lml == UNASSIGNED {
            if self.edge(horz_edge).is_assigned() {
                self.add_out_pt(horz_edge, self.edge(horz_edge).top);
            }
            self.base.t_edge.delete_from_ael(horz_edge);
            return Ok(());
        }

        if !self.edge(horz_edge).is_assigned() {
            self.update_edge_into_ael(horz_edge)?;
            return Ok(());
        }

        let op1 = self.add_out_pt(horz_edge, self.edge(horz_edge).top);
        let horz_edge = self.update_edge_into_ael(horz_edge)?;
        if self.edge(horz_edge).is_open() {
            return Ok(());
        }

        // the promoted edge is no longer horizontal
        let bot = self.edge(horz_edge).bot;
        let top = self.edge(horz_edge).top;
        let neighbours = [
            self.edge(horz_edge).prev_in_ael,
            self.edge(horz_edge).next_in_ael,
        ];

        for neighbour in neighbours {
            if neighbour == UNASSIGNED {
                continue;
            }

            let other = self.edge(neighbour);
            if other.curr == bot
                && !other.is_open()
                && other.is_assigned()
                && other.curr.y > other.top.y
                && self
                    .base
                    .t_edge
                    .slopes_equal(horz_edge, neighbour, self.base.use_full_range)
            {
                let op2 = self.add_out_pt(neighbour, bot);
                self.joins.add(op1, op2, top);
                break;
            }
        }

        Ok(())
    }

    fn process_intersections(&mut self, top_y: i64) -> bool {
        if self.base.t_edge.active == UNASSIGNED {
            return true;
        }

        self.build_intersect_list(top_y);

        let succeeded = match self.intersections.len() {
            0 => true,
            1 => {
                self.process_intersect_list();
                true
            }
            _ if self.fixup_intersection_order() => {
                self.process_intersect_list();
                true
            }
            _ => false,
        };

        self.intersections.clear();
        self.base.t_edge.sorted = UNASSIGNED;

        succeeded
    }

    fn build_intersect_list(&mut self, top_y: i64) {
        self.base.t_edge.copy_ael_to_sel_at(top_y);

        // bubble sort by top X, every swap is a crossing
        loop {
            let mut is_modified = false;
            let mut e = self.base.t_edge.sorted;

            while self.edge(e).next_in_sel != UNASSIGNED {
                let e_next = self.edge(e).next_in_sel;

                if self.edge(e).curr.x > self.edge(e_next).curr.x {
                    let mut pt = self.base.t_edge.intersect_point(e, e_next);
                    if pt.y < top_y {
                        pt = IntPoint::new(self.edge(e).top_x(top_y), top_y);
                    }

                    self.intersections.add(e, e_next, pt);
                    self.base.t_edge.swap_positions_in_sel(e, e_next);
                    is_modified = true;
                } else {
                    e = e_next;
                }
            }

            // the last edge is in place, drop it from the next pass
            let prev = self.edge(e).prev_in_sel;
            if prev == UNASSIGNED {
                break;
            }
            self.edge_mut(prev).next_in_sel = UNASSIGNED;

            if !is_modified {
                break;
            }
        }

        self.base.t_edge.sorted = UNASSIGNED;
    }

    fn edges_adjacent(&self, node_index: usize) -> bool {
        let (e1, e2) = self.intersections.edges(node_index);

        self.edge(e1).next_in_sel == e2 || self.edge(e1).prev_in_sel == e2
    }

    /// Orders crossings so that each one swaps edges adjacent at that moment.
    fn fixup_intersection_order(&mut self) -> bool {
        self.base.t_edge.copy_ael_to_sel();
        self.intersections.sort();

        let count = self.intersections.len();
        for i in 0..count {
            if !self.edges_adjacent(i) {
                let mut j = i + 1;
                while j < count && !self.edges_adjacent(j) {
                    j += 1;
                }
                if j == count {
                    return false;
                }
                self.intersections.swap(i, j);
            }

            let (e1, e2) = self.intersections.edges(i);
            self.base.t_edge.swap_positions_in_sel(e1, e2);
        }

        true
    }

    fn process_intersect_list(&mut self) {
        for i in 0..self.intersections.len() {
            let node = self.intersections.get(i);
            self.intersect_edges(node.edge1, node.edge2, node.pt);
            self.base.t_edge.swap_positions_in_ael(node.edge1, node.edge2);
        }
    }

    fn do_maxima(&mut self, e: usize) -> Result<()> {
        let e_max_pair = self.base.t_edge.get_maxima_pair_ex(e);

        if e_max_pair == UNASSIGNED {
            if self.edge(e).is_assigned() {
                self.add_out_pt(e, self.edge(e).top);
            }
            self.base.t_edge.delete_from_ael(e);
            return Ok(());
        }

        let top = self.edge(e).top;
        let mut e_next = self.edge(e).next_in_ael;
        while e_next != UNASSIGNED && e_next != e_max_pair {
            self.intersect_edges(e, e_next, top);
            self.base.t_edge.swap_positions_in_ael(e, e_next);
            e_next = self.edge(e).next_in_ael;
        }

        let e_assigned = self.edge(e).is_assigned();
        let pair_assigned = self.edge(e_max_pair).is_assigned();

        if !e_assigned && !pair_assigned {
            self.base.t_edge.delete_from_ael(e);
            self.base.t_edge.delete_from_ael(e_max_pair);
        } else if e_assigned && pair_assigned {
            self.add_local_max_poly(e, e_max_pair, top);
            self.base.t_edge.delete_from_ael(e);
            self.base.t_edge.delete_from_ael(e_max_pair);
        } else if self.edge(e).is_open() {
            if e_assigned {
                self.add_out_pt(e, top);
                self.edge_mut(e).out_idx = UNASSIGNED;
            }
            self.base.t_edge.delete_from_ael(e);

            if pair_assigned {
                self.add_out_pt(e_max_pair, top);
                self.edge_mut(e_max_pair).out_idx = UNASSIGNED;
            }
            self.base.t_edge.delete_from_ael(e_max_pair);
        } else {
            return Err(ClipperError::MaximaError);
        }

        Ok(())
    }

    fn process_edges_at_top_of_scanbeam(&mut self, top_y: i64) -> Result<()> {
        let mut e = self.base.t_edge.active;

        while e != UNASSIGNED {
            // maxima are handled like bent horizontals, except those paired with a real horizontal
            let mut is_maxima_edge = self.base.t_edge.is_maxima(e, top_y);
            if is_maxima_edge {
                let e_max_pair = self.base.t_edge.get_maxima_pair_ex(e);
                is_maxima_edge = e_max_pair == UNASSIGNED || !self.edge(e_max_pair).is_horizontal();
            }

            if is_maxima_edge {
                if self.strictly_simple {
                    self.maxima.push(self.edge(e).top.x);
                }

                let e_prev = self.edge(e).prev_in_ael;
                self.do_maxima(e)?;
                e = if e_prev == UNASSIGNED {
                    self.base.t_edge.active
                } else {
                    self.edge(e_prev).next_in_ael
                };
                continue;
            }

            let next_in_lml = self.edge(e).next_in_lml;
            if self.base.t_edge.is_intermediate(e, top_y) && self.edge(next_in_lml).is_horizontal() {
                e = self.update_edge_into_ael(e)?;
                if self.edge(e).is_assigned() {
                    self.add_out_pt(e, self.edge(e).bot);
                }
                self.base.t_edge.add_to_sel(e);
            } else {
                let x = self.edge(e).top_x(top_y);
                self.edge_mut(e).curr = IntPoint::new(x, top_y);
            }

            // touching edges both get a vertex here
            if self.strictly_simple {
                let e_prev = self.edge(e).prev_in_ael;
                if self.edge(e).is_assigned()
                    && !self.edge(e).is_open()
                    && e_prev != UNASSIGNED
                    && self.edge(e_prev).is_assigned()
                    && self.edge(e_prev).curr.x == self.edge(e).curr.x
                    && !self.edge(e_prev).is_open()
                {
                    let pt = self.edge(e).curr;
                    let op = self.add_out_pt(e_prev, pt);
                    let op2 = self.add_out_pt(e, pt);
                    self.joins.add(op, op2, pt);
                }
            }

            e = self.edge(e).next_in_ael;
        }

        self.maxima.sort_unstable();
        self.process_horizontals()?;
        self.maxima.clear();

        // promote intermediate vertices
        let mut e = self.base.t_edge.active;
        while e != UNASSIGNED {
            if self.base.t_edge.is_intermediate(e, top_y) {
                let op = if self.edge(e).is_assigned() {
                    self.add_out_pt(e, self.edge(e).top)
                } else {
                    UNASSIGNED
                };
                e = self.update_edge_into_ael(e)?;

                if op != UNASSIGNED && !self.edge(e).is_open() {
                    self.join_promoted_edge(e, op);
                }
            }

            e = self.edge(e).next_in_ael;
        }

        Ok(())
    }

    /// Queues a join when a promoted edge overlaps a collinear contributing neighbour.
    fn join_promoted_edge(&mut self, e: usize, op: usize) {
        let edge = self.edge(e);
        let (bot, top, curr) = (edge.bot, edge.top, edge.curr);

        for neighbour in [edge.prev_in_ael, edge.next_in_ael] {
            if neighbour == UNASSIGNED {
                continue;
            }

            let other = self.edge(neighbour);
            if other.curr == bot
                && other.is_assigned()
                && other.curr.y > other.top.y
                && !other.is_open()
                && segments_parallel(&curr, &top, &other.curr, &other.top, self.base.use_full_range)
            {
                let op2 = self.add_out_pt(neighbour, bot);
                self.joins.add(op, op2, top);
                return;
            }
        }
    }
}
