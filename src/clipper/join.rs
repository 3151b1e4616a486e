use crate::clipper::constants::UNASSIGNED;
use crate::geometry::point::IntPoint;
use crate::utils::math::horz_segments_overlap;

/// Two output vertices to stitch after the sweep, plus a reference point on the shared edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinRecord {
    pub out_pt1: usize,
    pub out_pt2: usize,
    pub off_pt: IntPoint,
}

#[derive(Debug, Default)]
pub struct Join {
    joins: Vec<JoinRecord>,
    ghosts: Vec<JoinRecord>,
}

impl Join {
    pub fn new() -> Self {
        Self {
            joins: Vec::new(),
            ghosts: Vec::new(),
        }
    }

    pub fn add(&mut self, out_pt1: usize, out_pt2: usize, off_pt: IntPoint) {
        self.joins.push(JoinRecord {
            out_pt1,
            out_pt2,
            off_pt,
        });
    }

    /// Remembers a horizontal output run that a later horizontal might overlap.
    pub fn add_ghost(&mut self, out_pt: usize, off_pt: IntPoint) {
        self.ghosts.push(JoinRecord {
            out_pt1: out_pt,
            out_pt2: UNASSIGNED,
            off_pt,
        });
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    pub fn get(&self, index: usize) -> JoinRecord {
        self.joins[index]
    }

    pub fn update(&mut self, index: usize, out_pt1: usize, out_pt2: usize) {
        self.joins[index].out_pt1 = out_pt1;
        self.joins[index].out_pt2 = out_pt2;
    }

    pub fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }

    /// Ghost joins whose horizontal run overlaps `[left_x, right_x]`, as `(out_pt, off_pt)`.
    pub fn overlapping_ghosts(
        &self,
        out_pt_x: impl Fn(usize) -> i64,
        left_x: i64,
        right_x: i64,
    ) -> Vec<(usize, IntPoint)> {
        self.ghosts
            .iter()
            .filter(|ghost| {
                horz_segments_overlap(out_pt_x(ghost.out_pt1), ghost.off_pt.x, left_x, right_x)
            })
            .map(|ghost| (ghost.out_pt1, ghost.off_pt))
            .collect()
    }

    pub fn clear_ghosts(&mut self) {
        self.ghosts.clear();
    }

    pub fn clear(&mut self) {
        self.joins.clear();
        self.ghosts.clear();
    }
}
