use crate::clipper::clipper::Clipper;
use crate::clipper::constants::{
    DEFAULT_ARC_TOLERANCE, DEFAULT_MITER_LIMIT, NEAR_ZERO, OFFSET_OUTER_MARGIN, TWO_PI,
};
use crate::clipper::enums::{ClipType, EndType, JoinType, PolyFillType, PolyType};
use crate::clipper::poly_tree::PolyTree;
use crate::clipper_config::ClipperConfig;
use crate::error::Result;
use crate::geometry::bound_rect::get_bounds;
use crate::geometry::point::{DoublePoint, IntPoint};
use crate::geometry::polygon::{orientation, Path, Paths};
use crate::utils::round::round_to_i64;
use std::f64::consts::PI;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
struct OffsetPath {
    contour: Path,
    join_type: JoinType,
    end_type: EndType,
}

/// Inflates or deflates closed polygons and open polylines by a fixed distance.
#[derive(Debug)]
pub struct ClipperOffset {
    paths: Vec<OffsetPath>,
    lowest: Option<(usize, usize)>,
    pub miter_limit: f64,
    pub arc_tolerance: f64,
    src_poly: Path,
    dest_poly: Path,
    dest_polys: Paths,
    normals: Vec<DoublePoint>,
    delta: f64,
    sin_a: f64,
    sin: f64,
    cos: f64,
    miter_lim: f64,
    steps_per_rad: f64,
}

impl Default for ClipperOffset {
    fn default() -> Self {
        Self::new(DEFAULT_MITER_LIMIT, DEFAULT_ARC_TOLERANCE)
    }
}

impl ClipperOffset {
    pub fn new(miter_limit: f64, arc_tolerance: f64) -> Self {
        Self {
            paths: Vec::new(),
            lowest: None,
            miter_limit,
            arc_tolerance,
            src_poly: Vec::new(),
            dest_poly: Vec::new(),
            dest_polys: Vec::new(),
            normals: Vec::new(),
            delta: 0.0,
            sin_a: 0.0,
            sin: 0.0,
            cos: 0.0,
            miter_lim: 0.0,
            steps_per_rad: 0.0,
        }
    }

    pub fn from_config(config: &ClipperConfig) -> Self {
        Self::new(config.miter_limit, config.arc_tolerance)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.lowest = None;
    }

    /// Queues a path. Duplicate vertices are dropped and closed polygons need at least three.
    pub fn add_path(&mut self, path: &[IntPoint], join_type: JoinType, end_type: EndType) {
        if path.is_empty() {
            return;
        }

        let mut high = path.len() - 1;
        if end_type.is_closed() {
            while high > 0 && path[0] == path[high] {
                high -= 1;
            }
        }

        let mut contour: Path = Vec::with_capacity(high + 1);
        contour.push(path[0]);
        let mut lowest = 0;

        for pt in &path[1..=high] {
            let last = contour[contour.len() - 1];
            if last == *pt {
                continue;
            }

            contour.push(*pt);
            let low = contour[lowest];
            if pt.y > low.y || (pt.y == low.y && pt.x < low.x) {
                lowest = contour.len() - 1;
            }
        }

        if end_type == EndType::ClosedPolygon && contour.len() < 3 {
            return;
        }

        let is_polygon = end_type == EndType::ClosedPolygon;
        let candidate = contour[lowest];

        self.paths.push(OffsetPath {
            contour,
            join_type,
            end_type,
        });

        if !is_polygon {
            return;
        }

        let index = self.paths.len() - 1;
        let is_lower = match self.lowest {
            None => true,
            Some((path_index, pt_index)) => {
                let pt = self.paths[path_index].contour[pt_index];
                candidate.y > pt.y || (candidate.y == pt.y && candidate.x < pt.x)
            }
        };

        if is_lower {
            self.lowest = Some((index, lowest));
        }
    }

    pub fn add_paths(&mut self, paths: &[Path], join_type: JoinType, end_type: EndType) {
        for path in paths {
            self.add_path(path, join_type, end_type);
        }
    }

    /// The polygon owning the lowest vertex decides which winding counts as outer.
    fn fix_orientations(&mut self) {
        let lowest_is_negative = self
            .lowest
            .is_some_and(|(index, _)| !orientation(&self.paths[index].contour));

        for path in self.paths.iter_mut() {
            let should_reverse = if lowest_is_negative {
                path.end_type == EndType::ClosedPolygon
                    || (path.end_type == EndType::ClosedLine && orientation(&path.contour))
            } else {
                path.end_type == EndType::ClosedLine && !orientation(&path.contour)
            };

            if should_reverse {
                path.contour.reverse();
            }
        }
    }

    #[instrument(skip_all, fields(delta = delta))]
    pub fn execute(&mut self, delta: f64) -> Result<Paths> {
        let mut clipper = self.prepare_clipper(delta)?;

        let result = if delta > 0.0 {
            clipper
                .execute(ClipType::Union, PolyFillType::Positive, PolyFillType::Positive)?
                .unwrap_or_default()
        } else {
            let mut paths = clipper
                .execute(ClipType::Union, PolyFillType::Negative, PolyFillType::Negative)?
                .unwrap_or_default();
            if !paths.is_empty() {
                paths.remove(0);
            }
            paths
        };

        debug!(paths = result.len(), "offset finished");

        Ok(result)
    }

    #[instrument(skip_all, fields(delta = delta))]
    pub fn execute_tree(&mut self, delta: f64) -> Result<PolyTree> {
        let mut clipper = self.prepare_clipper(delta)?;

        let result = if delta > 0.0 {
            clipper
                .execute_tree(ClipType::Union, PolyFillType::Positive, PolyFillType::Positive)?
                .unwrap_or_default()
        } else {
            let mut tree = clipper
                .execute_tree(ClipType::Union, PolyFillType::Negative, PolyFillType::Negative)?
                .unwrap_or_default();
            tree.promote_outer();
            tree
        };

        debug!(nodes = result.total(), "offset finished");

        Ok(result)
    }

    /// Offsets every path and loads the raw result into a fresh clipper for cleanup.
    fn prepare_clipper(&mut self, delta: f64) -> Result<Clipper> {
        self.fix_orientations();
        self.do_offset(delta);

        debug!(
            sources = self.paths.len(),
            offsets = self.dest_polys.len(),
            "raw offset built"
        );

        let mut clipper = Clipper::default();
        clipper.add_paths(&self.dest_polys, PolyType::Subject, true)?;

        if delta <= 0.0 {
            let outer = get_bounds(&self.dest_polys).to_path(OFFSET_OUTER_MARGIN);
            clipper.add_path(&outer, PolyType::Subject, true)?;
            clipper.set_reverse_solution(true);
        }

        self.dest_polys.clear();

        Ok(clipper)
    }

    fn do_offset(&mut self, delta: f64) {
        self.dest_polys.clear();
        self.delta = delta;

        if delta.abs() < NEAR_ZERO {
            self.dest_polys.extend(
                self.paths
                    .iter()
                    .filter(|path| path.end_type == EndType::ClosedPolygon)
                    .map(|path| path.contour.clone()),
            );
            return;
        }

        self.miter_lim = if self.miter_limit > 2.0 {
            2.0 / (self.miter_limit * self.miter_limit)
        } else {
            0.5
        };

        let abs_delta = delta.abs();
        let tolerance = if self.arc_tolerance <= 0.0 {
            DEFAULT_ARC_TOLERANCE
        } else if self.arc_tolerance > abs_delta * DEFAULT_ARC_TOLERANCE {
            abs_delta * DEFAULT_ARC_TOLERANCE
        } else {
            self.arc_tolerance
        };

        let steps = (PI / (1.0 - tolerance / abs_delta).acos()).min(abs_delta * PI);
        self.sin = (TWO_PI / steps).sin();
        self.cos = (TWO_PI / steps).cos();
        self.steps_per_rad = steps / TWO_PI;
        if delta < 0.0 {
            self.sin = -self.sin;
        }

        self.dest_polys.reserve(self.paths.len() * 2);

        for i in 0..self.paths.len() {
            let OffsetPath {
                contour,
                join_type,
                end_type,
            } = self.paths[i].clone();
            let len = contour.len();

            if len == 0 || (delta <= 0.0 && (len < 3 || end_type != EndType::ClosedPolygon)) {
                continue;
            }

            self.src_poly = contour;
            self.dest_poly = Vec::new();

            if len == 1 {
                self.offset_single_point(join_type, steps);
                continue;
            }

            self.build_normals(end_type);

            match end_type {
                EndType::ClosedPolygon => {
                    let mut k = len - 1;
                    for j in 0..len {
                        k = self.offset_point(j, k, join_type);
                    }
                    self.flush_dest_poly();
                }
                EndType::ClosedLine => {
                    let mut k = len - 1;
                    for j in 0..len {
                        k = self.offset_point(j, k, join_type);
                    }
                    self.flush_dest_poly();

                    // the other side walks backwards with flipped normals
                    let last = self.normals[len - 1];
                    for j in (1..len).rev() {
                        self.normals[j] = self.normals[j - 1].reverse();
                    }
                    self.normals[0] = last.reverse();

                    let mut k = 0;
                    for j in (0..len).rev() {
                        k = self.offset_point(j, k, join_type);
                    }
                    self.flush_dest_poly();
                }
                _ => self.offset_open_path(join_type, end_type),
            }
        }
    }

    fn flush_dest_poly(&mut self) {
        let poly = std::mem::take(&mut self.dest_poly);
        self.dest_polys.push(poly);
    }

    fn build_normals(&mut self, end_type: EndType) {
        let len = self.src_poly.len();

        self.normals.clear();
        self.normals.reserve(len);
        for j in 0..len - 1 {
            self.normals
                .push(DoublePoint::unit_normal(&self.src_poly[j], &self.src_poly[j + 1]));
        }

        let closing = if end_type.is_closed() {
            DoublePoint::unit_normal(&self.src_poly[len - 1], &self.src_poly[0])
        } else {
            self.normals[len - 2]
        };
        self.normals.push(closing);
    }

    /// A lone vertex grows into a circle for round joins, otherwise into a square.
    fn offset_single_point(&mut self, join_type: JoinType, steps: f64) {
        let origin = self.src_poly[0].to_double();

        if join_type == JoinType::Round {
            let mut x = 1.0;
            let mut y = 0.0;
            for _ in 0..steps as usize {
                self.push_dest(origin.x + x * self.delta, origin.y + y * self.delta);
                let x2 = x;
                x = x * self.cos - self.sin * y;
                y = x2 * self.sin + y * self.cos;
            }
        } else {
            let mut x = -1.0;
            let mut y = -1.0;
            for _ in 0..4 {
                self.push_dest(origin.x + x * self.delta, origin.y + y * self.delta);
                if x < 0.0 {
                    x = 1.0;
                } else if y < 0.0 {
                    y = 1.0;
                } else {
                    x = -1.0;
                }
            }
        }

        self.flush_dest_poly();
    }

    fn offset_open_path(&mut self, join_type: JoinType, end_type: EndType) {
        let len = self.src_poly.len();

        let mut k = 0;
        for j in 1..len - 1 {
            k = self.offset_point(j, k, join_type);
        }

        if end_type == EndType::OpenButt {
            self.push_butt_end(len - 1, 1.0);
        } else {
            let j = len - 1;
            self.sin_a = 0.0;
            self.normals[j] = self.normals[j].reverse();
            self.do_cap(end_type, j, len - 2);
        }

        // walk back along the other side
        for j in (1..len).rev() {
            self.normals[j] = self.normals[j - 1].reverse();
        }
        self.normals[0] = self.normals[1].reverse();

        let mut k = len - 1;
        for j in (1..len - 1).rev() {
            k = self.offset_point(j, k, join_type);
        }

        if end_type == EndType::OpenButt {
            self.push_butt_end(0, -1.0);
        } else {
            self.sin_a = 0.0;
            self.do_cap(end_type, 0, 1);
        }

        self.flush_dest_poly();
    }

    /// Two points straddling vertex `j`, ordered by `sign`.
    fn push_butt_end(&mut self, j: usize, sign: f64) {
        let pt = self.src_poly[j].to_double();
        let normal = self.normals[j];
        let offset = sign * self.delta;

        self.push_dest(pt.x + normal.x * offset, pt.y + normal.y * offset);
        self.push_dest(pt.x - normal.x * offset, pt.y - normal.y * offset);
    }

    fn do_cap(&mut self, end_type: EndType, j: usize, k: usize) {
        if end_type == EndType::OpenSquare {
            self.do_square(j, k);
        } else {
            self.do_round(j, k);
        }
    }

    #[inline(always)]
    fn push_dest(&mut self, x: f64, y: f64) {
        self.dest_poly.push(DoublePoint::new(x, y).clipper_round());
    }

    /// Emits the offset geometry for vertex `j` whose previous edge normal is `k`.
    /// Returns the normal index to use as `k` for the next vertex.
    fn offset_point(&mut self, j: usize, k: usize, join_type: JoinType) -> usize {
        let nj = self.normals[j];
        let nk = self.normals[k];
        let pt = self.src_poly[j].to_double();

        self.sin_a = nk.x * nj.y - nj.x * nk.y;

        if (self.sin_a * self.delta).abs() < 1.0 {
            // nearly straight: a single vertex will do unless the path folds back
            let cos_a = nk.x * nj.x + nj.y * nk.y;
            if cos_a > 0.0 {
                self.push_dest(pt.x + nk.x * self.delta, pt.y + nk.y * self.delta);
                return k;
            }
        } else {
            self.sin_a = self.sin_a.clamp(-1.0, 1.0);
        }

        if self.sin_a * self.delta < 0.0 {
            self.push_dest(pt.x + nk.x * self.delta, pt.y + nk.y * self.delta);
            self.dest_poly.push(self.src_poly[j]);
            self.push_dest(pt.x + nj.x * self.delta, pt.y + nj.y * self.delta);
        } else {
            match join_type {
                JoinType::Miter => {
                    let r = 1.0 + (nj.x * nk.x + nj.y * nk.y);
                    if r >= self.miter_lim {
                        self.do_miter(j, k, r);
                    } else {
                        self.do_square(j, k);
                    }
                }
                JoinType::Square => self.do_square(j, k),
                JoinType::Round => self.do_round(j, k),
            }
        }

        j
    }

    fn do_square(&mut self, j: usize, k: usize) {
        let nj = self.normals[j];
        let nk = self.normals[k];
        let pt = self.src_poly[j].to_double();
        let dx = (self.sin_a.atan2(nk.x * nj.x + nk.y * nj.y) / 4.0).tan();

        self.push_dest(
            pt.x + self.delta * (nk.x - nk.y * dx),
            pt.y + self.delta * (nk.y + nk.x * dx),
        );
        self.push_dest(
            pt.x + self.delta * (nj.x + nj.y * dx),
            pt.y + self.delta * (nj.y - nj.x * dx),
        );
    }

    fn do_miter(&mut self, j: usize, k: usize, r: f64) {
        let nj = self.normals[j];
        let nk = self.normals[k];
        let pt = self.src_poly[j].to_double();
        let q = self.delta / r;

        self.push_dest(pt.x + (nk.x + nj.x) * q, pt.y + (nk.y + nj.y) * q);
    }

    fn do_round(&mut self, j: usize, k: usize) {
        let nj = self.normals[j];
        let nk = self.normals[k];
        let pt = self.src_poly[j].to_double();
        let a = self.sin_a.atan2(nk.x * nj.x + nk.y * nj.y);
        let steps = round_to_i64(self.steps_per_rad * a.abs()).max(1);

        let mut x = nk.x;
        let mut y = nk.y;
        for _ in 0..steps {
            self.push_dest(pt.x + x * self.delta, pt.y + y * self.delta);
            let x2 = x;
            x = x * self.cos - self.sin * y;
            y = x2 * self.sin + y * self.cos;
        }

        self.push_dest(pt.x + nj.x * self.delta, pt.y + nj.y * self.delta);
    }
}
