/// Null link in every arena (edges, out points, out records, tree nodes).
pub const UNASSIGNED: usize = usize::MAX;

/// Edge `out_idx` marker for edges that never produce output.
pub const SKIP: usize = usize::MAX - 1;

pub const HORIZONTAL: f64 = -1.0e40;

pub const LO_RANGE: i64 = 0x3FFF_FFFF;

pub const HI_RANGE: i64 = 0x3FFF_FFFF_FFFF_FFFF;

pub const DEFAULT_MITER_LIMIT: f64 = 2.0;

pub const DEFAULT_ARC_TOLERANCE: f64 = 0.25;

pub const DEFAULT_CLEAN_DISTANCE: f64 = 1.415;

/// Margin around the bounding rectangle used to clean up inward offsets.
pub const OFFSET_OUTER_MARGIN: i64 = 10;

pub const TWO_PI: f64 = std::f64::consts::PI * 2.0;

pub const NEAR_ZERO: f64 = 1.0e-20;
