use crate::clipper::constants::{DEFAULT_ARC_TOLERANCE, DEFAULT_MITER_LIMIT};
use crate::clipper::enums::{ClipType, EndType, JoinType, PolyFillType};
use crate::error::Result;
use crate::utils::bit_ops::{get_bits, set_bits};

/// Engine options packed into a single `u32` for the wasm boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipperConfig {
    pub clip_type: ClipType,
    pub subj_fill_type: PolyFillType,
    pub clip_fill_type: PolyFillType,
    pub reverse_solution: bool,
    pub strictly_simple: bool,
    pub preserve_collinear: bool,
    pub join_type: JoinType,
    pub end_type: EndType,
    pub miter_limit: f64,
    pub arc_tolerance: f64,
}

const CONFIG_OFFSETS: [u8; 10] = [0, 2, 4, 6, 7, 8, 9, 11, 14, 22];

const CONFIG_BITS: [u8; 10] = [2, 2, 2, 1, 1, 1, 2, 3, 8, 10];

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            clip_type: ClipType::Union,
            subj_fill_type: PolyFillType::NonZero,
            clip_fill_type: PolyFillType::NonZero,
            reverse_solution: false,
            strictly_simple: false,
            preserve_collinear: false,
            join_type: JoinType::Round,
            end_type: EndType::ClosedPolygon,
            miter_limit: DEFAULT_MITER_LIMIT,
            arc_tolerance: DEFAULT_ARC_TOLERANCE,
        }
    }
}

impl ClipperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    fn field(packed: u32, index: usize) -> u16 {
        get_bits(packed, CONFIG_OFFSETS[index], CONFIG_BITS[index])
    }

    pub fn deserialize(&mut self, packed: u32) -> Result<()> {
        self.clip_type = ClipType::try_from(Self::field(packed, 0))?;
        self.subj_fill_type = PolyFillType::try_from(Self::field(packed, 1))?;
        self.clip_fill_type = PolyFillType::try_from(Self::field(packed, 2))?;
        self.reverse_solution = Self::field(packed, 3) != 0;
        self.strictly_simple = Self::field(packed, 4) != 0;
        self.preserve_collinear = Self::field(packed, 5) != 0;
        self.join_type = JoinType::try_from(Self::field(packed, 6))?;
        self.end_type = EndType::try_from(Self::field(packed, 7))?;
        self.miter_limit = Self::field(packed, 8) as f64 / 10.0;
        self.arc_tolerance = Self::field(packed, 9) as f64 / 100.0;

        Ok(())
    }

    pub fn from_packed(packed: u32) -> Result<Self> {
        let mut result = Self::default();
        result.deserialize(packed)?;

        Ok(result)
    }

    pub fn serialize(&self) -> u32 {
        let values: [u16; 10] = [
            self.clip_type as u16,
            self.subj_fill_type as u16,
            self.clip_fill_type as u16,
            self.reverse_solution as u16,
            self.strictly_simple as u16,
            self.preserve_collinear as u16,
            self.join_type as u16,
            self.end_type as u16,
            (self.miter_limit * 10.0).round() as u16,
            (self.arc_tolerance * 100.0).round() as u16,
        ];

        values
            .iter()
            .enumerate()
            .fold(0, |result, (i, &value)| {
                set_bits(result, value, CONFIG_OFFSETS[i], CONFIG_BITS[i])
            })
    }
}
