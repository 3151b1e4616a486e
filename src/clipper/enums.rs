use crate::error::ClipperError;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyFillType {
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum JoinType {
    Square = 0,
    Round = 1,
    Miter = 2,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum EndType {
    ClosedPolygon = 0,
    ClosedLine = 1,
    OpenButt = 2,
    OpenSquare = 3,
    OpenRound = 4,
}

impl EndType {
    pub fn is_closed(self) -> bool {
        matches!(self, EndType::ClosedPolygon | EndType::ClosedLine)
    }
}

impl TryFrom<u16> for PolyFillType {
    type Error = ClipperError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PolyFillType::EvenOdd),
            1 => Ok(PolyFillType::NonZero),
            2 => Ok(PolyFillType::Positive),
            3 => Ok(PolyFillType::Negative),
            _ => Err(ClipperError::InvalidConfig {
                field: "fill type",
                value,
            }),
        }
    }
}

impl TryFrom<u16> for ClipType {
    type Error = ClipperError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ClipType::Intersection),
            1 => Ok(ClipType::Union),
            2 => Ok(ClipType::Difference),
            3 => Ok(ClipType::Xor),
            _ => Err(ClipperError::InvalidConfig {
                field: "clip type",
                value,
            }),
        }
    }
}

impl TryFrom<u16> for JoinType {
    type Error = ClipperError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(JoinType::Square),
            1 => Ok(JoinType::Round),
            2 => Ok(JoinType::Miter),
            _ => Err(ClipperError::InvalidConfig {
                field: "join type",
                value,
            }),
        }
    }
}

impl TryFrom<u16> for EndType {
    type Error = ClipperError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EndType::ClosedPolygon),
            1 => Ok(EndType::ClosedLine),
            2 => Ok(EndType::OpenButt),
            3 => Ok(EndType::OpenSquare),
            4 => Ok(EndType::OpenRound),
            _ => Err(ClipperError::InvalidConfig {
                field: "end type",
                value,
            }),
        }
    }
}
