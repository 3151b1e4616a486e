use thiserror::Error;

/// Precondition violations raised by the clipping and offsetting engines.
///
/// Geometric failures on pathological input are not errors: `execute` reports them as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipperError {
    #[error("coordinate ({x}, {y}) is outside the supported range")]
    CoordinateOutOfRange { x: i64, y: i64 },

    #[error("open paths must be added as subject paths")]
    OpenClipPath,

    #[error("clipping open paths requires a PolyTree result")]
    OpenPathsNeedTree,

    #[error("edge promotion requested for an edge with no successor in its bound")]
    InvalidEdgePromotion,

    #[error("maxima pair is in an unresolvable state")]
    MaximaError,

    #[error("invalid {field} code {value} in packed config")]
    InvalidConfig { field: &'static str, value: u16 },
}

pub type Result<T> = std::result::Result<T, ClipperError>;
