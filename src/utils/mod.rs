// Numeric helpers shared by geometry and the clipping engine

pub mod bit_ops;
pub mod math;
pub mod number;
pub mod round;
pub mod wasm_logger;
