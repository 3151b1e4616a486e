// Clipper module - Vatti sweep-line clipping, polygon offsetting and their helpers

pub mod clipper;
pub mod clipper_base;
pub mod clipper_offset;
pub mod constants;
pub mod enums;
pub mod intersect_node;
pub mod join;
pub mod local_minima;
pub mod out_pt;
pub mod out_rec;
pub mod poly_tree;
pub mod scanbeam;
pub mod t_edge;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use clipper::Clipper;
pub use clipper_offset::ClipperOffset;
pub use constants::*;
pub use enums::*;
pub use poly_tree::{PolyNode, PolyTree};
