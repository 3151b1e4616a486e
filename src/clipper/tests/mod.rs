pub mod clipper_base_tests;
pub mod clipper_offset_tests;
pub mod clipper_tests;
pub mod geometry_tests;
pub mod join_tests;
pub mod local_minima_tests;
pub mod scanbeam_tests;
pub mod t_edge_tests;
pub mod utils_tests;
