pub mod color_map;
#[cfg(feature = "viewer")]
pub mod viewer;
