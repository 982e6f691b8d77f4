//! Tile set computation
//!
//! - [`layout`]: the configurable [`TileLayout`] and its `compute` entry point
//! - [`tileset`]: the immutable [`TileSet`] result
//! - [`accessor`]: constant-or-function scale and translate inputs
//! - [`wrap`]: folding out-of-range tile indices back into `[0, 2^z)`

pub mod accessor;
pub mod layout;
pub mod tileset;
pub mod wrap;

// Re-exports for convenience
pub use accessor::Accessor;
pub use layout::{TileLayout, TileOrder};
pub use tileset::TileSet;
pub use wrap::wrap_coordinate;
