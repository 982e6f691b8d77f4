//! # maplet-tile
//!
//! Quad-tree tile layout for web maps.
//!
//! Given a viewport extent, a world scale and a world translate, this crate
//! answers which integer tile coordinates `(x, y, z)` of the standard slippy
//! map tiling are visible, and how to position them in viewport pixels. It does
//! not fetch, cache or draw tiles.
//!
//! ```
//! use maplet_tile::{TileLayout, ZoomTransform};
//!
//! let mut layout = TileLayout::new();
//! layout.set_size([960.0, 500.0]).unwrap();
//!
//! let tiles = layout.compute(&ZoomTransform::new(1024.0, 480.0, 250.0));
//! assert_eq!(tiles.zoom(), 2);
//! for tile in &tiles {
//!     let top_left = tiles.tile_position(tile);
//!     assert!(top_left.x.is_finite());
//! }
//! ```

pub mod core;
pub mod prelude;
pub mod tiles;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    config::{Numeric, TileLayoutOptions},
    geo::{Point, TileCoord},
    transform::ZoomTransform,
};

pub use crate::tiles::{
    accessor::Accessor,
    layout::{TileLayout, TileOrder},
    tileset::TileSet,
    wrap::wrap_coordinate,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger` as the `log` backend, honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(cfg!(test))
        .try_init();
}
