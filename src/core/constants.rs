//! Core constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak layout defaults.

/// Default square tile size in pixels.
pub const DEFAULT_TILE_SIZE: f64 = 256.0;

/// Default viewport extent, `[[x0, y0], [x1, y1]]` in pixels.
pub const DEFAULT_EXTENT: [[f64; 2]; 2] = [[0.0, 0.0], [960.0, 500.0]];

/// Highest zoom level whose index range `[0, 2^z)` fits in an `i64`.
pub const MAX_ZOOM: u8 = 62;

/// Largest number of tiles a single computation returns.
pub const MAX_TILES: u64 = 1 << 20;
