use crate::core::geo::TileCoord;
use crate::Result;

/// Folds a tile coordinate into the canonical `[0, 2^z) x [0, 2^z)` range.
///
/// Each axis is reduced with floored modulo, so `(-1, 0, 1)` becomes
/// `(1, 0, 1)`. `z` passes through. Zoom levels above
/// [`MAX_ZOOM`](crate::constants::MAX_ZOOM) are rejected.
pub fn wrap_coordinate(coord: TileCoord) -> Result<TileCoord> {
    coord.wrap()
}
