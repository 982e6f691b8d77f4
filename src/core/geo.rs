use crate::core::constants::MAX_ZOOM;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Represents a point in viewport pixel or tile-index coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }

    /// Squared Euclidean distance, enough for ordering
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Represents a tile coordinate in the slippy map tile system.
///
/// `x` and `y` are signed: with clamping disabled a layout may return indices
/// outside `[0, 2^z)`, which callers wrap with [`TileCoord::wrap`] or discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i64,
    pub y: i64,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: i64, y: i64, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Number of tiles along one axis at zoom `z`, i.e. `2^z`.
    ///
    /// Fails for zoom levels above [`MAX_ZOOM`].
    pub fn dimension(z: u8) -> Result<i64> {
        if z > MAX_ZOOM {
            return Err(MapError::InvalidCoordinates(format!(
                "zoom {} exceeds maximum representable zoom {}",
                z, MAX_ZOOM
            )));
        }
        Ok(1_i64 << z)
    }

    /// Folds `x` and `y` back into `[0, 2^z)` using floored modulo, so
    /// negative indices wrap to the positive residue.
    pub fn wrap(&self) -> Result<TileCoord> {
        let j = Self::dimension(self.z)?;
        Ok(TileCoord::new(
            self.x.rem_euclid(j),
            self.y.rem_euclid(j),
            self.z,
        ))
    }

    /// Gets the parent tile at a lower zoom level
    pub fn parent(&self) -> Option<TileCoord> {
        if self.z == 0 {
            None
        } else {
            Some(TileCoord::new(
                self.x.div_euclid(2),
                self.y.div_euclid(2),
                self.z - 1,
            ))
        }
    }

    /// Gets the child tiles at a higher zoom level
    pub fn children(&self) -> Vec<TileCoord> {
        if self.z >= MAX_ZOOM {
            Vec::new()
        } else {
            vec![
                TileCoord::new(self.x * 2, self.y * 2, self.z + 1),
                TileCoord::new(self.x * 2 + 1, self.y * 2, self.z + 1),
                TileCoord::new(self.x * 2, self.y * 2 + 1, self.z + 1),
                TileCoord::new(self.x * 2 + 1, self.y * 2 + 1, self.z + 1),
            ]
        }
    }

    /// Checks if the tile lies inside `[0, 2^z)` on both axes
    pub fn is_valid(&self) -> bool {
        match Self::dimension(self.z) {
            Ok(max_coord) => (0..max_coord).contains(&self.x) && (0..max_coord).contains(&self.y),
            Err(_) => false,
        }
    }

    /// Tile center in tile-index space
    pub fn center(&self) -> Point {
        Point::new(self.x as f64 + 0.5, self.y as f64 + 0.5)
    }
}

impl From<(i64, i64, u8)> for TileCoord {
    fn from((x, y, z): (i64, i64, u8)) -> Self {
        Self::new(x, y, z)
    }
}
