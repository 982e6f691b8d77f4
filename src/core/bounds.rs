use crate::core::geo::Point;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Represents a bounding box in viewport pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points, without validation
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Creates a validated extent from `[[x0, y0], [x1, y1]]`.
    ///
    /// All values must be finite and the second corner must not lie above or
    /// left of the first. Zero-area extents are allowed.
    pub fn try_from_corners(corners: [[f64; 2]; 2]) -> Result<Self> {
        let [[x0, y0], [x1, y1]] = corners;
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return Err(MapError::InvalidConfiguration(format!(
                "extent must be finite, got {:?}",
                corners
            )));
        }
        if x1 < x0 || y1 < y0 {
            return Err(MapError::InvalidConfiguration(format!(
                "extent corners are inverted: {:?}",
                corners
            )));
        }
        Ok(Self::from_coords(x0, y0, x1, y1))
    }

    /// Creates a validated extent of the given size anchored at the origin
    pub fn try_from_size(size: [f64; 2]) -> Result<Self> {
        let [width, height] = size;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(MapError::InvalidConfiguration(format!(
                "size must be finite and non-negative, got {:?}",
                size
            )));
        }
        Self::try_from_corners([[0.0, 0.0], [width, height]])
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the size as a Point
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Checks if the bounds are valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Gets the area of the bounds
    pub fn area(&self) -> f64 {
        if !self.is_valid() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// The extent as `[[x0, y0], [x1, y1]]`
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [self.min.into(), self.max.into()]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        let [[x0, y0], [x1, y1]] = crate::core::constants::DEFAULT_EXTENT;
        Self::from_coords(x0, y0, x1, y1)
    }
}

impl TryFrom<[[f64; 2]; 2]> for Bounds {
    type Error = MapError;

    fn try_from(corners: [[f64; 2]; 2]) -> Result<Self> {
        Self::try_from_corners(corners)
    }
}
