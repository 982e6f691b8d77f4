//! Pan/zoom transform used as the default layout context.

use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// A 2-D affine zoom transform of the form `{k, x, y}`.
///
/// `k` is the pixel size of the root tile `(0, 0, 0)` and `(x, y)` is the
/// pixel position of the root tile's center. The default layout accessors read
/// the world scale from `k` and the world translate from `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl ZoomTransform {
    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    pub fn translate(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns a transform scaled by `factor` about the viewport point `origin`
    pub fn scaled_about(&self, factor: f64, origin: Point) -> Self {
        Self::new(
            self.k * factor,
            origin.x + (self.x - origin.x) * factor,
            origin.y + (self.y - origin.y) * factor,
        )
    }

    /// Returns a transform panned by `delta` pixels
    pub fn translated_by(&self, delta: Point) -> Self {
        Self::new(self.k, self.x + delta.x, self.y + delta.y)
    }
}

impl Default for ZoomTransform {
    /// Identity transform
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}
