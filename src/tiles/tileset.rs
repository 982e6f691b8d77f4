use crate::core::{
    bounds::Bounds,
    geo::{Point, TileCoord},
};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Tiles covering a viewport, with the placement used to draw them.
///
/// A tile `(x, y, z)` is drawn with its top-left corner at
/// `((x + translate.x) * scale, (y + translate.y) * scale)` and a side of
/// `scale` pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSet {
    tiles: Vec<TileCoord>,
    zoom: u8,
    scale: f64,
    translate: Point,
    world_scale: f64,
    world_translate: Point,
}

impl TileSet {
    pub(crate) fn new(
        tiles: Vec<TileCoord>,
        zoom: u8,
        scale: f64,
        translate: Point,
        world_scale: f64,
        world_translate: Point,
    ) -> Self {
        Self {
            tiles,
            zoom,
            scale,
            translate,
            world_scale,
            world_translate,
        }
    }

    pub fn tiles(&self) -> &[TileCoord] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TileCoord> {
        self.tiles.iter()
    }

    /// Zoom level shared by every tile in the set
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Pixel size of one tile
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Offset of the tile grid, in tiles
    pub fn translate(&self) -> Point {
        self.translate
    }

    /// World scale resolved from the context
    pub fn world_scale(&self) -> f64 {
        self.world_scale
    }

    /// World translate resolved from the context
    pub fn world_translate(&self) -> Point {
        self.world_translate
    }

    /// Top-left viewport pixel of a tile
    pub fn tile_position(&self, tile: &TileCoord) -> Point {
        Point::new(tile.x as f64, tile.y as f64)
            .add(&self.translate)
            .multiply(self.scale)
    }

    /// Viewport pixel rectangle covered by a tile
    pub fn tile_bounds(&self, tile: &TileCoord) -> Bounds {
        let min = self.tile_position(tile);
        Bounds::new(min, min.add(&Point::new(self.scale, self.scale)))
    }

    /// Every tile folded into `[0, 2^z)`, in the same order
    pub fn wrapped(&self) -> Result<Vec<TileCoord>> {
        self.tiles.iter().map(TileCoord::wrap).collect()
    }

    pub fn into_tiles(self) -> Vec<TileCoord> {
        self.tiles
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a TileCoord;
    type IntoIter = std::slice::Iter<'a, TileCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl IntoIterator for TileSet {
    type Item = TileCoord;
    type IntoIter = std::vec::IntoIter<TileCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}
