//! Tile layout: which tiles cover a viewport
//!
//! A [`TileLayout`] holds the viewport extent, the world scale and translate
//! accessors, a zoom bias, the tile size and per-axis clamp flags. Calling
//! [`TileLayout::compute`] with a context resolves the accessors and returns
//! the [`TileSet`] of visible tiles at the nearest power-of-two zoom level.

use crate::core::{
    bounds::Bounds,
    config::TileLayoutOptions,
    constants::{DEFAULT_TILE_SIZE, MAX_TILES, MAX_ZOOM},
    geo::{Point, TileCoord},
    transform::ZoomTransform,
};
use crate::tiles::{accessor::Accessor, tileset::TileSet};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Order in which computed tiles are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileOrder {
    /// Nearest to the center of the covered tile range first. Ties keep
    /// row-major order (ascending row, then column).
    #[default]
    CenterOut,
    /// Ascending row, then column
    RowMajor,
}

/// Computes the visible tiles for a viewport.
///
/// `C` is the context passed to [`compute`](Self::compute) and forwarded to the
/// scale and translate accessors. The default context is a [`ZoomTransform`];
/// use a tuple type for several independent arguments.
pub struct TileLayout<C = ZoomTransform> {
    extent: Bounds,
    scale: Accessor<C, f64>,
    translate: Accessor<C, [f64; 2]>,
    zoom_delta: f64,
    tile_size: f64,
    clamp_x: bool,
    clamp_y: bool,
    order: TileOrder,
}

impl TileLayout<ZoomTransform> {
    /// Layout with default settings, reading `k`, `x` and `y` from a
    /// [`ZoomTransform`] context
    pub fn new() -> Self {
        Self::with_accessors(
            Accessor::function(|t: &ZoomTransform| t.k),
            Accessor::function(|t: &ZoomTransform| [t.x, t.y]),
        )
    }

    /// Default-accessor layout configured from stored options
    pub fn from_options(options: &TileLayoutOptions) -> Result<Self> {
        let mut layout = Self::new();
        layout.apply_options(options)?;
        Ok(layout)
    }
}

impl Default for TileLayout<ZoomTransform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> TileLayout<C> {
    /// Layout with default settings and the given accessors
    pub fn with_accessors(
        scale: impl Into<Accessor<C, f64>>,
        translate: impl Into<Accessor<C, [f64; 2]>>,
    ) -> Self {
        Self {
            extent: Bounds::default(),
            scale: scale.into(),
            translate: translate.into(),
            zoom_delta: 0.0,
            tile_size: DEFAULT_TILE_SIZE,
            clamp_x: true,
            clamp_y: true,
            order: TileOrder::default(),
        }
    }

    /// Applies every setting in `options`. Nothing is changed if any value is
    /// rejected.
    pub fn apply_options(&mut self, options: &TileLayoutOptions) -> Result<&mut Self> {
        options.validate().map_err(rejected)?;
        self.extent = options.bounds()?;
        self.tile_size = options.tile_size;
        self.zoom_delta = options.zoom_delta;
        (self.clamp_x, self.clamp_y) = options.clamp_axes();
        self.order = options.order;
        Ok(self)
    }

    /// Snapshot of the plain-data settings (accessors are not included)
    pub fn options(&self) -> TileLayoutOptions {
        TileLayoutOptions {
            extent: self.extent.corners(),
            size: None,
            tile_size: self.tile_size,
            zoom_delta: self.zoom_delta,
            clamp: None,
            clamp_x: self.clamp_x,
            clamp_y: self.clamp_y,
            order: self.order,
        }
    }

    pub fn extent(&self) -> [[f64; 2]; 2] {
        self.extent.corners()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.extent
    }

    /// Sets the viewport extent `[[x0, y0], [x1, y1]]`
    pub fn set_extent(&mut self, extent: [[f64; 2]; 2]) -> Result<&mut Self> {
        self.extent = Bounds::try_from_corners(extent).map_err(rejected)?;
        Ok(self)
    }

    /// Viewport `[width, height]`
    pub fn size(&self) -> [f64; 2] {
        self.extent.size().into()
    }

    /// Sets the extent to `[[0, 0], [width, height]]`
    pub fn set_size(&mut self, size: [f64; 2]) -> Result<&mut Self> {
        self.extent = Bounds::try_from_size(size).map_err(rejected)?;
        Ok(self)
    }

    pub fn scale(&self) -> &Accessor<C, f64> {
        &self.scale
    }

    /// Sets the world scale accessor; accepts a constant or [`Accessor::function`]
    pub fn set_scale(&mut self, scale: impl Into<Accessor<C, f64>>) -> &mut Self {
        self.scale = scale.into();
        self
    }

    pub fn translate(&self) -> &Accessor<C, [f64; 2]> {
        &self.translate
    }

    /// Sets the world translate accessor; accepts a constant or [`Accessor::function`]
    pub fn set_translate(&mut self, translate: impl Into<Accessor<C, [f64; 2]>>) -> &mut Self {
        self.translate = translate.into();
        self
    }

    pub fn zoom_delta(&self) -> f64 {
        self.zoom_delta
    }

    pub fn set_zoom_delta(&mut self, zoom_delta: f64) -> Result<&mut Self> {
        if !zoom_delta.is_finite() {
            return Err(rejected(MapError::InvalidConfiguration(format!(
                "zoom_delta must be finite, got {}",
                zoom_delta
            ))));
        }
        self.zoom_delta = zoom_delta;
        Ok(self)
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    pub fn set_tile_size(&mut self, tile_size: f64) -> Result<&mut Self> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(rejected(MapError::InvalidConfiguration(format!(
                "tile_size must be finite and positive, got {}",
                tile_size
            ))));
        }
        self.tile_size = tile_size;
        Ok(self)
    }

    /// True only when both axes are clamped
    pub fn clamp(&self) -> bool {
        self.clamp_x && self.clamp_y
    }

    pub fn set_clamp(&mut self, clamp: bool) -> &mut Self {
        self.clamp_x = clamp;
        self.clamp_y = clamp;
        self
    }

    pub fn clamp_x(&self) -> bool {
        self.clamp_x
    }

    pub fn set_clamp_x(&mut self, clamp: bool) -> &mut Self {
        self.clamp_x = clamp;
        self
    }

    pub fn clamp_y(&self) -> bool {
        self.clamp_y
    }

    pub fn set_clamp_y(&mut self, clamp: bool) -> &mut Self {
        self.clamp_y = clamp;
        self
    }

    pub fn order(&self) -> TileOrder {
        self.order
    }

    pub fn set_order(&mut self, order: TileOrder) -> &mut Self {
        self.order = order;
        self
    }

    /// Discrete zoom level chosen for a world scale.
    ///
    /// `round(max(log2(scale / tile_size) + zoom_delta, 0))`, rounding half away
    /// from zero, capped at [`MAX_ZOOM`]. NaN, zero and negative scales
    /// collapse to zoom 0.
    pub fn zoom_level(&self, world_scale: f64) -> u8 {
        let z0 = (world_scale / self.tile_size).log2();
        // f64::max drops NaN, so an undefined level lands on the root
        (z0 + self.zoom_delta).max(0.0).round().min(f64::from(MAX_ZOOM)) as u8
    }

    /// Computes the tiles covering the extent for one context.
    ///
    /// Never fails: degenerate scales or extents give an empty or single-tile
    /// set instead. A range of more than [`MAX_TILES`] cells, which only an
    /// unclamped layout with a tiny scale can produce, also gives an empty set.
    pub fn compute(&self, ctx: &C) -> TileSet {
        let world_scale = self.scale.resolve(ctx);
        let [tx, ty] = self.translate.resolve(ctx);

        let z0 = (world_scale / self.tile_size).log2();
        let z = self.zoom_level(world_scale);
        // pixel size of one tile at level z
        let k = self.tile_size * (z0 - f64::from(z)).exp2();
        // top-left corner of the root tile
        let origin = Point::new(tx - world_scale / 2.0, ty - world_scale / 2.0);
        let limit = 1_i64 << z;

        let xs = axis_range(
            self.extent.min.x,
            self.extent.max.x,
            origin.x,
            k,
            self.clamp_x.then_some(limit),
        );
        let ys = axis_range(
            self.extent.min.y,
            self.extent.max.y,
            origin.y,
            k,
            self.clamp_y.then_some(limit),
        );

        let cells = match (&xs, &ys) {
            (Some(xs), Some(ys)) => cell_count(xs, ys),
            _ => Some(0),
        };
        let (xs, ys) = if cells.is_some_and(|n| n <= MAX_TILES) {
            (xs, ys)
        } else {
            #[cfg(feature = "debug")]
            log::warn!(
                "tile range {:?} x {:?} at zoom {} exceeds {} tiles, returning none",
                xs,
                ys,
                z,
                MAX_TILES
            );
            (None, None)
        };

        let mut tiles: Vec<TileCoord> = match (xs.clone(), ys.clone()) {
            (Some(xs), Some(ys)) => ys
                .flat_map(|y| xs.clone().map(move |x| TileCoord::new(x, y, z)))
                .collect(),
            _ => Vec::new(),
        };

        if let (TileOrder::CenterOut, Some(xs), Some(ys)) = (self.order, xs, ys) {
            let center = Point::new(
                (xs.start as f64 + xs.end as f64) / 2.0,
                (ys.start as f64 + ys.end as f64) / 2.0,
            );
            tiles.sort_by(|a, b| {
                a.center()
                    .distance_squared_to(&center)
                    .total_cmp(&b.center().distance_squared_to(&center))
            });
        }

        #[cfg(feature = "debug")]
        log::trace!(
            "tile layout: scale={} translate=({}, {}) -> {} tiles at zoom {}",
            world_scale,
            tx,
            ty,
            tiles.len(),
            z
        );

        TileSet::new(
            tiles,
            z,
            k,
            Point::new(origin.x / k, origin.y / k),
            world_scale,
            Point::new(tx, ty),
        )
    }
}

/// Half-open tile index range covering `[e0, e1]` on one axis.
///
/// `None` when the range is empty, undefined (NaN) or unbounded.
fn axis_range(e0: f64, e1: f64, origin: f64, k: f64, clamp: Option<i64>) -> Option<Range<i64>> {
    let (e0, e1) = if e0 <= e1 { (e0, e1) } else { (e1, e0) };
    if e0 == e1 {
        return None;
    }

    let mut lo = ((e0 - origin) / k).floor();
    let mut hi = ((e1 - origin) / k).ceil();
    if lo.is_nan() || hi.is_nan() {
        return None;
    }
    if let Some(limit) = clamp {
        lo = lo.max(0.0);
        hi = hi.min(limit as f64);
    }
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return None;
    }

    Some(lo as i64..hi as i64)
}

/// Cells in `xs` x `ys`, `None` on overflow
fn cell_count(xs: &Range<i64>, ys: &Range<i64>) -> Option<u64> {
    let width = u64::try_from(xs.end.checked_sub(xs.start)?).ok()?;
    let height = u64::try_from(ys.end.checked_sub(ys.start)?).ok()?;
    width.checked_mul(height)
}

fn rejected(err: MapError) -> MapError {
    #[cfg(feature = "debug")]
    log::warn!("rejected tile layout setting: {}", err);
    err
}

impl<C> Clone for TileLayout<C> {
    fn clone(&self) -> Self {
        Self {
            extent: self.extent,
            scale: self.scale.clone(),
            translate: self.translate.clone(),
            zoom_delta: self.zoom_delta,
            tile_size: self.tile_size,
            clamp_x: self.clamp_x,
            clamp_y: self.clamp_y,
            order: self.order,
        }
    }
}

impl<C> fmt::Debug for TileLayout<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileLayout")
            .field("extent", &self.extent.corners())
            .field("scale", &self.scale)
            .field("translate", &self.translate)
            .field("zoom_delta", &self.zoom_delta)
            .field("tile_size", &self.tile_size)
            .field("clamp_x", &self.clamp_x)
            .field("clamp_y", &self.clamp_y)
            .field("order", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(k: f64, x: f64, y: f64) -> ZoomTransform {
        ZoomTransform::new(k, x, y)
    }

    fn coords(tiles: &TileSet) -> Vec<(i64, i64, u8)> {
        tiles.iter().map(|t| (t.x, t.y, t.z)).collect()
    }

    #[test]
    fn test_defaults() {
        let layout = TileLayout::new();
        assert_eq!(layout.extent(), [[0.0, 0.0], [960.0, 500.0]]);
        assert_eq!(layout.size(), [960.0, 500.0]);
        assert_eq!(layout.zoom_delta(), 0.0);
        assert_eq!(layout.tile_size(), 256.0);
        assert!(layout.clamp());
        assert!(layout.clamp_x());
        assert!(layout.clamp_y());
        assert_eq!(layout.order(), TileOrder::CenterOut);
        assert_eq!(layout.scale().resolve(&transform(3.0, 4.0, 5.0)), 3.0);
        assert_eq!(layout.translate().resolve(&transform(3.0, 4.0, 5.0)), [4.0, 5.0]);
    }

    #[test]
    fn test_size_sets_extent_at_origin() {
        let mut layout = TileLayout::new();
        layout.set_extent([[10.0, 20.0], [110.0, 70.0]]).unwrap();
        assert_eq!(layout.size(), [100.0, 50.0]);

        layout.set_size([300.0, 200.0]).unwrap();
        assert_eq!(layout.extent(), [[0.0, 0.0], [300.0, 200.0]]);
    }

    #[test]
    fn test_invalid_settings_are_rejected_and_leave_state() {
        let mut layout = TileLayout::new();
        assert!(matches!(
            layout.set_extent([[0.0, 0.0], [f64::NAN, 1.0]]),
            Err(MapError::InvalidConfiguration(_))
        ));
        assert!(layout.set_size([-5.0, 1.0]).is_err());
        assert!(layout.set_tile_size(0.0).is_err());
        assert!(layout.set_tile_size(f64::INFINITY).is_err());
        assert!(layout.set_zoom_delta(f64::NAN).is_err());

        assert_eq!(layout.extent(), [[0.0, 0.0], [960.0, 500.0]]);
        assert_eq!(layout.tile_size(), 256.0);
        assert_eq!(layout.zoom_delta(), 0.0);
    }

    #[test]
    fn test_chained_configuration_reads_back() {
        let mut layout = TileLayout::new();
        layout
            .set_scale(1024.0)
            .set_translate([100.0, 200.0])
            .set_zoom_delta(2.0)
            .unwrap()
            .set_clamp_x(false);

        let ctx = ZoomTransform::default();
        assert_eq!(layout.scale().resolve(&ctx), 1024.0);
        assert_eq!(layout.translate().resolve(&ctx), [100.0, 200.0]);
        assert_eq!(layout.zoom_delta(), 2.0);
        assert!(!layout.clamp_x());
        assert!(layout.clamp_y());
        assert!(!layout.clamp());
    }

    #[test]
    fn test_clamp_sets_both_axes() {
        let mut layout = TileLayout::new();
        layout.set_clamp(false);
        assert!(!layout.clamp_x() && !layout.clamp_y());
        layout.set_clamp_x(true);
        assert!(!layout.clamp());
        layout.set_clamp(true);
        assert!(layout.clamp());
    }

    #[test]
    fn test_zoom_level_rounding() {
        let mut layout = TileLayout::new();
        assert_eq!(layout.zoom_level(256.0), 0);
        assert_eq!(layout.zoom_level(512.0), 1);
        assert_eq!(layout.zoom_level(1024.0), 2);
        // log2(362 / 256) ~ 0.4996
        assert_eq!(layout.zoom_level(362.0), 0);
        // log2(363 / 256) ~ 0.5036
        assert_eq!(layout.zoom_level(363.0), 1);

        // exact half rounds away from zero
        layout.set_zoom_delta(0.5).unwrap();
        assert_eq!(layout.zoom_level(256.0), 1);
        layout.set_zoom_delta(1.5).unwrap();
        assert_eq!(layout.zoom_level(256.0), 2);
        layout.set_zoom_delta(-0.5).unwrap();
        assert_eq!(layout.zoom_level(512.0), 1);
    }

    #[test]
    fn test_zoom_level_never_negative() {
        let mut layout = TileLayout::new();
        assert_eq!(layout.zoom_level(16.0), 0);
        layout.set_zoom_delta(-3.0).unwrap();
        assert_eq!(layout.zoom_level(1024.0), 0);
        assert_eq!(layout.zoom_level(0.0), 0);
        assert_eq!(layout.zoom_level(-10.0), 0);
        assert_eq!(layout.zoom_level(f64::NAN), 0);
        assert_eq!(layout.zoom_level(f64::INFINITY), MAX_ZOOM);
    }

    #[test]
    fn test_root_tile_clamped() {
        let layout = TileLayout::new();
        let tiles = layout.compute(&transform(256.0, 0.0, 0.0));
        assert_eq!(tiles.zoom(), 0);
        assert_eq!(coords(&tiles), vec![(0, 0, 0)]);
        assert_eq!(tiles.scale(), 256.0);
        assert_eq!(tiles.translate(), Point::new(-0.5, -0.5));
    }

    #[test]
    fn test_root_tile_unclamped_includes_neighbours() {
        let mut layout = TileLayout::new();
        layout.set_clamp(false).set_order(TileOrder::RowMajor);
        let tiles = layout.compute(&transform(256.0, 0.0, 0.0));

        // origin at -128: x covers [0.5, 4.25) tiles, y covers [0.5, 2.45)
        assert_eq!(tiles.len(), 15);
        assert_eq!(tiles.tiles()[0], TileCoord::new(0, 0, 0));
        assert_eq!(tiles.tiles()[14], TileCoord::new(4, 2, 0));
        assert!(tiles.iter().any(|t| !t.is_valid()));
    }

    #[test]
    fn test_centered_world_at_zoom_two() {
        let mut layout = TileLayout::new();
        layout
            .set_size([1024.0, 1024.0])
            .unwrap()
            .set_order(TileOrder::RowMajor);
        let tiles = layout.compute(&transform(1024.0, 512.0, 512.0));

        assert_eq!(tiles.zoom(), 2);
        assert_eq!(tiles.scale(), 256.0);
        assert_eq!(tiles.translate(), Point::new(0.0, 0.0));
        let expected: Vec<_> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y, 2)))
            .collect();
        assert_eq!(coords(&tiles), expected);
    }

    #[test]
    fn test_fractional_zoom_scales_tiles() {
        let mut layout = TileLayout::new();
        layout.set_size([600.0, 600.0]).unwrap();
        // log2(600 / 256) ~ 1.23 -> zoom 1, tiles drawn at 300px
        let tiles = layout.compute(&transform(600.0, 300.0, 300.0));
        assert_eq!(tiles.zoom(), 1);
        assert!((tiles.scale() - 300.0).abs() < 1e-9);
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn test_center_out_order() {
        let mut layout = TileLayout::new();
        layout.set_size([768.0, 768.0]).unwrap().set_clamp(false);
        // 3x3 tiles at zoom 0, origin aligned to the viewport
        let tiles = layout.compute(&transform(256.0, 128.0, 128.0));

        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles.tiles()[0], TileCoord::new(1, 1, 0));
        // edge neighbours in row-major order, then the corners
        assert_eq!(
            coords(&tiles)[1..5].to_vec(),
            vec![(1, 0, 0), (0, 1, 0), (2, 1, 0), (1, 2, 0)]
        );
        assert_eq!(
            coords(&tiles)[5..].to_vec(),
            vec![(0, 0, 0), (2, 0, 0), (0, 2, 0), (2, 2, 0)]
        );
    }

    #[test]
    fn test_inverted_translate_still_orders_bounds() {
        assert_eq!(axis_range(100.0, 0.0, 0.0, 50.0, None), Some(0..2));
        assert_eq!(axis_range(0.0, 100.0, 0.0, 50.0, None), Some(0..2));
    }

    #[test]
    fn test_axis_range_degenerate() {
        assert_eq!(axis_range(10.0, 10.0, 0.0, 256.0, None), None);
        assert_eq!(axis_range(0.0, 10.0, 0.0, f64::NAN, Some(1)), None);
        assert_eq!(axis_range(0.0, 10.0, 5.0, 0.0, None), None);
        assert_eq!(axis_range(0.0, 10.0, 5.0, 0.0, Some(1)), Some(0..1));
        assert_eq!(axis_range(0.0, 10.0, 100.0, 256.0, Some(1)), None);
    }

    #[test]
    fn test_degenerate_scales_do_not_panic() {
        let layout = TileLayout::new();

        let tiles = layout.compute(&transform(0.0, 480.0, 250.0));
        assert_eq!(tiles.zoom(), 0);
        assert_eq!(coords(&tiles), vec![(0, 0, 0)]);

        assert!(layout.compute(&transform(0.0, 0.0, 0.0)).is_empty());
        assert!(layout.compute(&transform(-256.0, 0.0, 0.0)).is_empty());
        assert!(layout.compute(&transform(f64::NAN, 0.0, 0.0)).is_empty());
        assert!(layout.compute(&transform(f64::INFINITY, 0.0, 0.0)).is_empty());
        assert!(layout.compute(&transform(256.0, f64::NAN, 0.0)).is_empty());
    }

    #[test]
    fn test_tiny_unclamped_scale_is_capped() {
        let mut layout = TileLayout::new();
        layout.set_clamp(false);
        // tiles of 1e-6 px: ~1e9 x 5e8 cells
        assert!(layout.compute(&transform(1e-6, 0.0, 0.0)).is_empty());

        layout.set_clamp(true);
        let tiles = layout.compute(&transform(1e-6, 0.0, 0.0));
        assert!(tiles.len() <= 1);
    }

    #[test]
    fn test_cap_allows_ranges_up_to_the_limit() {
        let mut layout = TileLayout::new();
        layout
            .set_clamp(false)
            .set_order(TileOrder::RowMajor)
            .set_size([1024.0, 1024.0])
            .unwrap();
        // 1px tiles: 1024 x 1024 cells, exactly at the limit
        let tiles = layout.compute(&transform(1.0, 0.5, 0.5));
        assert_eq!(tiles.len() as u64, MAX_TILES);

        layout.set_size([1025.0, 1024.0]).unwrap();
        assert!(layout.compute(&transform(1.0, 0.5, 0.5)).is_empty());
    }

    #[test]
    fn test_cell_count_overflow() {
        assert_eq!(cell_count(&(0..4), &(2..5)), Some(12));
        assert_eq!(cell_count(&(i64::MIN..i64::MAX), &(0..1)), None);
        assert_eq!(
            cell_count(&(0..i64::MAX), &(0..i64::MAX)),
            None
        );
    }

    #[test]
    fn test_options_clamp_overrides_axes() {
        let options = TileLayoutOptions::from_json_str(r#"{"clamp": false}"#).unwrap();
        let layout = TileLayout::from_options(&options).unwrap();
        assert!(!layout.clamp_x());
        assert!(!layout.clamp_y());
        assert!(!layout.clamp());
        assert_eq!(layout.options().clamp, None);
    }

    #[test]
    fn test_zero_area_extent_is_empty() {
        let mut layout = TileLayout::new();
        layout.set_extent([[0.0, 0.0], [0.0, 0.0]]).unwrap();
        assert!(layout.compute(&transform(256.0, 0.0, 0.0)).is_empty());

        layout.set_extent([[10.5, 0.0], [10.5, 300.0]]).unwrap().set_clamp(false);
        assert!(layout.compute(&transform(1000.0, 3.0, 7.0)).is_empty());
    }

    #[test]
    fn test_viewport_outside_world_is_empty_when_clamped() {
        let layout = TileLayout::new();
        // root tile spans [-2000, -1744] on both axes
        let tiles = layout.compute(&transform(256.0, -1872.0, -1872.0));
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_independent_axis_clamping() {
        let mut layout = TileLayout::new();
        layout.set_clamp_y(false).set_order(TileOrder::RowMajor);
        let tiles = layout.compute(&transform(256.0, 128.0, 128.0));

        assert!(tiles.iter().all(|t| t.x == 0));
        assert_eq!(
            tiles.iter().map(|t| t.y).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_tuple_context() {
        let mut layout: TileLayout<(f64, f64, f64, f64)> = TileLayout::with_accessors(
            Accessor::function(|&(k, _, _, _): &(f64, f64, f64, f64)| k),
            Accessor::function(|&(_, x, y, _): &(f64, f64, f64, f64)| [x, y]),
        );
        layout.set_size([512.0, 512.0]).unwrap();
        let tiles = layout.compute(&(512.0, 256.0, 256.0, 0.0));
        assert_eq!(tiles.zoom(), 1);
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn test_options_roundtrip() {
        let mut layout = TileLayout::new();
        layout
            .set_extent([[1.0, 2.0], [3.0, 4.0]])
            .unwrap()
            .set_tile_size(512.0)
            .unwrap()
            .set_clamp_x(false)
            .set_order(TileOrder::RowMajor);

        let options = layout.options();
        let restored = TileLayout::from_options(&options).unwrap();
        assert_eq!(restored.options(), options);
        assert_eq!(restored.tile_size(), 512.0);
        assert!(!restored.clamp_x());
    }

    #[test]
    fn test_apply_options_is_all_or_nothing() {
        let mut layout = TileLayout::new();
        let options = TileLayoutOptions {
            tile_size: -1.0,
            clamp_x: false,
            ..Default::default()
        };
        assert!(layout.apply_options(&options).is_err());
        assert!(layout.clamp_x());
    }
}
