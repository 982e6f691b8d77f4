//! Prelude module for common maplet-tile types and traits
//!
//! This module re-exports the most commonly used types and functions
//! for easy importing with `use maplet_tile::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    config::{Numeric, TileLayoutOptions},
    constants::{DEFAULT_EXTENT, DEFAULT_TILE_SIZE, MAX_ZOOM},
    geo::{Point, TileCoord},
    transform::ZoomTransform,
};

pub use crate::tiles::{
    accessor::Accessor,
    layout::{TileLayout, TileOrder},
    tileset::TileSet,
    wrap::wrap_coordinate,
};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;
