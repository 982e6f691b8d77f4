//! Serializable layout configuration
//!
//! [`TileLayoutOptions`] is the plain-data form of a [`TileLayout`]'s settings.
//! It can be loaded from JSON, where numeric fields go through the [`Numeric`]
//! coercion adapter: numbers, numeric strings and booleans are accepted, then
//! validated as finite. The layout itself only ever sees `f64`.
//!
//! [`TileLayout`]: crate::tiles::layout::TileLayout

use crate::core::bounds::Bounds;
use crate::core::constants::{DEFAULT_EXTENT, DEFAULT_TILE_SIZE};
use crate::tiles::layout::TileOrder;
use crate::{MapError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// A loosely typed numeric input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Numeric {
    /// Converts to a plain number. Unparseable text becomes NaN and blank
    /// text becomes zero.
    pub fn coerce(&self) -> f64 {
        match self {
            Numeric::Number(value) => *value,
            Numeric::Bool(true) => 1.0,
            Numeric::Bool(false) => 0.0,
            Numeric::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    0.0
                } else {
                    text.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }

    /// Coerces, then rejects NaN and infinities
    pub fn to_finite(&self, field: &str) -> Result<f64> {
        let value = self.coerce();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(MapError::InvalidConfiguration(format!(
                "{} must be a finite number, got {:?}",
                field, self
            )))
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<bool> for Numeric {
    fn from(value: bool) -> Self {
        Numeric::Bool(value)
    }
}

fn finite<'de, D>(deserializer: D, field: &str) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Numeric::deserialize(deserializer)?
        .to_finite(field)
        .map_err(serde::de::Error::custom)
}

fn finite_tile_size<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    finite(deserializer, "tile_size")
}

fn finite_zoom_delta<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    finite(deserializer, "zoom_delta")
}

fn finite_pair<'de, D>(deserializer: D) -> std::result::Result<[f64; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let [a, b] = <[Numeric; 2]>::deserialize(deserializer)?;
    let a = a.to_finite("size").map_err(serde::de::Error::custom)?;
    let b = b.to_finite("size").map_err(serde::de::Error::custom)?;
    Ok([a, b])
}

fn finite_extent<'de, D>(deserializer: D) -> std::result::Result<[[f64; 2]; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let [[x0, y0], [x1, y1]] = <[[Numeric; 2]; 2]>::deserialize(deserializer)?;
    let mut out = [[0.0; 2]; 2];
    for (slot, value) in out
        .iter_mut()
        .flatten()
        .zip([x0, y0, x1, y1].iter())
    {
        *slot = value
            .to_finite("extent")
            .map_err(serde::de::Error::custom)?;
    }
    Ok(out)
}

fn optional_size<'de, D>(deserializer: D) -> std::result::Result<Option<[f64; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "finite_pair")] [f64; 2]);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(size)| size))
}

/// Layout settings that can be stored and reloaded.
///
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TileLayoutOptions {
    /// Viewport extent `[[x0, y0], [x1, y1]]`
    #[serde(deserialize_with = "finite_extent")]
    pub extent: [[f64; 2]; 2],
    /// Shorthand for an extent anchored at the origin; wins over `extent`
    #[serde(
        deserialize_with = "optional_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<[f64; 2]>,
    #[serde(deserialize_with = "finite_tile_size")]
    pub tile_size: f64,
    #[serde(deserialize_with = "finite_zoom_delta")]
    pub zoom_delta: f64,
    /// Sets both axes; wins over `clamp_x` and `clamp_y`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clamp: Option<bool>,
    pub clamp_x: bool,
    pub clamp_y: bool,
    pub order: TileOrder,
}

impl Default for TileLayoutOptions {
    fn default() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            size: None,
            tile_size: DEFAULT_TILE_SIZE,
            zoom_delta: 0.0,
            clamp: None,
            clamp_x: true,
            clamp_y: true,
            order: TileOrder::default(),
        }
    }
}

impl TileLayoutOptions {
    /// Parses options from a JSON document and validates them
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file and validates them
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Effective `(clamp_x, clamp_y)`, with `clamp` taking precedence
    pub fn clamp_axes(&self) -> (bool, bool) {
        match self.clamp {
            Some(clamp) => (clamp, clamp),
            None => (self.clamp_x, self.clamp_y),
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The effective viewport extent, with `size` taking precedence
    pub fn bounds(&self) -> Result<Bounds> {
        match self.size {
            Some(size) => Bounds::try_from_size(size),
            None => Bounds::try_from_corners(self.extent),
        }
    }

    /// Checks every value a layout would reject
    pub fn validate(&self) -> Result<()> {
        self.bounds()?;
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(MapError::InvalidConfiguration(format!(
                "tile_size must be finite and positive, got {}",
                self.tile_size
            )));
        }
        if !self.zoom_delta.is_finite() {
            return Err(MapError::InvalidConfiguration(format!(
                "zoom_delta must be finite, got {}",
                self.zoom_delta
            )));
        }
        Ok(())
    }
}
