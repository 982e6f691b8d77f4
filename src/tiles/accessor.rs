//! Scale and translate accessors
//!
//! A layout reads its world scale and world translate from the context passed
//! to [`TileLayout::compute`] through an [`Accessor`]: either a constant fixed
//! at configuration time or a function of the context.
//!
//! [`TileLayout::compute`]: crate::tiles::layout::TileLayout::compute

use std::fmt;
use std::sync::Arc;

/// Either a constant value or a function of the invocation context `C`
pub enum Accessor<C, T> {
    Constant(T),
    Function(Arc<dyn Fn(&C) -> T + Send + Sync>),
}

impl<C, T> Accessor<C, T> {
    /// Wraps a closure reading the value from the context
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&C) -> T + Send + Sync + 'static,
    {
        Accessor::Function(Arc::new(f))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Accessor::Constant(_))
    }
}

impl<C, T: Clone> Accessor<C, T> {
    /// Evaluates the accessor for one invocation
    pub fn resolve(&self, ctx: &C) -> T {
        match self {
            Accessor::Constant(value) => value.clone(),
            Accessor::Function(f) => f(ctx),
        }
    }
}

impl<C, T: Clone> Clone for Accessor<C, T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Constant(value) => Accessor::Constant(value.clone()),
            Accessor::Function(f) => Accessor::Function(Arc::clone(f)),
        }
    }
}

impl<C, T: fmt::Debug> fmt::Debug for Accessor<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Accessor::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl<C> From<f64> for Accessor<C, f64> {
    fn from(value: f64) -> Self {
        Accessor::Constant(value)
    }
}

impl<C> From<[f64; 2]> for Accessor<C, [f64; 2]> {
    fn from(value: [f64; 2]) -> Self {
        Accessor::Constant(value)
    }
}

impl<C> From<(f64, f64)> for Accessor<C, [f64; 2]> {
    fn from((x, y): (f64, f64)) -> Self {
        Accessor::Constant([x, y])
    }
}
