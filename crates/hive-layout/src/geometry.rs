//! Canvas bounds and node positions.

use crate::error::{LayoutError, Result};

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Drawable area that nodes must fit in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Canvas {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Canvas {
    /// Create a canvas, rejecting non-finite or non-positive dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that both dimensions are finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(LayoutError::invalid(format!(
                "canvas dimensions must be finite, got {self}"
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::invalid(format!(
                "canvas dimensions must be positive, got {self}"
            )));
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Center of the node drawn for roster index `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Roster index this position belongs to
    pub index: usize,
    /// Horizontal center
    pub x: f64,
    /// Vertical center
    pub y: f64,
}

impl Position {
    /// Create a new position.
    pub const fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }

    /// Euclidean distance between two centers.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({}, {})", self.index, self.x, self.y)
    }
}
