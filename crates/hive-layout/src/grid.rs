//! Grid packing of node centers onto the canvas.

use crate::error::{LayoutError, Result};
use crate::geometry::{Canvas, Position};
use crate::tier::{select_size_tier, SizeTier};

/// Base node radius used for the grid pitch.
pub const DEFAULT_NODE_RADIUS: f64 = 80.0;

/// Gap between neighbouring grid cells.
pub const DEFAULT_PADDING: f64 = 5.0;

/// Grid packing parameters.
///
/// The pitch is fixed by `node_radius` and `padding`; the size tier only
/// changes how large each node is drawn inside its cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridLayout {
    /// Radius that sets cell size and the margin from the canvas edge
    pub node_radius: f64,
    /// Gap between cells
    pub padding: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            node_radius: DEFAULT_NODE_RADIUS,
            padding: DEFAULT_PADDING,
        }
    }
}

impl GridLayout {
    /// Check that radius is finite and positive and padding finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.node_radius.is_finite() || self.node_radius <= 0.0 {
            return Err(LayoutError::invalid(format!(
                "grid node radius must be finite and positive, got {}",
                self.node_radius
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(LayoutError::invalid(format!(
                "grid padding must be finite and non-negative, got {}",
                self.padding
            )));
        }
        Ok(())
    }

    /// Height of one hexagon row: `r * sqrt(3)`.
    #[inline]
    pub fn row_height(&self) -> f64 {
        self.node_radius * 3f64.sqrt()
    }

    /// Horizontal distance between neighbouring centers.
    #[inline]
    pub fn column_pitch(&self) -> f64 {
        2.0 * self.node_radius + self.padding
    }

    /// Vertical distance between neighbouring centers.
    #[inline]
    pub fn row_pitch(&self) -> f64 {
        self.row_height() + self.padding
    }

    /// Number of columns that fit the canvas width.
    ///
    /// Fails when the canvas cannot hold even one column.
    pub fn columns(&self, canvas: &Canvas) -> Result<usize> {
        self.validate()?;
        canvas.validate()?;

        let columns = ((canvas.width - self.node_radius) / self.column_pitch()).floor();
        if columns < 1.0 {
            return Err(LayoutError::invalid(format!(
                "canvas {} is too narrow for a node of radius {}",
                canvas, self.node_radius
            )));
        }
        Ok(columns as usize)
    }

    /// Center of grid slot `index` given a column count.
    #[inline]
    pub fn slot(&self, index: usize, columns: usize) -> Position {
        let col = index % columns;
        let row = index / columns;
        Position::new(
            index,
            self.node_radius + col as f64 * self.column_pitch(),
            self.node_radius + row as f64 * self.row_pitch(),
        )
    }

    /// Positions for `count` nodes in roster order.
    ///
    /// Pure: the same `(count, canvas)` always yields the same sequence.
    pub fn compute_positions(&self, count: usize, canvas: &Canvas) -> Result<Vec<Position>> {
        canvas.validate()?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let columns = self.columns(canvas)?;
        Ok((0..count).map(|index| self.slot(index, columns)).collect())
    }

    /// Position of the last of `count` nodes, without laying out the rest.
    pub fn last_position(&self, count: usize, canvas: &Canvas) -> Result<Option<Position>> {
        canvas.validate()?;
        match count.checked_sub(1) {
            None => Ok(None),
            Some(last) => {
                let columns = self.columns(canvas)?;
                Ok(Some(self.slot(last, columns)))
            }
        }
    }

    /// Whether the last of `count` nodes, drawn at `tier`, extends past the
    /// bottom of the canvas.
    pub fn would_overflow(&self, count: usize, canvas: &Canvas, tier: SizeTier) -> Result<bool> {
        Ok(self
            .last_position(count, canvas)?
            .is_some_and(|last| last.y + tier.radius > canvas.height))
    }
}

/// Positions for `count` nodes using the default grid.
pub fn compute_positions(count: usize, canvas: &Canvas) -> Result<Vec<Position>> {
    GridLayout::default().compute_positions(count, canvas)
}

/// Overflow check using the default grid and the reference tier for `count`.
pub fn would_overflow(count: usize, canvas: &Canvas) -> Result<bool> {
    GridLayout::default().would_overflow(count, canvas, select_size_tier(count))
}

/// Convert a signed count from an outer layer, rejecting negatives.
pub fn count_from_signed(value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| LayoutError::invalid(format!("count must be non-negative, got {value}")))
}
