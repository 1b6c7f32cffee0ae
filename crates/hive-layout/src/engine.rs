//! Layout engine bundling canvas, tier table and grid.

use std::collections::BTreeSet;

use crate::connectors::{connectors_for, Connector};
use crate::error::Result;
use crate::geometry::{Canvas, Position};
use crate::grid::GridLayout;
use crate::tier::{SizeTier, TierTable};

/// Result of laying out one roster size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Tier every node is drawn at
    pub tier: SizeTier,
    /// One position per roster index, in roster order
    pub positions: Vec<Position>,
}

impl Layout {
    /// Number of laid-out nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing was laid out.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Connectors between the laid-out nodes.
    pub fn connectors(&self) -> Result<BTreeSet<Connector>> {
        connectors_for(&self.positions, self.tier)
    }
}

/// Layout engine with injected configuration.
///
/// All operations are pure functions of the engine's fields and the
/// requested count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutEngine {
    /// Drawable area
    pub canvas: Canvas,
    /// Size tier breakpoints
    pub tiers: TierTable,
    /// Grid packing parameters
    pub grid: GridLayout,
}

impl LayoutEngine {
    /// Create an engine, validating every part of its configuration.
    pub fn new(canvas: Canvas, tiers: TierTable, grid: GridLayout) -> Result<Self> {
        let engine = Self { canvas, tiers, grid };
        engine.validate()?;
        Ok(engine)
    }

    /// Validate canvas, tiers and grid, including that at least one node fits
    /// across the canvas.
    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        self.tiers.validate()?;
        self.grid.columns(&self.canvas)?;
        Ok(())
    }

    /// Tier for `count` nodes.
    pub fn select_size_tier(&self, count: usize) -> SizeTier {
        self.tiers.select(count)
    }

    /// Positions for `count` nodes.
    pub fn compute_positions(&self, count: usize) -> Result<Vec<Position>> {
        self.grid.compute_positions(count, &self.canvas)
    }

    /// Whether `count` nodes would run past the bottom of the canvas.
    pub fn would_overflow(&self, count: usize) -> Result<bool> {
        self.grid
            .would_overflow(count, &self.canvas, self.select_size_tier(count))
    }

    /// Tier and positions for `count` nodes.
    pub fn layout(&self, count: usize) -> Result<Layout> {
        Ok(Layout {
            tier: self.select_size_tier(count),
            positions: self.compute_positions(count)?,
        })
    }
}
