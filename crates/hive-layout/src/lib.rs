//! Hive Layout
//!
//! Pure layout engine for the hive board: places N hexagonal nodes on a
//! fixed-size canvas, picks a uniform size tier for them, and derives the
//! connector lines between nearby nodes.
//!
//! # Grid Packing
//!
//! Nodes are packed left-to-right, top-to-bottom. The grid pitch comes from
//! a fixed base radius (80) and padding (5), independent of the size tier,
//! so the column count depends only on canvas width:
//!
//! ```text
//! columns    = floor((width - r) / (2r + padding))
//! row_height = r * sqrt(3)
//! x(i)       = r + (i mod columns) * (2r + padding)
//! y(i)       = r + (i div columns) * (row_height + padding)
//! ```
//!
//! Every tier radius is at most the base radius and the row pitch exceeds
//! twice the largest multi-node tier radius, so computed nodes never
//! overlap.
//!
//! # Index Identity
//!
//! A [`Position`] carries the roster index it was computed for. Callers
//! pair `positions[i]` with the i-th roster entry; positions are recomputed
//! wholesale whenever the roster size changes and have no identity of
//! their own.
//!
//! # Example
//!
//! ```
//! use hive_layout::{Canvas, LayoutEngine};
//!
//! let engine = LayoutEngine::default();
//! let layout = engine.layout(3).unwrap();
//! assert_eq!(layout.positions.len(), 3);
//! assert_eq!(layout.tier.radius, 70.0);
//! assert!(!engine.would_overflow(3).unwrap());
//! assert_eq!(engine.canvas, Canvas::default());
//! ```

mod connectors;
mod engine;
mod error;
mod geometry;
mod grid;
mod hex;
mod tier;

pub use connectors::{are_connected, connectors_for, Connector, CONNECTOR_SLACK};
pub use engine::{Layout, LayoutEngine};
pub use error::{LayoutError, Result};
pub use geometry::{Canvas, Position, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use grid::{compute_positions, count_from_signed, would_overflow, GridLayout, DEFAULT_NODE_RADIUS, DEFAULT_PADDING};
pub use hex::{hex_corners, hex_path, HEX_CORNERS};
pub use tier::{select_size_tier, SizeTier, TierBreakpoint, TierTable, FALLBACK_TIER, REFERENCE_TIERS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_grid_fits_largest_multi_node_tier() {
        // Tier for two or more nodes must fit the row pitch.
        let grid = GridLayout::default();
        let tier = select_size_tier(2);
        assert!(grid.row_pitch() >= 2.0 * tier.radius);
        assert!(grid.column_pitch() >= 2.0 * tier.radius);
    }

    #[test]
    fn tiers_never_exceed_base_radius() {
        for breakpoint in REFERENCE_TIERS {
            assert!(breakpoint.tier.radius <= DEFAULT_NODE_RADIUS);
        }
        assert!(FALLBACK_TIER.radius <= DEFAULT_NODE_RADIUS);
    }
}
