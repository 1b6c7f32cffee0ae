//! Connector lines between nearby nodes.
//!
//! Two nodes are connected when their centers are closer than
//! `radius * 2 * spacing * 1.1` for the active tier. The pairwise scan is
//! O(n²), which is fine for rosters that fit on one canvas.

use std::collections::BTreeSet;

use crate::error::{LayoutError, Result};
use crate::geometry::Position;
use crate::tier::SizeTier;

/// Slack factor applied on top of `radius * 2 * spacing`.
pub const CONNECTOR_SLACK: f64 = 1.1;

/// An unordered pair of roster indices, stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connector {
    a: usize,
    b: usize,
}

impl Connector {
    /// Create a connector; argument order does not matter.
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            a: x.min(y),
            b: x.max(y),
        }
    }

    /// Lower index.
    #[inline]
    pub const fn a(&self) -> usize {
        self.a
    }

    /// Higher index.
    #[inline]
    pub const fn b(&self) -> usize {
        self.b
    }

    /// Whether either end is `index`.
    pub const fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

/// Check if two positions are within connector reach at `tier`.
pub fn are_connected(a: &Position, b: &Position, tier: SizeTier) -> bool {
    a.distance(b) < tier.connector_reach()
}

/// All connectors between `positions` at `tier`.
///
/// Pairs are keyed by [`Position::index`]. Non-finite coordinates are
/// rejected.
pub fn connectors_for(positions: &[Position], tier: SizeTier) -> Result<BTreeSet<Connector>> {
    if let Some(bad) = positions.iter().find(|p| !p.is_finite()) {
        return Err(LayoutError::invalid(format!(
            "position {bad} has non-finite coordinates"
        )));
    }

    let mut connectors = BTreeSet::new();
    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            if are_connected(a, b, tier) {
                connectors.insert(Connector::new(a.index, b.index));
            }
        }
    }
    Ok(connectors)
}
