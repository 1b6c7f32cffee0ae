//! Size tiers: node radius and spacing as a step function of roster size.
//!
//! Breakpoints are hand-tuned for visual density rather than derived from a
//! formula, so they live in a table that callers may replace.
//!
//! | count   | radius | spacing |
//! |---------|--------|---------|
//! | ≤ 1     | 80     | 1.8     |
//! | ≤ 7     | 70     | 1.6     |
//! | ≤ 19    | 60     | 1.5     |
//! | ≤ 37    | 50     | 1.4     |
//! | ≤ 61    | 40     | 1.3     |
//! | ≤ 91    | 35     | 1.25    |
//! | larger  | 30     | 1.2     |

use crate::connectors::CONNECTOR_SLACK;
use crate::error::{LayoutError, Result};

/// Uniform node size for one roster count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeTier {
    /// Hexagon radius (center to corner)
    pub radius: f64,
    /// Spacing multiplier used for connector reach
    pub spacing: f64,
}

impl SizeTier {
    /// Create a new tier.
    pub const fn new(radius: f64, spacing: f64) -> Self {
        Self { radius, spacing }
    }

    /// Center distance below which two nodes are joined by a connector.
    ///
    /// `radius * 2 * spacing * 1.1`
    #[inline]
    pub fn connector_reach(&self) -> f64 {
        self.radius * 2.0 * self.spacing * CONNECTOR_SLACK
    }

    /// Check that radius and spacing are finite and positive.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.radius) || !ok(self.spacing) {
            return Err(LayoutError::invalid(format!(
                "tier radius and spacing must be finite and positive, got {{radius: {}, spacing: {}}}",
                self.radius, self.spacing
            )));
        }
        Ok(())
    }
}

/// A tier that applies up to and including `max_count` nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierBreakpoint {
    /// Inclusive upper bound on roster count
    pub max_count: usize,
    /// Tier used at or below the bound
    pub tier: SizeTier,
}

impl TierBreakpoint {
    /// Create a new breakpoint.
    pub const fn new(max_count: usize, radius: f64, spacing: f64) -> Self {
        Self {
            max_count,
            tier: SizeTier::new(radius, spacing),
        }
    }
}

/// Reference breakpoints, ascending.
pub const REFERENCE_TIERS: [TierBreakpoint; 6] = [
    TierBreakpoint::new(1, 80.0, 1.8),
    TierBreakpoint::new(7, 70.0, 1.6),
    TierBreakpoint::new(19, 60.0, 1.5),
    TierBreakpoint::new(37, 50.0, 1.4),
    TierBreakpoint::new(61, 40.0, 1.3),
    TierBreakpoint::new(91, 35.0, 1.25),
];

/// Tier for counts above the last reference breakpoint.
pub const FALLBACK_TIER: SizeTier = SizeTier::new(30.0, 1.2);

/// Select the reference tier for `count` nodes.
///
/// # Examples
///
/// ```
/// use hive_layout::select_size_tier;
///
/// assert_eq!(select_size_tier(0).radius, 80.0);
/// assert_eq!(select_size_tier(7).radius, 70.0);
/// assert_eq!(select_size_tier(8).radius, 60.0);
/// assert_eq!(select_size_tier(500).radius, 30.0);
/// ```
pub fn select_size_tier(count: usize) -> SizeTier {
    select_from(&REFERENCE_TIERS, FALLBACK_TIER, count)
}

fn select_from(breakpoints: &[TierBreakpoint], fallback: SizeTier, count: usize) -> SizeTier {
    breakpoints
        .iter()
        .find(|bp| count <= bp.max_count)
        .map_or(fallback, |bp| bp.tier)
}

/// Configurable breakpoint table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierTable {
    breakpoints: Vec<TierBreakpoint>,
    fallback: SizeTier,
}

impl TierTable {
    /// Create a table, rejecting unsorted bounds or invalid tiers.
    pub fn new(breakpoints: Vec<TierBreakpoint>, fallback: SizeTier) -> Result<Self> {
        let table = Self { breakpoints, fallback };
        table.validate()?;
        Ok(table)
    }

    /// Check ordering and tier geometry.
    ///
    /// Deserialized tables skip [`TierTable::new`], so configuration loaders
    /// must call this.
    pub fn validate(&self) -> Result<()> {
        for bp in &self.breakpoints {
            bp.tier.validate()?;
        }
        self.fallback.validate()?;

        if let Some(pair) = self
            .breakpoints
            .windows(2)
            .find(|pair| pair[0].max_count >= pair[1].max_count)
        {
            return Err(LayoutError::invalid(format!(
                "tier breakpoints must be strictly ascending, found {} before {}",
                pair[0].max_count, pair[1].max_count
            )));
        }
        Ok(())
    }

    /// Select the tier for `count` nodes.
    pub fn select(&self, count: usize) -> SizeTier {
        select_from(&self.breakpoints, self.fallback, count)
    }

    /// Breakpoints in ascending order.
    pub fn breakpoints(&self) -> &[TierBreakpoint] {
        &self.breakpoints
    }

    /// Tier used past the last breakpoint.
    pub fn fallback(&self) -> SizeTier {
        self.fallback
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            breakpoints: REFERENCE_TIERS.to_vec(),
            fallback: FALLBACK_TIER,
        }
    }
}
