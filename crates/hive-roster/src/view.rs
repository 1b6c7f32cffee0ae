//! Board views handed to the presentation layer.

use hive_layout::{Canvas, Connector, Position, SizeTier};
use serde::{Deserialize, Serialize};

use crate::member::{Member, Role};

/// A member paired with the position computed for its roster index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedMember {
    pub member: Member,
    pub position: Position,
    /// Name shortened for display inside the hexagon
    pub label: String,
}

/// Member count per role, for the legend and header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub leader: usize,
    pub officer: usize,
    pub member: usize,
}

impl RoleCounts {
    /// Tally the roles of `members`.
    pub fn tally<'a>(members: impl IntoIterator<Item = &'a Member>) -> Self {
        let mut counts = Self::default();
        for m in members {
            match m.role {
                Role::Leader => counts.leader += 1,
                Role::Officer => counts.officer += 1,
                Role::Member => counts.member += 1,
            }
        }
        counts
    }

    /// Count for one role.
    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::Leader => self.leader,
            Role::Officer => self.officer,
            Role::Member => self.member,
        }
    }

    /// Count across all roles.
    pub fn total(&self) -> usize {
        self.leader + self.officer + self.member
    }
}

/// Everything a renderer needs for one frame.
///
/// `nodes[i]` is the member at roster index `i` joined with `positions[i]`;
/// connectors refer to those same indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub canvas: Canvas,
    pub tier: SizeTier,
    pub nodes: Vec<PlacedMember>,
    pub connectors: Vec<Connector>,
    pub role_counts: RoleCounts,
}

impl BoardView {
    /// Number of placed nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
