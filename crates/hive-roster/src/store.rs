//! The roster store: members plus the layout derived from them.
//!
//! Each mutation validates its input, computes the layout for the resulting
//! roster size, and only then commits both together. A rejected operation
//! leaves members and layout untouched.

use std::collections::{BTreeSet, HashSet};

use hive_layout::{Connector, Layout, LayoutEngine, Position, SizeTier};
use tracing::{debug, info, warn};

use crate::config::BoardConfig;
use crate::error::{Result, RosterError};
use crate::member::{Member, MemberDraft, MemberId, MemberPatch};
use crate::roles::{display_name, RoleStyles, DISPLAY_NAME_CHARS};
use crate::validation::{FieldError, ValidationRules};
use crate::view::{BoardView, PlacedMember, RoleCounts};

/// In-memory roster for one board.
///
/// Invariant: `positions.len() == members.len()`, and `positions[i]` belongs
/// to `members[i]`.
#[derive(Debug, Clone)]
pub struct RosterStore {
    engine: LayoutEngine,
    rules: ValidationRules,
    roles: RoleStyles,
    members: Vec<Member>,
    tier: SizeTier,
    positions: Vec<Position>,
    /// Highest id ever assigned or seeded; ids are never reused
    highest_id: u64,
}

impl RosterStore {
    /// Create an empty board.
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_members(config, Vec::new())
    }

    /// Create a board seeded with existing members.
    ///
    /// The rules must be satisfiable. Seeded members must have unique
    /// non-zero ids and pass the field rules; names are stored trimmed.
    /// Capacity is not checked here; it only gates additions.
    pub fn with_members(config: BoardConfig, mut members: Vec<Member>) -> Result<Self> {
        let engine = config.engine()?;
        let rules = config.rules;
        rules.check().map_err(RosterError::InvalidRules)?;

        let mut seen = HashSet::with_capacity(members.len());
        for m in &mut members {
            if m.id.value() == 0 {
                return Err(RosterError::InvalidSeed {
                    id: m.id,
                    reason: "id must be positive".to_string(),
                });
            }
            if !seen.insert(m.id) {
                return Err(RosterError::InvalidSeed {
                    id: m.id,
                    reason: "duplicate id".to_string(),
                });
            }
            let id = m.id;
            let seed_error = |e: FieldError| RosterError::InvalidSeed {
                id,
                reason: e.to_string(),
            };
            let name = rules.name(&m.name).map_err(seed_error)?;
            rules.level(i64::from(m.level)).map_err(seed_error)?;
            m.name = name;
        }

        let Layout { tier, positions } = engine.layout(members.len())?;
        let highest_id = members.iter().map(|m| m.id.value()).max().unwrap_or(0);

        info!(members = members.len(), canvas = %engine.canvas, "roster board created");

        Ok(Self {
            engine,
            rules,
            roles: config.roles,
            members,
            tier,
            positions,
            highest_id,
        })
    }

    /// Add a member built from `draft`.
    ///
    /// Fails with `ValidationFailed` on a bad field, with
    /// `CapacityExceeded` when the new node would not fit the canvas, and
    /// with `IdsExhausted` once `u64::MAX` has been used.
    pub fn add(&mut self, draft: &MemberDraft) -> Result<Member> {
        let valid = self.rules.validate_draft(draft)?;
        let id = self
            .highest_id
            .checked_add(1)
            .map(MemberId)
            .ok_or(RosterError::IdsExhausted)?;

        let requested = self.members.len() + 1;
        if self.engine.would_overflow(requested)? {
            warn!(
                requested,
                canvas_height = self.engine.canvas.height,
                "roster addition rejected: canvas full"
            );
            return Err(RosterError::CapacityExceeded {
                requested,
                canvas_height: self.engine.canvas.height,
            });
        }
        let layout = self.engine.layout(requested)?;

        let member = Member {
            id,
            name: valid.name,
            level: valid.level,
            role: valid.role,
        };
        self.highest_id = id.value();
        self.members.push(member.clone());
        self.commit(layout);

        info!(%id, name = %member.name, role = %member.role, count = self.members.len(), "member added");
        Ok(member)
    }

    /// Overwrite the fields present in `patch` on member `id`.
    pub fn update(&mut self, id: MemberId, patch: &MemberPatch) -> Result<Member> {
        let index = self.index_of(id).ok_or_else(|| {
            warn!(%id, "update for unknown member");
            RosterError::NotFound(id)
        })?;
        let valid = self.rules.validate_patch(patch)?;
        let layout = self.engine.layout(self.members.len())?;

        let updated = {
            let member = &mut self.members[index];
            valid.apply_to(member);
            member.clone()
        };
        self.commit(layout);

        info!(%id, name = %updated.name, level = updated.level, role = %updated.role, "member updated");
        Ok(updated)
    }

    /// Remove member `id`.
    ///
    /// Later members keep their relative order but each moves one slot back,
    /// so their positions shift.
    pub fn remove(&mut self, id: MemberId) -> Result<()> {
        let index = self.index_of(id).ok_or_else(|| {
            warn!(%id, "remove for unknown member");
            RosterError::NotFound(id)
        })?;
        let layout = self.engine.layout(self.members.len() - 1)?;

        let removed = self.members.remove(index);
        self.commit(layout);

        info!(%id, name = %removed.name, count = self.members.len(), "member removed");
        Ok(())
    }

    fn commit(&mut self, layout: Layout) {
        debug_assert_eq!(layout.positions.len(), self.members.len());
        debug!(
            count = layout.positions.len(),
            radius = layout.tier.radius,
            spacing = layout.tier.spacing,
            "hive reflowed"
        );
        self.tier = layout.tier;
        self.positions = layout.positions;
    }

    fn index_of(&self, id: MemberId) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }

    /// Members in roster order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Look up a member by id.
    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Tier the current roster is drawn at.
    pub fn tier(&self) -> SizeTier {
        self.tier
    }

    /// Positions aligned with [`RosterStore::members`].
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Connectors between current nodes, computed fresh on every call.
    pub fn connectors(&self) -> Result<BTreeSet<Connector>> {
        Ok(hive_layout::connectors_for(&self.positions, self.tier)?)
    }

    /// Member count per role.
    pub fn role_counts(&self) -> RoleCounts {
        RoleCounts::tally(&self.members)
    }

    /// Layout engine in use.
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Field rules in use.
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Role display metadata.
    pub fn roles(&self) -> &RoleStyles {
        &self.roles
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> Result<BoardView> {
        let nodes = self
            .members
            .iter()
            .zip(&self.positions)
            .map(|(member, &position)| PlacedMember {
                member: member.clone(),
                position,
                label: display_name(&member.name, DISPLAY_NAME_CHARS).into_owned(),
            })
            .collect();

        Ok(BoardView {
            canvas: self.engine.canvas,
            tier: self.tier,
            nodes,
            connectors: self.connectors()?.into_iter().collect(),
            role_counts: self.role_counts(),
        })
    }
}
