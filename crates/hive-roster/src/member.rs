//! Roster members, drafts and patches.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownRole;

/// A unique member identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl MemberId {
    /// Get the raw id value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Rank within the alliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Alliance leader with full permissions
    Leader,
    /// Officer with management permissions
    Officer,
    /// Regular member
    Member,
}

impl Role {
    /// Every role, highest rank first.
    pub const ALL: [Role; 3] = [Role::Leader, Role::Officer, Role::Member];

    /// Lowercase wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Leader => "leader",
            Role::Officer => "officer",
            Role::Member => "member",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRole(wanted.to_string()))
    }
}

/// A validated alliance member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,
    /// Display name, trimmed
    pub name: String,
    /// Headquarters level
    pub level: u32,
    /// Rank
    pub role: Role,
}

impl Member {
    /// Create a member directly, bypassing validation.
    ///
    /// Used for seeding; [`crate::RosterStore::with_members`] validates
    /// seeded members before accepting them.
    pub fn new(id: u64, name: impl Into<String>, level: u32, role: Role) -> Self {
        Self {
            id: MemberId(id),
            name: name.into(),
            level,
            role,
        }
    }
}

/// User-entered values for a new member, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberDraft {
    pub name: String,
    pub level: i64,
    pub role: String,
}

impl MemberDraft {
    /// Create a draft from raw form values.
    pub fn new(name: impl Into<String>, level: i64, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            role: role.into(),
        }
    }
}

impl Default for MemberDraft {
    /// Blank form: no name, level 1, regular member.
    fn default() -> Self {
        Self {
            name: String::new(),
            level: 1,
            role: Role::Member.to_string(),
        }
    }
}

/// User-entered changes to an existing member. Absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub level: Option<i64>,
    pub role: Option<String>,
}

impl MemberPatch {
    /// Set the new name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the new level.
    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the new role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.level.is_none() && self.role.is_none()
    }
}

/// The five-member demo roster.
pub fn sample_roster() -> Vec<Member> {
    vec![
        Member::new(1, "Commander Alpha", 25, Role::Leader),
        Member::new(2, "Beta Warrior", 22, Role::Officer),
        Member::new(3, "Gamma Scout", 18, Role::Member),
        Member::new(4, "Delta Support", 20, Role::Member),
        Member::new(5, "Echo Sniper", 16, Role::Member),
    ]
}
