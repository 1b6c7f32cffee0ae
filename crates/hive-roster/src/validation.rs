//! Field rules for drafts and patches.
//!
//! A draft is checked field by field and every failure is reported, so a
//! form can flag all bad inputs at once (`check_*`). Store operations use
//! `validate_*`, which stop at the first failure.

use serde::{Deserialize, Serialize};

use crate::member::{Member, MemberDraft, MemberPatch, Role};

/// Default maximum name length, in characters.
pub const NAME_MAX_CHARS: usize = 50;

/// Default lowest allowed level.
pub const LEVEL_MIN: i64 = 1;

/// Default highest allowed level.
pub const LEVEL_MAX: i64 = 30;

/// A member field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Level,
    Role,
}

impl Field {
    /// Lowercase field name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Level => "level",
            Field::Role => "role",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub reason: String,
}

impl FieldError {
    fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Draft values that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub level: u32,
    pub role: Role,
}

/// Patch values that passed every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidPatch {
    pub name: Option<String>,
    pub level: Option<u32>,
    pub role: Option<Role>,
}

impl ValidPatch {
    /// Overwrite the present fields on `member`.
    pub fn apply_to(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(level) = self.level {
            member.level = level;
        }
        if let Some(role) = self.role {
            member.role = role;
        }
    }
}

/// Limits applied to user-entered member data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Longest accepted name, in characters, after trimming
    pub name_max_chars: usize,
    /// Lowest accepted level
    pub level_min: i64,
    /// Highest accepted level
    pub level_max: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_max_chars: NAME_MAX_CHARS,
            level_min: LEVEL_MIN,
            level_max: LEVEL_MAX,
        }
    }
}

impl ValidationRules {
    /// Check that the rules themselves are satisfiable.
    pub fn check(&self) -> Result<(), String> {
        if self.name_max_chars == 0 {
            return Err("name_max_chars must be at least 1".to_string());
        }
        if self.level_min < 1 {
            return Err(format!("level_min must be at least 1, got {}", self.level_min));
        }
        if self.level_max < self.level_min {
            return Err(format!(
                "level_max {} is below level_min {}",
                self.level_max, self.level_min
            ));
        }
        if u32::try_from(self.level_max).is_err() {
            return Err(format!("level_max {} does not fit a level", self.level_max));
        }
        Ok(())
    }

    /// Trim and check a name.
    pub fn name(&self, raw: &str) -> Result<String, FieldError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(FieldError::new(Field::Name, "is required"));
        }
        if name.chars().count() > self.name_max_chars {
            return Err(FieldError::new(
                Field::Name,
                format!("must be at most {} characters", self.name_max_chars),
            ));
        }
        Ok(name.to_string())
    }

    /// Check a level against the configured range.
    pub fn level(&self, raw: i64) -> Result<u32, FieldError> {
        let out_of_range = || {
            FieldError::new(
                Field::Level,
                format!("must be between {} and {}", self.level_min, self.level_max),
            )
        };
        if raw < self.level_min || raw > self.level_max {
            return Err(out_of_range());
        }
        u32::try_from(raw).map_err(|_| out_of_range())
    }

    /// Parse a role name.
    pub fn role(&self, raw: &str) -> Result<Role, FieldError> {
        raw.parse().map_err(|_| {
            let allowed: Vec<_> = Role::ALL.iter().map(Role::as_str).collect();
            FieldError::new(Field::Role, format!("must be one of {}", allowed.join(", ")))
        })
    }

    /// Check a draft, stopping at the first failing field.
    pub fn validate_draft(&self, draft: &MemberDraft) -> Result<ValidDraft, FieldError> {
        Ok(ValidDraft {
            name: self.name(&draft.name)?,
            level: self.level(draft.level)?,
            role: self.role(&draft.role)?,
        })
    }

    /// Check a patch, stopping at the first failing field.
    pub fn validate_patch(&self, patch: &MemberPatch) -> Result<ValidPatch, FieldError> {
        Ok(ValidPatch {
            name: patch.name.as_deref().map(|n| self.name(n)).transpose()?,
            level: patch.level.map(|l| self.level(l)).transpose()?,
            role: patch.role.as_deref().map(|r| self.role(r)).transpose()?,
        })
    }

    /// Check every field of a draft.
    pub fn check_draft(&self, draft: &MemberDraft) -> Result<ValidDraft, Vec<FieldError>> {
        let name = self.name(&draft.name);
        let level = self.level(draft.level);
        let role = self.role(&draft.role);

        match (name, level, role) {
            (Ok(name), Ok(level), Ok(role)) => Ok(ValidDraft { name, level, role }),
            (name, level, role) => Err([name.err(), level.err(), role.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }

    /// Check the fields present in a patch.
    pub fn check_patch(&self, patch: &MemberPatch) -> Result<ValidPatch, Vec<FieldError>> {
        let name = patch.name.as_deref().map(|n| self.name(n)).transpose();
        let level = patch.level.map(|l| self.level(l)).transpose();
        let role = patch.role.as_deref().map(|r| self.role(r)).transpose();

        match (name, level, role) {
            (Ok(name), Ok(level), Ok(role)) => Ok(ValidPatch { name, level, role }),
            (name, level, role) => Err([name.err(), level.err(), role.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}
