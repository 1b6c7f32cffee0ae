//! Per-role display metadata and name formatting for renderers.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::member::Role;

/// Longest name shown inside a hexagon before truncation.
pub const DISPLAY_NAME_CHARS: usize = 12;

/// Shown for members without a usable name.
pub const UNKNOWN_NAME: &str = "Unknown Player";

/// How a role is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStyle {
    pub label: String,
    pub icon: String,
    /// CSS color
    pub color: String,
    pub description: String,
}

impl RoleStyle {
    fn new(label: &str, icon: &str, color: &str, description: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            description: description.to_string(),
        }
    }
}

/// Display metadata for every role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleStyles {
    pub leader: RoleStyle,
    pub officer: RoleStyle,
    pub member: RoleStyle,
}

impl RoleStyles {
    /// Style for `role`.
    pub fn get(&self, role: Role) -> &RoleStyle {
        match role {
            Role::Leader => &self.leader,
            Role::Officer => &self.officer,
            Role::Member => &self.member,
        }
    }
}

impl Default for RoleStyles {
    fn default() -> Self {
        Self {
            leader: RoleStyle::new("Leader", "👑", "#f59e0b", "Alliance leader with full permissions"),
            officer: RoleStyle::new("Officer", "🛡️", "#8b5cf6", "Alliance officer with management permissions"),
            member: RoleStyle::new("Member", "⚔️", "#06b6d4", "Regular alliance member"),
        }
    }
}

/// Shorten `name` to at most `max_chars` characters, ending in `...` when cut.
///
/// ```
/// use hive_roster::display_name;
///
/// assert_eq!(display_name("Gamma Scout", 12), "Gamma Scout");
/// assert_eq!(display_name("Commander Alpha", 12), "Commander...");
/// ```
pub fn display_name(name: &str, max_chars: usize) -> Cow<'_, str> {
    if name.trim().is_empty() {
        return Cow::Borrowed(UNKNOWN_NAME);
    }
    if name.chars().count() <= max_chars {
        return Cow::Borrowed(name);
    }
    let kept: String = name.chars().take(max_chars.saturating_sub(3)).collect();
    Cow::Owned(format!("{kept}..."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_styles() {
        let styles = RoleStyles::default();
        assert_eq!(styles.get(Role::Leader).label, "Leader");
        assert_eq!(styles.get(Role::Officer).color, "#8b5cf6");
        assert_eq!(styles.get(Role::Member).icon, "⚔️");
    }

    #[test]
    fn short_names_are_untouched() {
        assert!(matches!(display_name("Echo", 12), Cow::Borrowed("Echo")));
        assert_eq!(display_name("Delta Suppor", 12), "Delta Suppor");
    }

    #[test]
    fn long_names_are_cut() {
        assert_eq!(display_name("Delta Support", 12), "Delta Sup...");
        assert_eq!(display_name("ééééééééééééé", 12), "ééééééééé...");
    }

    #[test]
    fn blank_names_fall_back() {
        assert_eq!(display_name("", 12), UNKNOWN_NAME);
        assert_eq!(display_name("  ", 12), UNKNOWN_NAME);
    }
}
