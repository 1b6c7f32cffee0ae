//! Hive Roster
//!
//! In-memory alliance roster that keeps a hexagon layout in step with its
//! members.
//!
//! # Architecture
//!
//! - **Store**: Owns the member list; validates, mutates and reflows
//! - **Validation**: Field rules for user-entered drafts and patches
//! - **Config**: Canvas, tiers, grid, rules and role styles, loaded from TOML
//! - **View**: Members joined with positions and connectors for rendering
//! - **Command**: Line commands used by the `hive-board` binary
//!
//! # Usage
//!
//! ```
//! use hive_roster::{BoardConfig, MemberDraft, RosterError, RosterStore};
//!
//! let mut store = RosterStore::new(BoardConfig::default()).unwrap();
//! let alpha = store.add(&MemberDraft::new("Alpha", 5, "member")).unwrap();
//! assert_eq!(alpha.id.value(), 1);
//! assert_eq!(store.positions()[0].x, 80.0);
//!
//! let err = store.add(&MemberDraft::new("Beta", 31, "member")).unwrap_err();
//! assert!(matches!(err, RosterError::ValidationFailed { .. }));
//! assert_eq!(store.len(), 1);
//! ```

mod command;
mod config;
mod error;
mod member;
mod roles;
mod store;
mod validation;
mod view;

pub use command::{execute, Command, Outcome, ParseError, USAGE};
pub use config::BoardConfig;
pub use error::{ConfigError, Result, RosterError, UnknownRole};
pub use member::{sample_roster, Member, MemberDraft, MemberId, MemberPatch, Role};
pub use roles::{display_name, RoleStyle, RoleStyles, DISPLAY_NAME_CHARS, UNKNOWN_NAME};
pub use store::RosterStore;
pub use validation::{Field, FieldError, ValidDraft, ValidPatch, ValidationRules, LEVEL_MAX, LEVEL_MIN, NAME_MAX_CHARS};
pub use view::{BoardView, PlacedMember, RoleCounts};

pub use hive_layout::{Canvas, Connector, Position, SizeTier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_board_fits_default_canvas() {
        let store = RosterStore::with_members(BoardConfig::default(), sample_roster()).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.positions().len(), 5);
        assert!(!store.engine().would_overflow(store.len()).unwrap());
    }

    #[test]
    fn error_messages() {
        let err = RosterError::ValidationFailed {
            field: Field::Level,
            reason: "must be between 1 and 30".to_string(),
        };
        assert_eq!(err.to_string(), "level must be between 1 and 30");
        assert_eq!(RosterError::NotFound(MemberId(4)).to_string(), "member 4 not found");
    }
}
