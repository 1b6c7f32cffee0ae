//! Error types for hive-roster.

use std::path::PathBuf;

use hive_layout::LayoutError;
use thiserror::Error;

use crate::member::MemberId;
use crate::validation::{Field, FieldError};

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors returned by roster store operations.
///
/// None of these are fatal: the store is unchanged and usable after any of
/// them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// Malformed input reached the layout engine
    #[error(transparent)]
    InvalidArgument(#[from] LayoutError),

    /// A draft or patch field broke a validation rule
    #[error("{field} {reason}")]
    ValidationFailed { field: Field, reason: String },

    /// The addition would push the hive past the bottom of the canvas
    #[error("no room for {requested} members on a canvas {canvas_height}px tall")]
    CapacityExceeded { requested: usize, canvas_height: f64 },

    /// No member has this id
    #[error("member {0} not found")]
    NotFound(MemberId),

    /// Every member id has been handed out
    #[error("no member ids left to assign")]
    IdsExhausted,

    /// The validation rules cannot accept any member
    #[error("invalid validation rules: {0}")]
    InvalidRules(String),

    /// A seeded member was rejected
    #[error("cannot seed member {id}: {reason}")]
    InvalidSeed { id: MemberId, reason: String },
}

impl RosterError {
    /// The offending field, for inline display next to a form input.
    pub fn field(&self) -> Option<Field> {
        match self {
            RosterError::ValidationFailed { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<FieldError> for RosterError {
    fn from(e: FieldError) -> Self {
        RosterError::ValidationFailed {
            field: e.field,
            reason: e.reason,
        }
    }
}

/// A role name outside the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

/// Errors loading or checking a board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for a board
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Canvas, tiers or grid are unusable
    #[error("invalid layout config: {0}")]
    Layout(#[from] LayoutError),

    /// Validation rules contradict themselves
    #[error("invalid validation rules: {0}")]
    Rules(String),
}
