//! Board configuration.
//!
//! Everything here is static data supplied once at startup and handed to
//! [`crate::RosterStore::new`]. Every section is optional in TOML:
//!
//! ```toml
//! [canvas]
//! width = 1600.0
//! height = 900.0
//!
//! [grid]
//! node_radius = 80.0
//! padding = 5.0
//!
//! [rules]
//! name_max_chars = 50
//! level_min = 1
//! level_max = 30
//!
//! [tiers]
//! fallback = { radius = 30.0, spacing = 1.2 }
//! breakpoints = [
//!     { max_count = 1, tier = { radius = 80.0, spacing = 1.8 } },
//!     { max_count = 7, tier = { radius = 70.0, spacing = 1.6 } },
//! ]
//!
//! [roles.leader]
//! label = "Leader"
//! icon = "👑"
//! color = "#f59e0b"
//! description = "Alliance leader with full permissions"
//! ```

use std::path::Path;

use hive_layout::{Canvas, GridLayout, LayoutEngine, TierTable};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::roles::RoleStyles;
use crate::validation::ValidationRules;

/// Configuration for one board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Drawable area
    pub canvas: Canvas,
    /// Size tier breakpoints
    pub tiers: TierTable,
    /// Grid packing parameters
    pub grid: GridLayout,
    /// Field rules for drafts and patches
    pub rules: ValidationRules,
    /// Per-role display metadata
    pub roles: RoleStyles,
}

impl BoardConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), canvas = %config.canvas, "loaded board config");
        Ok(config)
    }

    /// Check layout parameters and validation rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine()?;
        self.rules.check().map_err(ConfigError::Rules)
    }

    /// Build the layout engine this configuration describes.
    pub fn engine(&self) -> Result<LayoutEngine, hive_layout::LayoutError> {
        LayoutEngine::new(self.canvas, self.tiers.clone(), self.grid)
    }
}
