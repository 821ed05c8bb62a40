//! Editor configuration.
//!
//! Defaults, then an optional TOML file, then `LUMIGRAPH_*` environment
//! variables, each layer overriding the last.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::geometry::DEFAULT_RADIUS;

/// Tunable editor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Canvas width in canvas units.
    pub canvas_width: u32,
    /// Canvas height in canvas units.
    pub canvas_height: u32,
    /// Node hit-circle radius; the placement-exclusion ring is twice this.
    pub radius: i64,
    /// Graph file loaded at startup when no file argument is given.
    pub default_file: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            radius: DEFAULT_RADIUS,
            default_file: None,
        }
    }
}

impl EditorConfig {
    /// Loads configuration: defaults ← optional TOML file ← `LUMIGRAPH_*`
    /// env vars.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when a layer fails to parse or the merged values
    /// are out of range.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed("LUMIGRAPH_"))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.radius <= 0 {
            return Err(Error::Config(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(Error::Config("canvas dimensions must be nonzero".to_string()));
        }
        Ok(())
    }
}
