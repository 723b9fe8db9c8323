//! On-disk tile set documents: generator bounds plus base tile definitions.
//!
//! Files ending in `.toml` are read as TOML; anything else is read as JSON.
//! Both carry the same shape:
//! - `format_version`: currently 1.
//! - `generator`: optional overrides for [`GeneratorConfig`].
//! - `tiles`: base tiles with `id`, `weight`, `rotation` and `edges`.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use toml::de;

use crate::wfc::{GeneratorConfig, TileDefinition};

pub const TILESET_FORMAT_VERSION: u32 = 1;

fn default_format_version() -> u32 {
    TILESET_FORMAT_VERSION
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TilesetFile {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub generator: GeneratorConfig,
    pub tiles: Vec<TileDefinition>,
}

/// Why a tile set file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum TilesetLoadError {
    #[error("tile set I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid TOML tile set: {0}")]
    Toml(#[from] de::Error),
    #[error("invalid JSON tile set: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported tile set format version {found}, expected {TILESET_FORMAT_VERSION}")]
    UnsupportedVersion { found: u32 },
}

impl TilesetFile {
    pub fn new(tiles: Vec<TileDefinition>) -> Self {
        Self {
            format_version: TILESET_FORMAT_VERSION,
            generator: GeneratorConfig::default(),
            tiles,
        }
    }

    pub fn load(path: &Path) -> Result<Self, TilesetLoadError> {
        let content = fs::read_to_string(path)?;
        if is_toml(path) { Self::from_toml_str(&content) } else { Self::from_json_str(&content) }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TilesetLoadError> {
        let file: Self = toml::from_str(content)?;
        file.check_version()
    }

    pub fn from_json_str(content: &str) -> Result<Self, TilesetLoadError> {
        let file: Self = serde_json::from_str(content)?;
        file.check_version()
    }

    /// Writes through a temporary sibling file so readers never see a partial document.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let encoded = if is_toml(path) {
            toml::to_string_pretty(self).map_err(io::Error::other)?
        } else {
            serde_json::to_string_pretty(self).map_err(io::Error::other)?
        };
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, encoded)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    fn check_version(self) -> Result<Self, TilesetLoadError> {
        if self.format_version != TILESET_FORMAT_VERSION {
            return Err(TilesetLoadError::UnsupportedVersion { found: self.format_version });
        }
        Ok(self)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("toml"))
}
