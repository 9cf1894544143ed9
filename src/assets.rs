//! Asset loading with embedded fallbacks
//!
//! The palette and the config file are compiled into the binary. Each can be
//! overridden by a file on disk:
//!
//! - If the env var is NOT set: use the embedded asset only (no filesystem access)
//! - If the env var IS set and the file is missing: seed it with the embedded asset
//! - If the env var IS set and the file exists: read it from the filesystem

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Name of the bundled palette inside the embedded palettes folder
pub const DEFAULT_PALETTE: &str = "default.json";

/// Embedded palette files
#[derive(RustEmbed)]
#[folder = "palettes/"]
#[include = "*.json"]
struct EmbeddedPalettes;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Palette,
    Config,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 2] = [AssetCategory::Palette, AssetCategory::Config];
}

/// Report of seeding operations
#[derive(Debug, Default)]
pub struct SeedReport {
    pub palette_seeded: bool,
    pub config_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !self.palette_seeded && !self.config_seeded
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External palette file (from PALETTE_FILE env var)
    palette_file: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(palette_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            palette_file,
            config_file,
        }
    }

    /// Where the palette is read from, for log and status output
    pub fn palette_source(&self) -> String {
        match self.palette_file {
            Some(ref path) if path.exists() => path.display().to_string(),
            _ => format!("(embedded) {DEFAULT_PALETTE}"),
        }
    }

    /// Read the palette file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded default palette.
    pub fn read_palette(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.palette_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading palette from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedPalettes::get(DEFAULT_PALETTE)
            .map(|f| {
                tracing::trace!("Loading palette from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded palette not found: {DEFAULT_PALETTE}"),
                )
            })
    }

    /// Read the palette as a UTF-8 string
    pub fn read_palette_string(&self) -> io::Result<String> {
        let bytes = self.read_palette()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded copy of `category` to `path`, creating parent dirs
    fn write_embedded(category: AssetCategory, path: &std::path::Path) -> io::Result<bool> {
        let data = match category {
            AssetCategory::Palette => EmbeddedPalettes::get(DEFAULT_PALETTE),
            AssetCategory::Config => EmbeddedConfig::get("config.yaml"),
        };
        let Some(data) = data else {
            return Ok(false);
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &*data.data)?;
        Ok(true)
    }

    /// Seed missing files with embedded assets
    ///
    /// Only operates on paths that were configured (env var was set).
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        if let Some(ref path) = self.palette_file {
            if !path.exists() && Self::write_embedded(AssetCategory::Palette, path)? {
                report.palette_seeded = true;
                tracing::info!(path = %path.display(), "Seeded palette file with embedded default");
            }
        }

        if let Some(ref path) = self.config_file {
            if !path.exists() && Self::write_embedded(AssetCategory::Config, path)? {
                report.config_seeded = true;
                tracing::info!(path = %path.display(), "Seeded config file with embedded default");
            }
        }

        Ok(report)
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or defaults if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let path = match category {
                AssetCategory::Palette => self
                    .palette_file
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("./palette.json")),
                AssetCategory::Config => self
                    .config_file
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("./config.yaml")),
            };

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if Self::write_embedded(category, &path)? {
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Palette => EmbeddedPalettes::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}
