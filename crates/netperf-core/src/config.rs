//! Configuration types for netperf.
//!
//! [`Config::load`] layers an optional user TOML file on top of the embedded
//! defaults. [`Config::defaults`] returns the same defaults without touching
//! the filesystem (useful in tests). There is no implicit config location:
//! a file is only read when the caller passes one.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::ExportFormat;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[validate]
limit = 40

[scan]
format          = "csv"
output_location = "program"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validate: ValidateConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

/// `[validate]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateConfig {
    /// Maximum number of matching lines printed.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize { 40 }

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// `[scan]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub format: ExportFormat,
    /// Where the export lands when no explicit output path is given.
    #[serde(default)]
    pub output_location: OutputLocation,
}

/// Directory that receives `<input-name>.<ext>` when `--out` is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLocation {
    /// Next to the running executable.
    #[default]
    Program,
    /// The input file's parent directory, or the input directory itself.
    Input,
    /// The current working directory.
    Cwd,
}

impl OutputLocation {
    /// Resolve the directory for an export derived from `input`.
    pub fn resolve(self, input: &Path) -> anyhow::Result<PathBuf> {
        match self {
            OutputLocation::Program => {
                let exe = std::env::current_exe()?;
                Ok(exe
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(".")))
            }
            OutputLocation::Input if input.is_dir() => Ok(input.to_path_buf()),
            OutputLocation::Input => Ok(input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))),
            OutputLocation::Cwd => Ok(std::env::current_dir()?),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, overlaid with `path` when given.
    ///
    /// A missing or malformed user file is an error: the caller asked for it
    /// explicitly.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
