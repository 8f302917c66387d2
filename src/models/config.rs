use std::path::{Path, PathBuf};

use palette_layers::{Palette, PaletteError, DEFAULT_BACKGROUND_NAME, DEFAULT_MARK_RADIUS};
use serde::Deserialize;

use crate::error::ConfigError;

/// Brand colors used when no configuration file is given.
pub const DEFAULT_PALETTE: [(&str, &str); 3] = [
    ("black", "12070a"),
    ("yellow", "eab42e"),
    ("red", "bf292b"),
];

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Ordered palette; order decides tie-breaks and layer order
    #[serde(default = "default_palette")]
    pub palette: Vec<PaletteColor>,

    /// Name reported for the white background layer
    #[serde(default = "default_background_name")]
    pub background_name: String,

    /// Radius of each point mark in the SVG layers
    #[serde(default = "default_mark_radius")]
    pub mark_radius: f32,

    /// What to do when an output file cannot be written
    #[serde(default)]
    pub on_write_error: WritePolicy,

    /// Re-compress emitted PNGs with oxipng
    #[serde(default)]
    pub optimize_png: bool,

    #[serde(default)]
    pub output: OutputConfig,
}

/// A named palette color as written in the config file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteColor {
    pub name: String,
    /// Hex color: `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`
    pub color: String,
}

/// Output file naming
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Directory for all outputs; defaults to the input file's directory
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Appended to the input stem for the quantized image
    #[serde(default = "default_quantized_suffix")]
    pub quantized_suffix: String,

    /// Tera template for layer file names (without extension).
    /// Context: `stem`, `name`, `hex`, `r`, `g`, `b`
    #[serde(default = "default_layer_name")]
    pub layer_name: String,
}

/// Behavior when writing one output file fails
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// Stop the run at the first failed write
    #[default]
    Abort,
    /// Log the failure, record it in the report and keep going
    Skip,
}

fn default_palette() -> Vec<PaletteColor> {
    DEFAULT_PALETTE
        .iter()
        .map(|&(name, color)| PaletteColor {
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
}

fn default_background_name() -> String {
    DEFAULT_BACKGROUND_NAME.to_string()
}

fn default_mark_radius() -> f32 {
    DEFAULT_MARK_RADIUS
}

fn default_quantized_suffix() -> String {
    "_quantized".to_string()
}

fn default_layer_name() -> String {
    "{{ stem }}_{{ hex }}".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            quantized_suffix: default_quantized_suffix(),
            layer_name: default_layer_name(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            background_name: default_background_name(),
            mark_radius: default_mark_radius(),
            on_write_error: WritePolicy::default(),
            optimize_png: false,
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, or the defaults when no path
    /// is given.
    ///
    /// An explicit file that cannot be read or parsed is an error; there is
    /// no silent fallback to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using built-in palette");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            colors = config.palette.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Build the validated palette.
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        let entries: Vec<(&str, &str)> = self
            .palette
            .iter()
            .map(|c| (c.name.as_str(), c.color.as_str()))
            .collect();
        Palette::from_hex(&entries)
    }
}
