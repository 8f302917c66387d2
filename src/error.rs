use std::path::PathBuf;

use palette_layers::{PaletteError, SplitError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid palette: {0}")]
    InvalidPalette(#[from] PaletteError),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SplitError> for PipelineError {
    fn from(e: SplitError) -> Self {
        use palette_layers::ExtractError;

        match e {
            SplitError::Palette(e) => PipelineError::InvalidPalette(e),
            SplitError::Extract(ExtractError::UnsupportedDimensions { width, height }) => {
                PipelineError::UnsupportedDimensions { width, height }
            }
            other => PipelineError::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid file name template: {0}")]
    Template(String),

    #[error("Invalid mark radius {0}: must be finite and greater than zero")]
    InvalidMarkRadius(f32),

    #[error("Layer name '{0}' is used by more than one color")]
    DuplicateLayerName(String),

    #[error("Output {} would be written more than once", .0.display())]
    OutputCollision(PathBuf),

    #[error("Output {} would overwrite the input image", .0.display())]
    OverwritesInput(PathBuf),
}
