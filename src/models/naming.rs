use std::error::Error as _;
use std::path::{Path, PathBuf};

use palette_layers::Target;
use tera::{Context, Tera};

use crate::error::ConfigError;
use crate::models::OutputConfig;

const LAYER_TEMPLATE: &str = "layer_name";

/// Derives output file paths from the input path and the output config.
///
/// The layer name template is parsed once up front, so a broken template is
/// reported before any image is read.
pub struct OutputNamer {
    directory: Option<PathBuf>,
    quantized_suffix: String,
    tera: Tera,
}

impl OutputNamer {
    pub fn new(output: &OutputConfig) -> Result<Self, ConfigError> {
        let mut tera = Tera::default();
        tera.add_raw_template(LAYER_TEMPLATE, &output.layer_name)
            .map_err(|e| ConfigError::Template(describe(&e)))?;

        Ok(Self {
            directory: output.directory.clone(),
            quantized_suffix: output.quantized_suffix.clone(),
            tera,
        })
    }

    /// `{dir}/{stem}{suffix}.png`
    pub fn quantized_path(&self, input: &Path) -> PathBuf {
        self.output_dir(input)
            .join(format!("{}{}.png", file_stem(input), self.quantized_suffix))
    }

    /// Paths of the SVG and PNG files for one layer.
    pub fn layer_paths(
        &self,
        input: &Path,
        target: &Target,
    ) -> Result<(PathBuf, PathBuf), ConfigError> {
        let mut context = Context::new();
        context.insert("stem", &file_stem(input));
        context.insert("name", &target.name);
        context.insert("hex", &target.color.to_hex());
        context.insert("r", &target.color.r);
        context.insert("g", &target.color.g);
        context.insert("b", &target.color.b);

        let base = self
            .tera
            .render(LAYER_TEMPLATE, &context)
            .map_err(|e| ConfigError::Template(describe(&e)))?;
        let base = base.trim();
        if base.is_empty() {
            return Err(ConfigError::Template(format!(
                "layer '{}' rendered to an empty file name",
                target.name
            )));
        }

        let dir = self.output_dir(input);
        Ok((
            dir.join(format!("{base}.svg")),
            dir.join(format!("{base}.png")),
        ))
    }

    fn output_dir(&self, input: &Path) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        }
    }
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

/// Tera keeps the useful part of its messages in the source chain.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
