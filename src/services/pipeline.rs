use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use palette_layers::{targets_for, Layer, LogoSeparator, QuantizedImage, Rgb, Target};

use crate::error::{ConfigError, PipelineError, RenderError};
use crate::models::{AppConfig, OutputNamer, WritePolicy};
use crate::rendering::{encode_rgba_png, load_rgba, render_svg, write_file};

/// Outcome of one output file
#[derive(Debug, Clone, PartialEq)]
pub enum OutputStatus {
    Written,
    /// Write was skipped under [`WritePolicy::Skip`]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub status: OutputStatus,
}

impl OutputFile {
    pub fn is_written(&self) -> bool {
        self.status == OutputStatus::Written
    }
}

/// Files produced for one target color
#[derive(Debug, Clone)]
pub struct LayerReport {
    pub name: String,
    pub color: Rgb,
    pub marks: usize,
    pub svg: OutputFile,
    pub png: OutputFile,
}

/// Everything a run produced, in emission order
#[derive(Debug, Clone)]
pub struct RunReport {
    pub quantized: OutputFile,
    pub layers: Vec<LayerReport>,
}

impl RunReport {
    /// Outputs that could not be written.
    pub fn failures(&self) -> Vec<&OutputFile> {
        std::iter::once(&self.quantized)
            .chain(self.layers.iter().flat_map(|l| [&l.svg, &l.png]))
            .filter(|f| !f.is_written())
            .collect()
    }
}

/// Quantize-and-split pipeline: decode → separate → write outputs
pub struct LayerPipeline {
    separator: LogoSeparator,
    targets: Vec<Target>,
    namer: OutputNamer,
    on_write_error: WritePolicy,
    optimize_png: bool,
}

/// Where every output of one run goes, in emission order
struct OutputPlan {
    quantized: PathBuf,
    /// `(svg, png)` per target
    layers: Vec<(PathBuf, PathBuf)>,
}

impl LayerPipeline {
    /// Validate the configuration. Nothing is read or written yet, so a bad
    /// palette, mark radius or file name template fails before the input is
    /// touched.
    pub fn new(config: AppConfig) -> Result<Self, PipelineError> {
        let palette = config.palette()?;
        if !(config.mark_radius.is_finite() && config.mark_radius > 0.0) {
            return Err(ConfigError::InvalidMarkRadius(config.mark_radius).into());
        }

        let targets = targets_for(&palette, &config.background_name);
        let mut names = HashSet::with_capacity(targets.len());
        if let Some(dup) = targets.iter().find(|t| !names.insert(t.name.clone())) {
            return Err(ConfigError::DuplicateLayerName(dup.name.clone()).into());
        }

        let namer = OutputNamer::new(&config.output)?;
        let separator = LogoSeparator::new(palette)
            .mark_radius(config.mark_radius)
            .background_name(config.background_name);

        Ok(Self {
            separator,
            targets,
            namer,
            on_write_error: config.on_write_error,
            optimize_png: config.optimize_png,
        })
    }

    pub fn run(&self, input: &Path) -> Result<RunReport, PipelineError> {
        let plan = self.plan_outputs(input)?;

        let source = load_rgba(input)?;
        tracing::info!(
            path = %input.display(),
            width = source.width(),
            height = source.height(),
            "Loaded input image"
        );

        let separation = self.separator.separate(&source)?;
        for (class, pixels) in class_summary(&separation.quantized) {
            tracing::debug!(class, pixels, "Quantized class");
        }

        let quantized = self.emit(plan.quantized, || {
            encode_rgba_png(separation.quantized.grid(), self.optimize_png)
        })?;
        if quantized.is_written() {
            tracing::info!(path = %quantized.path.display(), "Wrote quantized image");
        }

        let mut layers = Vec::with_capacity(separation.layers.len());
        for (layer, paths) in separation.layers.iter().zip(plan.layers) {
            layers.push(self.write_layer(layer, paths)?);
        }

        Ok(RunReport { quantized, layers })
    }

    /// Resolve every output path and check that no two outputs share a file
    /// and that none of them is the input.
    fn plan_outputs(&self, input: &Path) -> Result<OutputPlan, PipelineError> {
        let quantized = self.namer.quantized_path(input);
        let layers = self
            .targets
            .iter()
            .map(|target| self.namer.layer_paths(input, target))
            .collect::<Result<Vec<_>, _>>()?;

        let input_key = file_key(input);
        let mut seen = HashSet::new();
        let all = std::iter::once(&quantized)
            .chain(layers.iter().flat_map(|(svg, png)| [svg, png]));
        for path in all {
            let key = file_key(path);
            if key == input_key {
                return Err(ConfigError::OverwritesInput(path.clone()).into());
            }
            if !seen.insert(key) {
                return Err(ConfigError::OutputCollision(path.clone()).into());
            }
        }

        Ok(OutputPlan { quantized, layers })
    }

    fn write_layer(
        &self,
        layer: &Layer,
        (svg_path, png_path): (PathBuf, PathBuf),
    ) -> Result<LayerReport, PipelineError> {
        let svg = self.emit(svg_path, || Ok(render_svg(&layer.vector).into_bytes()))?;
        let png = self.emit(png_path, || encode_rgba_png(&layer.raster, self.optimize_png))?;

        tracing::info!(
            color = %layer.target.name,
            hex = %layer.target.color,
            marks = layer.mark_count(),
            "Wrote layer"
        );

        Ok(LayerReport {
            name: layer.target.name.clone(),
            color: layer.target.color,
            marks: layer.mark_count(),
            svg,
            png,
        })
    }

    /// Encode and write one file, applying the write policy on failure.
    fn emit<F>(&self, path: PathBuf, encode: F) -> Result<OutputFile, PipelineError>
    where
        F: FnOnce() -> Result<Vec<u8>, RenderError>,
    {
        match encode().and_then(|bytes| write_file(&path, &bytes)) {
            Ok(()) => Ok(OutputFile {
                path,
                status: OutputStatus::Written,
            }),
            Err(source) => match self.on_write_error {
                WritePolicy::Abort => Err(PipelineError::Write { path, source }),
                WritePolicy::Skip => {
                    tracing::warn!(path = %path.display(), error = %source, "Skipping output");
                    Ok(OutputFile {
                        path,
                        status: OutputStatus::Failed(source.to_string()),
                    })
                }
            },
        }
    }
}

/// Pixel count per palette entry by name, then the background rule's count.
///
/// Pixels that snapped to a white palette entry and pixels forced to white by
/// the background rule are reported separately.
fn class_summary(quantized: &QuantizedImage) -> Vec<(&str, usize)> {
    let counts = quantized.class_counts();
    let palette = quantized.palette();
    palette
        .iter()
        .map(|e| e.name.as_str())
        .chain(std::iter::once("background"))
        .zip(counts)
        .collect()
}

/// Comparable identity of a file that may not exist yet: the canonical
/// parent directory plus the file name, or the path without `.` components
/// when the parent cannot be resolved.
fn file_key(path: &Path) -> PathBuf {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    match (std::fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect(),
    }
}
