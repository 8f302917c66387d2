pub mod pipeline;

pub use pipeline::{LayerPipeline, LayerReport, OutputFile, OutputStatus, RunReport};
