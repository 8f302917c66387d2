pub mod config;
pub mod naming;

pub use config::{AppConfig, OutputConfig, PaletteColor, WritePolicy, DEFAULT_PALETTE};
pub use naming::OutputNamer;
