//! Public API for the palette-layers crate.
//!
//! This module provides the high-level API: [`LogoSeparator`] builder and
//! [`SplitError`] unified error type.

mod builder;
mod error;

pub use builder::{LogoSeparator, Separation, DEFAULT_BACKGROUND_NAME};
pub use error::SplitError;
