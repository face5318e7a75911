//! Error types for trueno-raster.
//!
//! Drawing never fails: invalid geometry is skipped and out-of-bounds pixels
//! are clipped. Errors only surface when building a surface or a renderer
//! configuration.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing rasterizer resources.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A renderer configuration value is out of range.
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Why the value was rejected.
        reason: &'static str,
    },
}
