//! # Trueno-Raster
//!
//! Classical scan-conversion of 2D primitives onto an in-memory pixel surface.
//!
//! Lines, circles, ellipses, polylines and polygons are rasterized in software;
//! area fills read back the surface to find their boundaries. The only thing
//! left to the host is presenting the finished pixels.
//!
//! ## Features
//!
//! - **Lines**: pixel-exact DDA and rotated-rectangle thick lines
//! - **Curves**: midpoint circle (8-way symmetry) and two-region midpoint ellipse
//! - **Paths**: open/closed polylines and self-intersection-gated polygons
//! - **Fills**: stack-based flood/border fill and even-odd scanline fill
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut fb = Framebuffer::filled(64, 64, Rgba::WHITE)?;
//! let renderer = PrimitiveRenderer::new();
//!
//! let square = [
//!     Point::new(8.0, 8.0),
//!     Point::new(56.0, 8.0),
//!     Point::new(56.0, 56.0),
//!     Point::new(8.0, 56.0),
//! ];
//! renderer.draw_polygon(&mut fb, &square, Rgba::BLACK);
//! renderer.border_fill(&mut fb, 32, 32, Rgba::BLUE, Rgba::BLACK);
//!
//! assert_eq!(fb.get_pixel(32, 32), Some(Rgba::BLUE));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Surfaces
//!
//! Every drawing function is generic over [`Surface`](surface::Surface) and
//! borrows it for one call. Writes outside the surface are clipped silently.
//! [`Framebuffer`](framebuffer::Framebuffer) is the bundled in-memory surface.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`RendererConfig`](config::RendererConfig)
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//! - Andrew, A. M. (1979). "Another efficient algorithm for convex hulls in two dimensions."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA color type.
pub mod color;

/// In-memory framebuffer surface.
pub mod framebuffer;

/// Geometric primitives (points, segments, rectangles).
pub mod geometry;

/// Orientation, intersection and polygon validity tests.
pub mod predicates;

/// Pixel surface contract.
pub mod surface;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms.
pub mod render;

/// Flat shape model.
pub mod shape;

/// Configured drawing façade.
pub mod renderer;

/// Renderer configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::RendererConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect, Segment};
    pub use crate::predicates::{is_polygon_valid, segments_intersect, Orientation};
    pub use crate::render::{Drawable, LineStyle};
    pub use crate::renderer::PrimitiveRenderer;
    pub use crate::shape::Shape;
    pub use crate::surface::Surface;
}
