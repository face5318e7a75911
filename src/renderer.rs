//! Configured drawing façade.
//!
//! [`PrimitiveRenderer`] exposes every rasterization and fill operation as a
//! method. The target surface is borrowed for the duration of each call and
//! never stored, so one renderer can draw onto any number of surfaces.

use crate::color::Rgba;
use crate::config::RendererConfig;
use crate::error::Result;
use crate::geometry::{Point, Segment};
use crate::render::{self, Drawable, LineStyle};
use crate::shape::Shape;
use crate::surface::Surface;

/// Draws primitives with a fixed edge thickness and point radius.
///
/// # Example
///
/// ```
/// use trueno_raster::prelude::*;
///
/// let mut fb = Framebuffer::filled(64, 64, Rgba::WHITE).unwrap();
/// let renderer = PrimitiveRenderer::new();
///
/// renderer.draw_circle_symmetric(&mut fb, 32.0, 32.0, 10.0, Rgba::BLACK);
/// renderer.flood_fill(&mut fb, 32, 32, Rgba::RED, Rgba::WHITE);
///
/// assert_eq!(fb.get_pixel(32, 32), Some(Rgba::RED));
/// assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrimitiveRenderer {
    config: RendererConfig,
}

impl PrimitiveRenderer {
    /// Renderer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration fails [`RendererConfig::validate`].
    pub fn with_config(config: RendererConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RendererConfig {
        &self.config
    }

    // ========================================================================
    // Lines
    // ========================================================================

    /// One-pixel DDA line between integer endpoints.
    pub fn draw_line_incremental<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgba,
    ) {
        render::draw_line_incremental(surface, x1, y1, x2, y2, color);
    }

    /// Thick line of an explicit `thickness`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
        color: Rgba,
    ) {
        render::draw_line(surface, x1, y1, x2, y2, thickness, color);
    }

    /// Draw a segment, thick at the configured edge thickness or incremental.
    pub fn draw_segment<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        segment: &Segment,
        thick: bool,
        color: Rgba,
    ) {
        let style = if thick {
            LineStyle::Thick(self.config.edge_thickness)
        } else {
            LineStyle::Incremental
        };
        render::draw_segment(surface, segment, style, color);
    }

    // ========================================================================
    // Areas and curves
    // ========================================================================

    /// Filled axis-aligned rectangle.
    pub fn draw_rectangle<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    ) {
        render::draw_rectangle(surface, x, y, width, height, color);
    }

    /// Filled disc centered at `(x, y)`.
    pub fn draw_filled_circle<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
    ) {
        render::draw_filled_circle(surface, x, y, radius, color);
    }

    /// Dot of the configured radius whose bounding box starts at `(x, y)`.
    pub fn draw_point<S: Surface + ?Sized>(&self, surface: &mut S, x: f32, y: f32, color: Rgba) {
        render::draw_point(surface, x, y, self.config.point_radius, color);
    }

    /// Midpoint circle outline.
    pub fn draw_circle_symmetric<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
    ) {
        render::draw_circle_symmetric(surface, x, y, radius, color);
    }

    /// Midpoint ellipse outline.
    pub fn draw_ellipse<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: f32,
        y: f32,
        radius_x: f32,
        radius_y: f32,
        color: Rgba,
    ) {
        render::draw_ellipse(surface, x, y, radius_x, radius_y, color);
    }

    // ========================================================================
    // Paths
    // ========================================================================

    /// Polyline through `points` at the configured edge thickness.
    pub fn draw_polyline<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        points: &[Point],
        color: Rgba,
        closed: bool,
    ) {
        render::draw_polyline(surface, points, self.config.edge_thickness, color, closed);
    }

    /// Polyline made of `segments` at the configured edge thickness.
    pub fn draw_polyline_segments<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        segments: &[Segment],
        color: Rgba,
        closed: bool,
    ) {
        render::draw_polyline_segments(
            surface,
            segments,
            self.config.edge_thickness,
            color,
            closed,
        );
    }

    /// Closed polygon outline, skipped when self-intersecting.
    pub fn draw_polygon<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        points: &[Point],
        color: Rgba,
    ) {
        render::draw_polygon(surface, points, self.config.edge_thickness, color);
    }

    /// Polygon outline from segments, skipped when any two segments meet.
    pub fn draw_polygon_segments<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        segments: &[Segment],
        color: Rgba,
    ) {
        render::draw_polygon_segments(surface, segments, self.config.edge_thickness, color);
    }

    /// Filled convex hull of a valid polygon.
    pub fn draw_filled_polygon<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        points: &[Point],
        fill_color: Rgba,
    ) {
        render::draw_filled_polygon(surface, points, fill_color);
    }

    // ========================================================================
    // Fills
    // ========================================================================

    /// Replace the 4-connected `target_color` region around `(x, y)`.
    pub fn flood_fill<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        fill_color: Rgba,
        target_color: Rgba,
    ) {
        render::flood_fill(surface, x, y, fill_color, target_color);
    }

    /// Fill outward from `(x, y)` up to `border_color`.
    pub fn border_fill<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        fill_color: Rgba,
        border_color: Rgba,
    ) {
        render::border_fill(surface, x, y, fill_color, border_color);
    }

    /// Even-odd scanline fill over a vertex list.
    pub fn parity_check_fill<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        points: &[Point],
        fill_color: Rgba,
    ) {
        render::parity_check_fill(surface, points, fill_color);
    }

    /// Paint one row between two inclusive columns.
    pub fn fill_horizontal_section<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        start_x: i32,
        end_x: i32,
        y: i32,
        color: Rgba,
    ) {
        render::fill_horizontal_section(surface, start_x, end_x, y, color);
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    /// Draw a [`Shape`], applying the configured point radius and edge
    /// thickness where the shape uses them.
    pub fn draw_shape<S: Surface + ?Sized>(&self, surface: &mut S, shape: &Shape, color: Rgba) {
        tracing::trace!(kind = shape.kind(), "drawing shape");
        match shape {
            Shape::Point(point) => self.draw_point(surface, point.x, point.y, color),
            Shape::Polygon(points) => self.draw_polygon(surface, points, color),
            other => other.draw(surface, color),
        }
    }
}
