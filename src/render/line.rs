//! Line rasterizers.
//!
//! Two distinct primitives live here:
//!
//! - [`draw_line_incremental`]: pixel-exact DDA over integer endpoints.
//! - [`draw_line`]: a "thick line", i.e. a `length x thickness` rectangle
//!   anchored at the start point and rotated toward the end point. Polyline
//!   and polygon edges use this one.

use super::primitives::{fill_convex, Drawable};
use crate::color::Rgba;
use crate::geometry::{to_pixel, Point, Segment};
use crate::surface::Surface;

/// How a [`Segment`] is turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    /// Rotated rectangle of the given thickness (see [`draw_line`]).
    Thick(f32),
    /// One-pixel DDA path between the rounded endpoints.
    Incremental,
}

/// Draw a line with the incremental (DDA) algorithm.
///
/// Plots exactly `max(|dx|, |dy|) + 1` points from `(x1, y1)` to `(x2, y2)`
/// inclusive, each sample rounded with `floor(v + 0.5)`. Equal endpoints
/// plot a single pixel.
pub fn draw_line_incremental<S: Surface + ?Sized>(
    surface: &mut S,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
) {
    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        surface.plot(x1, y1, color);
        return;
    }

    let (fx, fy) = (f64::from(x1), f64::from(y1));
    let (fdx, fdy, fsteps) = (dx as f64, dy as f64, steps as f64);

    for i in 0..=steps {
        let t = i as f64;
        let x = (fx + fdx * t / fsteps + 0.5).floor();
        let y = (fy + fdy * t / fsteps + 0.5).floor();
        surface.plot(x as i32, y as i32, color);
    }
}

/// Draw a thick line as a rotated rectangle.
///
/// The rectangle is `distance(start, end)` long and `thickness` tall, with
/// its top-left corner at `(x1, y1)`, rotated by `atan2(dy, dx)` about that
/// corner. Pixels whose centers fall inside are painted. A zero-length line
/// covers no area and paints nothing.
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    thickness: f32,
    color: Rgba,
) {
    let segment = Segment::from_coords(x1, y1, x2, y2);
    if segment.is_degenerate() {
        tracing::trace!(x1, y1, "skipping zero-length thick line");
        return;
    }

    let length = segment.length();
    let (sin, cos) = segment.angle_degrees().to_radians().sin_cos();

    let along = Point::new(length * cos, length * sin);
    let across = Point::new(-thickness * sin, thickness * cos);
    let anchor = segment.start;

    let corners = [
        anchor,
        Point::new(anchor.x + along.x, anchor.y + along.y),
        Point::new(
            anchor.x + along.x + across.x,
            anchor.y + along.y + across.y,
        ),
        Point::new(anchor.x + across.x, anchor.y + across.y),
    ];

    fill_convex(surface, &corners, color);
}

/// Draw a segment in the requested style.
pub fn draw_segment<S: Surface + ?Sized>(
    surface: &mut S,
    segment: &Segment,
    style: LineStyle,
    color: Rgba,
) {
    match style {
        LineStyle::Thick(thickness) => draw_line(
            surface,
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            thickness,
            color,
        ),
        LineStyle::Incremental => draw_line_incremental(
            surface,
            to_pixel(segment.start.x),
            to_pixel(segment.start.y),
            to_pixel(segment.end.x),
            to_pixel(segment.end.y),
            color,
        ),
    }
}

impl Drawable for Segment {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Rgba) {
        draw_segment(surface, self, LineStyle::Incremental, color);
    }
}
