//! Area primitives and the [`Drawable`] trait.
//!
//! Everything here paints the pixels whose centers `(x + 0.5, y + 0.5)` fall
//! inside the shape. Rows and columns use half-open intervals, so two shapes
//! sharing an edge never paint the same pixel twice.

use super::curve::draw_filled_circle;
use crate::color::Rgba;
use crate::config::DEFAULT_POINT_RADIUS;
use crate::geometry::{Point, Rect};
use crate::surface::Surface;

/// Something that can rasterize itself onto a [`Surface`].
pub trait Drawable {
    /// Draw this primitive in a single color.
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Rgba);
}

/// First pixel index whose center is at or after `v`.
#[inline]
fn first_center_at_or_after(v: f32) -> i64 {
    (v - 0.5).ceil() as i64
}

/// Fill a convex polygon given by its vertices in either winding.
///
/// Each pixel row is intersected with every edge; the span between the
/// leftmost and rightmost crossing is painted. Fewer than 3 vertices paint
/// nothing. Non-convex input is filled as its row-wise outer span.
pub fn fill_convex<S: Surface + ?Sized>(surface: &mut S, vertices: &[Point], color: Rgba) {
    if vertices.len() < 3 || vertices.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return;
    }

    let (width, height) = surface.size();
    let (min_y, max_y) = vertices
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });

    let row_start = first_center_at_or_after(min_y).max(0);
    let row_end = first_center_at_or_after(max_y).min(i64::from(height));

    for row in row_start..row_end {
        let yc = row as f32 + 0.5;
        let mut left = f32::INFINITY;
        let mut right = f32::NEG_INFINITY;

        for (i, &a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            if (a.y <= yc) != (b.y <= yc) {
                let x = a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y);
                left = left.min(x);
                right = right.max(x);
            }
        }

        if left > right {
            continue;
        }

        let col_start = first_center_at_or_after(left).max(0);
        let col_end = first_center_at_or_after(right).min(i64::from(width));
        for col in col_start..col_end {
            surface.plot(col as i32, row as i32, color);
        }
    }
}

/// Draw a filled axis-aligned rectangle with its top-left corner at `(x, y)`.
///
/// Negative extents grow the rectangle up or to the left.
pub fn draw_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Rgba,
) {
    fill_convex(surface, &Rect::new(x, y, width, height).corners(), color);
}

/// Draw a point as a small filled disc whose bounding box starts at `(x, y)`.
pub fn draw_point<S: Surface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    radius: f32,
    color: Rgba,
) {
    draw_filled_circle(surface, x + radius, y + radius, radius, color);
}

impl Drawable for Rect {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Rgba) {
        draw_rectangle(surface, self.x, self.y, self.width, self.height, color);
    }
}

impl Drawable for Point {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Rgba) {
        draw_point(surface, self.x, self.y, DEFAULT_POINT_RADIUS, color);
    }
}
