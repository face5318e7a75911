//! Area-fill engine.
//!
//! Two families, both mutating the surface in place and reading back the
//! colors they just wrote:
//!
//! - **Seed fills** ([`flood_fill`], [`border_fill`]): 4-connected region
//!   growth from one pixel using an explicit stack, so auxiliary memory tracks
//!   the frontier rather than call depth.
//! - **Scanline fill** ([`parity_check_fill`]): even-odd rule over a vertex
//!   list.

use crate::color::Rgba;
use crate::geometry::{to_pixel, Point};
use crate::surface::Surface;

/// The four axis neighbours.
const NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Stack-driven 4-connected fill.
///
/// A popped pixel is painted and its neighbours pushed only while
/// `should_fill` holds for its current color. Out-of-bounds coordinates never
/// satisfy the predicate. Termination requires that `fill_color` itself fails
/// the predicate.
fn seed_fill<S, F>(surface: &mut S, x: i32, y: i32, fill_color: Rgba, should_fill: F)
where
    S: Surface + ?Sized,
    F: Fn(Rgba) -> bool,
{
    let mut stack = vec![(x, y)];

    while let Some((px, py)) = stack.pop() {
        match surface.read(px, py) {
            Some(current) if should_fill(current) => {}
            _ => continue,
        }

        surface.plot(px, py, fill_color);

        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (px.saturating_add(dx), py.saturating_add(dy));
            stack.push((nx, ny));
        }
    }
}

/// Replace the 4-connected region of `target_color` around `(x, y)`.
///
/// Does nothing when the seed is out of bounds, already `fill_color`, or not
/// `target_color`. Running the same call twice is a no-op the second time.
pub fn flood_fill<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    fill_color: Rgba,
    target_color: Rgba,
) {
    let Some(seed) = surface.read(x, y) else {
        tracing::debug!(x, y, "flood fill seed out of bounds");
        return;
    };

    if seed == fill_color || seed != target_color {
        tracing::trace!(x, y, ?seed, "flood fill seed rejected");
        return;
    }

    seed_fill(surface, x, y, fill_color, |c| c == target_color);
}

/// Fill outward from `(x, y)` until `border_color` is reached.
///
/// Paints every 4-connected pixel that is neither `border_color` nor
/// already `fill_color`. Border pixels are never painted. Does nothing when
/// the seed is out of bounds or is itself the border.
pub fn border_fill<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    fill_color: Rgba,
    border_color: Rgba,
) {
    let Some(seed) = surface.read(x, y) else {
        tracing::debug!(x, y, "border fill seed out of bounds");
        return;
    };

    if seed == border_color {
        tracing::trace!(x, y, "border fill seeded on border");
        return;
    }

    seed_fill(surface, x, y, fill_color, |c| {
        c != border_color && c != fill_color
    });
}

/// Paint row `y` from `start_x` to `end_x`, both inclusive, in either order.
pub fn fill_horizontal_section<S: Surface + ?Sized>(
    surface: &mut S,
    start_x: i32,
    end_x: i32,
    y: i32,
    color: Rgba,
) {
    let (width, height) = surface.size();
    if y < 0 || i64::from(y) >= i64::from(height) {
        return;
    }

    let lo = start_x.min(end_x).max(0);
    let hi = i64::from(start_x.max(end_x)).min(i64::from(width) - 1);

    for x in i64::from(lo)..=hi {
        surface.plot(x as i32, y, color);
    }
}

/// Even-odd scanline fill over a vertex list.
///
/// The vertices are sorted by ascending Y and edges are taken between
/// consecutive entries of the *sorted* list, wrapping from last to first.
/// For every integer row between the lowest and highest vertex, crossings
/// are found with a half-open Y test, sorted, and filled in pairs. An
/// unpaired final crossing is dropped. Fewer than 3 points fill nothing.
///
/// Because edges follow sorted order rather than the outline, only polygons
/// whose Y-sorted order traces their boundary (triangles, axis-aligned
/// rectangles in outline order, ...) fill exactly.
// TODO: replace with an edge-table scanline fill that walks the outline order.
pub fn parity_check_fill<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    fill_color: Rgba,
) {
    if points.len() < 3 {
        tracing::debug!(points = points.len(), "parity fill needs at least 3 points");
        return;
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y));

    let min_y = sorted[0].y;
    let max_y = sorted[sorted.len() - 1].y;
    if !min_y.is_finite() || !max_y.is_finite() {
        return;
    }

    let (_, height) = surface.size();
    let first_row = (min_y.ceil() as i64).max(0);
    let last_row = (max_y.floor() as i64).min(i64::from(height) - 1);

    let mut crossings: Vec<f32> = Vec::with_capacity(sorted.len());

    for row in first_row..=last_row {
        let y = row as f32;
        crossings.clear();

        for (i, &a) in sorted.iter().enumerate() {
            let b = sorted[(i + 1) % sorted.len()];
            if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
                crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }

        crossings.sort_by(f32::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let (start, end) = (to_pixel(pair[0]), to_pixel(pair[1]));
            fill_horizontal_section(surface, start, end, row as i32, fill_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::render::primitives::draw_rectangle;

    fn canvas() -> Framebuffer {
        Framebuffer::filled(40, 40, Rgba::WHITE).expect("framebuffer creation should succeed")
    }

    /// White canvas with a 1px black square outline from (10,10) to (20,20).
    fn boxed() -> Framebuffer {
        let mut fb = canvas();
        fill_horizontal_section(&mut fb, 10, 20, 10, Rgba::BLACK);
        fill_horizontal_section(&mut fb, 10, 20, 20, Rgba::BLACK);
        for y in 10..=20 {
            fb.plot(10, y, Rgba::BLACK);
            fb.plot(20, y, Rgba::BLACK);
        }
        fb
    }

    #[test]
    fn test_flood_fill_enclosed_region() {
        let mut fb = boxed();
        flood_fill(&mut fb, 15, 15, Rgba::RED, Rgba::WHITE);

        assert_eq!(fb.count_color(Rgba::RED), 9 * 9);
        assert_eq!(fb.get_pixel(11, 11), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(19, 19), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(10, 15), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_flood_fill_idempotent() {
        let mut fb = boxed();
        flood_fill(&mut fb, 15, 15, Rgba::RED, Rgba::WHITE);
        let once = fb.to_compact_pixels();

        flood_fill(&mut fb, 15, 15, Rgba::RED, Rgba::WHITE);
        assert_eq!(fb.to_compact_pixels(), once);
    }

    #[test]
    fn test_flood_fill_guards() {
        let mut fb = boxed();
        let before = fb.to_compact_pixels();

        // Seed out of bounds
        flood_fill(&mut fb, -1, 15, Rgba::RED, Rgba::WHITE);
        flood_fill(&mut fb, 15, 400, Rgba::RED, Rgba::WHITE);
        // Seed does not match the target
        flood_fill(&mut fb, 10, 10, Rgba::RED, Rgba::WHITE);
        // Fill equals target
        flood_fill(&mut fb, 15, 15, Rgba::WHITE, Rgba::WHITE);

        assert_eq!(fb.to_compact_pixels(), before);
    }

    #[test]
    fn test_flood_fill_is_four_connected() {
        let mut fb = canvas();
        // Diagonal wall: 4-connected fill must not leak through it.
        for i in 0..40 {
            fb.plot(i, 39 - i, Rgba::BLACK);
        }
        flood_fill(&mut fb, 0, 0, Rgba::RED, Rgba::WHITE);

        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(39, 39), Some(Rgba::WHITE));
        assert_eq!(fb.count_color(Rgba::RED), (0..40).sum::<usize>());
    }

    #[test]
    fn test_flood_fill_whole_surface() {
        let mut fb = canvas();
        flood_fill(&mut fb, 0, 0, Rgba::BLUE, Rgba::WHITE);
        assert_eq!(fb.count_color(Rgba::BLUE), 40 * 40);
    }

    #[test]
    fn test_border_fill_stops_at_border() {
        let mut fb = boxed();
        // Mixed interior colors are all replaced.
        fb.plot(12, 12, Rgba::GREEN);
        border_fill(&mut fb, 15, 15, Rgba::YELLOW, Rgba::BLACK);

        assert_eq!(fb.count_color(Rgba::YELLOW), 9 * 9);
        assert_eq!(fb.get_pixel(12, 12), Some(Rgba::YELLOW));
        assert_eq!(fb.count_color(Rgba::BLACK), 40);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_border_fill_seed_on_border() {
        let mut fb = boxed();
        let before = fb.to_compact_pixels();
        border_fill(&mut fb, 10, 10, Rgba::YELLOW, Rgba::BLACK);
        border_fill(&mut fb, 99, 10, Rgba::YELLOW, Rgba::BLACK);
        assert_eq!(fb.to_compact_pixels(), before);
    }

    #[test]
    fn test_border_fill_terminates_when_fill_present() {
        let mut fb = boxed();
        draw_rectangle(&mut fb, 12.0, 12.0, 3.0, 3.0, Rgba::YELLOW);
        border_fill(&mut fb, 11, 11, Rgba::YELLOW, Rgba::BLACK);
        assert_eq!(fb.count_color(Rgba::YELLOW), 9 * 9);
    }

    #[test]
    fn test_fill_horizontal_section() {
        let mut fb = canvas();
        fill_horizontal_section(&mut fb, 30, 5, 3, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 26);

        fill_horizontal_section(&mut fb, -10, 100, 4, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 40);

        fill_horizontal_section(&mut fb, 0, 10, -1, Rgba::GREEN);
        fill_horizontal_section(&mut fb, 0, 10, 40, Rgba::GREEN);
        assert_eq!(fb.count_color(Rgba::GREEN), 0);
    }

    #[test]
    fn test_parity_fill_square() {
        let mut fb = canvas();
        let square = [
            Point::new(5.0, 5.0),
            Point::new(25.0, 5.0),
            Point::new(25.0, 25.0),
            Point::new(5.0, 25.0),
        ];
        parity_check_fill(&mut fb, &square, Rgba::RED);

        // Rows 5..=24, columns 5..=25
        assert_eq!(fb.count_color(Rgba::RED), 20 * 21);
        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(15, 4), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(15, 26), Some(Rgba::WHITE));
    }

    #[test]
    fn test_parity_fill_triangle() {
        let mut fb = canvas();
        let tri = [Point::new(20.0, 2.0), Point::new(35.0, 30.0), Point::new(5.0, 30.0)];
        parity_check_fill(&mut fb, &tri, Rgba::RED);

        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(20, 2), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(6, 10), Some(Rgba::WHITE));
        for x in 0..40 {
            assert_eq!(fb.get_pixel(x, 1), Some(Rgba::WHITE));
            assert_eq!(fb.get_pixel(x, 31), Some(Rgba::WHITE));
        }
    }

    #[test]
    fn test_parity_fill_too_few_points() {
        let mut fb = canvas();
        parity_check_fill(&mut fb, &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)], Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_parity_fill_follows_sorted_vertex_order() {
        // A diamond sorts to top, right, left, bottom, so the derived edges
        // include a vertical top-bottom chord and the left half is missed.
        let mut fb = canvas();
        let diamond = [
            Point::new(20.0, 0.0),
            Point::new(30.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(10.0, 10.0),
        ];
        parity_check_fill(&mut fb, &diamond, Rgba::RED);

        assert_eq!(fb.get_pixel(24, 5), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(16, 5), Some(Rgba::WHITE));
    }
}
