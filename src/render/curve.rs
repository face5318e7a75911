//! Midpoint circle and ellipse rasterizers.
//!
//! Centers and radii are rounded to the nearest pixel before stepping; the
//! decision variables then run in integer (circle) or `f64` (ellipse)
//! arithmetic.
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." *Communications of the ACM*, 20(2).
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//!   *IEEE Computer Graphics and Applications*, 4(9).

use crate::color::Rgba;
use crate::geometry::to_pixel;
use crate::surface::Surface;

/// Plot `(cx + dx, cy + dy)`. Targets outside the `i32` range are clipped
/// like any other off-surface pixel.
#[inline]
fn plot_offset<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    dx: i64,
    dy: i64,
    color: Rgba,
) {
    let x = i64::from(cx) + dx;
    let y = i64::from(cy) + dy;
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        surface.plot(x, y, color);
    }
}

/// Plot `(x, y)` in all eight octants around `(cx, cy)`.
#[inline]
fn plot_octants<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    x: i32,
    y: i32,
    color: Rgba,
) {
    let (x, y) = (i64::from(x), i64::from(y));
    plot_offset(surface, cx, cy, x, y, color);
    plot_offset(surface, cx, cy, -x, y, color);
    plot_offset(surface, cx, cy, x, -y, color);
    plot_offset(surface, cx, cy, -x, -y, color);
    plot_offset(surface, cx, cy, y, x, color);
    plot_offset(surface, cx, cy, -y, x, color);
    plot_offset(surface, cx, cy, y, -x, color);
    plot_offset(surface, cx, cy, -y, -x, color);
}

/// Plot `(x, y)` in all four quadrants around `(cx, cy)`.
#[inline]
fn plot_quadrants<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    x: i32,
    y: i32,
    color: Rgba,
) {
    let (x, y) = (i64::from(x), i64::from(y));
    plot_offset(surface, cx, cy, x, y, color);
    plot_offset(surface, cx, cy, -x, y, color);
    plot_offset(surface, cx, cy, x, -y, color);
    plot_offset(surface, cx, cy, -x, -y, color);
}

/// Whether the box `cx ± rx`, `cy ± ry` misses the surface entirely.
fn misses_surface<S: Surface + ?Sized>(surface: &S, cx: i32, cy: i32, rx: i32, ry: i32) -> bool {
    let (width, height) = surface.size();
    let (cx, cy, rx, ry) = (i64::from(cx), i64::from(cy), i64::from(rx), i64::from(ry));
    cx + rx < 0 || cy + ry < 0 || cx - rx >= i64::from(width) || cy - ry >= i64::from(height)
}

/// Draw a circle outline with the midpoint algorithm and 8-way symmetry.
///
/// Starts at `(r, 0)` and walks the first octant until `x < y`, writing eight
/// reflected pixels per accepted step. A negative rounded radius draws
/// nothing.
pub fn draw_circle_symmetric<S: Surface + ?Sized>(
    surface: &mut S,
    center_x: f32,
    center_y: f32,
    radius: f32,
    color: Rgba,
) {
    let cx = to_pixel(center_x);
    let cy = to_pixel(center_y);
    let r = to_pixel(radius);

    if r < 0 {
        tracing::debug!(radius, "skipping circle with negative radius");
        return;
    }
    if misses_surface(surface, cx, cy, r, r) {
        return;
    }

    let mut x = r;
    let mut y = 0;
    let mut err: i64 = 0;

    plot_octants(surface, cx, cy, x, y, color);

    while x >= y {
        y += 1;
        if err <= 0 {
            err += 2 * i64::from(y) + 1;
        } else {
            x -= 1;
            err += 2 * (i64::from(y) - i64::from(x)) + 1;
        }

        if x < y {
            break;
        }

        plot_octants(surface, cx, cy, x, y, color);
    }
}

/// Draw an ellipse outline with the two-region midpoint algorithm.
///
/// Region 1 steps `x` while the slope magnitude is below 1 (`2·ry²·x <
/// 2·rx²·y`); region 2 then steps `y` down to 0, starting from the state
/// region 1 left behind. Each accepted point is mirrored into four
/// quadrants. A zero radius collapses the ellipse to a straight span along
/// the other axis; a negative one draws nothing.
pub fn draw_ellipse<S: Surface + ?Sized>(
    surface: &mut S,
    center_x: f32,
    center_y: f32,
    radius_x: f32,
    radius_y: f32,
    color: Rgba,
) {
    let cx = to_pixel(center_x);
    let cy = to_pixel(center_y);
    let rx = to_pixel(radius_x);
    let ry = to_pixel(radius_y);

    if rx < 0 || ry < 0 {
        tracing::debug!(radius_x, radius_y, "skipping ellipse with negative radius");
        return;
    }
    if misses_surface(surface, cx, cy, rx, ry) {
        return;
    }

    if rx == 0 || ry == 0 {
        for x in -rx..=rx {
            for y in -ry..=ry {
                plot_offset(surface, cx, cy, i64::from(x), i64::from(y), color);
            }
        }
        return;
    }

    // rx² · ry² overflows i64 for large radii; f64 keeps the terms exact up to 2^53.
    let rx2 = f64::from(rx) * f64::from(rx);
    let ry2 = f64::from(ry) * f64::from(ry);

    let mut x: i32 = 0;
    let mut y: i32 = ry;
    let mut px = 0.0;
    let mut py = 2.0 * rx2 * f64::from(y);

    plot_quadrants(surface, cx, cy, x, y, color);

    // Region 1
    let mut p = ry2 - rx2 * f64::from(ry) + 0.25 * rx2;
    while px < py {
        x += 1;
        px += 2.0 * ry2;
        if p < 0.0 {
            p += ry2 + px;
        } else {
            y -= 1;
            py -= 2.0 * rx2;
            p += ry2 + px - py;
        }
        plot_quadrants(surface, cx, cy, x, y, color);
    }

    // Region 2
    let xf = f64::from(x) + 0.5;
    let yf = f64::from(y) - 1.0;
    p = ry2 * xf * xf + rx2 * yf * yf - rx2 * ry2;
    while y > 0 {
        y -= 1;
        py -= 2.0 * rx2;
        if p > 0.0 {
            p += rx2 - py;
        } else {
            x += 1;
            px += 2.0 * ry2;
            p += rx2 - py + px;
        }
        plot_quadrants(surface, cx, cy, x, y, color);
    }
}

/// Draw a filled disc centered at `(center_x, center_y)`.
///
/// Paints every pixel whose center lies within `radius`. A negative radius
/// draws nothing.
pub fn draw_filled_circle<S: Surface + ?Sized>(
    surface: &mut S,
    center_x: f32,
    center_y: f32,
    radius: f32,
    color: Rgba,
) {
    if radius.is_nan() || radius < 0.0 || !center_x.is_finite() || !center_y.is_finite() {
        return;
    }

    let (width, height) = surface.size();
    let r2 = radius * radius;

    let row_start = ((center_y - radius - 0.5).ceil() as i64).max(0);
    let row_end = ((center_y + radius - 0.5).floor() as i64).min(i64::from(height) - 1);

    for row in row_start..=row_end {
        let dy = row as f32 + 0.5 - center_y;
        let span2 = r2 - dy * dy;
        if span2 < 0.0 {
            continue;
        }
        let half = span2.sqrt();

        let col_start = ((center_x - half - 0.5).ceil() as i64).max(0);
        let col_end = ((center_x + half - 0.5).floor() as i64).min(i64::from(width) - 1);
        for col in col_start..=col_end {
            surface.plot(col as i32, row as i32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::surface::WriteCounter;
    use std::collections::HashSet;

    fn canvas() -> Framebuffer {
        Framebuffer::filled(100, 100, Rgba::WHITE).expect("framebuffer creation should succeed")
    }

    /// Painted pixels relative to `(cx, cy)`.
    fn painted(fb: &Framebuffer, cx: i32, cy: i32, color: Rgba) -> HashSet<(i32, i32)> {
        let mut set = HashSet::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get_pixel(x, y) == Some(color) {
                    set.insert((x as i32 - cx, y as i32 - cy));
                }
            }
        }
        set
    }

    #[test]
    fn test_circle_radius_five_pixels() {
        let mut fb = canvas();
        draw_circle_symmetric(&mut fb, 50.0, 50.0, 5.0, Rgba::GREEN);

        let set = painted(&fb, 50, 50, Rgba::GREEN);
        for p in [(5, 0), (5, 1), (4, 2), (4, 3), (3, 4), (2, 4), (1, 5), (0, 5)] {
            assert!(set.contains(&p), "missing {p:?}");
        }
        assert!(!set.contains(&(0, 0)));
        assert_eq!(set.len(), 28);
    }

    #[test]
    fn test_circle_symmetry() {
        let mut fb = canvas();
        draw_circle_symmetric(&mut fb, 50.0, 50.0, 5.0, Rgba::GREEN);

        let set = painted(&fb, 50, 50, Rgba::GREEN);
        for &(x, y) in &set {
            assert!(set.contains(&(-x, y)));
            assert!(set.contains(&(x, -y)));
            assert!(set.contains(&(y, x)));
        }
    }

    #[test]
    fn test_circle_writes_eight_per_step() {
        let mut counter = WriteCounter::new(canvas());
        draw_circle_symmetric(&mut counter, 50.0, 50.0, 5.0, Rgba::GREEN);
        // Accepted steps: (5,0) (5,1) (4,2) (4,3)
        assert_eq!(counter.writes(), 4 * 8);
    }

    #[test]
    fn test_circle_rounds_center_and_radius() {
        let mut a = canvas();
        let mut b = canvas();
        draw_circle_symmetric(&mut a, 49.6, 50.4, 9.5, Rgba::RED);
        draw_circle_symmetric(&mut b, 50.0, 50.0, 10.0, Rgba::RED);
        assert_eq!(a.to_compact_pixels(), b.to_compact_pixels());
    }

    #[test]
    fn test_circle_zero_and_negative_radius() {
        let mut fb = canvas();
        draw_circle_symmetric(&mut fb, 50.0, 50.0, 0.0, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 1);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::RED));

        let mut fb = canvas();
        draw_circle_symmetric(&mut fb, 50.0, 50.0, -3.0, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_circle_clipped_at_corner() {
        let mut fb = canvas();
        draw_circle_symmetric(&mut fb, 0.0, 0.0, 20.0, Rgba::RED);
        assert_eq!(fb.get_pixel(20, 0), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(0, 20), Some(Rgba::RED));
    }

    #[test]
    fn test_ellipse_extremes_and_symmetry() {
        let mut fb = canvas();
        draw_ellipse(&mut fb, 50.0, 50.0, 30.0, 15.0, Rgba::BLUE);

        let set = painted(&fb, 50, 50, Rgba::BLUE);
        assert!(set.contains(&(30, 0)));
        assert!(set.contains(&(-30, 0)));
        assert!(set.contains(&(0, 15)));
        assert!(set.contains(&(0, -15)));
        assert!(!set.contains(&(0, 0)));
        assert!(set.iter().all(|&(x, y)| x.abs() <= 30 && y.abs() <= 15));
        for &(x, y) in &set {
            assert!(set.contains(&(-x, y)));
            assert!(set.contains(&(x, -y)));
        }
    }

    #[test]
    fn test_ellipse_points_near_curve() {
        let mut fb = canvas();
        draw_ellipse(&mut fb, 50.0, 50.0, 40.0, 20.0, Rgba::BLUE);

        for (x, y) in painted(&fb, 50, 50, Rgba::BLUE) {
            let (fx, fy) = (f64::from(x) / 40.0, f64::from(y) / 20.0);
            let level = fx * fx + fy * fy;
            assert!((0.85..1.15).contains(&level), "({x}, {y}) off curve: {level}");
        }
    }

    #[test]
    fn test_ellipse_degenerate_axes() {
        let mut fb = canvas();
        draw_ellipse(&mut fb, 50.0, 50.0, 0.0, 5.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 11);
        assert_eq!(fb.get_pixel(50, 45), Some(Rgba::BLUE));

        let mut fb = canvas();
        draw_ellipse(&mut fb, 50.0, 50.0, 4.0, 0.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 9);

        let mut fb = canvas();
        draw_ellipse(&mut fb, 50.0, 50.0, 0.0, 0.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 1);

        let mut fb = canvas();
        draw_ellipse(&mut fb, 50.0, 50.0, -4.0, 3.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 0);
    }

    #[test]
    fn test_far_center_is_clipped() {
        let mut fb = canvas();
        draw_circle_symmetric(&mut fb, 3.0e9, 10.0, 5.0, Rgba::RED);
        draw_circle_symmetric(&mut fb, -3.0e9, -3.0e9, 5.0, Rgba::RED);
        draw_ellipse(&mut fb, 3.0e9, 3.0e9, 4.0, 7.0, Rgba::RED);
        draw_ellipse(&mut fb, -3.0e9, 50.0, 0.0, 7.0, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_huge_ellipse_clips_to_nothing() {
        let mut fb = Framebuffer::filled(64, 64, Rgba::WHITE)
            .expect("framebuffer creation should succeed");
        draw_ellipse(&mut fb, 32.0, 32.0, 60000.0, 60000.0, Rgba::RED);
        draw_ellipse(&mut fb, 32.0, 32.0, 60000.0, 90000.0, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_huge_circle_crossing_surface() {
        let mut fb = Framebuffer::filled(64, 64, Rgba::WHITE)
            .expect("framebuffer creation should succeed");
        // Rightmost point of the outline lands on (10, 32).
        draw_circle_symmetric(&mut fb, -59990.0, 32.0, 60000.0, Rgba::RED);
        assert_eq!(fb.get_pixel(10, 32), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(11, 32), Some(Rgba::WHITE));
    }

    #[test]
    fn test_filled_circle() {
        let mut fb = canvas();
        draw_filled_circle(&mut fb, 50.0, 50.0, 10.0, Rgba::RED);

        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(59, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(60, 50), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));

        let area = fb.count_color(Rgba::RED) as f32;
        let expected = std::f32::consts::PI * 100.0;
        assert!((area - expected).abs() < expected * 0.05);
    }

    #[test]
    fn test_filled_circle_negative_radius() {
        let mut fb = canvas();
        draw_filled_circle(&mut fb, 50.0, 50.0, -1.0, Rgba::RED);
        draw_filled_circle(&mut fb, f32::NAN, 50.0, 5.0, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }
}
