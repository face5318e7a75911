//! Polyline and polygon rendering.
//!
//! Edges are drawn with the thick-line primitive. Point lists and segment
//! lists are separate entry points with deliberately different rules:
//!
//! | input    | closing edge of a polyline | polygon validity check            |
//! |----------|----------------------------|-----------------------------------|
//! | points   | only with more than 2 points | non-adjacent edges must not meet |
//! | segments | any non-empty list         | no two segments may meet at all  |
//!
//! The segment-list polygon check also rejects segments that merely share an
//! endpoint, so a connected outline given as segments is never drawn.

use super::line::draw_line;
use super::primitives::fill_convex;
use crate::color::Rgba;
use crate::geometry::{Point, Segment};
use crate::predicates::{convex_hull, is_polygon_valid, segments_pairwise_disjoint};
use crate::surface::Surface;

#[inline]
fn edge<S: Surface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    thickness: f32,
    color: Rgba,
) {
    draw_line(surface, from.x, from.y, to.x, to.y, thickness, color);
}

/// Draw an edge between each consecutive pair of points.
///
/// With `closed` set and more than 2 points, the last point is also joined to
/// the first. Fewer than 2 points draw nothing.
pub fn draw_polyline<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    thickness: f32,
    color: Rgba,
    closed: bool,
) {
    if points.len() < 2 {
        return;
    }

    for pair in points.windows(2) {
        edge(surface, pair[0], pair[1], thickness, color);
    }

    if closed && points.len() > 2 {
        edge(surface, points[points.len() - 1], points[0], thickness, color);
    }
}

/// Draw every segment; with `closed` set, join the last segment's end to the
/// first segment's start.
pub fn draw_polyline_segments<S: Surface + ?Sized>(
    surface: &mut S,
    segments: &[Segment],
    thickness: f32,
    color: Rgba,
    closed: bool,
) {
    for segment in segments {
        edge(surface, segment.start, segment.end, thickness, color);
    }

    if let (true, Some(first), Some(last)) = (closed, segments.first(), segments.last()) {
        edge(surface, last.end, first.start, thickness, color);
    }
}

/// Draw a closed polygon outline if [`is_polygon_valid`] accepts it.
///
/// Invalid input draws nothing.
pub fn draw_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    thickness: f32,
    color: Rgba,
) {
    if !is_polygon_valid(points) {
        tracing::debug!(points = points.len(), "skipping invalid polygon");
        return;
    }

    for pair in points.windows(2) {
        edge(surface, pair[0], pair[1], thickness, color);
    }
    edge(surface, points[points.len() - 1], points[0], thickness, color);
}

/// Draw a polygon given as segments if no two segments intersect.
///
/// Any intersecting pair aborts the whole draw. Otherwise every segment is
/// drawn, plus a closing edge from the last segment's end to the first
/// segment's start.
pub fn draw_polygon_segments<S: Surface + ?Sized>(
    surface: &mut S,
    segments: &[Segment],
    thickness: f32,
    color: Rgba,
) {
    if !segments_pairwise_disjoint(segments) {
        tracing::debug!(
            segments = segments.len(),
            "skipping polygon with intersecting segments"
        );
        return;
    }

    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return;
    };

    for segment in segments {
        edge(surface, segment.start, segment.end, thickness, color);
    }
    edge(surface, last.end, first.start, thickness, color);
}

/// Fill the convex hull of a valid polygon's points.
///
/// Uses the same [`is_polygon_valid`] gate as [`draw_polygon`]; invalid input
/// draws nothing.
pub fn draw_filled_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    fill_color: Rgba,
) {
    if !is_polygon_valid(points) {
        tracing::debug!(points = points.len(), "skipping invalid filled polygon");
        return;
    }

    fill_convex(surface, &convex_hull(points), fill_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;

    fn canvas() -> Framebuffer {
        Framebuffer::filled(100, 100, Rgba::WHITE).expect("framebuffer creation should succeed")
    }

    fn square() -> Vec<Point> {
        vec![
            Point::new(20.0, 20.0),
            Point::new(60.0, 20.0),
            Point::new(60.0, 60.0),
            Point::new(20.0, 60.0),
        ]
    }

    fn bowtie() -> Vec<Point> {
        vec![
            Point::new(20.0, 20.0),
            Point::new(60.0, 60.0),
            Point::new(60.0, 20.0),
            Point::new(20.0, 60.0),
        ]
    }

    #[test]
    fn test_open_polyline_skips_closing_edge() {
        let mut fb = canvas();
        draw_polyline(&mut fb, &square(), 2.0, Rgba::RED, false);

        assert_eq!(fb.get_pixel(40, 20), Some(Rgba::RED));
        // The closing edge (20,60) -> (20,20) would cover x in [20, 22).
        assert_eq!(fb.get_pixel(20, 40), Some(Rgba::WHITE));
    }

    #[test]
    fn test_closed_polyline_draws_closing_edge() {
        let mut fb = canvas();
        draw_polyline(&mut fb, &square(), 2.0, Rgba::RED, true);
        assert_eq!(fb.get_pixel(20, 40), Some(Rgba::RED));
    }

    #[test]
    fn test_closed_polyline_two_points_has_no_closing_edge() {
        let mut closed = canvas();
        let mut open = canvas();
        let pts = [Point::new(10.0, 10.0), Point::new(50.0, 30.0)];
        draw_polyline(&mut closed, &pts, 2.0, Rgba::RED, true);
        draw_polyline(&mut open, &pts, 2.0, Rgba::RED, false);
        assert_eq!(closed.to_compact_pixels(), open.to_compact_pixels());
    }

    #[test]
    fn test_polyline_single_point_noop() {
        let mut fb = canvas();
        draw_polyline(&mut fb, &[Point::new(10.0, 10.0)], 2.0, Rgba::RED, true);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_segment_polyline_single_segment_closes() {
        let mut fb = canvas();
        let segs = [Segment::from_coords(10.0, 50.0, 50.0, 50.0)];
        draw_polyline_segments(&mut fb, &segs, 2.0, Rgba::RED, true);

        // The closing edge runs back from (50,50) to (10,50): rotated 180
        // degrees, its thickness extends upward.
        assert_eq!(fb.get_pixel(30, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(30, 48), Some(Rgba::RED));
    }

    #[test]
    fn test_segment_polyline_empty_noop() {
        let mut fb = canvas();
        draw_polyline_segments(&mut fb, &[], 2.0, Rgba::RED, true);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_polygon_valid_draws_outline() {
        let mut fb = canvas();
        draw_polygon(&mut fb, &square(), 2.0, Rgba::BLUE);

        assert_eq!(fb.get_pixel(40, 20), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(20, 40), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(40, 40), Some(Rgba::WHITE));
    }

    #[test]
    fn test_polygon_invalid_draws_nothing() {
        let mut fb = canvas();
        draw_polygon(&mut fb, &bowtie(), 2.0, Rgba::BLUE);
        draw_polygon(&mut fb, &square()[..2], 2.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 0);
    }

    #[test]
    fn test_segment_polygon_rejects_connected_outline() {
        let mut fb = canvas();
        let pts = square();
        let segs: Vec<Segment> = (0..pts.len())
            .map(|i| Segment::new(pts[i], pts[(i + 1) % pts.len()]))
            .collect();
        draw_polygon_segments(&mut fb, &segs, 2.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 0);
    }

    #[test]
    fn test_segment_polygon_disjoint_draws_with_closing_edge() {
        let mut fb = canvas();
        let segs = [
            Segment::from_coords(10.0, 10.0, 40.0, 10.0),
            Segment::from_coords(50.0, 20.0, 50.0, 60.0),
        ];
        draw_polygon_segments(&mut fb, &segs, 2.0, Rgba::BLUE);

        assert_eq!(fb.get_pixel(25, 10), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(49, 40), Some(Rgba::BLUE));
        // Closing edge (50,60) -> (10,10) passes near (30,35).
        assert_eq!(fb.get_pixel(30, 34), Some(Rgba::BLUE));
    }

    #[test]
    fn test_filled_polygon() {
        let mut fb = canvas();
        draw_filled_polygon(&mut fb, &square(), Rgba::GREEN);

        assert_eq!(fb.count_color(Rgba::GREEN), 40 * 40);
        assert_eq!(fb.get_pixel(40, 40), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(60, 40), Some(Rgba::WHITE));
    }

    #[test]
    fn test_filled_polygon_concave_uses_hull() {
        let mut fb = canvas();
        let arrow = [
            Point::new(10.0, 10.0),
            Point::new(90.0, 50.0),
            Point::new(10.0, 90.0),
            Point::new(40.0, 50.0),
        ];
        draw_filled_polygon(&mut fb, &arrow, Rgba::GREEN);
        // Inside the notch, outside the outline, inside the hull.
        assert_eq!(fb.get_pixel(20, 50), Some(Rgba::GREEN));
    }

    #[test]
    fn test_filled_polygon_invalid_noop() {
        let mut fb = canvas();
        draw_filled_polygon(&mut fb, &bowtie(), Rgba::GREEN);
        assert_eq!(fb.count_color(Rgba::GREEN), 0);
    }
}
