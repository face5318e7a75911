//! Geometry predicates used to gate polygon rendering.
//!
//! The orientation test uses exact floating-point comparison against zero.
//! There is no epsilon: nearly-collinear triples are classified by the sign
//! of whatever the cross product rounds to.
//!
//! # References
//!
//! - Cormen, T. H., et al. (2009). *Introduction to Algorithms*, 3rd ed., §33.1.

use crate::geometry::{Point, Segment};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// `p -> q -> r` turns clockwise in Y-up coordinates.
    Clockwise,
    /// `p -> q -> r` turns counterclockwise in Y-up coordinates.
    CounterClockwise,
}

/// Classify the turn `p -> q -> r` by the sign of
/// `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`.
#[must_use]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);

    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` lies inside the axis-aligned bounding box of `p` and `r`.
///
/// Only meaningful once `p`, `q`, `r` are known to be collinear.
#[must_use]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether two closed segments share at least one point.
///
/// Touching at an endpoint counts as an intersection. Each collinear case is
/// tested on its own; any one of them succeeding is sufficient.
#[must_use]
pub fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let (a, b) = (s1.start, s1.end);
    let (c, d) = (s2.start, s2.end);

    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(a, c, b))
        || (o2 == Orientation::Collinear && on_segment(a, d, b))
        || (o3 == Orientation::Collinear && on_segment(c, a, d))
        || (o4 == Orientation::Collinear && on_segment(c, b, d))
}

/// Edge `i` of the closed polygon through `points`.
#[inline]
fn polygon_edge(points: &[Point], i: usize) -> Segment {
    Segment::new(points[i], points[(i + 1) % points.len()])
}

/// Whether `points` describes a simple (non-self-intersecting) closed polygon.
///
/// Returns `false` for fewer than 3 points. Otherwise every pair of
/// non-adjacent edges is tested; edges that share a vertex, including the
/// closing edge and edge 0, are never compared. O(n²).
#[must_use]
pub fn is_polygon_valid(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(&polygon_edge(points, i), &polygon_edge(points, j)) {
                tracing::trace!(edge_a = i, edge_b = j, "polygon edges intersect");
                return false;
            }
        }
    }

    true
}

/// Whether no two segments in the list intersect, adjacent ones included.
///
/// This is the stricter check applied to segment-list polygons. Segments that
/// share an endpoint count as intersecting, so a chain of connected segments
/// fails it.
#[must_use]
pub fn segments_pairwise_disjoint(segments: &[Segment]) -> bool {
    for (i, a) in segments.iter().enumerate() {
        for (j, b) in segments.iter().enumerate().skip(i + 1) {
            if segments_intersect(a, b) {
                tracing::trace!(segment_a = i, segment_b = j, "segments intersect");
                return false;
            }
        }
    }
    true
}

/// Convex hull of a point set (Andrew's monotone chain).
///
/// Collinear boundary points are dropped. Inputs with fewer than 3 distinct
/// points return the distinct points themselves.
#[must_use]
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let cross =
        |o: Point, a: Point, b: Point| (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x);

    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len() * 2);

    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop();
    hull
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
