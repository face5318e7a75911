//! A closed set of drawable shapes.
//!
//! Each variant carries only what its rasterizer needs and dispatches to it
//! through [`Drawable`].

use crate::color::Rgba;
use crate::config::DEFAULT_EDGE_THICKNESS;
use crate::geometry::{Point, Segment};
use crate::render::{draw_circle_symmetric, draw_ellipse, draw_polygon, Drawable};
use crate::surface::Surface;

/// Shape kinds understood by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A small filled dot.
    Point(Point),
    /// A one-pixel line.
    Segment(Segment),
    /// Circle outline.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f32,
    },
    /// Axis-aligned ellipse outline.
    Ellipse {
        /// Center point.
        center: Point,
        /// Horizontal radius.
        radius_x: f32,
        /// Vertical radius.
        radius_y: f32,
    },
    /// Closed polygon outline; skipped when self-intersecting.
    Polygon(Vec<Point>),
}

impl Shape {
    /// Circle centered at `center`.
    #[must_use]
    pub const fn circle(center: Point, radius: f32) -> Self {
        Self::Circle { center, radius }
    }

    /// Ellipse centered at `center`.
    #[must_use]
    pub const fn ellipse(center: Point, radius_x: f32, radius_y: f32) -> Self {
        Self::Ellipse {
            center,
            radius_x,
            radius_y,
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Segment(_) => "segment",
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Polygon(_) => "polygon",
        }
    }
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Segment> for Shape {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Vec<Point>> for Shape {
    fn from(points: Vec<Point>) -> Self {
        Self::Polygon(points)
    }
}

impl Drawable for Shape {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Rgba) {
        match self {
            Self::Point(point) => point.draw(surface, color),
            Self::Segment(segment) => segment.draw(surface, color),
            Self::Circle { center, radius } => {
                draw_circle_symmetric(surface, center.x, center.y, *radius, color);
            }
            Self::Ellipse {
                center,
                radius_x,
                radius_y,
            } => draw_ellipse(surface, center.x, center.y, *radius_x, *radius_y, color),
            Self::Polygon(points) => draw_polygon(surface, points, DEFAULT_EDGE_THICKNESS, color),
        }
    }
}
