//! Geometric value types consumed by the rasterizers.
//!
//! All types are `Copy` and constructed per draw call.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Y coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Replace the X coordinate.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Replace the Y coordinate.
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A directed line segment between two points.
///
/// Degenerate segments (`start == end`) are legal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Start point.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// End point.
    #[must_use]
    pub const fn end(&self) -> Point {
        self.end
    }

    /// Replace the start point.
    pub fn set_start(&mut self, point: Point) {
        self.start = point;
    }

    /// Replace the end point.
    pub fn set_end(&mut self, point: Point) {
        self.end = point;
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Direction from start to end in degrees, as `atan2(dy, dx)`.
    ///
    /// Positive angles turn clockwise on screen (Y grows downward).
    #[must_use]
    pub fn angle_degrees(&self) -> f32 {
        (self.end.y - self.start.y)
            .atan2(self.end.x - self.start.x)
            .to_degrees()
    }

    /// Whether start and end coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The four corners in drawing order, starting at the top-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }
}

/// Round a continuous coordinate to the pixel whose center is nearest.
///
/// Uses `floor(v + 0.5)`, so halves round toward positive infinity.
#[inline]
#[must_use]
pub fn to_pixel(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}
