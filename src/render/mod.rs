//! Rasterization of geometric primitives.
//!
//! Every function draws onto any [`Surface`](crate::surface::Surface) and
//! silently clips pixels that fall outside it.
//!
//! # Algorithms
//!
//! - **DDA Line**: Incremental line with exactly `max(|dx|, |dy|) + 1` samples
//! - **Thick Line**: Rotated rectangle anchored at the start point
//! - **Midpoint Circle**: Outline with 8-way symmetry
//! - **Midpoint Ellipse**: Two-region outline with 4-way symmetry
//! - **Seed Fill**: Flood and border fill over 4-connected pixels
//! - **Parity Scanline Fill**: Even-odd crossings per pixel row
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*, 2nd ed.

mod curve;
mod fill;
mod line;
mod path;
mod primitives;

pub use curve::{draw_circle_symmetric, draw_ellipse, draw_filled_circle};
pub use fill::{border_fill, fill_horizontal_section, flood_fill, parity_check_fill};
pub use line::{draw_line, draw_line_incremental, draw_segment, LineStyle};
pub use path::{
    draw_filled_polygon, draw_polygon, draw_polygon_segments, draw_polyline,
    draw_polyline_segments,
};
pub use primitives::{draw_point, draw_rectangle, fill_convex, Drawable};
