//! Renderer configuration.
//!
//! Defaults reproduce the stock look: 2px polyline edges and 2px point dots.

use crate::error::{Error, Result};

/// Tunables for [`PrimitiveRenderer`](crate::renderer::PrimitiveRenderer).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RendererConfig {
    /// Thickness of the edges drawn for polylines, polygons and thick segments.
    pub edge_thickness: f32,
    /// Radius of the disc drawn by `draw_point`.
    pub point_radius: f32,
}

/// Default polyline edge thickness in pixels.
pub const DEFAULT_EDGE_THICKNESS: f32 = 2.0;

/// Default point radius in pixels.
pub const DEFAULT_POINT_RADIUS: f32 = 2.0;

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            edge_thickness: DEFAULT_EDGE_THICKNESS,
            point_radius: DEFAULT_POINT_RADIUS,
        }
    }
}

impl RendererConfig {
    /// Set the edge thickness.
    #[must_use]
    pub fn with_edge_thickness(mut self, thickness: f32) -> Self {
        self.edge_thickness = thickness;
        self
    }

    /// Set the point radius.
    #[must_use]
    pub fn with_point_radius(mut self, radius: f32) -> Self {
        self.point_radius = radius;
        self
    }

    /// Check that every field is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        check_positive("edge_thickness", self.edge_thickness)?;
        check_positive("point_radius", self.point_radius)?;
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidConfig {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(Error::InvalidConfig {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}
