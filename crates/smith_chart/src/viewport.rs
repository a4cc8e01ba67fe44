//! Plane-to-pixel viewport mapping.
//!
//! The chart is a unit disk centered on the canvas and scaled uniformly to
//! the shorter canvas side minus padding. Pixel space grows downward, so
//! every y coordinate and every angle is flipped on the way out.

use serde::{Deserialize, Serialize};

use crate::geometry::{normalize_angle, Point};

/// Default padding between the chart boundary and the canvas edge, in pixels.
pub const DEFAULT_PADDING: f64 = 20.0;

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl CanvasSize {
    /// Creates a canvas size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The shorter side.
    #[must_use]
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Immutable mapping from the reflection-coefficient plane to pixels.
///
/// Rebuilt once per resize; never mutated in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMapping {
    /// Pixel x of the plane origin.
    pub cx: f64,
    /// Pixel y of the plane origin.
    pub cy: f64,
    /// Pixels per plane unit (the chart radius).
    pub r: f64,
}

impl ViewportMapping {
    /// Builds the mapping for a canvas.
    ///
    /// A canvas no larger than twice the padding yields `r <= 0`; the
    /// result is still returned and drawing it is the caller's call.
    #[must_use]
    pub fn new(size: CanvasSize, padding: f64) -> Self {
        let center = size.center();
        Self {
            cx: center.x,
            cy: center.y,
            r: size.min_dimension() / 2.0 - padding,
        }
    }

    /// Plane x to pixel x.
    #[must_use]
    pub fn x_to_pixel(&self, x: f64) -> f64 {
        self.cx + self.r * x
    }

    /// Plane y to pixel y (flipped).
    #[must_use]
    pub fn y_to_pixel(&self, y: f64) -> f64 {
        self.cy - self.r * y
    }

    /// Plane length to pixel length.
    #[must_use]
    pub fn radius_to_pixel(&self, radius: f64) -> f64 {
        self.r * radius
    }

    /// Plane angle to pixel angle in [0, 2π).
    ///
    /// The sign flip keeps arcs on the same side of the real axis once y
    /// points down.
    #[must_use]
    pub fn angle_to_pixel(&self, theta: f64) -> f64 {
        normalize_angle((-theta.sin()).atan2(theta.cos()))
    }

    /// Plane point to pixel point.
    #[must_use]
    pub fn point_to_pixel(&self, point: Point) -> Point {
        Point::new(self.x_to_pixel(point.x), self.y_to_pixel(point.y))
    }
}
