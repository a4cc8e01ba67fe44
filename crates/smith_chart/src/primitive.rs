//! Drawable primitives and the rendering-surface seam.
//!
//! The engine produces pixel-space geometry; a [`RenderSurface`] turns it
//! into pixels. Angles follow the canvas convention: measured from +x
//! toward +y (downward), so a visually counter-clockwise sweep runs toward
//! decreasing angle.

use crate::geometry::{Point, SweepDirection};
use crate::style::Stroke;

/// A drawing command in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPrimitive {
    /// Full circle outline.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Stroke.
        stroke: Stroke,
    },
    /// Circular arc outline.
    Arc {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Start angle in [0, 2π).
        start_angle: f64,
        /// End angle in [0, 2π).
        end_angle: f64,
        /// Visual sweep direction from start to end.
        direction: SweepDirection,
        /// Stroke.
        stroke: Stroke,
    },
    /// Straight segment.
    Line {
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
        /// Stroke.
        stroke: Stroke,
    },
}

impl DrawPrimitive {
    /// Returns the stroke of any primitive.
    #[must_use]
    pub fn stroke(&self) -> Stroke {
        match self {
            Self::Circle { stroke, .. } | Self::Arc { stroke, .. } | Self::Line { stroke, .. } => {
                *stroke
            }
        }
    }

    /// Returns true if every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Circle { center, radius, .. } => {
                center.x.is_finite() && center.y.is_finite() && radius.is_finite()
            }
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                center.x.is_finite()
                    && center.y.is_finite()
                    && radius.is_finite()
                    && start_angle.is_finite()
                    && end_angle.is_finite()
            }
            Self::Line { start, end, .. } => {
                start.x.is_finite() && start.y.is_finite() && end.x.is_finite() && end.y.is_finite()
            }
        }
    }
}

/// The rendering collaborator.
///
/// A redraw always clears first, then draws the full primitive list in order.
pub trait RenderSurface {
    /// Drops everything drawn so far.
    fn clear(&mut self);

    /// Draws one primitive.
    fn draw(&mut self, primitive: &DrawPrimitive);
}

/// In-memory surface that keeps the last primitive set.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveBuffer {
    primitives: Vec<DrawPrimitive>,
    clears: usize,
}

impl PrimitiveBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            primitives: Vec::with_capacity(32),
            clears: 0,
        }
    }

    /// Primitives drawn since the last clear.
    #[must_use]
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    /// Number of times the buffer was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl RenderSurface for PrimitiveBuffer {
    fn clear(&mut self) {
        self.primitives.clear();
        self.clears += 1;
    }

    fn draw(&mut self, primitive: &DrawPrimitive) {
        self.primitives.push(*primitive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_replaces_on_clear() {
        let mut buffer = PrimitiveBuffer::new();
        let circle = DrawPrimitive::Circle {
            center: Point::new(10.0, 10.0),
            radius: 5.0,
            stroke: Stroke::default(),
        };

        buffer.clear();
        buffer.draw(&circle);
        buffer.draw(&circle);
        assert_eq!(buffer.primitives().len(), 2);

        buffer.clear();
        buffer.draw(&circle);
        assert_eq!(buffer.primitives().len(), 1);
        assert_eq!(buffer.clear_count(), 2);
    }

    #[test]
    fn test_is_finite() {
        let line = DrawPrimitive::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(f64::NAN, 1.0),
            stroke: Stroke::default(),
        };
        assert!(!line.is_finite());
        assert_eq!(line.stroke(), Stroke::default());
    }
}
