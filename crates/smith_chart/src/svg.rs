//! SVG rendering surface.
//!
//! Reference [`RenderSurface`] that writes each primitive as an SVG element.
//! Writing into a `String` cannot fail, so `fmt` results are discarded.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use crate::geometry::{Point, SweepDirection};
use crate::primitive::{DrawPrimitive, RenderSurface};
use crate::style::{Color, Stroke};
use crate::viewport::CanvasSize;

/// Point on a pixel-space circle at a canvas angle.
fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// SVG `A` command flags `(large_arc, sweep)` for an arc in canvas angles.
///
/// SVG sweep = 1 runs toward increasing angle, which is visually clockwise
/// on a y-down canvas.
fn arc_flags(start_angle: f64, end_angle: f64, direction: SweepDirection) -> (u8, u8) {
    let (extent, sweep) = match direction {
        SweepDirection::Clockwise => ((end_angle - start_angle).rem_euclid(TAU), 1),
        SweepDirection::CounterClockwise => ((start_angle - end_angle).rem_euclid(TAU), 0),
    };
    (u8::from(extent > PI), sweep)
}

fn stroke_attrs(stroke: Stroke) -> String {
    format!(
        r#"fill="none" stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.2}""#,
        stroke.color.to_css_hex(),
        stroke.color.a,
        stroke.width
    )
}

/// Collects primitives into an SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: CanvasSize,
    background: Option<Color>,
    body: String,
}

impl SvgSurface {
    /// Creates a surface for a canvas.
    #[must_use]
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            background: None,
            body: String::with_capacity(4096),
        }
    }

    /// Paints a background rectangle behind the chart.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Returns the complete SVG document.
    #[must_use]
    pub fn finish(&self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height
        );
        if let Some(color) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                color.to_css_hex()
            );
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl RenderSurface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw(&mut self, primitive: &DrawPrimitive) {
        match *primitive {
            DrawPrimitive::Circle {
                center,
                radius,
                stroke,
            } => {
                let _ = writeln!(
                    self.body,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                    center.x,
                    center.y,
                    radius,
                    stroke_attrs(stroke)
                );
            }
            DrawPrimitive::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                direction,
                stroke,
            } => {
                let start = point_on_circle(center, radius, start_angle);
                let end = point_on_circle(center, radius, end_angle);
                let (large_arc, sweep) = arc_flags(start_angle, end_angle, direction);
                let _ = writeln!(
                    self.body,
                    r#"  <path d="M {:.2} {:.2} A {:.2} {:.2} 0 {} {} {:.2} {:.2}" {}/>"#,
                    start.x,
                    start.y,
                    radius,
                    radius,
                    large_arc,
                    sweep,
                    end.x,
                    end.y,
                    stroke_attrs(stroke)
                );
            }
            DrawPrimitive::Line { start, end, stroke } => {
                let _ = writeln!(
                    self.body,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                    start.x,
                    start.y,
                    end.x,
                    end.y,
                    stroke_attrs(stroke)
                );
            }
        }
    }
}
