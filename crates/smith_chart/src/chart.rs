//! The redraw engine.
//!
//! ## Redraw protocol
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌────────────────┐   ┌──────────┐
//! │   Trigger    │ → │ Viewport mapping │ → │ Plane geometry │ → │ Primitive│
//! │ mount/resize │   │ (only on resize) │   │  per value     │   │   list   │
//! │ /config      │   └──────────────────┘   └────────────────┘   └──────────┘
//! └──────────────┘
//! ```
//!
//! Every trigger rebuilds the whole primitive list. Nothing is cached or
//! diffed between passes, so two passes over the same size and config
//! produce identical output.

use tracing::{debug, trace, warn};

use crate::config::ChartConfig;
use crate::geometry::{reactance_contour, resistance_circle, ReactanceContour};
use crate::primitive::{DrawPrimitive, RenderSurface};
use crate::viewport::{CanvasSize, ViewportMapping};

/// Why a redraw is happening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RedrawTrigger {
    /// First layout of the canvas.
    Mount(CanvasSize),
    /// The host viewport changed size.
    Resize(CanvasSize),
    /// Resistance/reactance values or style changed.
    ConfigChanged,
}

impl RedrawTrigger {
    /// Canvas size carried by the trigger, if any.
    #[must_use]
    pub fn size(&self) -> Option<CanvasSize> {
        match self {
            Self::Mount(size) | Self::Resize(size) => Some(*size),
            Self::ConfigChanged => None,
        }
    }
}

/// Maps every configured value through the geometry formulas and the
/// viewport, in order: resistance circles first, then reactance contours.
#[must_use]
pub fn build_primitives(config: &ChartConfig, viewport: &ViewportMapping) -> Vec<DrawPrimitive> {
    let mut primitives =
        Vec::with_capacity(config.resistances.len() + config.reactances.len());

    for &r in &config.resistances {
        let circle = resistance_circle(r);
        let stroke = if r == 0.0 {
            config.style.boundary
        } else {
            config.style.resistance
        };
        primitives.push(DrawPrimitive::Circle {
            center: viewport.point_to_pixel(circle.center),
            radius: viewport.radius_to_pixel(circle.radius),
            stroke,
        });
    }

    for &x in &config.reactances {
        let primitive = match reactance_contour(x, config.resistance_span) {
            ReactanceContour::Arc(arc) => DrawPrimitive::Arc {
                center: viewport.point_to_pixel(arc.center),
                radius: viewport.radius_to_pixel(arc.radius),
                start_angle: viewport.angle_to_pixel(arc.angle1),
                end_angle: viewport.angle_to_pixel(arc.angle2),
                direction: arc.direction,
                stroke: config.style.reactance,
            },
            ReactanceContour::Line(line) => DrawPrimitive::Line {
                start: viewport.point_to_pixel(line.start),
                end: viewport.point_to_pixel(line.end),
                stroke: config.style.reactance,
            },
        };
        primitives.push(primitive);
    }

    primitives
}

/// A Smith chart bound to one canvas.
///
/// Owns the current viewport mapping and the current primitive set; both
/// are replaced wholesale, never patched.
#[derive(Debug, Clone)]
pub struct SmithChart {
    config: ChartConfig,
    canvas: Option<CanvasSize>,
    viewport: Option<ViewportMapping>,
    primitives: Vec<DrawPrimitive>,
    redraws: u64,
}

impl SmithChart {
    /// Creates an unmounted chart. Nothing is drawn until a size is known.
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            canvas: None,
            viewport: None,
            primitives: Vec::new(),
            redraws: 0,
        }
    }

    /// Runs one full redraw pass and returns the new primitive set.
    pub fn redraw(&mut self, trigger: RedrawTrigger) -> &[DrawPrimitive] {
        if let Some(size) = trigger.size() {
            if self.canvas == Some(size) {
                trace!("Canvas unchanged at {}x{}, keeping mapping", size.width, size.height);
            } else {
                self.canvas = Some(size);
                self.viewport = Some(ViewportMapping::new(size, self.config.padding));
            }
        }

        self.primitives = match &self.viewport {
            Some(viewport) => build_primitives(&self.config, viewport),
            None => {
                warn!("Redraw ({:?}) before canvas size is known, nothing to draw", trigger);
                Vec::new()
            }
        };
        self.redraws += 1;

        debug!(
            "Redraw #{} ({:?}): {} primitives",
            self.redraws,
            trigger,
            self.primitives.len()
        );

        &self.primitives
    }

    /// Initial layout.
    pub fn mount(&mut self, size: CanvasSize) -> &[DrawPrimitive] {
        self.redraw(RedrawTrigger::Mount(size))
    }

    /// Host viewport resized.
    pub fn resize(&mut self, size: CanvasSize) -> &[DrawPrimitive] {
        self.redraw(RedrawTrigger::Resize(size))
    }

    /// Replaces the configuration and redraws.
    ///
    /// A padding change invalidates the mapping, so it is rebuilt for the
    /// current canvas.
    pub fn reconfigure(&mut self, config: ChartConfig) -> &[DrawPrimitive] {
        if config.padding != self.config.padding {
            self.viewport = self
                .canvas
                .map(|size| ViewportMapping::new(size, config.padding));
        }
        self.config = config;
        self.redraw(RedrawTrigger::ConfigChanged)
    }

    /// Clears `surface` and draws the current primitive set onto it.
    pub fn present(&self, surface: &mut impl RenderSurface) {
        surface.clear();
        for primitive in &self.primitives {
            surface.draw(primitive);
        }
    }

    /// Current primitive set.
    #[must_use]
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    /// Current viewport mapping, if mounted.
    #[must_use]
    pub fn viewport(&self) -> Option<ViewportMapping> {
        self.viewport
    }

    /// Last known canvas size.
    #[must_use]
    pub fn canvas_size(&self) -> Option<CanvasSize> {
        self.canvas
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Number of completed redraw passes.
    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }
}

impl Default for SmithChart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}
