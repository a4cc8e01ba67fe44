//! # Smith Chart Geometry Engine
//!
//! Turns families of constant-resistance circles and constant-reactance
//! arcs into pixel-space drawing primitives for a resizable canvas.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       CHART PIPELINE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Trigger → Viewport Mapping → Plane Geometry → Primitives    │
//! │     ↓             ↓                 ↓               ↓        │
//! │  mount/resize  (cx, cy, r)    circles / arcs   RenderSurface │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never touches pixels. A [`RenderSurface`] receives the
//! primitive list; [`SvgSurface`] is the bundled reference implementation.
//!
//! ## Example
//!
//! ```rust
//! use smith_chart::{CanvasSize, ChartConfig, SmithChart};
//!
//! let mut chart = SmithChart::new(ChartConfig::default());
//! let primitives = chart.mount(CanvasSize::new(400.0, 400.0));
//! assert_eq!(primitives.len(), 19);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod primitive;
pub mod shared;
pub mod style;
pub mod svg;
pub mod viewport;

pub use chart::{build_primitives, RedrawTrigger, SmithChart};
pub use config::{ChartConfig, DEFAULT_REACTANCES, DEFAULT_RESISTANCES};
pub use error::{ChartError, ChartResult};
pub use geometry::{
    reactance_arc, reactance_contour, resistance_circle, ArcGeometry, CircleGeometry,
    LineGeometry, Point, ReactanceContour, ResistanceSpan, SweepDirection,
};
pub use primitive::{DrawPrimitive, PrimitiveBuffer, RenderSurface};
pub use shared::SharedSmithChart;
pub use style::{ChartStyle, Color, Stroke};
pub use svg::SvgSurface;
pub use viewport::{CanvasSize, ViewportMapping, DEFAULT_PADDING};
