//! Thread-safe chart handle.
//!
//! Hosts that deliver resize notifications from more than one thread share
//! a [`SharedSmithChart`]. Each redraw runs to completion under the lock, so
//! a reader never observes a mapping from one resize paired with primitives
//! from another.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::chart::{RedrawTrigger, SmithChart};
use crate::config::ChartConfig;
use crate::primitive::{DrawPrimitive, RenderSurface};
use crate::viewport::{CanvasSize, ViewportMapping};

/// Cloneable handle to one chart.
#[derive(Debug, Clone, Default)]
pub struct SharedSmithChart {
    inner: Arc<Mutex<SmithChart>>,
}

impl SharedSmithChart {
    /// Wraps a new chart built from `config`.
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SmithChart::new(config))),
        }
    }

    /// Runs a redraw pass and returns a snapshot of the result.
    #[must_use]
    pub fn redraw(&self, trigger: RedrawTrigger) -> Vec<DrawPrimitive> {
        self.inner.lock().redraw(trigger).to_vec()
    }

    /// Resize notification.
    #[must_use]
    pub fn resize(&self, size: CanvasSize) -> Vec<DrawPrimitive> {
        self.redraw(RedrawTrigger::Resize(size))
    }

    /// Replaces the configuration and redraws.
    #[must_use]
    pub fn reconfigure(&self, config: ChartConfig) -> Vec<DrawPrimitive> {
        self.inner.lock().reconfigure(config).to_vec()
    }

    /// Snapshot of the current primitive set and the mapping it was built with.
    #[must_use]
    pub fn snapshot(&self) -> (Option<ViewportMapping>, Vec<DrawPrimitive>) {
        let chart = self.inner.lock();
        (chart.viewport(), chart.primitives().to_vec())
    }

    /// Draws the current primitive set onto `surface` while holding the lock.
    pub fn present(&self, surface: &mut impl RenderSurface) {
        self.inner.lock().present(surface);
    }
}
