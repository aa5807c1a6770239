// compositor.rs - Tick Orchestration
//
// The compositor owns the frame source and the full set of views and
// indicators. One tick = one capture of the outer bounds, fanned out to
// every view and indicator by shared reference. Views are independent
// pure functions of the frame, so order never matters and one failing
// view never blocks the rest; only a failed capture aborts the tick.

use anyhow::{Context, Result};
use log::warn;

use crate::capture::{Frame, FrameSource};
use crate::config::{ConfigError, OverlayConfig};
use crate::geometry::CaptureRect;
use crate::indicator::StateIndicator;
use crate::view::RegionView;

/// An indicator that flipped state this tick. The paint surface shows or
/// hides the border for exactly these, and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorTransition {
    pub index: usize,
    pub visible: bool,
}

/// What one tick accomplished.
#[derive(Debug, Default)]
pub struct TickOutcome {
    pub views_rendered: usize,
    /// Views or indicators skipped this tick because of an isolated
    /// error. A dropped update at this rate is invisible; we log and
    /// move on.
    pub skipped: usize,
    pub transitions: Vec<IndicatorTransition>,
}

pub struct OverlayCompositor {
    source: Box<dyn FrameSource>,
    bounds: CaptureRect,
    views: Vec<RegionView>,
    indicators: Vec<StateIndicator>,
}

impl std::fmt::Debug for OverlayCompositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayCompositor")
            .field("bounds", &self.bounds)
            .field("views", &self.views.len())
            .field("indicators", &self.indicators.len())
            .finish_non_exhaustive()
    }
}

impl OverlayCompositor {
    /// Build the pipeline from a profile. Validation runs here, so a
    /// compositor never exists with out-of-bounds geometry.
    pub fn new(config: &OverlayConfig, source: Box<dyn FrameSource>) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            source,
            bounds: config.bounds,
            views: config.regions.iter().cloned().map(RegionView::new).collect(),
            indicators: config
                .indicators
                .iter()
                .cloned()
                .map(StateIndicator::new)
                .collect(),
        })
    }

    pub fn views(&self) -> &[RegionView] {
        &self.views
    }

    pub fn indicators(&self) -> &[StateIndicator] {
        &self.indicators
    }

    /// Run one tick: capture once, update everything.
    ///
    /// Errors out only when the capture itself fails; that is fatal for
    /// the caller to handle. Everything downstream is per-view isolated.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        let frame: Frame = self
            .source
            .capture(self.bounds)
            .context("screen capture failed")?;

        let mut outcome = TickOutcome::default();

        for view in &mut self.views {
            match view.render(&frame) {
                Ok(()) => outcome.views_rendered += 1,
                Err(err) => {
                    warn!("region '{}' skipped this tick: {err:#}", view.name());
                    outcome.skipped += 1;
                }
            }
        }

        for (index, indicator) in self.indicators.iter_mut().enumerate() {
            match indicator.update(&frame) {
                Ok(update) if update.changed => outcome.transitions.push(IndicatorTransition {
                    index,
                    visible: update.visible,
                }),
                Ok(_) => {}
                Err(err) => {
                    warn!("indicator '{}' skipped this tick: {err:#}", indicator.name());
                    outcome.skipped += 1;
                }
            }
        }

        Ok(outcome)
    }
}
