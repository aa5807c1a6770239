// indicator.rs - Pixel-Triggered State Indicators
//
// An indicator samples exactly one pixel of the shared frame per tick
// and derives a boolean "visible" from equality with its reference
// color, optionally inverted. Repainting is edge-triggered: the paint
// surface is only told about transitions, never about a tick that kept
// the same state. That is the one deliberate optimization in the whole
// pipeline and callers must preserve it.
//
// The flag follows the pixel with no hysteresis: a cue should appear the
// same instant the game paints it. The cost is that single-frame pixel
// noise (anti-aliased UI text, partial occlusion) can flicker the
// border; no debouncing is applied.

use anyhow::{anyhow, Result};

use crate::capture::Frame;
use crate::config::IndicatorSpec;

/// Outcome of one indicator update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorUpdate {
    pub visible: bool,
    /// True only when this tick flipped the visible flag; the border is
    /// repainted exactly when this is set.
    pub changed: bool,
}

pub struct StateIndicator {
    spec: IndicatorSpec,
    visible: bool,
}

impl StateIndicator {
    /// Indicators start hidden; the first matching tick shows them.
    pub fn new(spec: IndicatorSpec) -> Self {
        Self {
            spec,
            visible: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &IndicatorSpec {
        &self.spec
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Sample the target pixel and update the visible flag.
    pub fn update(&mut self, frame: &Frame) -> Result<IndicatorUpdate> {
        let pixel = frame.rgb_at(self.spec.target).ok_or_else(|| {
            anyhow!(
                "target pixel {} is not covered by the frame ({})",
                self.spec.target,
                frame.rect()
            )
        })?;

        let visible = (pixel == self.spec.reference) ^ self.spec.invert;
        let changed = visible != self.visible;
        self.visible = visible;

        Ok(IndicatorUpdate { visible, changed })
    }
}
