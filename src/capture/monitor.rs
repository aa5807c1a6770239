// capture/monitor.rs - xcap-backed Frame Source
//
// Grabs the monitor that hosts the outer capture rectangle and crops the
// requested region out of the grab. xcap exposes whole-monitor grabs
// only, so the crop happens here rather than in the OS call.

use anyhow::{anyhow, Context, Result};
use image::{imageops, RgbaImage};
use log::{debug, info};
use xcap::Monitor;

use super::{Frame, FrameSource};
use crate::geometry::CaptureRect;

/// Screen-backed frame source. Holds on to the monitor chosen at startup
/// for the lifetime of the process; monitors do not move mid-session.
pub struct MonitorFrameSource {
    monitor: Monitor,
    monitor_rect: CaptureRect,
}

impl MonitorFrameSource {
    /// Pick the monitor containing `bounds` and fail fast if no monitor
    /// fully hosts it (spanning monitors is not supported).
    pub fn new(bounds: CaptureRect) -> Result<Self> {
        let monitors = Monitor::all().context("failed to enumerate monitors")?;

        for monitor in monitors {
            let rect = CaptureRect::new(
                monitor.x()?,
                monitor.y()?,
                monitor.width()?,
                monitor.height()?,
            );
            if rect.contains_rect(&bounds) {
                info!(
                    "capturing from monitor '{}' ({}), outer bounds {}",
                    monitor.name()?,
                    rect,
                    bounds
                );
                return Ok(Self {
                    monitor,
                    monitor_rect: rect,
                });
            }
        }

        Err(anyhow!("no monitor fully contains the capture bounds {bounds}"))
    }
}

impl FrameSource for MonitorFrameSource {
    fn capture(&mut self, rect: CaptureRect) -> Result<Frame> {
        let (local_x, local_y) = self
            .monitor_rect
            .local_origin(&rect)
            .ok_or_else(|| anyhow!("capture rect {rect} left monitor {}", self.monitor_rect))?;

        let grab = self
            .monitor
            .capture_image()
            .context("monitor capture failed")?;

        // Rebuild through the raw buffer so the frame owns a plain
        // image-crate buffer regardless of which image version xcap links.
        let (width, height) = (grab.width(), grab.height());
        let full = RgbaImage::from_raw(width, height, grab.into_raw())
            .ok_or_else(|| anyhow!("monitor grab returned a malformed buffer"))?;

        debug!("captured {}x{}, cropping {} at local ({local_x}, {local_y})", width, height, rect);

        let crop = imageops::crop_imm(&full, local_x, local_y, rect.width, rect.height).to_image();
        Frame::new(rect, crop)
    }
}
