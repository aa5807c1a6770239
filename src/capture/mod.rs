// capture/mod.rs - Screen Capture Module
//
// One frame source feeds the whole overlay: the compositor asks it for
// the outer capture rectangle once per tick and fans the resulting frame
// out to every view and indicator. Sources are synchronous; a capture
// call blocks the tick until the buffer is ready.

pub mod monitor;

use anyhow::{ensure, Result};
use image::RgbaImage;

use crate::geometry::{CaptureRect, Point, Rgb};

/// A captured frame: RGBA pixels tagged with the screen rectangle they
/// cover. Lives for one tick; views and indicators only ever borrow it.
#[derive(Debug)]
pub struct Frame {
    rect: CaptureRect,
    image: RgbaImage,
}

impl Frame {
    pub fn new(rect: CaptureRect, image: RgbaImage) -> Result<Self> {
        ensure!(
            image.width() == rect.width && image.height() == rect.height,
            "frame buffer is {}x{} but covers {}",
            image.width(),
            image.height(),
            rect
        );
        Ok(Self { rect, image })
    }

    pub fn rect(&self) -> CaptureRect {
        self.rect
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Sample one pixel by absolute screen coordinate. None if the point
    /// is outside the frame.
    pub fn rgb_at(&self, p: Point) -> Option<Rgb> {
        let (x, y) = self.rect.local_point(p)?;
        let px = self.image.get_pixel(x, y);
        Some(Rgb(px.0[0], px.0[1], px.0[2]))
    }
}

/// A source of captured frames.
///
/// `&mut self` because capture sessions touch shared OS/display state;
/// the whole pipeline runs on one thread and the compositor is the only
/// caller.
pub trait FrameSource {
    /// Capture `rect` from the screen. Fails only when the underlying OS
    /// capture fails; there is no retry here, the caller decides.
    fn capture(&mut self, rect: CaptureRect) -> Result<Frame>;
}

/// Create the screen-backed frame source for the given outer bounds.
pub fn create_frame_source(bounds: CaptureRect) -> Result<Box<dyn FrameSource>> {
    Ok(Box::new(monitor::MonitorFrameSource::new(bounds)?))
}
