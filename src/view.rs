// view.rs - Mirrored Region Views
//
// A region view is a pure function of the shared frame: crop the view's
// rectangle out of it, scale by the per-view factor, keep the result for
// the paint surface. Views hold no capture state and never touch the
// frame source.

use anyhow::{anyhow, Result};
use image::{imageops, imageops::FilterType, RgbaImage};

use crate::capture::Frame;
use crate::config::RegionSpec;

pub struct RegionView {
    spec: RegionSpec,
    image: Option<RgbaImage>,
}

impl RegionView {
    pub fn new(spec: RegionSpec) -> Self {
        Self { spec, image: None }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &RegionSpec {
        &self.spec
    }

    /// The last rendered scaled image, if any tick has succeeded yet.
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Crop this view's rectangle out of `frame` and replace the stored
    /// image with the scaled copy.
    ///
    /// Geometry is validated at startup, so a miss here means the frame
    /// is smaller than the bounds promised; that is an error for this
    /// view only and other views proceed with the same frame.
    pub fn render(&mut self, frame: &Frame) -> Result<()> {
        let (local_x, local_y) = frame
            .rect()
            .local_origin(&self.spec.capture)
            .ok_or_else(|| {
                anyhow!(
                    "region {} is not covered by the frame ({})",
                    self.spec.capture,
                    frame.rect()
                )
            })?;

        let crop = imageops::crop_imm(
            frame.image(),
            local_x,
            local_y,
            self.spec.capture.width,
            self.spec.capture.height,
        )
        .to_image();

        // Scale 1 stays pixel-identical to the crop; resampling is only
        // for actual enlargement.
        let scaled = if (self.spec.scale - 1.0).abs() < f32::EPSILON {
            crop
        } else {
            let (width, height) = self.spec.scaled_size();
            imageops::resize(&crop, width, height, FilterType::Triangle)
        };

        self.image = Some(scaled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CaptureRect, Point};

    /// A frame whose pixel at absolute (x, y) encodes its coordinates,
    /// so crops can be checked position by position.
    fn coordinate_frame(rect: CaptureRect) -> Frame {
        let image = RgbaImage::from_fn(rect.width, rect.height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 7, 255])
        });
        Frame::new(rect, image).unwrap()
    }

    fn spec(capture: CaptureRect, scale: f32) -> RegionSpec {
        RegionSpec {
            name: "test".into(),
            capture,
            display: Point::new(0, 0),
            scale,
        }
    }

    #[test]
    fn crop_picks_the_right_pixels() {
        let bounds = CaptureRect::from_corners(1200, 1200, 2100, 1500);
        let frame = coordinate_frame(bounds);
        let region = CaptureRect::from_corners(1494, 1287, 1586, 1298);
        let mut view = RegionView::new(spec(region, 1.0));

        view.render(&frame).unwrap();

        let img = view.image().unwrap();
        assert_eq!((img.width(), img.height()), (92, 11));
        for (i, j) in [(0u32, 0u32), (45, 5), (91, 10)] {
            let px = img.get_pixel(i, j);
            // Local (i, j) must equal source (region left - frame left + i, ...)
            assert_eq!(px.0[0], ((294 + i) % 256) as u8);
            assert_eq!(px.0[1], ((87 + j) % 256) as u8);
        }
    }

    #[test]
    fn scale_one_is_identity() {
        let bounds = CaptureRect::new(0, 0, 64, 64);
        let frame = coordinate_frame(bounds);
        let region = CaptureRect::new(8, 8, 16, 16);

        let mut unscaled = RegionView::new(spec(region, 1.0));
        unscaled.render(&frame).unwrap();

        let crop = imageops::crop_imm(frame.image(), 8, 8, 16, 16).to_image();
        assert_eq!(unscaled.image().unwrap().as_raw(), crop.as_raw());
    }

    #[test]
    fn scaled_output_has_rounded_size() {
        let bounds = CaptureRect::new(0, 0, 200, 200);
        let frame = coordinate_frame(bounds);

        let mut doubled = RegionView::new(spec(CaptureRect::new(10, 10, 92, 11), 2.0));
        doubled.render(&frame).unwrap();
        let img = doubled.image().unwrap();
        assert_eq!((img.width(), img.height()), (184, 22));

        let mut fractional = RegionView::new(spec(CaptureRect::new(10, 10, 92, 11), 1.5));
        fractional.render(&frame).unwrap();
        let img = fractional.image().unwrap();
        assert_eq!((img.width(), img.height()), (138, 17));
    }

    #[test]
    fn render_fails_loudly_when_frame_does_not_cover_region() {
        // Frame delivered smaller than the promised bounds
        let frame = coordinate_frame(CaptureRect::new(0, 0, 50, 50));
        let mut view = RegionView::new(spec(CaptureRect::new(40, 40, 20, 20), 1.0));

        assert!(view.render(&frame).is_err());
        assert!(view.image().is_none());
    }

    #[test]
    fn render_replaces_previous_image() {
        let bounds = CaptureRect::new(0, 0, 32, 32);
        let region = CaptureRect::new(0, 0, 8, 8);
        let mut view = RegionView::new(spec(region, 1.0));

        let black = Frame::new(bounds, RgbaImage::from_pixel(32, 32, image::Rgba([0, 0, 0, 255]))).unwrap();
        let white = Frame::new(bounds, RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 255]))).unwrap();

        view.render(&black).unwrap();
        assert_eq!(view.image().unwrap().get_pixel(0, 0).0[0], 0);
        view.render(&white).unwrap();
        assert_eq!(view.image().unwrap().get_pixel(0, 0).0[0], 255);
    }
}
