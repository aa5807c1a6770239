// Integration test for the capture -> crop -> compare pipeline, driven
// end to end with synthetic frames instead of a live screen.

use anyhow::{anyhow, Result};
use image::RgbaImage;

use hudshift::{
    CaptureRect, Frame, FrameSource, IndicatorSpec, OverlayCompositor, OverlayConfig, Point,
    RegionSpec, Rgb, Stroke,
};

const BOUNDS: CaptureRect = CaptureRect::from_corners(1200, 1200, 2100, 1500);
const TARGET: Point = Point::new(1582, 1297);
const REFERENCE: Rgb = Rgb(150, 124, 216);

/// Hands out pre-built screen contents, one per tick.
struct ScriptedScreen {
    frames: Vec<RgbaImage>,
    next: usize,
}

impl ScriptedScreen {
    fn new(frames: Vec<RgbaImage>) -> Box<Self> {
        Box::new(Self { frames, next: 0 })
    }
}

impl FrameSource for ScriptedScreen {
    fn capture(&mut self, rect: CaptureRect) -> Result<Frame> {
        let image = self
            .frames
            .get(self.next)
            .cloned()
            .ok_or_else(|| anyhow!("screen disconnected"))?;
        self.next += 1;
        Frame::new(rect, image)
    }
}

fn screen_with_target(rgb: Rgb) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(BOUNDS.width, BOUNDS.height, image::Rgba([0, 0, 0, 255]));
    // Target (1582, 1297) sits at (382, 97) inside the outer bounds
    image.put_pixel(382, 97, image::Rgba([rgb.0, rgb.1, rgb.2, 255]));
    image
}

fn test_config() -> OverlayConfig {
    OverlayConfig {
        bounds: BOUNDS,
        tick_ms: 17,
        regions: vec![RegionSpec {
            name: "swords".into(),
            capture: CaptureRect::from_corners(1494, 1287, 1586, 1298),
            display: Point::new(1636, 927),
            scale: 2.0,
        }],
        indicators: vec![IndicatorSpec {
            name: "swap".into(),
            target: TARGET,
            reference: REFERENCE,
            invert: false,
            area: CaptureRect::new(1630, 921, 196, 34),
            stroke: Stroke {
                color: Rgb(255, 210, 80),
                thickness: 4,
            },
        }],
        show_mouse_position: false,
    }
}

#[test]
fn matching_target_pixel_turns_the_indicator_on_in_one_tick() {
    let screen = ScriptedScreen::new(vec![screen_with_target(REFERENCE)]);
    let mut compositor = OverlayCompositor::new(&test_config(), screen).unwrap();

    let outcome = compositor.tick().unwrap();

    assert!(compositor.indicators()[0].visible());
    assert_eq!(outcome.transitions.len(), 1);
    assert!(outcome.transitions[0].visible);
    assert_eq!(outcome.views_rendered, 1);
}

#[test]
fn black_target_pixel_keeps_the_indicator_off_until_it_matches() {
    let screen = ScriptedScreen::new(vec![
        screen_with_target(Rgb(0, 0, 0)),
        screen_with_target(REFERENCE),
        screen_with_target(REFERENCE),
    ]);
    let mut compositor = OverlayCompositor::new(&test_config(), screen).unwrap();

    // Tick 1: pixel is black, nothing shows
    let first = compositor.tick().unwrap();
    assert!(!compositor.indicators()[0].visible());
    assert!(first.transitions.is_empty());

    // Tick 2: pixel matches, exactly one repaint request
    let second = compositor.tick().unwrap();
    assert!(compositor.indicators()[0].visible());
    assert_eq!(second.transitions.len(), 1);

    // Tick 3: still matching, no redundant repaint
    let third = compositor.tick().unwrap();
    assert!(third.transitions.is_empty());
}

#[test]
fn region_views_mirror_the_screen_content() {
    let mut screen_content = screen_with_target(Rgb(0, 0, 0));
    // Paint the swords region (local origin (294, 87), 92x11) a solid color
    for y in 87..98 {
        for x in 294..386 {
            screen_content.put_pixel(x, y, image::Rgba([10, 200, 30, 255]));
        }
    }

    let screen = ScriptedScreen::new(vec![screen_content]);
    let mut compositor = OverlayCompositor::new(&test_config(), screen).unwrap();
    compositor.tick().unwrap();

    let mirrored = compositor.views()[0].image().unwrap();
    assert_eq!((mirrored.width(), mirrored.height()), (184, 22));
    // Solid input stays solid through the 2x resample
    for (_, _, px) in mirrored.enumerate_pixels() {
        assert_eq!((px.0[0], px.0[1], px.0[2]), (10, 200, 30));
    }
}

#[test]
fn capture_failure_surfaces_to_the_caller() {
    let screen = ScriptedScreen::new(vec![screen_with_target(REFERENCE)]);
    let mut compositor = OverlayCompositor::new(&test_config(), screen).unwrap();

    compositor.tick().unwrap();
    // The scripted screen is exhausted: the next tick must fail loudly
    assert!(compositor.tick().is_err());
}

#[test]
fn misconfigured_profiles_never_reach_the_capture_stage() {
    let mut config = test_config();
    config.indicators[0].target = Point::new(0, 0);

    let result = OverlayCompositor::new(&config, ScriptedScreen::new(vec![]));
    assert!(result.is_err());
}
