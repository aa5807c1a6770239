// platform/macos.rs - macOS Implementation (Stub)
//
// winit covers always-on-top and click-through; window shaping and a
// global cursor query would need AppKit calls that are not wired up, so
// indicator interiors stay opaque and the cursor readout shows dashes.

use hudshift::Point;
use winit::window::Window;

pub fn cursor_position() -> Option<Point> {
    None
}

pub fn apply_overlay_style(_window: &Window) {}

pub fn apply_hollow_frame(_window: &Window, _width: u32, _height: u32, _thickness: u32) {}
