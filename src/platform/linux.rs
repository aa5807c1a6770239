// platform/linux.rs - Linux Implementation (Stub)
//
// winit already provides always-on-top and click-through here; the
// remaining tweaks have no portable X11/Wayland equivalent, so indicator
// interiors stay opaque and the cursor readout shows dashes.

use hudshift::Point;
use winit::window::Window;

pub fn cursor_position() -> Option<Point> {
    // No global cursor query without compositor-specific protocols
    None
}

pub fn apply_overlay_style(_window: &Window) {}

pub fn apply_hollow_frame(_window: &Window, _width: u32, _height: u32, _thickness: u32) {}
