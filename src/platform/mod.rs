// platform/mod.rs - Platform Abstraction Layer
//
// Native tweaks winit does not cover: keeping overlay windows out of
// focus and the taskbar, punching the hollow interior out of indicator
// border windows, and querying the global cursor position.

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "linux")]
pub mod linux;

use hudshift::Point;
use winit::window::Window;

/// Global cursor position in absolute screen coordinates, if the
/// platform can report it.
pub fn cursor_position() -> Option<Point> {
    #[cfg(target_os = "windows")]
    {
        windows::cursor_position()
    }
    #[cfg(target_os = "macos")]
    {
        macos::cursor_position()
    }
    #[cfg(target_os = "linux")]
    {
        linux::cursor_position()
    }
}

/// Keep an overlay window from ever taking focus or showing up in the
/// taskbar/window switcher.
pub fn apply_overlay_style(window: &Window) {
    #[cfg(target_os = "windows")]
    {
        windows::apply_overlay_style(window);
    }
    #[cfg(target_os = "macos")]
    {
        macos::apply_overlay_style(window);
    }
    #[cfg(target_os = "linux")]
    {
        linux::apply_overlay_style(window);
    }
}

/// Clip an indicator window to its border band so the interior neither
/// paints nor hit-tests.
pub fn apply_hollow_frame(window: &Window, width: u32, height: u32, thickness: u32) {
    #[cfg(target_os = "windows")]
    {
        windows::apply_hollow_frame(window, width, height, thickness);
    }
    #[cfg(target_os = "macos")]
    {
        macos::apply_hollow_frame(window, width, height, thickness);
    }
    #[cfg(target_os = "linux")]
    {
        linux::apply_hollow_frame(window, width, height, thickness);
    }
}
