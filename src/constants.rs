// constants.rs - Application-wide Constants
//
// Centralized constants for timing, colors, and overlay dimensions.

/// Tick cadence for the capture/render loop and the cursor readout.
pub mod timing {
    /// Interval between compositor ticks in milliseconds (~60 Hz).
    pub const DEFAULT_TICK_MS: u64 = 17;
    /// Interval between cursor position polls in milliseconds.
    pub const MOUSE_POLL_MS: u64 = 30;
}

/// Cursor readout window geometry.
pub mod mouse_window {
    /// Window width in pixels, wide enough for "X: -1920, Y: 1080" at
    /// the doubled font scale
    pub const WIDTH: u32 = 220;
    /// Window height in pixels
    pub const HEIGHT: u32 = 50;
    /// Window position on screen
    pub const X: i32 = 50;
    pub const Y: i32 = 50;
    /// Bitmap font scale for the readout text
    pub const TEXT_SCALE: u32 = 2;
}

/// Overlay colors (0xAARRGGBB)
pub mod colors {
    /// Dark backdrop behind the cursor readout text
    pub const MOUSE_BG: u32 = 0xFF202020;
    /// White readout text
    pub const MOUSE_TEXT: u32 = 0xFFFFFFFF;
}

/// Indicator border defaults
pub mod indicator {
    /// Stroke thickness used by the built-in profile
    pub const DEFAULT_STROKE_PX: u32 = 4;
}
