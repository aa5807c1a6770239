// geometry.rs - Screen-Space Value Types
//
// Shared coordinate types for the capture and overlay pipeline. All
// rectangles and points are in absolute (virtual-screen) coordinates
// unless a function says otherwise.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A packed RGB triple. Alpha is never part of a comparison; capture
/// buffers carry RGBA but indicators only look at the color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Screen region to capture or mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rect from the (left, top, right, bottom) corner form the
    /// hand-authored geometry tables use. Right/bottom are exclusive.
    pub const fn from_corners(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Point containment. Left/top edges are inclusive, right/bottom
    /// exclusive.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Whole-rect containment, used for startup validation of view
    /// geometry against the outer capture bounds.
    pub fn contains_rect(&self, other: &CaptureRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Offset of `inner` relative to this rect's origin, if `inner` lies
    /// fully inside. This is the crop origin for a view into a frame
    /// captured at these bounds.
    pub fn local_origin(&self, inner: &CaptureRect) -> Option<(u32, u32)> {
        if self.contains_rect(inner) {
            Some(((inner.x - self.x) as u32, (inner.y - self.y) as u32))
        } else {
            None
        }
    }

    /// Offset of `p` relative to this rect's origin, if `p` lies inside.
    pub fn local_point(&self, p: Point) -> Option<(u32, u32)> {
        if self.contains_point(p) {
            Some(((p.x - self.x) as u32, (p.y - self.y) as u32))
        } else {
            None
        }
    }
}

impl fmt::Display for CaptureRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}
