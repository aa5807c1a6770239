// platform/windows.rs - Windows Implementation
//
// Uses GDI window regions for the hollow indicator frames and extended
// window styles to keep the overlays unfocusable tool windows.

use hudshift::Point;
use log::warn;
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::window::Window;

use windows::Win32::{
    Foundation::{HWND, POINT},
    Graphics::Gdi::{CombineRgn, CreateRectRgn, DeleteObject, SetWindowRgn, RGN_DIFF},
    UI::WindowsAndMessaging::{
        GetCursorPos, GetWindowLongPtrW, SetWindowLongPtrW, GWL_EXSTYLE, WS_EX_NOACTIVATE,
        WS_EX_TOOLWINDOW,
    },
};

fn hwnd(window: &Window) -> Option<HWND> {
    let handle = window.window_handle().ok()?;
    if let RawWindowHandle::Win32(win32_handle) = handle.as_raw() {
        Some(HWND(win32_handle.hwnd.get() as isize as *mut std::ffi::c_void))
    } else {
        None
    }
}

pub fn cursor_position() -> Option<Point> {
    let mut pt = POINT::default();
    unsafe { GetCursorPos(&mut pt) }.ok()?;
    Some(Point::new(pt.x, pt.y))
}

pub fn apply_overlay_style(window: &Window) {
    let Some(hwnd) = hwnd(window) else {
        warn!("no Win32 handle for overlay window, skipping style tweaks");
        return;
    };

    unsafe {
        let ex_style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
        let new_ex_style =
            ex_style | (WS_EX_NOACTIVATE.0 as isize) | (WS_EX_TOOLWINDOW.0 as isize);
        SetWindowLongPtrW(hwnd, GWL_EXSTYLE, new_ex_style);
    }
}

pub fn apply_hollow_frame(window: &Window, width: u32, height: u32, thickness: u32) {
    let Some(hwnd) = hwnd(window) else {
        warn!("no Win32 handle for indicator window, border interior stays opaque");
        return;
    };

    let (w, h) = (width as i32, height as i32);
    let t = thickness as i32;

    unsafe {
        // Outer rectangle minus the interior hole leaves the border band
        let outer_rgn = CreateRectRgn(0, 0, w, h);
        let inner_rgn = CreateRectRgn(t, t, w - t, h - t);
        let _ = CombineRgn(Some(outer_rgn), Some(outer_rgn), Some(inner_rgn), RGN_DIFF);
        let _ = DeleteObject(inner_rgn.into());

        // The window takes ownership of the region
        SetWindowRgn(hwnd, Some(outer_rgn), true);
    }
}
