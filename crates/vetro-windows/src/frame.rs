use std::mem;

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::GetWindowRect;

/// The invisible border widths around a window.
///
/// On Windows 10/11, windows carry invisible drop-shadow borders that
/// `GetWindowRect` includes but that are not visually part of the
/// window. Typical values are ~7px left/right/bottom and 0px top.
pub struct BorderOffset {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BorderOffset {
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };
}

/// Returns the visible bounds of a window via DWM extended frame
/// bounds, falling back to `GetWindowRect` when DWM is unavailable.
pub fn visible_rect(hwnd: HWND) -> windows::core::Result<RECT> {
    let mut frame = RECT::default();

    // SAFETY: DwmGetWindowAttribute writes a RECT into the buffer we
    // pass; the size argument matches the buffer.
    let dwm = unsafe {
        DwmGetWindowAttribute(
            hwnd,
            DWMWA_EXTENDED_FRAME_BOUNDS,
            &mut frame as *mut RECT as *mut _,
            mem::size_of::<RECT>() as u32,
        )
    };

    if dwm.is_err() {
        // SAFETY: GetWindowRect fills the RECT for a valid HWND.
        unsafe { GetWindowRect(hwnd, &mut frame)? };
    }

    Ok(frame)
}

/// Computes the invisible border widths by comparing `GetWindowRect`
/// (includes the borders) with the DWM extended frame bounds (visible
/// area only). Equal rects mean no invisible borders.
pub fn border_offset(hwnd: HWND) -> windows::core::Result<BorderOffset> {
    let mut window_rect = RECT::default();
    // SAFETY: GetWindowRect fills the RECT for a valid HWND.
    unsafe { GetWindowRect(hwnd, &mut window_rect)? };

    let frame_rect = visible_rect(hwnd)?;

    Ok(BorderOffset {
        left: frame_rect.left - window_rect.left,
        top: frame_rect.top - window_rect.top,
        right: window_rect.right - frame_rect.right,
        bottom: window_rect.bottom - frame_rect.bottom,
    })
}
