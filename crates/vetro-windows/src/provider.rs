use vetro_core::{Desktop, Error, Point, Rect, Result, VisibilityState, WindowId, WindowProvider};

use windows::Win32::Foundation::{HWND, LPARAM, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetCursorPos, GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW,
    IsIconic, IsWindowVisible, IsZoomed, PostMessageW, SW_HIDE, SW_MAXIMIZE, SW_MINIMIZE,
    SW_RESTORE, SW_SHOW, SWP_NOACTIVATE, SWP_NOZORDER, SetForegroundWindow, SetWindowPos,
    ShowWindow, WM_CLOSE,
};
use windows::core::BOOL;

use crate::frame;

/// The live Win32 desktop.
static PROVIDER: Win32Provider = Win32Provider;

/// Returns a [`Desktop`] bound to the real Win32 provider.
pub fn desktop() -> Desktop<'static> {
    Desktop::new(&PROVIDER)
}

/// [`WindowProvider`] over user32/dwmapi.
///
/// Stateless: every call is a direct round-trip to the OS using the
/// `HWND` reconstructed from the opaque [`WindowId`].
pub struct Win32Provider;

fn hwnd(id: WindowId) -> HWND {
    HWND(id.raw() as *mut _)
}

/// User data threaded through `EnumWindows`: the caller's visitor plus
/// a flag recording whether the visitor asked to stop.
///
/// The stop flag matters because `EnumWindows` reports an *error* when
/// the callback returns FALSE, and we must not confuse a deliberate
/// early stop with a failed walk.
struct EnumState<'a> {
    visit: &'a mut dyn FnMut(WindowId) -> bool,
    stopped: bool,
}

/// Callback invoked by `EnumWindows` once per top-level window.
///
/// Win32 can't call Rust closures directly: this is an
/// `extern "system"` function, and the visitor travels through the
/// `LPARAM` pointer-sized user-data slot.
unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the EnumState pointer passed by
    // enumerate_top_level below; EnumWindows runs synchronously, so
    // the state outlives the call.
    let state = unsafe { &mut *(lparam.0 as *mut EnumState<'_>) };

    let id = WindowId::from_raw(hwnd.0 as usize);
    if (state.visit)(id) {
        BOOL(1) // TRUE — continue enumerating
    } else {
        state.stopped = true;
        BOOL(0)
    }
}

impl WindowProvider for Win32Provider {
    fn enumerate_top_level(&self, visit: &mut dyn FnMut(WindowId) -> bool) -> Result<()> {
        let mut state = EnumState {
            visit,
            stopped: false,
        };

        // SAFETY: EnumWindows calls enum_callback for each top-level
        // window with our EnumState pointer as user data. The call is
        // synchronous, so the pointer stays valid throughout.
        let walked = unsafe {
            EnumWindows(
                Some(enum_callback),
                LPARAM(&mut state as *mut EnumState<'_> as isize),
            )
        };

        match walked {
            Ok(()) => Ok(()),
            // A FALSE return from the callback is a requested stop,
            // not a failure, but EnumWindows reports it as an error.
            Err(_) if state.stopped => Ok(()),
            Err(e) => Err(Error::Enumeration(e.to_string())),
        }
    }

    fn title(&self, id: WindowId) -> Result<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW read window
        // text without modifying state; both accept any HWND.
        unsafe {
            let length = GetWindowTextLengthW(hwnd(id));
            if length == 0 {
                return Ok(String::new());
            }

            // The text is variable-length, so this is a two-phase
            // fetch: query the length, then allocate length + 1 for
            // the null terminator Windows writes.
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(hwnd(id), &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn rect(&self, id: WindowId) -> Result<Rect> {
        let frame = frame::visible_rect(hwnd(id)).map_err(|_| Error::PlatformOperation {
            op: "get_rect",
            handle: id.raw(),
        })?;
        Ok(Rect::new(frame.left, frame.top, frame.right, frame.bottom))
    }

    fn is_visible(&self, id: WindowId) -> bool {
        // SAFETY: IsWindowVisible is a simple query returning a BOOL.
        unsafe { IsWindowVisible(hwnd(id)).as_bool() }
    }

    fn is_minimized(&self, id: WindowId) -> bool {
        // SAFETY: IsIconic is a simple query returning a BOOL.
        unsafe { IsIconic(hwnd(id)).as_bool() }
    }

    fn is_maximized(&self, id: WindowId) -> bool {
        // SAFETY: IsZoomed is a simple query returning a BOOL.
        unsafe { IsZoomed(hwnd(id)).as_bool() }
    }

    fn foreground_window(&self) -> Option<WindowId> {
        // SAFETY: GetForegroundWindow takes no arguments and returns
        // a null HWND when no window has focus.
        let fg = unsafe { GetForegroundWindow() };
        if fg.0.is_null() {
            None
        } else {
            Some(WindowId::from_raw(fg.0 as usize))
        }
    }

    fn cursor_position(&self) -> Result<Point> {
        let mut point = POINT::default();
        // SAFETY: GetCursorPos fills the POINT we pass.
        match unsafe { GetCursorPos(&mut point) } {
            Ok(()) => Ok(Point {
                x: point.x,
                y: point.y,
            }),
            Err(_) => Err(Error::CursorUnavailable),
        }
    }

    fn set_visibility(&self, id: WindowId, state: VisibilityState) {
        let cmd = match state {
            VisibilityState::Show => SW_SHOW,
            VisibilityState::Hide => SW_HIDE,
            VisibilityState::Minimize => SW_MINIMIZE,
            VisibilityState::Maximize => SW_MAXIMIZE,
            VisibilityState::Restore => SW_RESTORE,
        };
        // SAFETY: ShowWindow posts a show command for a valid HWND.
        // Its return value reports prior visibility, not success, so
        // there is nothing to check.
        unsafe {
            let _ = ShowWindow(hwnd(id), cmd);
        }
    }

    fn request_close(&self, id: WindowId) {
        // SAFETY: PostMessageW queues WM_CLOSE for the target window.
        // Success only means the message was queued; the window may
        // prompt, ignore it, or exit later.
        unsafe {
            let _ = PostMessageW(Some(hwnd(id)), WM_CLOSE, WPARAM(0), LPARAM(0));
        }
    }

    fn request_activation(&self, id: WindowId) -> bool {
        // SAFETY: SetForegroundWindow is safe with any HWND; it
        // returns FALSE when the request is denied or the handle is
        // stale.
        unsafe { SetForegroundWindow(hwnd(id)).as_bool() }
    }

    fn set_bounds(&self, id: WindowId, x: i32, y: i32, width: i32, height: i32) -> bool {
        // Compensate for invisible drop-shadow borders so the visible
        // frame lands exactly on the requested bounds. A failed border
        // query (stale handle) falls through to SetWindowPos, which
        // then reports the failure.
        let border = frame::border_offset(hwnd(id)).unwrap_or(frame::BorderOffset::ZERO);

        let x = x - border.left;
        let y = y - border.top;
        let cx = width + border.left + border.right;
        let cy = height + border.top + border.bottom;

        // SAFETY: SetWindowPos with a valid HWND is safe; a stale
        // handle makes it return an error.
        unsafe { SetWindowPos(hwnd(id), None, x, y, cx, cy, SWP_NOZORDER | SWP_NOACTIVATE).is_ok() }
    }
}
