use crate::error::Result;
use crate::rect::{Point, Rect};
use crate::window::WindowId;

/// A visibility-state transition request.
///
/// These map one-to-one onto the platform's show-window commands and
/// are fire-and-forget: the platform does not report whether the
/// transition took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Show,
    Hide,
    Minimize,
    Maximize,
    Restore,
}

/// The native window-services collaborator.
///
/// Each platform crate (e.g. `vetro-windows`) provides its own
/// implementation; tests provide a scripted mock. All calls are
/// synchronous, bounded round-trips — they either complete or fail
/// immediately, with no background activity.
pub trait WindowProvider {
    /// Invokes `visit` once per top-level window, in the platform's
    /// own (opaque, unstable) order. `visit` returns `true` to
    /// continue walking, `false` to stop early.
    fn enumerate_top_level(&self, visit: &mut dyn FnMut(WindowId) -> bool) -> Result<()>;

    /// Returns the window's title text, raw (uncleaned).
    fn title(&self, id: WindowId) -> Result<String>;

    /// Returns the window's current bounding rectangle.
    fn rect(&self, id: WindowId) -> Result<Rect>;

    fn is_visible(&self, id: WindowId) -> bool;

    fn is_minimized(&self, id: WindowId) -> bool;

    fn is_maximized(&self, id: WindowId) -> bool;

    /// Returns the window currently holding keyboard focus, or `None`
    /// when the platform reports its null sentinel.
    fn foreground_window(&self) -> Option<WindowId>;

    /// Returns the cursor position, or [`Error::CursorUnavailable`]
    /// when the platform cannot report it.
    ///
    /// [`Error::CursorUnavailable`]: crate::Error::CursorUnavailable
    fn cursor_position(&self) -> Result<Point>;

    /// Posts a visibility-state transition. Fire-and-forget.
    fn set_visibility(&self, id: WindowId, state: VisibilityState);

    /// Posts a close request. Fire-and-forget: the target may prompt
    /// to save, ignore the request, or take arbitrarily long to exit.
    fn request_close(&self, id: WindowId);

    /// Attempts to bring the window to the foreground. Returns whether
    /// the platform accepted the request.
    fn request_activation(&self, id: WindowId) -> bool;

    /// Repositions and resizes the window. Returns whether the
    /// platform accepted the request.
    fn set_bounds(&self, id: WindowId, x: i32, y: i32, width: i32, height: i32) -> bool;
}
