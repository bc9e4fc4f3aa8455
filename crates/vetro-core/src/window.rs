use crate::error::{Error, Result};
use crate::provider::{VisibilityState, WindowProvider};
use crate::rect::{Rect, Size};

/// An opaque native window identity.
///
/// A pointer-sized token meaningful only to the platform provider.
/// It carries no ownership and nothing to release: if the underlying
/// window closes, the token simply goes stale and later mutators
/// report errors instead of misbehaving. Compared and hashed by raw
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

impl WindowId {
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

/// A handle to one on-screen window: its identity plus a snapshot of
/// its title and geometry taken when the handle was produced.
///
/// State queries (`is_visible`, `is_minimized`, `is_maximized`,
/// `is_active`) go to the provider live. Position and size accessors
/// (`x`, `y`, `resolution`, `rect`) read the cached snapshot.
///
/// # Staleness
///
/// The relative mutators ([`move_by`], [`resize_by`]) compute their
/// target bounds from the **cached** rect, never the live one. A
/// geometry mutator that succeeds writes the bounds it applied back
/// into the cache, so offsets issued through one handle compose: a
/// move by `(dx, dy)` followed by `(-dx, -dy)` restores the original
/// position. What the cache does *not* track is outside movement —
/// the user dragging the window, another automation client resizing
/// it. Treat a handle as accurate only right after it was produced,
/// or call [`refresh`] before an offset operation.
///
/// [`move_by`]: Window::move_by
/// [`resize_by`]: Window::resize_by
/// [`refresh`]: Window::refresh
pub struct Window<'p> {
    provider: &'p dyn WindowProvider,
    id: WindowId,
    title: String,
    rect: Rect,
}

impl<'p> Window<'p> {
    /// Materializes a handle for `id`, fetching title and geometry now.
    ///
    /// Fails if either fetch fails (typically because the window
    /// closed between being observed and being captured).
    pub fn capture(provider: &'p dyn WindowProvider, id: WindowId) -> Result<Self> {
        let title = clean_title(&provider.title(id)?);
        let rect = provider.rect(id)?;
        Ok(Self {
            provider,
            id,
            title,
            rect,
        })
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The title as captured (NULs stripped, whitespace trimmed).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The geometry as captured.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Cached left edge.
    pub fn x(&self) -> i32 {
        self.rect.left
    }

    /// Cached top edge.
    pub fn y(&self) -> i32 {
        self.rect.top
    }

    /// Cached width and height.
    pub fn resolution(&self) -> Size {
        Size {
            width: self.rect.width(),
            height: self.rect.height(),
        }
    }

    /// Re-fetches title and geometry from the provider, replacing the
    /// cached snapshot.
    pub fn refresh(&mut self) -> Result<()> {
        self.title = clean_title(&self.provider.title(self.id)?);
        self.rect = self.provider.rect(self.id)?;
        Ok(())
    }

    // -- live state queries --

    pub fn is_visible(&self) -> bool {
        self.provider.is_visible(self.id)
    }

    pub fn is_minimized(&self) -> bool {
        self.provider.is_minimized(self.id)
    }

    pub fn is_maximized(&self) -> bool {
        self.provider.is_maximized(self.id)
    }

    /// Whether this window currently holds keyboard focus.
    pub fn is_active(&self) -> bool {
        self.provider.foreground_window() == Some(self.id)
    }

    // -- fire-and-forget mutators --
    //
    // The platform does not report failure for these requests, so
    // they return nothing. Each is idempotent: repeating the request
    // leaves the window in the same end state.

    pub fn show(&self) {
        self.set_visibility(VisibilityState::Show);
    }

    pub fn hide(&self) {
        self.set_visibility(VisibilityState::Hide);
    }

    pub fn minimize(&self) {
        self.set_visibility(VisibilityState::Minimize);
    }

    pub fn maximize(&self) {
        self.set_visibility(VisibilityState::Maximize);
    }

    pub fn restore(&self) {
        self.set_visibility(VisibilityState::Restore);
    }

    fn set_visibility(&self, state: VisibilityState) {
        crate::log_debug!("set_visibility 0x{:X}: {state:?}", self.id.raw());
        self.provider.set_visibility(self.id, state);
    }

    /// Posts a close request and returns immediately. The window may
    /// prompt to save, ignore the request, or take arbitrarily long
    /// to actually go away.
    pub fn close(&self) {
        crate::log_debug!("close 0x{:X}", self.id.raw());
        self.provider.request_close(self.id);
    }

    // -- checked mutators --

    /// Requests keyboard focus for this window.
    pub fn focus(&self) -> Result<()> {
        crate::log_debug!("focus 0x{:X}", self.id.raw());
        if self.provider.request_activation(self.id) {
            Ok(())
        } else {
            Err(self.failed("activate"))
        }
    }

    /// Resizes to exactly `width` x `height`, keeping the cached
    /// top-left corner.
    pub fn resize_to(&mut self, width: i32, height: i32) -> Result<()> {
        self.apply_bounds("resize", self.rect.left, self.rect.top, width, height)
    }

    /// Grows (or shrinks) the cached right/bottom edges by the deltas,
    /// keeping the cached top-left corner. Computed from the cached
    /// rect, not the live geometry — see the staleness note on
    /// [`Window`].
    pub fn resize_by(&mut self, dw: i32, dh: i32) -> Result<()> {
        self.apply_bounds(
            "resize",
            self.rect.left,
            self.rect.top,
            self.rect.width() + dw,
            self.rect.height() + dh,
        )
    }

    /// Moves the top-left corner to exactly (`x`, `y`), keeping the
    /// cached width and height.
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.apply_bounds("move", x, y, self.rect.width(), self.rect.height())
    }

    /// Shifts the cached top-left corner by the deltas, keeping the
    /// cached width and height. Computed from the cached rect, not
    /// the live geometry — see the staleness note on [`Window`].
    pub fn move_by(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.apply_bounds(
            "move",
            self.rect.left + dx,
            self.rect.top + dy,
            self.rect.width(),
            self.rect.height(),
        )
    }

    /// Requests the bounds and, on success, writes them back into the
    /// cached rect so later offsets compose with this one.
    fn apply_bounds(
        &mut self,
        op: &'static str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<()> {
        crate::log_debug!(
            "{op} 0x{:X}: target({x},{y} {width}x{height})",
            self.id.raw()
        );
        if self.provider.set_bounds(self.id, x, y, width, height) {
            self.rect = Rect::new(x, y, x + width, y + height);
            Ok(())
        } else {
            Err(self.failed(op))
        }
    }

    fn failed(&self, op: &'static str) -> Error {
        Error::PlatformOperation {
            op,
            handle: self.id.raw(),
        }
    }
}

impl std::fmt::Debug for Window<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &format_args!("0x{:X}", self.id.raw()))
            .field("title", &self.title)
            .field("rect", &self.rect)
            .finish()
    }
}

/// Strips embedded NULs and surrounding whitespace from a raw title.
///
/// Platform title buffers are fixed-size and NUL-padded; the padding
/// must never leak into the stored title.
fn clean_title(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|&c| c != '\0').collect();
    stripped.trim().to_string()
}
