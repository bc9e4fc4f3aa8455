//! Scripted in-memory provider for unit tests.

use std::cell::{Cell, RefCell};

use crate::error::{Error, Result};
use crate::provider::{VisibilityState, WindowProvider};
use crate::rect::{Point, Rect};
use crate::window::WindowId;

/// One scripted window.
pub(crate) struct MockWindow {
    pub id: WindowId,
    pub title: String,
    pub rect: Rect,
    pub visible: bool,
    pub minimized: bool,
    pub maximized: bool,
    /// When set, title/rect fetches fail as if the window closed
    /// between the enumeration callback and the capture.
    pub broken: bool,
}

impl MockWindow {
    pub fn new(raw: usize, title: &str, rect: Rect) -> Self {
        Self {
            id: WindowId::from_raw(raw),
            title: title.to_string(),
            rect,
            visible: true,
            minimized: false,
            maximized: false,
            broken: false,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// A provider whose desktop is a `Vec` the test scripts up front.
///
/// Enumeration order is insertion order. Mutators apply to the stored
/// state so tests can verify end states through the same provider.
pub(crate) struct MockProvider {
    windows: RefCell<Vec<MockWindow>>,
    foreground: Cell<Option<WindowId>>,
    cursor: Cell<Option<Point>>,
    enumeration_fails: Cell<bool>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            windows: RefCell::new(Vec::new()),
            foreground: Cell::new(None),
            cursor: Cell::new(None),
            enumeration_fails: Cell::new(false),
        }
    }

    pub fn add(&self, window: MockWindow) {
        self.windows.borrow_mut().push(window);
    }

    pub fn remove(&self, id: WindowId) {
        self.windows.borrow_mut().retain(|w| w.id != id);
    }

    pub fn break_fetches(&self, id: WindowId) {
        self.with(id, |w| w.broken = true);
    }

    pub fn fail_enumeration(&self) {
        self.enumeration_fails.set(true);
    }

    pub fn set_foreground(&self, id: Option<WindowId>) {
        self.foreground.set(id);
    }

    pub fn set_cursor(&self, point: Option<Point>) {
        self.cursor.set(point);
    }

    pub fn set_rect(&self, id: WindowId, rect: Rect) {
        self.with(id, |w| w.rect = rect);
    }

    fn with(&self, id: WindowId, apply: impl FnOnce(&mut MockWindow)) {
        let mut windows = self.windows.borrow_mut();
        if let Some(w) = windows.iter_mut().find(|w| w.id == id) {
            apply(w);
        }
    }

    fn get<T>(&self, id: WindowId, read: impl FnOnce(&MockWindow) -> T) -> Option<T> {
        self.windows.borrow().iter().find(|w| w.id == id).map(read)
    }
}

impl WindowProvider for MockProvider {
    fn enumerate_top_level(&self, visit: &mut dyn FnMut(WindowId) -> bool) -> Result<()> {
        if self.enumeration_fails.get() {
            return Err(Error::Enumeration("scripted failure".into()));
        }
        // Snapshot the ids so the visitor may call back into the
        // provider without tripping the RefCell.
        let ids: Vec<WindowId> = self.windows.borrow().iter().map(|w| w.id).collect();
        for id in ids {
            if !visit(id) {
                break;
            }
        }
        Ok(())
    }

    fn title(&self, id: WindowId) -> Result<String> {
        match self.get(id, |w| (w.broken, w.title.clone())) {
            Some((false, title)) => Ok(title),
            _ => Err(Error::PlatformOperation {
                op: "get_title",
                handle: id.raw(),
            }),
        }
    }

    fn rect(&self, id: WindowId) -> Result<Rect> {
        match self.get(id, |w| (w.broken, w.rect)) {
            Some((false, rect)) => Ok(rect),
            _ => Err(Error::PlatformOperation {
                op: "get_rect",
                handle: id.raw(),
            }),
        }
    }

    fn is_visible(&self, id: WindowId) -> bool {
        self.get(id, |w| w.visible).unwrap_or(false)
    }

    fn is_minimized(&self, id: WindowId) -> bool {
        self.get(id, |w| w.minimized).unwrap_or(false)
    }

    fn is_maximized(&self, id: WindowId) -> bool {
        self.get(id, |w| w.maximized).unwrap_or(false)
    }

    fn foreground_window(&self) -> Option<WindowId> {
        self.foreground.get()
    }

    fn cursor_position(&self) -> Result<Point> {
        self.cursor.get().ok_or(Error::CursorUnavailable)
    }

    fn set_visibility(&self, id: WindowId, state: VisibilityState) {
        self.with(id, |w| match state {
            VisibilityState::Show => w.visible = true,
            VisibilityState::Hide => w.visible = false,
            VisibilityState::Minimize => w.minimized = true,
            VisibilityState::Maximize => {
                w.maximized = true;
                w.minimized = false;
            }
            VisibilityState::Restore => {
                w.maximized = false;
                w.minimized = false;
            }
        });
    }

    fn request_close(&self, id: WindowId) {
        // Modeled as immediate compliance: the window goes away.
        self.remove(id);
    }

    fn request_activation(&self, id: WindowId) -> bool {
        if self.get(id, |_| ()).is_some() {
            self.foreground.set(Some(id));
            true
        } else {
            false
        }
    }

    fn set_bounds(&self, id: WindowId, x: i32, y: i32, width: i32, height: i32) -> bool {
        if self.get(id, |_| ()).is_none() {
            return false;
        }
        self.with(id, |w| {
            w.rect = Rect::new(x, y, x + width, y + height);
        });
        true
    }
}
