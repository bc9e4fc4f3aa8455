use crate::error::{Error, Result};
use crate::provider::WindowProvider;
use crate::rect::Point;
use crate::window::{Window, WindowId};

/// Sentinel title returned by [`Desktop::active_window_title`] when no
/// window holds focus. Callers that need structured absence should use
/// [`Desktop::active_window`] instead.
pub const NO_ACTIVE_WINDOW: &str = "No active window";

/// Entry point for window discovery: snapshot enumeration plus the
/// queries built on top of it.
///
/// Every query takes a fresh walk over the live window set; nothing is
/// cached between calls. A returned snapshot is advisory — windows may
/// open, move, or close the moment after it is taken.
pub struct Desktop<'p> {
    provider: &'p dyn WindowProvider,
}

impl<'p> Desktop<'p> {
    pub fn new(provider: &'p dyn WindowProvider) -> Self {
        Self { provider }
    }

    /// Enumerates all currently visible top-level windows, capturing
    /// title and geometry for each at this instant.
    ///
    /// Zero visible windows is an empty Vec, not an error. A window
    /// that closes mid-walk (its title or geometry fetch fails) is
    /// excluded from the result instead of failing the enumeration.
    /// The order is the platform's own and must be treated as opaque.
    pub fn windows(&self) -> Result<Vec<Window<'p>>> {
        let mut ids: Vec<WindowId> = Vec::new();
        self.provider.enumerate_top_level(&mut |id| {
            ids.push(id);
            true // keep walking
        })?;

        let windows: Vec<Window<'p>> = ids
            .into_iter()
            .filter(|&id| self.provider.is_visible(id))
            .filter_map(|id| Window::capture(self.provider, id).ok())
            .collect();

        crate::log_debug!("enumerated {} visible windows", windows.len());
        Ok(windows)
    }

    /// Materializes a handle for a known identity (e.g. one saved from
    /// an earlier enumeration), fetching title and geometry now.
    pub fn window(&self, id: WindowId) -> Result<Window<'p>> {
        Window::capture(self.provider, id)
    }

    /// Returns the window currently holding keyboard focus.
    pub fn active_window(&self) -> Result<Window<'p>> {
        let id = self
            .provider
            .foreground_window()
            .ok_or(Error::NoActiveWindow)?;
        self.window(id)
    }

    /// Returns the focused window's title, or the [`NO_ACTIVE_WINDOW`]
    /// sentinel. Never fails.
    pub fn active_window_title(&self) -> String {
        match self.active_window() {
            Ok(window) => window.title().to_string(),
            Err(_) => NO_ACTIVE_WINDOW.to_string(),
        }
    }

    /// Returns the visible windows whose captured rect contains the
    /// point, inclusive on all four edges. Re-enumerates on every call.
    pub fn windows_at(&self, x: i32, y: i32) -> Result<Vec<Window<'p>>> {
        let mut windows = self.windows()?;
        windows.retain(|w| w.rect().contains(x, y));
        Ok(windows)
    }

    /// Returns the visible windows whose title contains `substring`,
    /// compared trimmed and case-folded. An empty substring matches
    /// every window. Re-enumerates on every call.
    pub fn windows_with_title(&self, substring: &str) -> Result<Vec<Window<'p>>> {
        let needle = substring.trim().to_lowercase();
        let mut windows = self.windows()?;
        windows.retain(|w| w.title().to_lowercase().contains(&needle));
        Ok(windows)
    }

    /// Returns the current cursor position.
    pub fn cursor_position(&self) -> Result<Point> {
        self.provider.cursor_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockProvider, MockWindow};
    use crate::rect::Rect;

    fn populated_provider() -> MockProvider {
        let provider = MockProvider::new();
        provider.add(MockWindow::new(
            1,
            "Mozilla Firefox",
            Rect::new(0, 0, 800, 600),
        ));
        provider.add(MockWindow::new(
            2,
            "  Terminal  ",
            Rect::new(800, 0, 1600, 600),
        ));
        provider.add(MockWindow::new(3, "Hidden Helper", Rect::new(0, 0, 10, 10)).hidden());
        provider
    }

    #[test]
    fn empty_desktop_enumerates_to_an_empty_vec() {
        let provider = MockProvider::new();
        let desktop = Desktop::new(&provider);
        assert!(desktop.windows().unwrap().is_empty());
    }

    #[test]
    fn enumeration_keeps_only_visible_windows() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        let windows = desktop.windows().unwrap();
        assert_eq!(windows.len(), 2);
        assert!(windows.iter().all(Window::is_visible));
        assert!(!windows.iter().any(|w| w.title() == "Hidden Helper"));
    }

    #[test]
    fn enumeration_captures_cleaned_titles() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        let windows = desktop.windows().unwrap();
        assert!(windows.iter().any(|w| w.title() == "Terminal"));
    }

    #[test]
    fn a_window_closing_mid_walk_is_excluded_not_fatal() {
        let provider = populated_provider();
        // Window 2 is still reported by the walk but its fetches fail,
        // as happens when it closes between callback and capture.
        provider.break_fetches(WindowId::from_raw(2));

        let desktop = Desktop::new(&provider);
        let windows = desktop.windows().unwrap();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].title(), "Mozilla Firefox");
    }

    #[test]
    fn enumeration_failure_is_propagated() {
        let provider = populated_provider();
        provider.fail_enumeration();

        let desktop = Desktop::new(&provider);
        assert!(matches!(desktop.windows(), Err(Error::Enumeration(_))));
    }

    #[test]
    fn windows_at_is_a_subset_with_inclusive_bounds() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        // 800 is the shared edge: inclusive containment matches both.
        let on_edge = desktop.windows_at(800, 0).unwrap();
        assert_eq!(on_edge.len(), 2);

        let inside_first = desktop.windows_at(10, 10).unwrap();
        assert_eq!(inside_first.len(), 1);
        assert_eq!(inside_first[0].title(), "Mozilla Firefox");

        let nowhere = desktop.windows_at(5000, 5000).unwrap();
        assert!(nowhere.is_empty());
    }

    #[test]
    fn title_search_is_case_insensitive_substring() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        for query in ["firefox", "FIRE", "Mozilla Firefox"] {
            let hits = desktop.windows_with_title(query).unwrap();
            assert_eq!(hits.len(), 1, "query {query:?}");
            assert_eq!(hits[0].title(), "Mozilla Firefox");
        }

        assert!(desktop.windows_with_title("chromium").unwrap().is_empty());
    }

    #[test]
    fn empty_title_query_matches_everything() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        let all = desktop.windows().unwrap();
        let matched = desktop.windows_with_title("").unwrap();
        assert_eq!(matched.len(), all.len());
    }

    #[test]
    fn title_query_is_trimmed_before_matching() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        let hits = desktop.windows_with_title("  terminal ").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title(), "Terminal");
    }

    #[test]
    fn active_window_requires_a_foreground_window() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        assert!(matches!(
            desktop.active_window(),
            Err(Error::NoActiveWindow)
        ));

        provider.set_foreground(Some(WindowId::from_raw(1)));
        let active = desktop.active_window().unwrap();
        assert_eq!(active.title(), "Mozilla Firefox");
        assert!(active.is_active());
    }

    #[test]
    fn active_window_title_falls_back_to_the_sentinel() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        assert_eq!(desktop.active_window_title(), NO_ACTIVE_WINDOW);

        provider.set_foreground(Some(WindowId::from_raw(2)));
        assert_eq!(desktop.active_window_title(), "Terminal");
    }

    #[test]
    fn cursor_absence_is_a_tagged_error_not_a_zero_point() {
        let provider = populated_provider();
        let desktop = Desktop::new(&provider);

        assert!(matches!(
            desktop.cursor_position(),
            Err(Error::CursorUnavailable)
        ));

        provider.set_cursor(Some(Point { x: 120, y: 45 }));
        assert_eq!(desktop.cursor_position().unwrap(), Point { x: 120, y: 45 });
    }
}
