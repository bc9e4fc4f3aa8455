/// A window's bounding rectangle in screen-pixel coordinates.
///
/// Stored as the four edges the platform reports (origin top-left,
/// x increasing right, y increasing down). Width and height are derived,
/// never stored. No ordering between the edges is enforced: some
/// degenerate platform states report `right < left`, and the value is
/// passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Derived width: `right - left`. Negative for degenerate rects.
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Derived height: `bottom - top`. Negative for degenerate rects.
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns whether the point lies inside the rect, inclusive on
    /// all four edges.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }
}

/// A point in screen-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_height_are_derived() {
        let r = Rect::new(100, 50, 400, 250);
        assert_eq!(r.width(), 300);
        assert_eq!(r.height(), 200);
    }

    #[test]
    fn degenerate_rect_is_passed_through() {
        // Some platform states report right < left; the rect does not
        // normalize or reject this.
        let r = Rect::new(10, 10, -5, 4);
        assert_eq!(r.width(), -15);
        assert_eq!(r.height(), -6);
    }

    #[test]
    fn contains_is_inclusive_on_all_edges() {
        let r = Rect::new(0, 0, 100, 50);
        assert!(r.contains(0, 0));
        assert!(r.contains(100, 50));
        assert!(r.contains(100, 0));
        assert!(r.contains(0, 50));
        assert!(r.contains(42, 25));
        assert!(!r.contains(101, 25));
        assert!(!r.contains(42, 51));
        assert!(!r.contains(-1, 0));
    }
}
