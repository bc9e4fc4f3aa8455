use thiserror::Error;

/// Errors surfaced by window queries and mutators.
///
/// Every failure is reported to the immediate caller; there are no
/// retries and no silent recovery. Nothing here is fatal — each
/// operation is an independent round-trip and can simply be retried.
#[derive(Debug, Error)]
pub enum Error {
    /// No window currently holds keyboard focus.
    #[error("no active window")]
    NoActiveWindow,

    /// A checked platform call (activation, move, resize) reported
    /// failure for the given window handle.
    #[error("{op} failed for window 0x{handle:X}")]
    PlatformOperation { op: &'static str, handle: usize },

    /// The platform could not report the cursor position.
    ///
    /// Kept distinct so absence is never confused with a valid (0, 0).
    #[error("cursor position unavailable")]
    CursorUnavailable,

    /// The top-level window walk itself failed.
    #[error("window enumeration failed: {0}")]
    Enumeration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
