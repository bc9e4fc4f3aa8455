//! Win32 implementation of the vetro window provider.
//!
//! Everything here is gated to Windows targets; on other platforms the
//! crate compiles to nothing so the workspace still builds.

/// DWM frame geometry helpers.
#[cfg(windows)]
mod frame;

/// The `WindowProvider` implementation over user32/dwmapi.
#[cfg(windows)]
mod provider;

#[cfg(windows)]
pub use provider::{Win32Provider, desktop};
