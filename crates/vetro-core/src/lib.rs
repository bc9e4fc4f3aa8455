pub mod config;
pub mod desktop;
pub mod error;
pub mod log;
pub mod provider;
pub mod rect;
pub mod window;

#[cfg(test)]
pub(crate) mod mock;

pub use desktop::{Desktop, NO_ACTIVE_WINDOW};
pub use error::{Error, Result};
pub use provider::{VisibilityState, WindowProvider};
pub use rect::{Point, Rect, Size};
pub use window::{Window, WindowId};
