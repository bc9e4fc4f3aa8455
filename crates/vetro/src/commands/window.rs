use vetro_core::WindowId;

use super::output;
use crate::Action;

pub fn execute(handle: &str, action: Action) {
    let Some(raw) = parse_handle(handle) else {
        output::bail(format!("invalid window handle {handle:?}"));
    };

    let desktop = vetro_windows::desktop();
    let mut window = match desktop.window(WindowId::from_raw(raw)) {
        Ok(window) => window,
        Err(e) => output::bail(e),
    };

    let result = match action {
        Action::Show => {
            window.show();
            Ok(())
        }
        Action::Hide => {
            window.hide();
            Ok(())
        }
        Action::Minimize => {
            window.minimize();
            Ok(())
        }
        Action::Maximize => {
            window.maximize();
            Ok(())
        }
        Action::Restore => {
            window.restore();
            Ok(())
        }
        Action::Close => {
            window.close();
            Ok(())
        }
        Action::Focus => window.focus(),
        Action::MoveTo { x, y } => window.move_to(x, y),
        Action::MoveBy { dx, dy } => window.move_by(dx, dy),
        Action::ResizeTo { width, height } => window.resize_to(width, height),
        Action::ResizeBy { dw, dh } => window.resize_by(dw, dh),
    };

    if let Err(e) = result {
        output::bail(e);
    }
}

/// Parses a raw handle, accepting "0x..." hex or plain decimal.
fn parse_handle(s: &str) -> Option<usize> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        usize::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}
