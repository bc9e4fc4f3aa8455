use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use vetro_core::Window;

/// One window as printed by `list`, `find`, `at`, and `active`.
#[derive(Serialize)]
pub struct WindowRecord {
    pub handle: String,
    pub title: String,
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl From<&Window<'_>> for WindowRecord {
    fn from(window: &Window<'_>) -> Self {
        let rect = window.rect();
        Self {
            handle: format!("0x{:X}", window.id().raw()),
            title: window.title().to_string(),
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Prints a window list as a table, or as a JSON array with `--json`.
pub fn print_windows(windows: &[Window<'_>], json: bool) {
    if json {
        let records: Vec<WindowRecord> = windows.iter().map(WindowRecord::from).collect();
        println!("{}", serde_json::to_string_pretty(&records).unwrap());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Handle"),
            Cell::new("Title"),
            Cell::new("X").set_alignment(CellAlignment::Right),
            Cell::new("Y").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for window in windows {
        let record = WindowRecord::from(window);
        table.add_row(vec![
            Cell::new(record.handle),
            Cell::new(record.title),
            Cell::new(record.left).set_alignment(CellAlignment::Right),
            Cell::new(record.top).set_alignment(CellAlignment::Right),
            Cell::new(record.width).set_alignment(CellAlignment::Right),
            Cell::new(record.height).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    println!("\n{} windows", windows.len());
}

/// Prints the error and exits with a failure status.
pub fn bail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
