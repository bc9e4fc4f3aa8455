use vetro_core::{Error, NO_ACTIVE_WINDOW};

use super::output::{self, WindowRecord};

pub fn execute(json: bool) {
    let desktop = vetro_windows::desktop();

    match desktop.active_window() {
        Ok(window) => {
            let record = WindowRecord::from(&window);
            if json {
                println!("{}", serde_json::to_string_pretty(&record).unwrap());
            } else {
                println!("{}  {}", record.handle, record.title);
                println!(
                    "  at ({}, {})  {}x{}",
                    record.left, record.top, record.width, record.height
                );
            }
        }
        Err(Error::NoActiveWindow) => {
            if json {
                println!("null");
            } else {
                println!("{NO_ACTIVE_WINDOW}");
            }
        }
        Err(e) => output::bail(e),
    }
}
