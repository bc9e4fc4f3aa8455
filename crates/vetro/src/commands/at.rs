use super::output;

pub fn execute(x: i32, y: i32, json: bool) {
    let desktop = vetro_windows::desktop();
    match desktop.windows_at(x, y) {
        Ok(windows) => output::print_windows(&windows, json),
        Err(e) => output::bail(e),
    }
}
