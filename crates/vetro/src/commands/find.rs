use super::output;

pub fn execute(text: &str, json: bool) {
    let desktop = vetro_windows::desktop();
    match desktop.windows_with_title(text) {
        Ok(windows) => output::print_windows(&windows, json),
        Err(e) => output::bail(e),
    }
}
