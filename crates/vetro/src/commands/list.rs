use super::output;

pub fn execute(json: bool) {
    let desktop = vetro_windows::desktop();
    match desktop.windows() {
        Ok(windows) => output::print_windows(&windows, json),
        Err(e) => output::bail(e),
    }
}
