use super::output;

pub fn execute() {
    let desktop = vetro_windows::desktop();
    match desktop.cursor_position() {
        Ok(point) => println!("{}, {}", point.x, point.y),
        Err(e) => output::bail(e),
    }
}
