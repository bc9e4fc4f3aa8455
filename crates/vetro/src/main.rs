#[cfg(windows)]
mod commands;

#[cfg(windows)]
use clap::{Parser, Subcommand};

#[cfg(windows)]
#[derive(Parser)]
#[command(
    name = "vetro",
    version,
    about = "Inspect and control desktop windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(windows)]
#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List all visible windows
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the active (focused) window
    Active {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the cursor position
    Cursor,
    /// List visible windows whose title contains TEXT (case-insensitive)
    Find {
        text: String,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List visible windows whose bounds contain the point X,Y
    At {
        x: i32,
        y: i32,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Act on a single window identified by its raw handle
    Window {
        /// Window handle, hex ("0x1A2B4") or decimal
        handle: String,
        #[command(subcommand)]
        action: Action,
    },
}

#[cfg(windows)]
#[derive(Subcommand)]
enum Action {
    /// Show the window
    Show,
    /// Hide the window
    Hide,
    /// Minimize the window
    Minimize,
    /// Maximize the window
    Maximize,
    /// Restore the window from minimized/maximized state
    Restore,
    /// Ask the window to close
    Close,
    /// Bring the window to the foreground
    Focus,
    /// Move the top-left corner to X,Y
    MoveTo { x: i32, y: i32 },
    /// Shift the window by DX,DY
    MoveBy { dx: i32, dy: i32 },
    /// Resize the window to WIDTH x HEIGHT
    ResizeTo { width: i32, height: i32 },
    /// Grow (or shrink) the window by DW,DH
    ResizeBy { dw: i32, dh: i32 },
}

#[cfg(windows)]
fn main() {
    let config = vetro_core::config::load();
    vetro_core::log::init(&config.log);

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List { json } => commands::list::execute(json),
        Commands::Active { json } => commands::active::execute(json),
        Commands::Cursor => commands::cursor::execute(),
        Commands::Find { text, json } => commands::find::execute(&text, json),
        Commands::At { x, y, json } => commands::at::execute(x, y, json),
        Commands::Window { handle, action } => commands::window::execute(&handle, action),
    }
}

#[cfg(not(windows))]
fn main() {
    eprintln!("vetro drives the Win32 window API and only runs on Windows.");
    std::process::exit(1);
}
