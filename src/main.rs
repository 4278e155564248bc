// Only compile the demo page when the TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use std::path::Path;

use pagemotion::Tuning;

fn main() -> Result<()> {
    env_logger_init();

    let args: Vec<String> = env::args().collect();
    let tuning = if args.len() > 1 {
        // Optional tuning file overrides the shipped thresholds
        Tuning::load(Path::new(&args[1]))?
    } else {
        Tuning::default()
    };

    run_demo(tuning)
}

#[cfg(feature = "tui")]
fn env_logger_init() {
    env_logger::init();
}

#[cfg(not(feature = "tui"))]
fn env_logger_init() {}

#[cfg(feature = "tui")]
fn run_demo(tuning: Tuning) -> Result<()> {
    use pagemotion::{PageController, Viewport};
    use ui::{COL_PX, ROW_PX};

    println!("🖥  Loading demo page... (Press 'q' to quit)\n");

    let (cols, rows) = crossterm::terminal::size()?;
    let viewport = Viewport {
        width: cols as f64 * COL_PX,
        // Chrome takes 6 rows: header, status bar, borders
        height: rows.saturating_sub(6) as f64 * ROW_PX,
    };

    let doc = ui::demo_page(viewport);
    let mut app = PageController::new(doc, &tuning);
    ui::run_ui(&mut app)?;

    println!("\n✅ Demo closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_demo(_tuning: Tuning) -> Result<()> {
    eprintln!("❌ TUI demo not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
