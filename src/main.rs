//! mdgrid - edit Markdown pipe tables from the command line

use anyhow::{anyhow, Result};
use clap::Parser;

use mdgrid::actions::{self, Report};
use mdgrid::cli::{Action, CliArgs};
use mdgrid::clipboard::SystemClipboard;
use mdgrid::config::EditorConfig;

fn main() -> Result<()> {
    mdgrid::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => EditorConfig::load_from(path),
        None => EditorConfig::load(),
    };
    let action = args.into_action().map_err(|e| anyhow!(e))?;
    tracing::debug!(?action, "running");

    // The process owns the copied text on X11/Wayland, so stay until it is replaced
    let clipboard = match action {
        Action::Copy { .. } => SystemClipboard::holding_until_replaced(),
        _ => SystemClipboard::new(),
    };
    if clipboard.holds_contents() {
        eprintln!("Serving the table on the clipboard until something else is copied");
    }

    match actions::run(&action, &config, clipboard)? {
        Report::Printed(text) => print!("{}", text),
        Report::Done(message) => eprintln!("{}", message),
    }

    Ok(())
}
