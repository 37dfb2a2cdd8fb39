mod app;
mod error;
mod render;
mod screen;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::AppError;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<(), AppError> {
    // TUI owns the terminal, so logs go to a file.
    let log_file = File::create("enrol-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    App::new().run()?;
    Ok(())
}
