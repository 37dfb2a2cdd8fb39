//! Top-level failures of the terminal shell.

use std::io;

use log::SetLoggerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("logger setup failed: {0}")]
    Logger(#[from] SetLoggerError),
}
