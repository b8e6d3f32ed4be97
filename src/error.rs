// error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown command '{0}'. Type 'help' to see available commands.")]
    UnknownCommand(String),

    #[error("Command '{command}' {expected}")]
    InvalidArgumentsNum {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Command '{0}' hasn't been implemented yet.")]
    NotImplemented(&'static str),

    #[error("Invalid date or time: {0}")]
    Parse(#[from] chrono::format::ParseError),

    #[error("No saved data found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("End of input.")]
    Eof,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
