// io.rs

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prints the message on its own line, then blocks for one line of input.
/// Returns `None` once stdin is exhausted.
pub fn prompt(message: &str) -> io::Result<Option<String>> {
    println!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn report_error(err: &dyn Display) {
    eprintln!("{}", err);
}
