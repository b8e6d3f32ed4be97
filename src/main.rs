// main.rs

mod app;
mod commands;
mod error;
mod io;
mod objective;
mod storage;

use crate::app::App;
use crate::commands::Command;
use crate::error::Error;
use crate::storage::StorageConfig;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    println!("Greetings. Starting TODO app.");
    let mut app = App::new(StorageConfig::discover());

    println!("Loading data.");
    match app.load_default() {
        Ok(()) => println!("Data loaded."),
        // A missing data file just means a first run; start empty.
        Err(err) => io::report_error(&err),
    }

    loop {
        let Some(line) = io::prompt("Type command:")? else {
            break;
        };
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match Command::lookup(name).and_then(|cmd| cmd.execute(&mut app, &args)) {
            Ok(result) => println!("{}", result),
            Err(Error::Eof) => break,
            Err(err) => io::report_error(&err),
        }
    }

    Ok(())
}
