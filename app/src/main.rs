//! FILENAME: app/src/main.rs
// PURPOSE: Command-line entry point. The table goes to stdout, logs to stderr
// or the configured log file.

use clap::Parser;

fn main() {
    let cli = app_lib::Cli::parse();
    match app_lib::run(cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
