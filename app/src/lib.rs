//! FILENAME: app/src/lib.rs
// PURPOSE: Front end for the Nakamoto coefficient table.

pub mod logging;
pub mod config;
pub mod render;
pub mod commands;

pub use commands::{render_table, run, Cli, OutputFormat};
pub use config::{TableConfig, DEFAULT_TITLE};
pub use render::render_text;
